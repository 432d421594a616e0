//! # Rookery
//!
//! Two-player chess rules engine. It keeps the board, validates moves piece by piece, and detects
//! check and checkmate.
//!
//! Castling, en passant, promotion and draw rules are not implemented.
//!
//! # Example
//!
//! ```
//! # use rookery::{Board, Coord, MoveOutcome, Side};
//! #
//! let mut b = Board::initial();
//! let e2: Coord = "e2".parse().unwrap();
//! let e4: Coord = "e4".parse().unwrap();
//! assert_eq!(b.attempt_move(Side::Black, e2, e4), MoveOutcome::NotYourPiece);
//! assert_eq!(b.attempt_move(Side::White, e2, e4), MoveOutcome::Committed);
//! assert!(!b.is_check(Side::Black));
//! assert!(!b.is_checkmate(Side::Black));
//! ```

pub mod between;
pub mod board;
pub mod game;
pub mod legal;
pub mod movegen;
pub mod moves;
pub mod piece;
pub mod pretty;
pub mod rules;
pub mod types;

pub use rookery_base::{bitboard, geometry};

pub use bitboard::Bitboard;
pub use board::{Board, RawBoard};
pub use game::Game;
pub use moves::{Make, Move, MoveError, MoveOutcome};
pub use piece::Piece;
pub use rules::Motion;
pub use types::{Cell, Coord, EscapeScan, File, Options, Outcome, Rank, Role, Side};
