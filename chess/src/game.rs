//! Game record with turn keeping, undo and outcome

use crate::board::{Board, FenParseError};
use crate::movegen::{self, MoveList};
use crate::moves::{self, Move, MoveError, RawUndo};
use crate::types::{Coord, Options, Outcome, Side, SideParseError};

use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use thiserror::Error;

/// Error making a move in a [`Game`]
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum PlayError {
    /// Move is rejected by the rules
    #[error("bad move: {0}")]
    Move(#[from] MoveError),
    /// Game is already finished
    #[error("game is finished: {0}")]
    Finished(Outcome),
}

/// Error parsing [`Game`] from a string
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum GameParseError {
    /// Piece placement is missing or invalid
    #[error("bad board: {0}")]
    Board(#[from] FenParseError),
    /// Side to move is missing
    #[error("no side to move")]
    NoSide,
    /// Side to move is invalid
    #[error("bad side to move: {0}")]
    Side(#[from] SideParseError),
    /// Extra data after the side to move
    #[error("non-empty data after the side to move")]
    ExtraData,
    /// King of the side not to move is attacked
    #[error("opponent's king is attacked")]
    OpponentKingAttacked,
}

/// Chess game
///
/// Keeps the board together with the side to move and the stack of moves made so far. Each move
/// is validated under the game's [`Options`]. After each move, the game checks whether the side
/// to move is checkmated and records the outcome. No more moves can be made after that, but they
/// can be undone.
///
/// # Example
///
/// ```
/// # use rookery::{Game, Coord, Outcome, Side};
/// #
/// let mut game = Game::new();
/// for (src, dst) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
///     let src: Coord = src.parse().unwrap();
///     let dst: Coord = dst.parse().unwrap();
///     game.play(src, dst).unwrap();
/// }
/// assert_eq!(game.outcome(), Some(Outcome::Checkmate { winner: Side::Black }));
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side: Side,
    opts: Options,
    stack: Vec<(Move, RawUndo)>,
    outcome: Option<Outcome>,
}

impl Game {
    /// Creates a game from the initial position with default options
    pub fn new() -> Game {
        Game::with_options(Options::default())
    }

    /// Creates a game from the initial position with options `opts`
    pub fn with_options(opts: Options) -> Game {
        Game::build(Board::initial(), Side::White, opts)
    }

    /// Creates a game from position `board` with side `side` to move
    ///
    /// Returns [`GameParseError::OpponentKingAttacked`] if the king of the other side is
    /// attacked.
    pub fn from_board(board: Board, side: Side, opts: Options) -> Result<Game, GameParseError> {
        if board.is_check(side.inv()) {
            return Err(GameParseError::OpponentKingAttacked);
        }
        Ok(Game::build(board, side, opts))
    }

    fn build(board: Board, side: Side, opts: Options) -> Game {
        let mut res = Game {
            board,
            side,
            opts,
            stack: Vec::new(),
            outcome: None,
        };
        res.outcome = res.calc_outcome();
        res
    }

    /// Parses a game from `"<placement> <side>"`, like `"4k3/8/8/8/8/8/8/4K3 w"`
    ///
    /// Does the same as [`Game::from_str`], with default options.
    pub fn from_fen(s: &str) -> Result<Game, GameParseError> {
        Game::from_str(s)
    }

    /// Returns the current position
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn options(&self) -> Options {
        self.opts
    }

    /// Returns the number of moves made
    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Iterates over the moves made, from first to last
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.stack.iter().map(|(m, _)| *m)
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns `true` if the side to move is in check
    #[inline]
    pub fn is_check(&self) -> bool {
        self.board.is_check(self.side)
    }

    /// Returns all the moves the side to move may make
    ///
    /// Under [`Options::allow_self_check`], these are all the semilegal moves.
    pub fn legal_moves(&self) -> MoveList {
        if self.is_finished() {
            return MoveList::new();
        }
        match self.opts.allow_self_check {
            true => movegen::gen_semilegal(&self.board, self.side),
            false => movegen::gen_legal(&self.board, self.side),
        }
    }

    fn calc_outcome(&self) -> Option<Outcome> {
        self.board
            .is_checkmate_with(self.side, self.opts.escape_scan)
            .then_some(Outcome::Checkmate {
                winner: self.side.inv(),
            })
    }

    /// Moves the piece of the side to move from `src` to `dst`
    #[inline]
    pub fn play(&mut self, src: Coord, dst: Coord) -> Result<(), PlayError> {
        self.push(Move::new(self.side, src, dst))
    }

    /// Makes move `mv`
    ///
    /// The move must be made by the side to move, otherwise [`MoveError::NotYourPiece`] is
    /// returned. On error, nothing changes.
    pub fn push(&mut self, mv: Move) -> Result<(), PlayError> {
        if let Some(outcome) = self.outcome {
            return Err(PlayError::Finished(outcome));
        }
        if mv.side() != self.side {
            debug!("rejected move {} by {:?}: not its turn", mv, mv.side());
            return Err(MoveError::NotYourPiece.into());
        }
        let u = moves::make_move_checked(&mut self.board, mv, self.opts).map_err(|e| {
            debug!("rejected move {} by {:?}: {}", mv, mv.side(), e);
            e
        })?;
        self.stack.push((mv, u));
        self.side = self.side.inv();
        self.outcome = self.calc_outcome();
        if let Some(outcome) = self.outcome {
            info!("game over after {} moves: {}", self.stack.len(), outcome);
        }
        Ok(())
    }

    /// Undoes the last move and returns it
    ///
    /// Returns `None` if no moves were made. The outcome is recalculated, so undoing the
    /// checkmating move makes the game unfinished again.
    pub fn undo(&mut self) -> Option<Move> {
        let (mv, u) = self.stack.pop()?;
        moves::unmake_move_unchecked(&mut self.board, mv, u);
        self.side = mv.side();
        self.outcome = self.calc_outcome();
        debug!("undone move {} by {:?}", mv, mv.side());
        Some(mv)
    }

    /// Formats the game as `"<placement> <side>"`
    pub fn as_fen(&self) -> String {
        self.to_string()
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl FromStr for Game {
    type Err = GameParseError;

    fn from_str(s: &str) -> Result<Game, GameParseError> {
        let mut iter = s.split_ascii_whitespace();
        let board = Board::from_str(iter.next().unwrap_or(""))?;
        let side = Side::from_str(iter.next().ok_or(GameParseError::NoSide)?)?;
        if iter.next().is_some() {
            return Err(GameParseError::ExtraData);
        }
        Game::from_board(board, side, Options::default())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{} {}", self.board, self.side)
    }
}
