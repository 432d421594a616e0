//! Core types, plus game outcome and rule options

pub use rookery_base::types::*;

use std::fmt;

/// How [`Board::is_checkmate_with()`](crate::board::Board::is_checkmate_with) looks for a way out of check
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EscapeScan {
    /// Try every semilegal move, including captures of the checking piece and
    /// blocks that land on an occupied square
    #[default]
    Full,
    /// Try only moves to vacant squares
    ///
    /// This misses escapes by capture, so it can report checkmate in positions which
    /// are not checkmate. Kept for comparison with older engines that scanned this way.
    VacantOnly,
}

/// Rule options of a [`Game`](crate::game::Game)
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Options {
    /// Escape scan used for checkmate detection
    pub escape_scan: EscapeScan,
    /// If `true`, a move that leaves the mover's own king attacked is accepted
    pub allow_self_check: bool,
}

/// Final result of a game
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Outcome {
    /// Side `winner` has checkmated its opponent
    Checkmate { winner: Side },
}

impl Outcome {
    pub fn winner(&self) -> Side {
        match *self {
            Self::Checkmate { winner } => winner,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            Self::Checkmate { winner } => {
                let name = match winner {
                    Side::White => "White",
                    Side::Black => "Black",
                };
                write!(f, "{} wins by checkmate", name)
            }
        }
    }
}
