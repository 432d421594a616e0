use super::base::{self, Move, MoveError, RawUndo};
use crate::board::Board;
use crate::types::Options;

use core::convert::Infallible;

/// Something that can be made as a move on the board
pub trait Make {
    type Err;

    /// Makes the move in place, returning the move itself and the data to undo it
    ///
    /// On error, the board is left unchanged.
    fn make_raw(&self, board: &mut Board) -> Result<(Move, RawUndo), Self::Err>;

    /// Makes the move on a copy of `board`
    fn make(&self, board: &Board) -> Result<Board, Self::Err> {
        let mut cloned = board.clone();
        let _ = self.make_raw(&mut cloned)?;
        Ok(cloned)
    }
}

/// Move that is made without any checks
///
/// See [`make_move_unchecked()`](super::make_move_unchecked) for details.
pub struct Unchecked(pub Move);

impl Make for Unchecked {
    type Err = Infallible;

    #[inline]
    fn make_raw(&self, board: &mut Board) -> Result<(Move, RawUndo), Self::Err> {
        Ok((self.0, base::make_move_unchecked(board, self.0)))
    }
}

/// Move that is validated under the given rule options
pub struct WithOptions(pub Move, pub Options);

impl Make for WithOptions {
    type Err = MoveError;

    #[inline]
    fn make_raw(&self, board: &mut Board) -> Result<(Move, RawUndo), Self::Err> {
        let undo = base::make_move_checked(board, self.0, self.1)?;
        Ok((self.0, undo))
    }
}

impl Make for Move {
    type Err = MoveError;

    #[inline]
    fn make_raw(&self, board: &mut Board) -> Result<(Move, RawUndo), Self::Err> {
        WithOptions(*self, Options::default()).make_raw(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, Side};

    #[test]
    fn test_make() {
        let b = Board::initial();
        let mv = Move::new(Side::White, Coord::new(0, 6), Coord::new(2, 5));
        let b2 = b.make_move(mv).unwrap();
        assert_eq!(b2.as_fen(), "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R");
        assert_eq!(b.as_fen(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");

        let bad = Move::new(Side::Black, Coord::new(0, 6), Coord::new(2, 5));
        assert_eq!(b.make_move(bad), Err(MoveError::NotYourPiece));
    }

    #[test]
    fn test_unchecked() {
        // Unchecked moves can do anything, even capture a king
        let mut b = Board::initial();
        let mv = Move::new(Side::White, Coord::new(0, 3), Coord::new(7, 4));
        let (m, u) = Unchecked(mv).make_raw(&mut b).unwrap();
        assert_eq!(b.king_pos(Side::Black), None);
        assert!(!b.is_check(Side::Black));
        base::unmake_move_unchecked(&mut b, m, u);
        assert_eq!(b, Board::initial());
    }

    #[test]
    fn test_with_options() {
        let b = Board::from_fen("4k3/8/8/8/8/8/4R3/r3K3").unwrap();
        // White is in check from a1, moving the rook away doesn't help
        let mv = Move::new(Side::White, Coord::new(1, 4), Coord::new(1, 0));
        assert_eq!(
            WithOptions(mv, Options::default()).make(&b),
            Err(MoveError::KingInCheck)
        );
        let opts = Options {
            allow_self_check: true,
            ..Options::default()
        };
        assert!(WithOptions(mv, opts).make(&b).is_ok());
        // Taking the king on e8 is never allowed
        let take = Move::new(Side::White, Coord::new(1, 4), Coord::new(7, 4));
        assert_eq!(WithOptions(take, opts).make(&b), Err(MoveError::KingCapture));
        assert!(Unchecked(take).make(&b).is_ok());

        // Blocking is fine
        let block = Board::from_fen("4k3/8/8/8/8/8/3R4/r3K3").unwrap();
        let mv = Move::new(Side::White, Coord::new(1, 3), Coord::new(0, 3));
        assert!(mv.make(&block).is_ok());
    }
}
