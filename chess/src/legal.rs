//! Dry runs of moves and king safety checks

use crate::board::Board;
#[cfg(feature = "selftest")]
use crate::board::RawBoard;
use crate::moves::{self, Move, RawUndo};
use crate::types::Cell;

use std::ops::Deref;

/// Move applied to the board for a limited scope
///
/// The move is made when the trial is created and unmade when it is dropped, so the board
/// is restored on every exit path, including early returns. While the trial is alive, the
/// board can only be inspected through it.
///
/// With the `selftest` feature, the trial also remembers the board and checks on drop that it
/// was restored exactly.
///
/// # Example
///
/// ```
/// # use rookery::{Board, Coord, Move, Side};
/// #
/// let mut b = Board::initial();
/// let mv = Move::new(Side::White, Coord::new(1, 4), Coord::new(3, 4));
/// {
///     let t = b.trial(mv);
///     assert!(t.piece_at(Coord::new(1, 4)).is_empty());
/// }
/// assert_eq!(b, Board::initial());
/// ```
pub struct Trial<'a> {
    board: &'a mut Board,
    mv: Move,
    undo: RawUndo,
    #[cfg(feature = "selftest")]
    snapshot: RawBoard,
}

impl<'a> Trial<'a> {
    /// Makes `mv` on `board` without any checks
    pub fn new(board: &'a mut Board, mv: Move) -> Trial<'a> {
        #[cfg(feature = "selftest")]
        let snapshot = *board.raw();
        let undo = moves::make_move_unchecked(board, mv);
        Trial {
            board,
            mv,
            undo,
            #[cfg(feature = "selftest")]
            snapshot,
        }
    }

    /// Returns the move being tried
    #[inline]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// Returns the previous contents of the destination square
    #[inline]
    pub fn captured(&self) -> Cell {
        self.undo.captured()
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        moves::unmake_move_unchecked(self.board, self.mv, self.undo);
        #[cfg(feature = "selftest")]
        {
            assert_eq!(
                *self.board.raw(),
                self.snapshot,
                "board not restored after trial of {}",
                self.mv
            );
            let rebuilt = Board::build(*self.board.raw());
            assert_eq!(
                (rebuilt.white, rebuilt.black),
                (self.board.white, self.board.black),
                "bitboards not restored after trial of {}",
                self.mv
            );
        }
    }
}

impl Board {
    /// Makes `mv` on the board until the returned guard is dropped
    #[inline]
    pub fn trial(&mut self, mv: Move) -> Trial<'_> {
        Trial::new(self, mv)
    }
}

/// King safety checker
///
/// Owns a scratch copy of the board, so the moves are tried without touching the caller's board.
/// One checker may test many moves from the same position.
#[derive(Clone, Debug)]
pub struct Checker {
    scratch: Board,
}

impl Checker {
    pub fn new(b: &Board) -> Checker {
        Checker { scratch: b.clone() }
    }

    /// Returns the position the moves are tried from
    #[inline]
    pub fn board(&self) -> &Board {
        &self.scratch
    }

    /// Returns `true` if the king of the moving side is not attacked after `mv`
    ///
    /// The move is expected to be semilegal, this is not checked.
    #[inline]
    pub fn is_legal(&mut self, mv: Move) -> bool {
        let t = self.scratch.trial(mv);
        !t.is_check(mv.side())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, Role, Side};

    fn probe(b: &mut Board, mv: Move) -> Result<bool, ()> {
        let t = b.trial(mv);
        if t.captured().is_empty() {
            return Err(());
        }
        Ok(t.is_check(mv.side().inv()))
    }

    #[test]
    fn test_trial_restores() {
        let mut b = Board::from_fen("4k3/8/8/8/8/8/4R3/r3K3").unwrap();
        let copy = b.clone();

        let quiet = Move::new(Side::White, Coord::new(1, 4), Coord::new(1, 0));
        {
            let t = b.trial(quiet);
            assert_eq!(t.mv(), quiet);
            assert_eq!(t.captured(), Cell::EMPTY);
            assert!(t.is_check(Side::White));
        }
        assert_eq!(b, copy);

        // Early return while the trial is alive
        assert_eq!(probe(&mut b, quiet), Err(()));
        assert_eq!(b, copy);

        let take = Move::new(Side::White, Coord::new(1, 4), Coord::new(7, 4));
        assert_eq!(probe(&mut b, take), Ok(false));
        assert_eq!(b, copy);
        assert_eq!(b.occupied(), copy.occupied());
        assert_eq!(b.pieces_of(Side::Black), copy.pieces_of(Side::Black));
    }

    #[test]
    fn test_checker() {
        let b = Board::from_fen("4k3/8/8/8/8/8/4R3/r3K3").unwrap();
        let copy = b.clone();
        let mut ch = Checker::new(&b);

        // Rook steps away, check remains
        assert!(!ch.is_legal(Move::new(
            Side::White,
            Coord::new(1, 4),
            Coord::new(1, 0)
        )));
        // King steps out of the line
        assert!(ch.is_legal(Move::new(
            Side::White,
            Coord::new(0, 4),
            Coord::new(1, 3)
        )));
        // King steps along the line
        assert!(!ch.is_legal(Move::new(
            Side::White,
            Coord::new(0, 4),
            Coord::new(0, 5)
        )));
        assert_eq!(ch.board(), &copy);
        assert_eq!(b, copy);
        assert_eq!(
            b.get(Coord::new(0, 0)),
            Cell::from_parts(Side::Black, Role::Rook)
        );
    }
}
