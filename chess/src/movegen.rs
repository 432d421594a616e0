//! Attack detection, move generation, check and checkmate

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::legal::Checker;
use crate::moves::Move;
use crate::rules::{self, Motion};
use crate::types::{Coord, EscapeScan, Side};

use std::ops::{Deref, DerefMut};
use std::slice;

use arrayvec::ArrayVec;
use log::trace;

fn attacks(b: &Board, src: Coord, dst: Coord) -> bool {
    let piece = b.piece_at(src);
    if !piece.legal_move(dst, Motion::Capture) {
        return false;
    }
    let sliding = piece.role().map_or(false, rules::needs_clear_path);
    !sliding || b.is_path_clear(src, dst)
}

/// Returns `true` if any piece of side `by` could capture on `coord`
///
/// Pawns attack diagonally, whatever stands on `coord`.
pub fn is_cell_attacked(b: &Board, coord: Coord, by: Side) -> bool {
    b.pieces_of(by).into_iter().any(|src| attacks(b, src, coord))
}

/// Returns all the pieces of side `by` that could capture on `coord`
pub fn cell_attackers(b: &Board, coord: Coord, by: Side) -> Bitboard {
    b.pieces_of(by)
        .into_iter()
        .filter(|&src| attacks(b, src, coord))
        .collect()
}

/// Returns `true` if the king of side `side` is attacked
pub fn is_check(b: &Board, side: Side) -> bool {
    b.king_pos(side)
        .map_or(false, |king| is_cell_attacked(b, king, side.inv()))
}

/// Upper bound on the number of semilegal moves in any position
///
/// A side has at most 16 pieces including the king. Any other piece has at most 27
/// destinations (a queen in the center), and the king has at most 8, so there are no more than
/// `15 * 27 + 8 = 413` moves.
pub const MAX_MOVES: usize = 15 * 27 + 8;

#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct MoveList(ArrayVec<Move, MAX_MOVES>);

impl Deref for MoveList {
    type Target = ArrayVec<Move, MAX_MOVES>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = arrayvec::IntoIter<Move, MAX_MOVES>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }
}

/// Returns all the squares where the piece on `src` can go by a semilegal move
///
/// The result is empty if `src` is vacant.
pub fn destinations(b: &Board, src: Coord) -> Bitboard {
    let side = match b.get(src).side() {
        Some(s) => s,
        None => return Bitboard::EMPTY,
    };
    Coord::iter()
        .filter(|&dst| Move::new(side, src, dst).is_semilegal(b))
        .collect()
}

fn semilegal_moves(b: &Board, side: Side) -> impl Iterator<Item = Move> + '_ {
    b.pieces_of(side).into_iter().flat_map(move |src| {
        destinations(b, src)
            .into_iter()
            .map(move |dst| Move::new(side, src, dst))
    })
}

/// Generates all the semilegal moves of side `side`
///
/// The list holds [`MAX_MOVES`] items, so it never overflows.
pub fn gen_semilegal(b: &Board, side: Side) -> MoveList {
    let mut res = MoveList::new();
    res.extend(semilegal_moves(b, side));
    res
}

/// Generates all the legal moves of side `side`
pub fn gen_legal(b: &Board, side: Side) -> MoveList {
    let mut res = gen_semilegal(b, side);
    let mut checker = Checker::new(b);
    res.retain(|mv| checker.is_legal(*mv));
    res
}

/// Returns `true` if side `side` has at least one legal move
///
/// Stops at the first legal move found.
pub fn has_legal_moves(b: &Board, side: Side) -> bool {
    let mut checker = Checker::new(b);
    semilegal_moves(b, side).any(|mv| checker.is_legal(mv))
}

/// Returns `true` if side `side` is in check and no move found by `scan` gets out of it
pub fn is_checkmate(b: &Board, side: Side, scan: EscapeScan) -> bool {
    if !is_check(b, side) {
        return false;
    }
    let mut checker = Checker::new(b);
    let escape = semilegal_moves(b, side)
        .filter(|mv| scan == EscapeScan::Full || b.get(mv.dst()).is_empty())
        .find(|&mv| checker.is_legal(mv));
    match escape {
        Some(mv) => {
            trace!("{:?} escapes check with {}", side, mv);
            false
        }
        None => true,
    }
}
