//! Movement shapes of each role
//!
//! These are pure predicates over the geometry of a move. They don't look at the board, so
//! path obstruction and the occupant of the destination square are checked elsewhere.
//!
//! All the differences are taken as `dy = dst.rank - src.rank` and `dx = dst.file - src.file`.

use crate::geometry;
use crate::types::{Coord, Role, Side};

/// Whether a pawn move is a plain advance or a capture
///
/// Pawns move and capture in different ways. The caller picks the motion by looking at
/// the destination square: [`Motion::Capture`] when it is occupied, [`Motion::Quiet`] otherwise.
/// Other roles ignore the motion.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Motion {
    Quiet,
    Capture,
}

pub fn pawn_quiet(side: Side, src: Coord, dst: Coord) -> bool {
    let (dy, dx) = geometry::delta(src, dst);
    let forward = geometry::pawn_forward(side);
    if dx != 0 {
        return false;
    }
    dy == forward || (dy == 2 * forward && src.rank() == geometry::pawn_home_rank(side))
}

pub fn pawn_capture(side: Side, src: Coord, dst: Coord) -> bool {
    let (dy, dx) = geometry::delta(src, dst);
    dx.abs() == 1 && dy == geometry::pawn_forward(side)
}

pub fn rook(src: Coord, dst: Coord) -> bool {
    let (dy, dx) = geometry::delta(src, dst);
    (dx == 0) != (dy == 0)
}

pub fn knight(src: Coord, dst: Coord) -> bool {
    let (dy, dx) = geometry::delta(src, dst);
    matches!((dx.abs(), dy.abs()), (1, 2) | (2, 1))
}

pub fn bishop(src: Coord, dst: Coord) -> bool {
    let (dy, dx) = geometry::delta(src, dst);
    dx != 0 && dx.abs() == dy.abs()
}

pub fn queen(src: Coord, dst: Coord) -> bool {
    rook(src, dst) || bishop(src, dst)
}

pub fn king(src: Coord, dst: Coord) -> bool {
    let (dy, dx) = geometry::delta(src, dst);
    dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0)
}

/// Returns `true` if a piece of role `role` and side `side` may move from `src` to `dst`
/// by the shape of the move alone
pub fn is_shape_legal(role: Role, side: Side, src: Coord, dst: Coord, motion: Motion) -> bool {
    match role {
        Role::Pawn => match motion {
            Motion::Quiet => pawn_quiet(side, src, dst),
            Motion::Capture => pawn_capture(side, src, dst),
        },
        Role::Rook => rook(src, dst),
        Role::Knight => knight(src, dst),
        Role::Bishop => bishop(src, dst),
        Role::Queen => queen(src, dst),
        Role::King => king(src, dst),
    }
}

/// Returns `true` if pieces of this role need the squares between source and destination
/// to be vacant
pub const fn needs_clear_path(role: Role) -> bool {
    !matches!(role, Role::Knight)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(rank: usize, file: usize) -> Coord {
        Coord::new(rank, file)
    }

    #[test]
    fn test_pawn_quiet() {
        for file in 0..8 {
            assert!(pawn_quiet(Side::White, c(1, file), c(2, file)));
            assert!(pawn_quiet(Side::White, c(1, file), c(3, file)));
            assert!(!pawn_quiet(Side::White, c(1, file), c(4, file)));
            assert!(!pawn_quiet(Side::White, c(2, file), c(4, file)));
            assert!(pawn_quiet(Side::White, c(2, file), c(3, file)));
            assert!(!pawn_quiet(Side::White, c(2, file), c(1, file)));

            assert!(pawn_quiet(Side::Black, c(6, file), c(5, file)));
            assert!(pawn_quiet(Side::Black, c(6, file), c(4, file)));
            assert!(!pawn_quiet(Side::Black, c(6, file), c(3, file)));
            assert!(!pawn_quiet(Side::Black, c(5, file), c(3, file)));
            assert!(!pawn_quiet(Side::Black, c(5, file), c(6, file)));
        }
        assert!(!pawn_quiet(Side::White, c(1, 4), c(2, 5)));
        assert!(!pawn_quiet(Side::White, c(1, 4), c(1, 4)));
    }

    #[test]
    fn test_pawn_capture() {
        assert!(pawn_capture(Side::White, c(3, 4), c(4, 3)));
        assert!(pawn_capture(Side::White, c(3, 4), c(4, 5)));
        assert!(!pawn_capture(Side::White, c(3, 4), c(4, 4)));
        assert!(!pawn_capture(Side::White, c(3, 4), c(2, 3)));
        assert!(!pawn_capture(Side::White, c(1, 4), c(3, 6)));
        assert!(pawn_capture(Side::Black, c(4, 4), c(3, 3)));
        assert!(!pawn_capture(Side::Black, c(4, 4), c(5, 5)));
    }

    #[test]
    fn test_sliders() {
        assert!(rook(c(0, 0), c(0, 7)));
        assert!(rook(c(0, 0), c(7, 0)));
        assert!(!rook(c(0, 0), c(1, 1)));
        assert!(!rook(c(4, 4), c(4, 4)));

        assert!(bishop(c(0, 0), c(7, 7)));
        assert!(bishop(c(2, 5), c(5, 2)));
        assert!(!bishop(c(2, 5), c(2, 6)));
        assert!(!bishop(c(4, 4), c(4, 4)));

        assert!(queen(c(3, 3), c(3, 0)));
        assert!(queen(c(3, 3), c(6, 6)));
        assert!(!queen(c(3, 3), c(5, 4)));
        assert!(!queen(c(3, 3), c(3, 3)));
    }

    #[test]
    fn test_knight() {
        let mut count = 0;
        for dst in Coord::iter() {
            if knight(c(3, 3), dst) {
                count += 1;
            }
        }
        assert_eq!(count, 8);
        assert!(knight(c(0, 1), c(2, 2)));
        assert!(knight(c(0, 1), c(1, 3)));
        assert!(!knight(c(0, 1), c(2, 3)));
    }

    #[test]
    fn test_king() {
        let count = Coord::iter().filter(|&dst| king(c(3, 3), dst)).count();
        assert_eq!(count, 8);
        assert_eq!(Coord::iter().filter(|&dst| king(c(0, 0), dst)).count(), 3);
        assert!(!king(c(3, 3), c(3, 3)));
        assert!(!king(c(3, 3), c(5, 3)));
    }

    #[test]
    fn test_dispatch() {
        assert!(is_shape_legal(Role::Pawn, Side::White, c(1, 0), c(2, 0), Motion::Quiet));
        assert!(!is_shape_legal(Role::Pawn, Side::White, c(1, 0), c(2, 0), Motion::Capture));
        assert!(is_shape_legal(Role::Pawn, Side::White, c(1, 0), c(2, 1), Motion::Capture));
        assert!(is_shape_legal(Role::Rook, Side::Black, c(7, 0), c(3, 0), Motion::Capture));
        assert!(!needs_clear_path(Role::Knight));
        assert!(needs_clear_path(Role::Pawn));
        assert!(needs_clear_path(Role::Queen));
    }
}
