use crate::types::{Coord, Rank, Side};

pub const fn back_rank(s: Side) -> Rank {
    match s {
        Side::White => Rank::R1,
        Side::Black => Rank::R8,
    }
}

/// Rank from which pawns of side `s` may advance two squares
pub const fn pawn_home_rank(s: Side) -> Rank {
    match s {
        Side::White => Rank::R2,
        Side::Black => Rank::R7,
    }
}

/// Rank step of a pawn advance
pub const fn pawn_forward(s: Side) -> isize {
    match s {
        Side::White => 1,
        Side::Black => -1,
    }
}

/// Returns `(dy, dx)`, i.e. the rank and file differences from `src` to `dst`
pub const fn delta(src: Coord, dst: Coord) -> (isize, isize) {
    (
        dst.rank().index() as isize - src.rank().index() as isize,
        dst.file().index() as isize - src.file().index() as isize,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta() {
        assert_eq!(delta(Coord::new(1, 4), Coord::new(3, 4)), (2, 0));
        assert_eq!(delta(Coord::new(7, 0), Coord::new(0, 7)), (-7, 7));
        assert_eq!(delta(Coord::new(5, 5), Coord::new(5, 5)), (0, 0));
    }

    #[test]
    fn test_pawn_ranks() {
        assert_eq!(pawn_home_rank(Side::White).index(), 1);
        assert_eq!(pawn_home_rank(Side::Black).index(), 6);
        assert_eq!(back_rank(Side::White).index(), 0);
        assert_eq!(back_rank(Side::Black).index(), 7);
    }
}
