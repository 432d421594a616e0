use crate::bitboard::Bitboard;
use crate::geometry;
use crate::types::Coord;

#[inline]
fn step(src: Coord, dst: Coord) -> Option<(isize, isize)> {
    let (dy, dx) = geometry::delta(src, dst);
    if (dx, dy) == (0, 0) {
        return None;
    }
    if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
        return None;
    }
    Some((dy.signum(), dx.signum()))
}

/// Returns `true` if `src` and `dst` are different squares on a common rank, file or diagonal
#[inline]
pub fn is_aligned(src: Coord, dst: Coord) -> bool {
    step(src, dst).is_some()
}

/// Returns the squares strictly between `src` and `dst`
///
/// If the squares are not aligned (see [`is_aligned()`]), there is nothing in between and the
/// result is empty.
pub fn strict(src: Coord, dst: Coord) -> Bitboard {
    let mut res = Bitboard::EMPTY;
    let (dy, dx) = match step(src, dst) {
        Some(s) => s,
        None => return res,
    };
    let mut cur = src;
    while let Some(next) = cur.try_shift(dy, dx) {
        if next == dst {
            break;
        }
        res.set(next);
        cur = next;
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, File, Rank};

    #[test]
    fn test_bishop() {
        let b4 = Coord::from_parts(File::B, Rank::R4);
        let e7 = Coord::from_parts(File::E, Rank::R7);
        let res = Bitboard::EMPTY
            .with(Coord::from_parts(File::C, Rank::R5))
            .with(Coord::from_parts(File::D, Rank::R6));
        assert_eq!(strict(b4, e7), res);
        assert_eq!(strict(e7, b4), res);

        let f3 = Coord::from_parts(File::F, Rank::R3);
        let c6 = Coord::from_parts(File::C, Rank::R6);
        let res = Bitboard::EMPTY
            .with(Coord::from_parts(File::E, Rank::R4))
            .with(Coord::from_parts(File::D, Rank::R5));
        assert_eq!(strict(f3, c6), res);
        assert_eq!(strict(c6, f3), res);
    }

    #[test]
    fn test_rook() {
        let b4 = Coord::from_parts(File::B, Rank::R4);
        let e4 = Coord::from_parts(File::E, Rank::R4);
        let res = Bitboard::EMPTY
            .with(Coord::from_parts(File::C, Rank::R4))
            .with(Coord::from_parts(File::D, Rank::R4));
        assert_eq!(strict(b4, e4), res);
        assert_eq!(strict(e4, b4), res);

        let d3 = Coord::from_parts(File::D, Rank::R3);
        let d6 = Coord::from_parts(File::D, Rank::R6);
        let res = Bitboard::EMPTY
            .with(Coord::from_parts(File::D, Rank::R4))
            .with(Coord::from_parts(File::D, Rank::R5));
        assert_eq!(strict(d3, d6), res);
        assert_eq!(strict(d6, d3), res);
    }

    #[test]
    fn test_adjacent_and_unaligned() {
        let d4 = Coord::new(3, 3);
        assert!(strict(d4, Coord::new(4, 4)).is_empty());
        assert!(strict(d4, Coord::new(3, 4)).is_empty());
        assert!(strict(d4, Coord::new(5, 4)).is_empty());
        assert!(strict(d4, d4).is_empty());
        assert!(!is_aligned(d4, Coord::new(5, 4)));
        assert!(!is_aligned(d4, d4));
        assert!(is_aligned(d4, Coord::new(0, 0)));
        assert_eq!(strict(Coord::new(0, 0), Coord::new(7, 7)).len(), 6);
    }
}
