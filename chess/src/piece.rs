use crate::rules::{self, Motion};
use crate::types::{Cell, Coord, Role, Side};

/// Occupant of a square together with the square itself
///
/// Vacant squares are pieces too: their cell is [`Cell::EMPTY`], and they have neither
/// role nor side.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    cell: Cell,
    coord: Coord,
}

impl Piece {
    #[inline]
    pub const fn new(cell: Cell, coord: Coord) -> Piece {
        Piece { cell, coord }
    }

    #[inline]
    pub const fn vacant(coord: Coord) -> Piece {
        Piece {
            cell: Cell::EMPTY,
            coord,
        }
    }

    #[inline]
    pub const fn cell(&self) -> Cell {
        self.cell
    }

    #[inline]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub const fn role(&self) -> Option<Role> {
        self.cell.role()
    }

    #[inline]
    pub const fn side(&self) -> Option<Side> {
        self.cell.side()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.cell.is_empty()
    }

    /// Returns `true` if this piece may move to `to` by the shape of the move
    ///
    /// The check is purely geometric: it doesn't know about other pieces on the board.
    /// A vacant square can never move.
    pub fn legal_move(&self, to: Coord, motion: Motion) -> bool {
        match (self.role(), self.side()) {
            (Some(role), Some(side)) => rules::is_shape_legal(role, side, self.coord, to, motion),
            _ => false,
        }
    }

    /// Returns the same piece standing on `to`
    #[inline]
    pub const fn moved_to(self, to: Coord) -> Piece {
        Piece {
            cell: self.cell,
            coord: to,
        }
    }
}
