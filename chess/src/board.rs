//! Board and related things

use crate::bitboard::Bitboard;
use crate::moves::Make;
use crate::piece::Piece;
use crate::types::{Cell, Coord, EscapeScan, File, Rank, Role, Side};
use crate::{between, movegen};

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use thiserror::Error;

/// Board validation error
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ValidateError {
    /// Too many pieces of given side
    ///
    /// No more than 16 pieces of each side is allowed.
    #[error("too many pieces of side {0:?}")]
    TooManyPieces(Side),
    /// One of the sides doesn't have a king
    #[error("no king of side {0:?}")]
    NoKing(Side),
    /// One of the sides has more than one king
    #[error("more than one king of side {0:?}")]
    TooManyKings(Side),
}

/// Error parsing piece placement (i.e. the first field of FEN)
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum CellsParseError {
    /// Rank is too large
    #[error("too many items in rank {0}")]
    RankOverflow(Rank),
    /// Rank is too small
    #[error("not enough items in rank {0}")]
    RankUnderflow(Rank),
    /// Too many ranks
    #[error("too many ranks")]
    Overflow,
    /// Not enough ranks
    #[error("not enough ranks")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// Error parsing [`Board`] from piece placement
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum FenParseError {
    /// Placement cannot be parsed
    #[error("cannot parse placement: {0}")]
    Cells(#[from] CellsParseError),
    /// Placement was parsed, but the position is invalid
    #[error("invalid position: {0}")]
    Valid(#[from] ValidateError),
}

/// Raw chess board
///
/// Raw board is just the contents of 64 squares. Unlike [`Board`], it is not validated, so it may
/// lack kings or contain too many pieces.
///
/// Raw board can be used to build the position programmatically. After putting the pieces, it
/// must be converted to [`Board`] via [`Board::try_from()`].
///
/// # Example
///
/// ```
/// # use rookery::{RawBoard, Board, Cell, Coord, Role, Side};
/// #
/// let mut raw = RawBoard::empty();
/// raw.put(Coord::new(1, 1), Cell::from_parts(Side::White, Role::King));
/// raw.put(Coord::new(4, 3), Cell::from_parts(Side::Black, Role::King));
///
/// let board: Board = raw.try_into().unwrap();
/// assert_eq!(board.as_fen(), "8/8/8/3k4/8/8/1K6/8");
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RawBoard {
    /// Contents of the board, indexed by [`Coord::index()`]
    pub cells: [Cell; 64],
}

impl RawBoard {
    /// Returns an empty `RawBoard`
    #[inline]
    pub const fn empty() -> RawBoard {
        RawBoard {
            cells: [Cell::EMPTY; 64],
        }
    }

    /// Returns a board with the initial position
    pub fn initial() -> RawBoard {
        let mut res = RawBoard::empty();
        for file in File::iter() {
            res.put2(file, Rank::R2, Cell::from_parts(Side::White, Role::Pawn));
            res.put2(file, Rank::R7, Cell::from_parts(Side::Black, Role::Pawn));
        }
        for (side, rank) in [(Side::White, Rank::R1), (Side::Black, Rank::R8)] {
            res.put2(File::A, rank, Cell::from_parts(side, Role::Rook));
            res.put2(File::B, rank, Cell::from_parts(side, Role::Knight));
            res.put2(File::C, rank, Cell::from_parts(side, Role::Bishop));
            res.put2(File::D, rank, Cell::from_parts(side, Role::Queen));
            res.put2(File::E, rank, Cell::from_parts(side, Role::King));
            res.put2(File::F, rank, Cell::from_parts(side, Role::Bishop));
            res.put2(File::G, rank, Cell::from_parts(side, Role::Knight));
            res.put2(File::H, rank, Cell::from_parts(side, Role::Rook));
        }
        res
    }

    /// Parses a board from the piece placement field of FEN
    #[inline]
    pub fn from_fen(fen: &str) -> Result<RawBoard, CellsParseError> {
        RawBoard::from_str(fen)
    }

    /// Returns the contents of the square with coordinate `c`
    #[inline]
    pub fn get(&self, c: Coord) -> Cell {
        self.cells[c.index()]
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Cell {
        self.get(Coord::from_parts(file, rank))
    }

    /// Puts `cell` to the square with coordinate `c`
    #[inline]
    pub fn put(&mut self, c: Coord, cell: Cell) {
        self.cells[c.index()] = cell;
    }

    /// Puts `cell` to the square with file `file` and rank `rank`
    #[inline]
    pub fn put2(&mut self, file: File, rank: Rank, cell: Cell) {
        self.put(Coord::from_parts(file, rank), cell);
    }

    /// Converts the board into a piece placement string
    #[inline]
    pub fn as_fen(&self) -> String {
        self.to_string()
    }
}

impl Default for RawBoard {
    #[inline]
    fn default() -> RawBoard {
        RawBoard::empty()
    }
}

/// Board that contains a valid position
///
/// Each side has exactly one king and at most 16 pieces. Every square always holds a [`Cell`],
/// vacant squares hold [`Cell::EMPTY`]. Checked moves never capture a king, so only
/// [`Board::apply_move()`] and unchecked moves can break this.
///
/// The board doesn't know whose turn it is. The side is passed to each operation, or kept by
/// [`Game`](crate::game::Game).
#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) r: RawBoard,
    pub(crate) white: Bitboard,
    pub(crate) black: Bitboard,
}

impl Board {
    pub(crate) fn build(r: RawBoard) -> Board {
        let mut white = Bitboard::EMPTY;
        let mut black = Bitboard::EMPTY;
        for coord in Coord::iter() {
            match r.get(coord).side() {
                Some(Side::White) => white.set(coord),
                Some(Side::Black) => black.set(coord),
                None => {}
            }
        }
        Board { r, white, black }
    }

    /// Returns a board with the initial position
    pub fn initial() -> Board {
        Board::build(RawBoard::initial())
    }

    /// Parses a board from the piece placement field of FEN
    ///
    /// Does the same as [`Board::from_str`].
    pub fn from_fen(fen: &str) -> Result<Board, FenParseError> {
        Board::from_str(fen)
    }

    /// Returns a view over the raw board
    #[inline]
    pub fn raw(&self) -> &RawBoard {
        &self.r
    }

    /// Returns the contents of the square with coordinate `c`
    #[inline]
    pub fn get(&self, c: Coord) -> Cell {
        self.r.get(c)
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Cell {
        self.r.get2(file, rank)
    }

    /// Returns the occupant of the square `c`
    ///
    /// Never fails: a vacant square yields a vacant [`Piece`].
    #[inline]
    pub fn piece_at(&self, c: Coord) -> Piece {
        Piece::new(self.get(c), c)
    }

    /// Returns the bitboard over all the pieces of side `s`
    #[inline]
    pub fn pieces_of(&self, s: Side) -> Bitboard {
        match s {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }

    /// Returns the bitboard over all the occupied squares
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.white | self.black
    }

    /// Returns the position of the king of side `s`
    ///
    /// A valid board always has one, but a board where a king was captured by
    /// [`Board::apply_move()`] has none.
    pub fn king_pos(&self, s: Side) -> Option<Coord> {
        let king = Cell::from_parts(s, Role::King);
        self.pieces_of(s).into_iter().find(|&c| self.get(c) == king)
    }

    /// Returns `true` if all the squares strictly between `src` and `dst` are vacant
    ///
    /// Meant for pairs on a common rank, file or diagonal. Other pairs (like the ones
    /// made by a knight move) have no squares in between, so the path is reported as clear.
    #[inline]
    pub fn is_path_clear(&self, src: Coord, dst: Coord) -> bool {
        (between::strict(src, dst) & self.occupied()).is_empty()
    }

    #[inline]
    fn put(&mut self, c: Coord, cell: Cell) {
        self.white.unset(c);
        self.black.unset(c);
        match cell.side() {
            Some(Side::White) => self.white.set(c),
            Some(Side::Black) => self.black.set(c),
            None => {}
        }
        self.r.put(c, cell);
    }

    /// Moves whatever stands on `src` to `dst`, leaving `src` vacant
    ///
    /// No legality check is done here. Returns the previous contents of `dst`, which must be passed
    /// to [`Board::unapply_move()`] to undo the move.
    pub fn apply_move(&mut self, src: Coord, dst: Coord) -> Cell {
        let moving = self.get(src);
        let captured = self.get(dst);
        self.put(src, Cell::EMPTY);
        self.put(dst, moving);
        captured
    }

    /// Undoes [`Board::apply_move()`] with the same `src` and `dst`
    pub fn unapply_move(&mut self, src: Coord, dst: Coord, captured: Cell) {
        let moving = self.get(dst);
        self.put(dst, captured);
        self.put(src, moving);
    }

    /// Returns `true` if the king of side `s` is attacked
    ///
    /// A side without a king is never in check.
    #[inline]
    pub fn is_check(&self, s: Side) -> bool {
        movegen::is_check(self, s)
    }

    /// Returns `true` if side `s` is in check and cannot get out of it
    ///
    /// Same as [`Board::is_checkmate_with()`] with [`EscapeScan::Full`].
    #[inline]
    pub fn is_checkmate(&self, s: Side) -> bool {
        self.is_checkmate_with(s, EscapeScan::Full)
    }

    /// Returns `true` if side `s` is in check and no move found by `scan` gets out of it
    ///
    /// The board itself is not touched: the moves are tried on a scratch copy.
    #[inline]
    pub fn is_checkmate_with(&self, s: Side, scan: EscapeScan) -> bool {
        movegen::is_checkmate(self, s, scan)
    }

    /// Returns `true` if side `s` has at least one legal move
    #[inline]
    pub fn has_legal_moves(&self, s: Side) -> bool {
        movegen::has_legal_moves(self, s)
    }

    /// Convenience alias for [`moves::Make::make`](crate::moves::Make::make)
    pub fn make_move<M: Make>(&self, m: M) -> Result<Self, M::Err> {
        m.make(self)
    }

    /// Converts the board into a piece placement string
    #[inline]
    pub fn as_fen(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Board {
    #[inline]
    fn eq(&self, other: &Board) -> bool {
        self.r == other.r
    }
}

impl Eq for Board {}

impl Hash for Board {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state)
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::initial()
    }
}

impl TryFrom<RawBoard> for Board {
    type Error = ValidateError;

    fn try_from(raw: RawBoard) -> Result<Board, ValidateError> {
        let res = Board::build(raw);
        for side in Side::ALL {
            if res.pieces_of(side).len() > 16 {
                return Err(ValidateError::TooManyPieces(side));
            }
            let king = Cell::from_parts(side, Role::King);
            let kings = res
                .pieces_of(side)
                .into_iter()
                .filter(|&c| res.get(c) == king)
                .count();
            match kings {
                0 => return Err(ValidateError::NoKing(side)),
                1 => {}
                _ => return Err(ValidateError::TooManyKings(side)),
            }
        }
        Ok(res)
    }
}

impl TryFrom<&RawBoard> for Board {
    type Error = ValidateError;

    fn try_from(raw: &RawBoard) -> Result<Board, ValidateError> {
        (*raw).try_into()
    }
}

fn parse_cells(s: &str) -> Result<[Cell; 64], CellsParseError> {
    type Error = CellsParseError;

    // Placement goes from rank 8 down to rank 1
    let rank_of = |row: usize| Rank::from_index(7 - row);
    let mut file = 0_usize;
    let mut row = 0_usize;
    let mut cells = [Cell::EMPTY; 64];
    for c in s.chars() {
        match c {
            '1'..='8' => {
                let add = (c as u8 - b'0') as usize;
                if file + add > 8 {
                    return Err(Error::RankOverflow(rank_of(row)));
                }
                file += add;
            }
            '/' => {
                if file < 8 {
                    return Err(Error::RankUnderflow(rank_of(row)));
                }
                row += 1;
                file = 0;
                if row >= 8 {
                    return Err(Error::Overflow);
                }
            }
            _ => {
                if file >= 8 {
                    return Err(Error::RankOverflow(rank_of(row)));
                }
                let cell = Cell::from_char(c)
                    .filter(|cell| cell.is_occupied())
                    .ok_or(Error::UnexpectedChar(c))?;
                cells[Coord::from_parts(File::from_index(file), rank_of(row)).index()] = cell;
                file += 1;
            }
        };
    }

    if file < 8 {
        return Err(Error::RankUnderflow(rank_of(row)));
    }
    if row < 7 {
        return Err(Error::Underflow);
    }

    Ok(cells)
}

impl FromStr for RawBoard {
    type Err = CellsParseError;

    fn from_str(s: &str) -> Result<RawBoard, Self::Err> {
        Ok(RawBoard {
            cells: parse_cells(s.trim())?,
        })
    }
}

impl FromStr for Board {
    type Err = FenParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        Ok(RawBoard::from_str(s)?.try_into()?)
    }
}

fn format_cells(cells: &[Cell; 64], f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    for rank in Rank::iter().rev() {
        if rank != Rank::R8 {
            write!(f, "/")?;
        }
        let mut empty = 0;
        for file in File::iter() {
            let cell = cells[Coord::from_parts(file, rank).index()];
            if cell.is_empty() {
                empty += 1;
                continue;
            }
            if empty != 0 {
                write!(f, "{}", (b'0' + empty) as char)?;
                empty = 0;
            }
            write!(f, "{}", cell)?;
        }
        if empty != 0 {
            write!(f, "{}", (b'0' + empty) as char)?;
        }
    }
    Ok(())
}

impl Display for RawBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        format_cells(&self.cells, f)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.r.fmt(f)
    }
}
