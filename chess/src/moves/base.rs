use crate::board::Board;
use crate::legal::Checker;
use crate::rules::{self, Motion};
use crate::types::{Cell, Coord, Options, OutOfBoundsError, Role, Side};

use std::fmt;

use log::debug;
use thiserror::Error;

/// Chess move
///
/// A move is a request of side `side` to relocate the piece on `src` to `dst`. Creating a move
/// doesn't check anything. Moves can have different degrees of validity:
///
/// - _Semilegal_. The source square holds a piece of the moving side, the shape of the move
///   matches the piece's role, the path is clear (for all pieces except knights), and the
///   destination is neither occupied by a friendly piece nor by the opponent's king. See
///   [`Move::semi_validate()`].
///
/// - _Legal_. The move is semilegal, and the king of the moving side is not attacked after the
///   move. See [`Move::validate()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    side: Side,
    src: Coord,
    dst: Coord,
}

/// Error indicating that move is rejected
///
/// The variants are listed in the order in which the checks are done.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum MoveError {
    /// Source or destination is outside the board
    #[error("square out of bounds: {0}")]
    OutOfBounds(#[from] OutOfBoundsError),
    /// Source square is vacant or holds an opponent's piece
    #[error("no piece of the moving side on the source square")]
    NotYourPiece,
    /// Shape of the move doesn't match the movement pattern of the piece
    #[error("piece cannot move this way")]
    IllegalGeometry,
    /// A square between source and destination is occupied
    #[error("path is blocked")]
    PathBlocked,
    /// Destination holds a piece of the moving side
    #[error("destination is occupied by a friendly piece")]
    FriendlyCapture,
    /// Destination holds the opponent's king
    #[error("king cannot be captured")]
    KingCapture,
    /// The king of the moving side is attacked after the move
    #[error("move leaves the king in check")]
    KingInCheck,
}

/// Result of [`Board::attempt_move()`]
///
/// If the move is not [`MoveOutcome::Committed`], the board remains unchanged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// Move is applied to the board
    Committed,
    /// See [`MoveError::OutOfBounds`]
    OutOfBounds,
    /// See [`MoveError::NotYourPiece`]
    NotYourPiece,
    /// See [`MoveError::IllegalGeometry`]
    IllegalGeometry,
    /// See [`MoveError::PathBlocked`]
    PathBlocked,
    /// See [`MoveError::FriendlyCapture`]
    FriendlyCapture,
    /// See [`MoveError::KingCapture`]
    KingCapture,
    /// See [`MoveError::KingInCheck`]
    KingInCheck,
}

impl MoveOutcome {
    #[inline]
    pub fn is_committed(&self) -> bool {
        *self == MoveOutcome::Committed
    }
}

impl From<&MoveError> for MoveOutcome {
    fn from(e: &MoveError) -> Self {
        match e {
            MoveError::OutOfBounds(_) => MoveOutcome::OutOfBounds,
            MoveError::NotYourPiece => MoveOutcome::NotYourPiece,
            MoveError::IllegalGeometry => MoveOutcome::IllegalGeometry,
            MoveError::PathBlocked => MoveOutcome::PathBlocked,
            MoveError::FriendlyCapture => MoveOutcome::FriendlyCapture,
            MoveError::KingCapture => MoveOutcome::KingCapture,
            MoveError::KingInCheck => MoveOutcome::KingInCheck,
        }
    }
}

impl<T> From<Result<T, MoveError>> for MoveOutcome {
    #[inline]
    fn from(r: Result<T, MoveError>) -> Self {
        match r {
            Ok(_) => MoveOutcome::Committed,
            Err(e) => (&e).into(),
        }
    }
}

impl Move {
    /// Creates a new move
    #[inline]
    pub const fn new(side: Side, src: Coord, dst: Coord) -> Move {
        Move { side, src, dst }
    }

    /// Creates a move from raw `(rank, file)` pairs
    ///
    /// Returns [`MoveError::OutOfBounds`] if any of the pairs lies outside the board.
    pub fn from_indices(
        side: Side,
        src: (isize, isize),
        dst: (isize, isize),
    ) -> Result<Move, MoveError> {
        let src = Coord::try_new(src.0, src.1)?;
        let dst = Coord::try_new(dst.0, dst.1)?;
        Ok(Move::new(side, src, dst))
    }

    /// Returns the side which makes this move
    #[inline]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Returns the move source square
    #[inline]
    pub const fn src(&self) -> Coord {
        self.src
    }

    /// Returns the move destination square
    #[inline]
    pub const fn dst(&self) -> Coord {
        self.dst
    }

    /// Validates whether this move is semilegal from position `b`
    ///
    /// The checks are done in the following order: ownership of the source square, shape
    /// of the move, path, friendly destination, opponent's king on the destination. The first
    /// failed check is reported.
    pub fn semi_validate(&self, b: &Board) -> Result<(), MoveError> {
        let piece = b.piece_at(self.src);
        if piece.side() != Some(self.side) {
            return Err(MoveError::NotYourPiece);
        }

        let target = b.piece_at(self.dst);
        let motion = match target.is_empty() {
            true => Motion::Quiet,
            false => Motion::Capture,
        };
        if !piece.legal_move(self.dst, motion) {
            return Err(MoveError::IllegalGeometry);
        }

        let sliding = piece.role().map_or(false, rules::needs_clear_path);
        if sliding && !b.is_path_clear(self.src, self.dst) {
            return Err(MoveError::PathBlocked);
        }

        if target.side() == Some(self.side) {
            return Err(MoveError::FriendlyCapture);
        }
        if target.role() == Some(Role::King) {
            return Err(MoveError::KingCapture);
        }

        Ok(())
    }

    /// Returns `true` if the move is semilegal
    #[inline]
    pub fn is_semilegal(&self, b: &Board) -> bool {
        self.semi_validate(b).is_ok()
    }

    /// Validates whether this move is legal from position `b`
    ///
    /// If `opts.allow_self_check` is set, semilegal moves are accepted even if they leave
    /// the king attacked.
    pub fn validate(&self, b: &Board, opts: Options) -> Result<(), MoveError> {
        self.semi_validate(b)?;
        if !opts.allow_self_check && !Checker::new(b).is_legal(*self) {
            return Err(MoveError::KingInCheck);
        }
        Ok(())
    }

    /// Returns `true` if the move is legal under default options
    #[inline]
    pub fn is_legal(&self, b: &Board) -> bool {
        self.validate(b, Options::default()).is_ok()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}-{}", self.src, self.dst)
    }
}

/// Metadata necessary to undo the applied move
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RawUndo {
    captured: Cell,
}

impl RawUndo {
    /// Returns the previous contents of the destination square
    #[inline]
    pub fn captured(&self) -> Cell {
        self.captured
    }
}

/// Makes move `mv` on the board `b` without any checks
///
/// Nothing bad happens if the move is not semilegal, but the result may not be a sensible chess
/// position (e.g. the king may be captured, and the board then has no king of that side). Use [`unmake_move_unchecked()`] to roll it back.
#[inline]
pub fn make_move_unchecked(b: &mut Board, mv: Move) -> RawUndo {
    RawUndo {
        captured: b.apply_move(mv.src, mv.dst),
    }
}

/// Unmakes the move `mv` on the board `b`
///
/// `u` must be the value returned by the corresponding call to [`make_move_unchecked()`], and the
/// board must not be changed in between. Then, the board is restored exactly.
#[inline]
pub fn unmake_move_unchecked(b: &mut Board, mv: Move, u: RawUndo) {
    b.unapply_move(mv.src, mv.dst, u.captured);
}

/// Validates move `mv` and makes it on the board `b`
///
/// The king safety check is done by making the move and looking at the result, so no board copy
/// is needed. On error, `b` is left unchanged.
pub fn make_move_checked(b: &mut Board, mv: Move, opts: Options) -> Result<RawUndo, MoveError> {
    mv.semi_validate(b)?;
    let u = make_move_unchecked(b, mv);
    if !opts.allow_self_check && b.is_check(mv.side) {
        unmake_move_unchecked(b, mv, u);
        return Err(MoveError::KingInCheck);
    }
    Ok(u)
}

impl Board {
    /// Tries to move the piece of side `side` from `src` to `dst`
    ///
    /// Same as [`Board::attempt_move_with()`] with default options.
    ///
    /// # Example
    ///
    /// ```
    /// # use rookery::{Board, Coord, MoveOutcome, Side};
    /// #
    /// let mut b = Board::initial();
    /// let e2 = Coord::new(1, 4);
    /// let e4 = Coord::new(3, 4);
    /// assert_eq!(b.attempt_move(Side::White, e2, e4), MoveOutcome::Committed);
    /// assert!(b.piece_at(e2).is_empty());
    ///
    /// let e5 = Coord::new(4, 4);
    /// assert_eq!(b.attempt_move(Side::White, e4, e5), MoveOutcome::Committed);
    /// assert_eq!(b.attempt_move(Side::White, e5, e4), MoveOutcome::IllegalGeometry);
    /// ```
    #[inline]
    pub fn attempt_move(&mut self, side: Side, src: Coord, dst: Coord) -> MoveOutcome {
        self.attempt_move_with(side, src, dst, Options::default())
    }

    /// Tries to move the piece of side `side` from `src` to `dst` under rule options `opts`
    ///
    /// If the move is rejected, the board is unchanged and the reason is returned.
    pub fn attempt_move_with(
        &mut self,
        side: Side,
        src: Coord,
        dst: Coord,
        opts: Options,
    ) -> MoveOutcome {
        let mv = Move::new(side, src, dst);
        let res = make_move_checked(self, mv, opts);
        if let Err(e) = &res {
            debug!("rejected move {} by {:?}: {}", mv, side, e);
        }
        res.into()
    }

    /// Same as [`Board::attempt_move()`], but takes raw `(rank, file)` pairs
    ///
    /// Pairs outside the board yield [`MoveOutcome::OutOfBounds`].
    pub fn attempt_move_indices(
        &mut self,
        side: Side,
        src: (isize, isize),
        dst: (isize, isize),
    ) -> MoveOutcome {
        match Move::from_indices(side, src, dst) {
            Ok(mv) => self.attempt_move(side, mv.src, mv.dst),
            Err(e) => {
                debug!("rejected move by {:?}: {}", side, e);
                (&e).into()
            }
        }
    }
}
