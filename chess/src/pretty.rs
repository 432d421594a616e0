//! Text rendering of boards and games
//!
//! The rules engine never calls into this module. It only reads cells, so any other renderer
//! can be built the same way on top of [`Board::get()`].

use crate::board::{Board, RawBoard};
use crate::game::Game;
use crate::types::{Cell, File, Rank, Side};

use std::fmt::{self, Display};

/// Style for [`RawBoard::pretty()`], [`Board::pretty()`] and [`Game::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`RawBoard::pretty()`] for more details.
pub struct Pretty<'a> {
    raw: &'a RawBoard,
    side: Option<Side>,
    style: PrettyStyle,
}

impl RawBoard {
    /// Wraps the board to allow pretty-printing with the given style `style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`. Rank 8 is printed first.
    ///
    /// # Example
    ///
    /// ```
    /// # use rookery::{RawBoard, pretty::PrettyStyle};
    /// #
    /// let r = RawBoard::initial();
    ///
    /// let res = r#"
    /// 8|rnbqkbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    ///  |abcdefgh
    /// "#;
    /// assert_eq!(r.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    ///
    /// let res = r#"
    /// 8│♜♞♝♛♚♝♞♜
    /// 7│♟♟♟♟♟♟♟♟
    /// 6│........
    /// 5│........
    /// 4│........
    /// 3│........
    /// 2│♙♙♙♙♙♙♙♙
    /// 1│♖♘♗♕♔♗♘♖
    /// ─┼────────
    ///  │abcdefgh
    /// "#;
    /// assert_eq!(r.pretty(PrettyStyle::Utf8).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty {
            raw: self,
            side: None,
            style,
        }
    }
}

impl Board {
    /// Wraps the board to allow pretty-printing with the given style `style`
    ///
    /// See docs for [`RawBoard::pretty()`] for more usage details.
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        self.r.pretty(style)
    }
}

impl Game {
    /// Wraps the game to allow pretty-printing with the given style `style`
    ///
    /// Same as [`Board::pretty()`], but the corner of the legend shows the side to move.
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty {
            raw: self.board().raw(),
            side: Some(self.side()),
            style,
        }
    }
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;
    const WHITE_INDICATOR: char;
    const BLACK_INDICATOR: char;

    fn cell(c: Cell) -> char;

    fn indicator(s: Option<Side>) -> char {
        match s {
            Some(Side::White) => Self::WHITE_INDICATOR,
            Some(Side::Black) => Self::BLACK_INDICATOR,
            None => ' ',
        }
    }

    fn fmt(p: &Pretty<'_>, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter().rev() {
            write!(f, "{}{}", rank, Self::VERT_FRAME)?;
            for file in File::iter() {
                write!(f, "{}", Self::cell(p.raw.get2(file, rank)))?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in File::iter() {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, "{}{}", Self::indicator(p.side), Self::VERT_FRAME)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';
    const WHITE_INDICATOR: char = 'W';
    const BLACK_INDICATOR: char = 'B';

    fn cell(c: Cell) -> char {
        c.as_char()
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';
    const WHITE_INDICATOR: char = '○';
    const BLACK_INDICATOR: char = '●';

    fn cell(c: Cell) -> char {
        c.as_utf8_char()
    }
}

impl Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coord;

    #[test]
    fn test_game() {
        let mut game = Game::new();
        game.play(Coord::new(1, 4), Coord::new(3, 4)).unwrap();
        let res = "\
8|rnbqkbnr
7|pppppppp
6|........
5|........
4|....P...
3|........
2|PPPP.PPP
1|RNBQKBNR
-+--------
B|abcdefgh
";
        assert_eq!(game.pretty(PrettyStyle::Ascii).to_string(), res);
        assert!(game
            .pretty(PrettyStyle::Utf8)
            .to_string()
            .ends_with("●│abcdefgh\n"));
    }

    #[test]
    fn test_board() {
        let b = Board::from_fen("4k3/8/8/8/8/8/8/R3K3").unwrap();
        let s = b.pretty(PrettyStyle::Ascii).to_string();
        assert!(s.starts_with("8|....k...\n"));
        assert!(s.contains("1|R...K...\n"));
    }
}
