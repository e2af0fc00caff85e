//! Core value types shared by the board, move generation and game state.
//!
//! Squares use `(row, col)` coordinates where row 0 is Black's back rank and
//! row 7 is White's. Columns run from the a-file (0) to the h-file (7).

pub use crate::game_state::board::Board;
pub use crate::game_state::castle_rights::CastleRights;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step of a forward pawn advance.
    #[inline]
    pub const fn pawn_step(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this color's pawns before they have moved.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Farthest row for this color's pawns; reaching it promotes.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Back rank holding the king and rooks in the initial position.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Uppercase letter used in move notation. Pawns have none.
    #[inline]
    pub const fn notation_letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }
}

/// A colored piece occupying a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Board coordinate. Construction through [`Square::new`] or
/// [`Square::offset`] keeps both fields inside `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Returns `None` when either coordinate is outside `0..=7`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Internal constructor for coordinates already known to be on the board.
    #[inline]
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Steps `distance` times along `direction`, or `None` past the board edge.
    #[inline]
    pub fn offset(self, direction: Direction, distance: i8) -> Option<Self> {
        let row = self.row as i8 + direction.d_row * distance;
        let col = self.col as i8 + direction.d_col * distance;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Iterates all 64 squares row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::at(row, col)))
    }
}

/// Unit step between squares: one of the eight ray directions, or a knight
/// offset when used for knight geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    #[inline]
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        Self {
            d_row: -self.d_row,
            d_col: -self.d_col,
        }
    }

    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        (self.d_row == 0) != (self.d_col == 0)
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.d_row != 0 && self.d_col != 0 && self.d_row.abs() == self.d_col.abs()
    }

    /// True when `other` runs along the same line, in either sense.
    #[inline]
    pub fn is_collinear_with(self, other: Direction) -> bool {
        self == other || self == other.opposite()
    }
}
