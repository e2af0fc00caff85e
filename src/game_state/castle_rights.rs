use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::{Color, Square};

/// The four castling permissions. Each flag only ever goes from `true` to
/// `false` during play; undo restores earlier values from the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::ALL
    }
}

impl CastleRights {
    pub const ALL: Self = Self {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: Self = Self {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    #[inline]
    pub fn kingside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    #[inline]
    pub fn queenside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    pub fn revoke_kingside(&mut self, color: Color) {
        match color {
            Color::White => self.white_kingside = false,
            Color::Black => self.black_kingside = false,
        }
    }

    pub fn revoke_queenside(&mut self, color: Color) {
        match color {
            Color::White => self.white_queenside = false,
            Color::Black => self.black_queenside = false,
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.revoke_kingside(color);
        self.revoke_queenside(color);
    }

    /// Revokes whichever right is tied to the rook home square `square`.
    /// Other squares leave the rights unchanged.
    pub fn revoke_for_rook_square(&mut self, square: Square) {
        for color in [Color::White, Color::Black] {
            if square.row() != color.home_row() {
                continue;
            }
            if square.col() == KINGSIDE_ROOK_COL {
                self.revoke_kingside(color);
            } else if square.col() == QUEENSIDE_ROOK_COL {
                self.revoke_queenside(color);
            }
        }
    }
}
