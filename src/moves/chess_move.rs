//! Immutable single-ply move values.
//!
//! A `Move` records everything needed to apply and exactly undo one ply:
//! origin, destination, the piece moved, the piece captured, and the three
//! special-move flags. Equality deliberately ignores the piece fields so that
//! a move rebuilt from a `(from, to)` click pair matches the generated one.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_rules::PROMOTION_PIECE;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::{file_char, square_to_algebraic};

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_promotion: bool,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl Move {
    /// Ordinary move or capture. Promotion is inferred from the destination.
    pub fn new(from: Square, to: Square, piece_moved: Piece, piece_captured: Option<Piece>) -> Self {
        let is_promotion =
            piece_moved.kind == PieceKind::Pawn && to.row() == piece_moved.color.promotion_row();
        Self {
            from,
            to,
            piece_moved,
            piece_captured,
            is_promotion,
            is_en_passant: false,
            is_castle: false,
        }
    }

    /// En-passant capture; the captured pawn stands beside `from`, not on `to`.
    pub fn en_passant(from: Square, to: Square, pawn: Piece) -> Self {
        Self {
            from,
            to,
            piece_moved: pawn,
            piece_captured: Some(Piece::new(pawn.color.opposite(), PieceKind::Pawn)),
            is_promotion: false,
            is_en_passant: true,
            is_castle: false,
        }
    }

    /// King half of a castle; the rook is relocated when the move is applied.
    pub fn castle(from: Square, to: Square, king: Piece) -> Self {
        Self {
            from,
            to,
            piece_moved: king,
            piece_captured: None,
            is_promotion: false,
            is_en_passant: false,
            is_castle: true,
        }
    }

    /// Builds the move a `(from, to)` pair describes on `board`, inferring the
    /// en-passant and castle flags from the geometry. Returns `None` when
    /// `from` is empty. The result is not checked for legality.
    pub fn from_board(board: &Board, from: Square, to: Square) -> Option<Self> {
        let piece = board.get(from)?;
        let captured = board.get(to);
        let col_delta = (to.col() as i8 - from.col() as i8).abs();

        let mv = match piece.kind {
            PieceKind::Pawn if col_delta == 1 && captured.is_none() => {
                Move::en_passant(from, to, piece)
            }
            PieceKind::King if col_delta == 2 && from.row() == to.row() => {
                Move::castle(from, to, piece)
            }
            _ => Move::new(from, to, piece, captured),
        };
        Some(mv)
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn is_kingside_castle(&self) -> bool {
        self.is_castle && self.to.col() > self.from.col()
    }

    /// Square the en-passant victim occupies: origin row, destination column.
    #[inline]
    pub fn en_passant_capture_square(&self) -> Square {
        Square::at(self.from.row(), self.to.col())
    }

    /// Display notation: `e4`, `exd5`, `Nf3`, `Bxc6`, `0-0`, `0-0-0`,
    /// `exd6 e.p.`, `e8Q`, `dxe8Q`.
    pub fn notation(&self) -> String {
        if self.is_castle {
            return if self.is_kingside_castle() { "0-0" } else { "0-0-0" }.to_owned();
        }

        let mut out = String::new();
        match self.piece_moved.kind.notation_letter() {
            Some(letter) => out.push(letter),
            None if self.is_capture() => out.push(file_char(self.from)),
            None => {}
        }
        if self.is_capture() {
            out.push('x');
        }
        out.push_str(&square_to_algebraic(self.to));

        if self.is_en_passant {
            out.push_str(" e.p.");
        }
        if self.is_promotion {
            if let Some(letter) = PROMOTION_PIECE.notation_letter() {
                out.push(letter);
            }
        }
        out
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.is_en_passant == other.is_en_passant
            && self.is_castle == other.is_castle
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.is_en_passant.hash(state);
        self.is_castle.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
