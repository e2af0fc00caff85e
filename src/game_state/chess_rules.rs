//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN and the fixed castling and promotion geometry.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Promotions always resolve to this piece.
pub const PROMOTION_PIECE: PieceKind = PieceKind::Queen;

/// Column of both kings before they move.
pub const KING_START_COL: u8 = 4;

/// Home column of the rook on the h-file side.
pub const KINGSIDE_ROOK_COL: u8 = 7;

/// Home column of the rook on the a-file side.
pub const QUEENSIDE_ROOK_COL: u8 = 0;
