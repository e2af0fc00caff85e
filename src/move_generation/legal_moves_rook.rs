//! Legal rook move generation.
//!
//! Emits rook moves for a single rook of the side to move, including captures,
//! restricted to the pin line when the rook is pinned.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_sliding_moves, PinMap};
use crate::moves::chess_move::Move;
use crate::moves::move_offsets::ORTHOGONAL_DIRECTIONS;

pub fn generate_rook_moves(game_state: &GameState, from: Square, pins: &PinMap, out: &mut Vec<Move>) {
    let rook = Piece::new(game_state.side_to_move(), PieceKind::Rook);
    generate_sliding_moves(game_state.board(), from, rook, &ORTHOGONAL_DIRECTIONS, pins, out);
}
