//! Queen move generation: rook and bishop rays together.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_sliding_moves, PinMap};
use crate::moves::chess_move::Move;
use crate::moves::move_offsets::ALL_DIRECTIONS;

pub fn generate_queen_moves(game_state: &GameState, from: Square, pins: &PinMap, out: &mut Vec<Move>) {
    let queen = Piece::new(game_state.side_to_move(), PieceKind::Queen);
    generate_sliding_moves(game_state.board(), from, queen, &ALL_DIRECTIONS, pins, out);
}
