//! Knight move generation.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::PinMap;
use crate::moves::chess_move::Move;
use crate::moves::move_offsets::KNIGHT_OFFSETS;

pub fn generate_knight_moves(game_state: &GameState, from: Square, pins: &PinMap, out: &mut Vec<Move>) {
    // No knight offset lies on a pin line.
    if pins.is_pinned(from) {
        return;
    }

    let board = game_state.board();
    let knight = Piece::new(game_state.side_to_move(), PieceKind::Knight);

    for offset in KNIGHT_OFFSETS {
        let Some(to) = from.offset(offset, 1) else {
            continue;
        };
        match board.get(to) {
            Some(target) if target.color == knight.color => {}
            captured => out.push(Move::new(from, to, knight, captured)),
        }
    }
}
