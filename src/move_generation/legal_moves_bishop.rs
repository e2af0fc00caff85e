//! Bishop move generation.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_sliding_moves, PinMap};
use crate::moves::chess_move::Move;
use crate::moves::move_offsets::DIAGONAL_DIRECTIONS;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, pins: &PinMap, out: &mut Vec<Move>) {
    let bishop = Piece::new(game_state.side_to_move(), PieceKind::Bishop);
    generate_sliding_moves(game_state.board(), from, bishop, &DIAGONAL_DIRECTIONS, pins, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn bishop_on_d4_of_empty_board_reaches_thirteen_squares() {
        let game = GameState::from_fen("4k3/8/8/8/3B4/8/8/K7 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        let d4 = algebraic_to_square("d4").expect("d4");
        generate_bishop_moves(&game, d4, &PinMap::default(), &mut out);
        // a1 holds the own king.
        assert_eq!(out.len(), 12);
    }

    #[test]
    fn orthogonally_pinned_bishop_cannot_move() {
        let game = GameState::from_fen("4r1k1/8/8/8/4B3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let e4 = algebraic_to_square("e4").expect("e4");
        let mut pins = PinMap::default();
        pins.insert(e4, Direction::new(-1, 0));
        let mut out = Vec::new();
        generate_bishop_moves(&game, e4, &pins, &mut out);
        assert!(out.is_empty());
    }
}
