//! Pawn move generation: advances, captures, en passant and promotion.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::PinMap;
use crate::moves::chess_move::Move;
use crate::moves::move_offsets::pawn_capture_directions;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, pins: &PinMap, out: &mut Vec<Move>) {
    let board = game_state.board();
    let side = game_state.side_to_move();
    let pawn = Piece::new(side, PieceKind::Pawn);
    let forward = Direction::new(side.pawn_step(), 0);

    if pins.allows(from, forward) {
        if let Some(one_step) = from.offset(forward, 1).filter(|&to| board.is_empty(to)) {
            out.push(Move::new(from, one_step, pawn, None));

            if from.row() == side.pawn_start_row() {
                if let Some(two_step) = from.offset(forward, 2).filter(|&to| board.is_empty(to)) {
                    out.push(Move::new(from, two_step, pawn, None));
                }
            }
        }
    }

    for direction in pawn_capture_directions(side) {
        if !pins.allows(from, direction) {
            continue;
        }
        let Some(to) = from.offset(direction, 1) else {
            continue;
        };

        match board.get(to) {
            Some(target) if target.color != side => {
                out.push(Move::new(from, to, pawn, Some(target)));
            }
            None if game_state.en_passant_target() == Some(to) => {
                let victim = Square::at(from.row(), to.col());
                if !en_passant_exposes_king(board, side, game_state.king_square(side), from, victim) {
                    out.push(Move::en_passant(from, to, pawn));
                }
            }
            _ => {}
        }
    }
}

/// An en-passant capture empties two squares of the same rank at once. When
/// the king shares that rank, no pin covers the case, so scan the rank: inward
/// from the king past both pawns, then outward for a rook or queen.
pub fn en_passant_exposes_king(
    board: &Board,
    side: Color,
    king_square: Square,
    capturer: Square,
    victim: Square,
) -> bool {
    if king_square.row() != capturer.row() {
        return false;
    }

    let step = if capturer.col() > king_square.col() { 1 } else { -1 };
    let along_rank = Direction::new(0, step);

    for distance in 1..8 {
        let Some(square) = king_square.offset(along_rank, distance) else {
            return false;
        };
        if square == capturer || square == victim {
            continue;
        }
        if let Some(piece) = board.get(square) {
            return piece.color != side
                && matches!(piece.kind, PieceKind::Rook | PieceKind::Queen);
        }
    }
    false
}
