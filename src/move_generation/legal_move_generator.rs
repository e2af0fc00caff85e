//! Full legal move generation pipeline.
//!
//! Runs the attack analyzer once, dispatches pin-constrained pseudo-legal
//! generation per piece, then restricts the result by check state:
//! no check adds castling, a single check keeps only king moves and moves
//! that capture or block the checker, a double check keeps king moves only.

use log::trace;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{analyze_king_safety, Check};
use crate::move_generation::legal_move_shared::PinMap;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castle_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{GeneratedMoves, MoveGenerator};
use crate::moves::chess_move::Move;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> GeneratedMoves {
        let side = game_state.side_to_move();
        let king_square = game_state.king_square(side);
        let safety = analyze_king_safety(game_state.board(), side, king_square);

        trace!(
            "{side:?} to move: {} check(s), {} pin(s)",
            safety.checks.len(),
            safety.pins.len()
        );

        let mut moves = Vec::with_capacity(64);
        match safety.checks.as_slice() {
            [] => {
                generate_pseudo_legal_moves(game_state, &safety.pins, &mut moves);
                generate_castle_moves(game_state, king_square, &mut moves);
            }
            [check] => {
                generate_pseudo_legal_moves(game_state, &safety.pins, &mut moves);
                let resolving = resolving_squares(king_square, check);
                moves.retain(|mv| {
                    mv.piece_moved.kind == PieceKind::King
                        || resolving.contains(&mv.to)
                        || (mv.is_en_passant && mv.en_passant_capture_square() == check.attacker)
                });
            }
            _ => generate_king_moves(game_state, king_square, &mut moves),
        }

        GeneratedMoves { moves, safety }
    }
}

/// Pseudo-legal moves for every piece of the side to move, honoring pins.
/// King steps are already fully validated.
pub fn generate_pseudo_legal_moves(game_state: &GameState, pins: &PinMap, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    for (square, piece) in game_state.board().pieces_of(side) {
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, square, pins, out),
            PieceKind::Knight => generate_knight_moves(game_state, square, pins, out),
            PieceKind::Bishop => generate_bishop_moves(game_state, square, pins, out),
            PieceKind::Rook => generate_rook_moves(game_state, square, pins, out),
            PieceKind::Queen => generate_queen_moves(game_state, square, pins, out),
            PieceKind::King => generate_king_moves(game_state, square, out),
        }
    }
}

/// Destinations that end a single check: the checker's square, plus the
/// squares strictly between it and the king when the check runs along a ray.
fn resolving_squares(king_square: Square, check: &Check) -> Vec<Square> {
    if !check.is_ray() {
        return vec![check.attacker];
    }

    let mut squares = Vec::with_capacity(7);
    for distance in 1..8 {
        let Some(square) = king_square.offset(check.direction, distance) else {
            break;
        };
        squares.push(square);
        if square == check.attacker {
            break;
        }
    }
    squares
}
