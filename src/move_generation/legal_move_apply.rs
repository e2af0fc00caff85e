//! Move application and its exact inverse.
//!
//! `apply_move` validates the move against the current board before touching
//! anything, then mutates the board and derived state and pushes one
//! `UndoState`. `undo_move` pops that record and reverses every step.

use log::{debug, warn};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, KING_START_COL, PROMOTION_PIECE, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::KingSafety;
use crate::moves::chess_move::Move;

pub fn apply_move(game_state: &mut GameState, mv: Move) -> ChessResult<()> {
    if let Err(reason) = check_applicable(game_state, &mv) {
        warn!("rejected move {mv}: {reason}");
        return Err(ChessError::MoveNotApplicable {
            notation: mv.notation(),
            reason,
        });
    }

    let side = mv.piece_moved.color;
    game_state.history.push(UndoState {
        mv,
        prev_en_passant_target: game_state.en_passant_target,
        prev_castle_rights: game_state.castle_rights,
    });

    let board = &mut game_state.board;
    board.set(mv.from, None);
    board.put(mv.to, mv.piece_moved);

    if mv.is_promotion {
        board.put(mv.to, Piece::new(side, PROMOTION_PIECE));
    }
    if mv.is_en_passant {
        board.set(mv.en_passant_capture_square(), None);
    }
    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = board.take(rook_from);
        board.set(rook_to, rook);
    }

    if mv.piece_moved.kind == PieceKind::King {
        game_state.set_king_square(side, mv.to);
        game_state.castle_rights.revoke_all(side);
    }
    game_state.castle_rights.revoke_for_rook_square(mv.from);
    game_state.castle_rights.revoke_for_rook_square(mv.to);

    let row_distance = (mv.to.row() as i8 - mv.from.row() as i8).abs();
    game_state.en_passant_target = if mv.piece_moved.kind == PieceKind::Pawn && row_distance == 2 {
        Some(Square::at((mv.from.row() + mv.to.row()) / 2, mv.from.col()))
    } else {
        None
    };

    game_state.side_to_move = side.opposite();
    clear_query_state(game_state);

    debug!("{side:?} played {mv} (ply {})", game_state.history.len());
    Ok(())
}

/// Reverses the most recent move. An empty history is a no-op.
pub fn undo_move(game_state: &mut GameState) -> Option<Move> {
    let UndoState {
        mv,
        prev_en_passant_target,
        prev_castle_rights,
    } = game_state.history.pop()?;
    let side = mv.piece_moved.color;

    let board = &mut game_state.board;
    board.put(mv.from, mv.piece_moved);
    board.set(mv.to, mv.piece_captured);

    if mv.is_en_passant {
        board.set(mv.to, None);
        board.set(mv.en_passant_capture_square(), mv.piece_captured);
    }
    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = board.take(rook_to);
        board.set(rook_from, rook);
    }

    if mv.piece_moved.kind == PieceKind::King {
        game_state.set_king_square(side, mv.from);
    }
    game_state.en_passant_target = prev_en_passant_target;
    game_state.castle_rights = prev_castle_rights;
    game_state.side_to_move = side;
    clear_query_state(game_state);

    debug!("{side:?} took back {mv} (ply {})", game_state.history.len());
    Some(mv)
}

/// Rook origin and destination for a castle move.
fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.to.row();
    if mv.is_kingside_castle() {
        (Square::at(row, KINGSIDE_ROOK_COL), Square::at(row, mv.to.col() - 1))
    } else {
        (Square::at(row, QUEENSIDE_ROOK_COL), Square::at(row, mv.to.col() + 1))
    }
}

fn clear_query_state(game_state: &mut GameState) {
    game_state.safety = KingSafety::default();
    game_state.checkmate = false;
    game_state.stalemate = false;
}

/// Whether `mv` could have been generated from the current position.
fn check_applicable(game_state: &GameState, mv: &Move) -> Result<(), &'static str> {
    let board = &game_state.board;

    if mv.piece_moved.color != game_state.side_to_move {
        return Err("moved piece does not belong to the side to move");
    }
    if board.get(mv.from) != Some(mv.piece_moved) {
        return Err("origin square does not hold the moved piece");
    }
    if mv.from == mv.to {
        return Err("origin and destination coincide");
    }
    if let Some(captured) = mv.piece_captured {
        if captured.color == mv.piece_moved.color || captured.kind == PieceKind::King {
            return Err("captured piece cannot be taken");
        }
    }

    let is_pawn = mv.piece_moved.kind == PieceKind::Pawn;
    if mv.is_promotion != (is_pawn && mv.to.row() == mv.piece_moved.color.promotion_row()) {
        return Err("promotion flag does not match the destination");
    }

    if mv.is_en_passant {
        let row_step = mv.to.row() as i8 - mv.from.row() as i8;
        if !is_pawn || row_step != mv.piece_moved.color.pawn_step() || mv.to.col().abs_diff(mv.from.col()) != 1 {
            return Err("en-passant move is not a diagonal pawn step");
        }
        if game_state.en_passant_target != Some(mv.to) || !board.is_empty(mv.to) {
            return Err("destination is not the en-passant target");
        }
        if board.get(mv.en_passant_capture_square()) != mv.piece_captured {
            return Err("en-passant victim is missing");
        }
    } else if mv.is_castle {
        let side = mv.piece_moved.color;
        let king_start = Square::at(side.home_row(), KING_START_COL);
        if mv.piece_moved.kind != PieceKind::King
            || mv.from != king_start
            || mv.to.row() != king_start.row()
            || mv.to.col().abs_diff(KING_START_COL) != 2
        {
            return Err("castle geometry does not match the board");
        }
        let (rook_from, rook_to) = castle_rook_squares(mv);
        let rook = Some(Piece::new(side, PieceKind::Rook));
        if !board.is_empty(mv.to)
            || !board.is_empty(rook_to)
            || board.get(rook_from) != rook
        {
            return Err("castle geometry does not match the board");
        }
    } else if board.get(mv.to) != mv.piece_captured {
        return Err("destination does not hold the captured piece");
    }

    Ok(())
}
