//! King steps and castling.
//!
//! King steps are validated here rather than by the check filter: each
//! destination is checked with the attack analyzer as if the king stood there.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, KING_START_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{analyze_king_safety, is_square_attacked};
use crate::moves::chess_move::Move;
use crate::moves::move_offsets::ALL_DIRECTIONS;

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let board = game_state.board();
    let side = game_state.side_to_move();
    let king = Piece::new(side, PieceKind::King);

    for direction in ALL_DIRECTIONS {
        let Some(to) = from.offset(direction, 1) else {
            continue;
        };
        let captured = board.get(to);
        if captured.is_some_and(|piece| piece.color == side) {
            continue;
        }
        if analyze_king_safety(board, side, to).in_check {
            continue;
        }
        out.push(Move::new(from, to, king, captured));
    }
}

/// Castling moves for the side to move. Callers only ask when the king is
/// not in check; the start square is re-tested here regardless.
pub fn generate_castle_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let board = game_state.board();
    let side = game_state.side_to_move();
    let enemy = side.opposite();
    let rights = game_state.castle_rights();
    let king = Piece::new(side, PieceKind::King);

    if from != Square::at(side.home_row(), KING_START_COL) || is_square_attacked(board, from, enemy) {
        return;
    }

    let row = side.home_row();
    let rook = Some(Piece::new(side, PieceKind::Rook));
    let square = |col: u8| Square::at(row, col);
    let empty = |cols: &[u8]| cols.iter().all(|&col| board.is_empty(square(col)));
    let safe = |cols: &[u8]| cols.iter().all(|&col| !is_square_attacked(board, square(col), enemy));

    if rights.kingside(side)
        && board.get(square(KINGSIDE_ROOK_COL)) == rook
        && empty(&[5, 6])
        && safe(&[5, 6])
    {
        out.push(Move::castle(from, square(6), king));
    }

    if rights.queenside(side)
        && board.get(square(QUEENSIDE_ROOK_COL)) == rook
        && empty(&[1, 2, 3])
        && safe(&[3, 2])
    {
        out.push(Move::castle(from, square(2), king));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sorted_notations(moves: &[Move]) -> Vec<String> {
        let mut names: Vec<String> = moves.iter().map(|mv| mv.notation()).collect();
        names.sort();
        names
    }

    fn castles(fen: &str) -> Vec<String> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let side = game.side_to_move();
        let mut out = Vec::new();
        generate_castle_moves(&game, game.king_square(side), &mut out);
        sorted_notations(&out)
    }

    #[test]
    fn king_cannot_step_along_checking_ray() {
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let e1 = algebraic_to_square("e1").expect("e1");
        let mut out = Vec::new();
        generate_king_moves(&game, e1, &mut out);
        assert_eq!(sorted_notations(&out), vec!["Kd1", "Kd2", "Kf1", "Kf2"]);
    }

    #[test]
    fn king_cannot_capture_protected_piece() {
        let game = GameState::from_fen("4k3/8/8/8/8/3b4/4q3/4K3 w - - 0 1").expect("FEN should parse");
        let e1 = algebraic_to_square("e1").expect("e1");
        let mut out = Vec::new();
        generate_king_moves(&game, e1, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn both_castles_available_when_clear() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"), vec!["0-0", "0-0-0"]);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"), vec!["0-0", "0-0-0"]);
    }

    #[test]
    fn castling_requires_rights() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1"), vec!["0-0-0"]);
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1").is_empty());
    }

    #[test]
    fn castling_blocked_by_occupied_square() {
        assert_eq!(castles("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1"), Vec::<String>::new());
        assert_eq!(castles("4k3/8/8/8/8/8/8/R3KN1R w KQ - 0 1"), vec!["0-0-0"]);
    }

    #[test]
    fn castling_refused_through_or_into_attack() {
        // f1 attacked by the rook on f8.
        assert_eq!(castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["0-0-0"]);
        // g1 attacked by the rook on g8.
        assert_eq!(castles("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["0-0-0"]);
        // b1 attacked does not stop the long castle.
        assert_eq!(castles("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["0-0", "0-0-0"]);
        // d1 attacked by the rook on d8.
        assert_eq!(castles("3rk3/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["0-0"]);
        // c1 attacked by the rook on c8.
        assert_eq!(castles("2r1k3/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["0-0"]);
        // c8 attacked by the bishop on f5 when Black castles long.
        assert_eq!(castles("r3k2r/8/8/5B2/8/8/8/4K3 b kq - 0 1"), vec!["0-0"]);
    }

    #[test]
    fn castling_refused_while_in_check() {
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
    }
}
