//! FEN-to-GameState parser.
//!
//! Reads the placement, side-to-move, castling and en-passant fields. The
//! halfmove clock and fullmove number may be present but are not tracked.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| ChessError::fen("placement", "missing"))?;
    let side_part = parts.next().ok_or_else(|| ChessError::fen("side-to-move", "missing"))?;
    let castling_part = parts.next().ok_or_else(|| ChessError::fen("castling", "missing"))?;
    let en_passant_part = parts.next().ok_or_else(|| ChessError::fen("en-passant", "missing"))?;

    for (field, value) in ["halfmove clock", "fullmove number"].into_iter().zip(parts.by_ref()) {
        value
            .parse::<u16>()
            .map_err(|_| ChessError::fen(field, format!("not a number: {value}")))?;
    }
    if parts.next().is_some() {
        return Err(ChessError::fen("trailing", "FEN has extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castle_rights = parse_castle_rights(castling_part)?;
    let en_passant_target = parse_en_passant_target(en_passant_part, side_to_move)?;

    GameState::from_position(board, side_to_move, castle_rights, en_passant_target)
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::fen("placement", "board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::fen("placement", format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as u8;
                if col > 8 {
                    return Err(ChessError::fen("placement", "board rank has too many files"));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| ChessError::fen("placement", format!("invalid piece character '{ch}'")))?;
            let square = Square::new(row as u8, col)
                .ok_or_else(|| ChessError::fen("placement", "board rank has too many files"))?;
            board.put(square, piece);
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::fen("placement", "board rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::fen("side-to-move", format!("expected 'w' or 'b', got {side_part}"))),
    }
}

fn parse_castle_rights(castling_part: &str) -> ChessResult<CastleRights> {
    if castling_part == "-" {
        return Ok(CastleRights::NONE);
    }

    let mut rights = CastleRights::NONE;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return Err(ChessError::fen("castling", format!("invalid character '{ch}'"))),
        }
    }

    Ok(rights)
}

/// The target must sit on the rank a pawn of the side not to move has just
/// skipped over.
fn parse_en_passant_target(en_passant_part: &str, side_to_move: Color) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)?;
    let mover = side_to_move.opposite();
    let skipped_row = (mover.pawn_start_row() as i8 + mover.pawn_step()) as u8;
    if square.row() != skipped_row {
        return Err(ChessError::fen(
            "en-passant",
            format!("{en_passant_part} is not on the skipped rank"),
        ));
    }

    Ok(Some(square))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn starting_fen_matches_new_game() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let fresh = GameState::new();

        assert_eq!(parsed.board(), fresh.board());
        assert_eq!(parsed.side_to_move(), Color::White);
        assert_eq!(parsed.castle_rights(), CastleRights::ALL);
        assert_eq!(parsed.en_passant_target(), None);
        assert_eq!(parsed.king_square(Color::White), fresh.king_square(Color::White));
        assert_eq!(parsed.king_square(Color::Black), fresh.king_square(Color::Black));
    }

    #[test]
    fn clocks_are_optional() {
        let game = parse_fen("4k3/8/8/8/8/8/8/4K3 b - -").expect("four-field FEN should parse");
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn partial_rights_and_en_passant_target() {
        let game = parse_fen("4k3/8/8/3pP3/8/8/8/4K2R w Kq d6 0 3").expect("FEN should parse");
        let rights = game.castle_rights();
        assert!(rights.white_kingside && rights.black_queenside);
        assert!(!rights.white_queenside && !rights.black_kingside);
        assert_eq!(game.en_passant_target(), algebraic_to_square("d6").ok());
    }

    #[test]
    fn malformed_fields_are_reported() {
        let cases = [
            ("", "placement"),
            ("4k3/8/8/8/8/8/8/4K3", "side-to-move"),
            ("4k3/8/8/8/8/8/4K3 w - -", "placement"),
            ("4k3/8/8/8/8/8/8/4K4 w - -", "placement"),
            ("4k3/8/8/8/8/8/8/4X3 w - -", "placement"),
            ("4k3/8/8/8/8/8/8/4K3 x - -", "side-to-move"),
            ("4k3/8/8/8/8/8/8/4K3 w KX -", "castling"),
            ("4k3/8/8/8/8/8/8/4K3 w - e4", "en-passant"),
            ("4k3/8/8/8/8/8/8/4K3 w - - x 1", "halfmove clock"),
            ("4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra", "trailing"),
        ];

        for (fen, expected_field) in cases {
            match parse_fen(fen) {
                Err(ChessError::InvalidFen { field, .. }) => assert_eq!(field, expected_field, "{fen}"),
                other => panic!("{fen:?} should fail on {expected_field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn en_passant_target_needs_a_pawn_that_just_skipped_it() {
        let rejected = [
            // No black pawn on d5.
            "4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1",
            // d7 still occupied.
            "4k3/3p4/8/3pP3/8/8/8/4K3 w - d6 0 1",
            // Target square occupied.
            "4k3/8/3n4/3pP3/8/8/8/4K3 w - d6 0 1",
        ];
        for fen in rejected {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::IllegalPosition(_))),
                "{fen} should be rejected"
            );
        }

        let mut game = parse_fen("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1").expect("d2-d4 was just played");
        let capture = game
            .legal_moves()
            .into_iter()
            .find(|mv| mv.is_en_passant)
            .expect("en passant should be offered");
        game.apply_move(capture).expect("offered en passant should apply");
    }

    #[test]
    fn side_not_to_move_in_check_is_rejected() {
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4RK2 w - - 0 1"),
            Err(ChessError::IllegalPosition(_))
        ));
        assert!(parse_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").is_ok());
    }

    #[test]
    fn king_count_is_validated() {
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessError::KingCount { color: "black", found: 0 })
        ));
    }
}
