//! Game state orchestration.
//!
//! `GameState` owns the board, the turn flag, both king squares, the current
//! en-passant target and castle rights, and a single undo history. Legal-move
//! queries run the generator pipeline and record the analyzer result and the
//! terminal flags; `apply_move` and `undo_move` are the only mutations.

use log::info;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks::{is_king_in_check, Check, KingSafety};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::legal_move_shared::PinMap;
use crate::move_generation::move_generator::{GeneratedMoves, MoveGenerator};
use crate::moves::chess_move::Move;
use crate::utils::fen_parser::parse_fen;

/// How a finished game ended, as classified by the last legal-move query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) white_king_square: Square,
    pub(crate) black_king_square: Square,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castle_rights: CastleRights,

    // One record per applied move, oldest first.
    pub(crate) history: Vec<UndoState>,

    // Results of the most recent legal-move query.
    pub(crate) safety: KingSafety,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard initial position with full castling rights.
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            side_to_move: Color::White,
            white_king_square: Square::at(7, 4),
            black_king_square: Square::at(0, 4),
            en_passant_target: None,
            castle_rights: CastleRights::ALL,
            history: Vec::new(),
            safety: KingSafety::default(),
            checkmate: false,
            stalemate: false,
        }
    }

    /// Arbitrary position. Each color must have exactly one king, the side
    /// not to move must not be in check, and an en-passant target must sit
    /// behind a pawn that could just have advanced two squares over it.
    pub fn from_position(
        board: Board,
        side_to_move: Color,
        castle_rights: CastleRights,
        en_passant_target: Option<Square>,
    ) -> ChessResult<Self> {
        let white_king_square = single_king(&board, Color::White)?;
        let black_king_square = single_king(&board, Color::Black)?;

        let waiting = side_to_move.opposite();
        let waiting_king = match waiting {
            Color::White => white_king_square,
            Color::Black => black_king_square,
        };
        if is_king_in_check(&board, waiting, waiting_king) {
            return Err(ChessError::IllegalPosition("side not to move is in check"));
        }
        if let Some(target) = en_passant_target {
            check_en_passant_target(&board, waiting, target)?;
        }

        Ok(Self {
            board,
            side_to_move,
            white_king_square,
            black_king_square,
            en_passant_target,
            castle_rights,
            history: Vec::new(),
            safety: KingSafety::default(),
            checkmate: false,
            stalemate: false,
        })
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    /// Legal moves for the side to move. Also refreshes the check, pin and
    /// checkmate/stalemate state reported by the accessors.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let GeneratedMoves { moves, safety } = LegalMoveGenerator.generate_legal_moves(self);

        self.checkmate = moves.is_empty() && safety.in_check;
        self.stalemate = moves.is_empty() && !safety.in_check;
        if self.checkmate {
            info!("{:?} is checkmated after {} plies", self.side_to_move, self.history.len());
        } else if self.stalemate {
            info!("{:?} is stalemated after {} plies", self.side_to_move, self.history.len());
        }

        self.safety = safety;
        moves
    }

    /// The legal move that takes the piece on `from` to `to`, if there is one.
    pub fn legal_move_between(&mut self, from: Square, to: Square) -> Option<Move> {
        let wanted = Move::from_board(&self.board, from, to)?;
        self.legal_moves().into_iter().find(|mv| *mv == wanted)
    }

    /// Plays `mv`, which must come from the current `legal_moves()`. A move
    /// that does not fit the board is rejected before anything changes.
    #[inline]
    pub fn apply_move(&mut self, mv: Move) -> ChessResult<()> {
        legal_move_apply::apply_move(self, mv)
    }

    /// Takes back the most recent move. Returns `None` when nothing was played.
    #[inline]
    pub fn undo_move(&mut self) -> Option<Move> {
        legal_move_apply::undo_move(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king_square,
            Color::Black => self.black_king_square,
        }
    }

    pub(crate) fn set_king_square(&mut self, color: Color, square: Square) {
        match color {
            Color::White => self.white_king_square = square,
            Color::Black => self.black_king_square = square,
        }
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    /// Whether the side to move is in check right now.
    pub fn in_check(&self) -> bool {
        let side = self.side_to_move;
        is_king_in_check(&self.board, side, self.king_square(side))
    }

    /// Pins found by the last legal-move query.
    #[inline]
    pub fn pins(&self) -> &PinMap {
        &self.safety.pins
    }

    /// Checks found by the last legal-move query.
    #[inline]
    pub fn checks(&self) -> &[Check] {
        &self.safety.checks
    }

    #[inline]
    pub fn checkmate(&self) -> bool {
        self.checkmate
    }

    #[inline]
    pub fn stalemate(&self) -> bool {
        self.stalemate
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.checkmate {
            Some(GameOutcome::Checkmate {
                winner: self.side_to_move.opposite(),
            })
        } else if self.stalemate {
            Some(GameOutcome::Stalemate)
        } else {
            None
        }
    }

    /// Applied moves, oldest first.
    pub fn move_log(&self) -> impl Iterator<Item = &Move> + '_ {
        self.history.iter().map(|record| &record.mv)
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|record| &record.mv)
    }

    #[inline]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }
}

/// `mover` is the side that would just have pushed a pawn two squares over
/// `target`: the pawn stands one step past it and both skipped squares are empty.
fn check_en_passant_target(board: &Board, mover: Color, target: Square) -> ChessResult<()> {
    let forward = Direction::new(mover.pawn_step(), 0);
    let skipped_row = (mover.pawn_start_row() as i8 + mover.pawn_step()) as u8;
    if target.row() != skipped_row {
        return Err(ChessError::IllegalPosition("en-passant target is not on the skipped rank"));
    }

    let pushed_pawn = target.offset(forward, 1).and_then(|square| board.get(square));
    if pushed_pawn != Some(Piece::new(mover, PieceKind::Pawn)) {
        return Err(ChessError::IllegalPosition("no pawn stands past the en-passant target"));
    }

    let start = target.offset(forward, -1);
    if !board.is_empty(target) || start.map_or(true, |square| !board.is_empty(square)) {
        return Err(ChessError::IllegalPosition("en-passant squares are occupied"));
    }
    Ok(())
}

fn single_king(board: &Board, color: Color) -> ChessResult<Square> {
    let found = board.count(Piece::new(color, PieceKind::King));
    let color_name = match color {
        Color::White => "white",
        Color::Black => "black",
    };
    match board.find_king(color) {
        Some(square) if found == 1 => Ok(square),
        _ => Err(ChessError::KingCount {
            color: color_name,
            found,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;
    use rand::prelude::IndexedRandom;
    use rand::{rngs::StdRng, SeedableRng};

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    fn play(game: &mut GameState, from: &str, to: &str) {
        let mv = game
            .legal_move_between(sq(from), sq(to))
            .unwrap_or_else(|| panic!("{from}{to} should be legal"));
        game.apply_move(mv).expect("legal move should apply");
    }

    type Snapshot = (Board, Color, Square, Square, CastleRights, Option<Square>, usize);

    fn snapshot(game: &GameState) -> Snapshot {
        (
            game.board,
            game.side_to_move,
            game.white_king_square,
            game.black_king_square,
            game.castle_rights,
            game.en_passant_target,
            game.history.len(),
        )
    }

    #[test]
    fn initial_position_has_twenty_moves_and_no_outcome() {
        let mut game = GameState::new();
        assert_eq!(game.legal_moves().len(), 20);
        assert_eq!(game.outcome(), None);
        assert!(!game.in_check());
        assert_eq!(game.king_square(Color::White), sq("e1"));
        assert_eq!(game.king_square(Color::Black), sq("e8"));
    }

    #[test]
    fn fools_mate_is_checkmate_for_black() {
        let mut game = GameState::new();
        play(&mut game, "f2", "f3");
        play(&mut game, "e7", "e5");
        play(&mut game, "g2", "g4");
        play(&mut game, "d8", "h4");

        assert!(game.legal_moves().is_empty());
        assert!(game.checkmate());
        assert!(!game.stalemate());
        assert!(game.in_check());
        assert_eq!(game.checks().len(), 1);
        assert_eq!(game.outcome(), Some(GameOutcome::Checkmate { winner: Color::Black }));
        assert_eq!(game.last_move().map(|mv| mv.notation()), Some("Qh4".to_owned()));
    }

    #[test]
    fn back_rank_mate_and_stalemate_are_exclusive() {
        let mut mate = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN");
        assert!(mate.legal_moves().is_empty());
        assert!(mate.checkmate() && !mate.stalemate());

        let mut stale = GameState::from_fen("k7/8/1Q6/8/8/8/8/7K b - - 0 1").expect("FEN");
        assert!(stale.legal_moves().is_empty());
        assert!(stale.stalemate() && !stale.checkmate());
        assert_eq!(stale.outcome(), Some(GameOutcome::Stalemate));
    }

    #[test]
    fn pins_of_the_last_query_can_be_listed() {
        let mut game = GameState::from_fen("4r1k1/8/8/b7/8/8/3PN3/4K3 w - - 0 1").expect("FEN");
        assert!(game.pins().is_empty());

        let moves = game.legal_moves();
        let pins: Vec<(Square, Direction)> = game.pins().iter().collect();
        assert_eq!(
            pins,
            vec![(sq("d2"), Direction::new(-1, -1)), (sq("e2"), Direction::new(-1, 0))]
        );
        assert!(moves.iter().all(|mv| mv.from != sq("d2") && mv.from != sq("e2")));
    }

    #[test]
    fn terminal_flags_clear_after_undo() {
        let mut game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN");
        play(&mut game, "a1", "a8");
        game.legal_moves();
        assert!(game.checkmate());
        game.undo_move();
        assert!(!game.checkmate() && !game.stalemate());
        assert!(game.pins().is_empty() && game.checks().is_empty());
    }

    #[test]
    fn en_passant_is_available_for_exactly_one_ply() {
        let mut game = GameState::new();
        play(&mut game, "e2", "e4");
        play(&mut game, "a7", "a6");
        play(&mut game, "e4", "e5");
        play(&mut game, "d7", "d5");

        let mut later = game.clone();
        let capture = game.legal_move_between(sq("e5"), sq("d6")).expect("en passant now");
        assert!(capture.is_en_passant);

        play(&mut later, "h2", "h3");
        play(&mut later, "h7", "h6");
        assert!(later.legal_move_between(sq("e5"), sq("d6")).is_none());

        game.apply_move(capture).expect("en passant applies");
        assert_eq!(game.piece_at(sq("d5")), None);
        assert_eq!(game.piece_at(sq("d6")), Some(Piece::new(Color::White, PieceKind::Pawn)));
    }

    #[test]
    fn kingside_castle_is_lost_once_king_or_rook_moves() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

        let mut king_moved = GameState::from_fen(fen).expect("FEN");
        play(&mut king_moved, "e1", "f1");
        play(&mut king_moved, "a8", "b8");
        play(&mut king_moved, "f1", "e1");
        play(&mut king_moved, "b8", "a8");
        assert!(king_moved.legal_move_between(sq("e1"), sq("g1")).is_none());

        let mut rook_moved = GameState::from_fen(fen).expect("FEN");
        play(&mut rook_moved, "h1", "h2");
        play(&mut rook_moved, "a8", "b8");
        play(&mut rook_moved, "h2", "h1");
        play(&mut rook_moved, "b8", "a8");
        assert!(rook_moved.legal_move_between(sq("e1"), sq("g1")).is_none());
        assert!(rook_moved.legal_move_between(sq("e1"), sq("c1")).is_some());
    }

    #[test]
    fn castle_applies_atomically_and_undoes() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN");
        let before = snapshot(&game);
        play(&mut game, "e1", "g1");
        assert_eq!(game.piece_at(sq("g1")), Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(game.piece_at(sq("f1")), Some(Piece::new(Color::White, PieceKind::Rook)));
        assert!(game.undo_move().is_some_and(|mv| mv.is_castle));
        assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn undo_on_fresh_game_changes_nothing() {
        let mut game = GameState::new();
        let before = snapshot(&game);
        assert_eq!(game.undo_move(), None);
        assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn positions_without_exactly_one_king_are_rejected() {
        let mut board = Board::starting_position();
        board.set(sq("e8"), None);
        let err = GameState::from_position(board, Color::White, CastleRights::NONE, None)
            .expect_err("missing black king");
        assert_eq!(err, ChessError::KingCount { color: "black", found: 0 });

        board.put(sq("e8"), Piece::new(Color::Black, PieceKind::King));
        board.put(sq("d4"), Piece::new(Color::White, PieceKind::King));
        assert!(matches!(
            GameState::from_position(board, Color::White, CastleRights::NONE, None),
            Err(ChessError::KingCount { color: "white", found: 2 })
        ));
    }

    #[test]
    fn clones_are_independent() {
        let mut game = GameState::new();
        let copy = game.clone();
        play(&mut game, "e2", "e4");
        assert_eq!(copy.piece_at(sq("e2")), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert_eq!(copy.ply_count(), 0);
        assert_eq!(game.ply_count(), 1);
    }

    #[test]
    fn random_playouts_keep_round_trip_and_king_safety_laws() {
        let starts = [
            crate::game_state::chess_rules::STARTING_POSITION_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ];

        for (seed, fen) in starts.iter().enumerate() {
            let mut rng = StdRng::seed_from_u64(seed as u64 + 7);
            let mut game = GameState::from_fen(fen).expect("FEN");

            for _ in 0..60 {
                let moves = game.legal_moves();
                if moves.is_empty() {
                    break;
                }

                for &mv in &moves {
                    let before = snapshot(&game);
                    let mover = game.side_to_move();
                    game.apply_move(mv).expect("generated move should apply");

                    assert_eq!(game.board().find_king(Color::White), Some(game.king_square(Color::White)));
                    assert_eq!(game.board().find_king(Color::Black), Some(game.king_square(Color::Black)));
                    assert!(
                        !is_king_in_check(game.board(), mover, game.king_square(mover)),
                        "{mv} leaves the {mover:?} king in check"
                    );

                    assert_eq!(game.undo_move(), Some(mv));
                    assert_eq!(snapshot(&game), before, "undo of {mv} did not restore the position");
                }

                let &chosen = moves.choose(&mut rng).expect("moves is non-empty");
                game.apply_move(chosen).expect("generated move should apply");
            }
        }
    }
}
