use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::KingSafety;
use crate::moves::chess_move::Move;

/// Result of one legal-move query: the moves plus the king-safety analysis
/// they were filtered against.
#[derive(Debug, Clone, Default)]
pub struct GeneratedMoves {
    pub moves: Vec<Move>,
    pub safety: KingSafety,
}

pub trait MoveGenerator {
    /// Legal moves for the side to move. Must not change `game_state`.
    fn generate_legal_moves(&self, game_state: &GameState) -> GeneratedMoves;
}
