use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Single history record for `apply_move` / `undo_move`: the move and the
/// derived state it overwrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub prev_en_passant_target: Option<Square>,
    pub prev_castle_rights: CastleRights,
}
