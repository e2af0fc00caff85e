use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;

/// Leaf statistics of a perft walk. Every field except `nodes` counts leaf
/// moves with that property; `checks` and `checkmates` describe the
/// position the leaf move produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Counts move paths of length `depth`. Runs apply/undo on a private copy,
/// so `game_state` is left as it was.
pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut working = game_state.clone();
    let mut total = PerftCounts::default();
    perft_recurse(generator, &mut working, depth, &mut total)?;
    Ok(total)
}

/// Node count below each root move, in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<Vec<(Move, usize)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let mut working = game_state.clone();
    let root_moves = generator.generate_legal_moves(&working).moves;
    let mut divided = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        working.apply_move(mv)?;
        let below = perft(generator, &working, depth - 1)?;
        working.undo_move();
        divided.push((mv, below.nodes));
    }

    Ok(divided)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    let moves = generator.generate_legal_moves(game_state).moves;

    for mv in moves {
        game_state.apply_move(mv)?;
        if depth == 1 {
            counts.merge(leaf_counts(generator, game_state, &mv));
        } else {
            perft_recurse(generator, game_state, depth - 1, counts)?;
        }
        game_state.undo_move();
    }

    Ok(())
}

fn leaf_counts<G: MoveGenerator>(generator: &G, after: &GameState, mv: &Move) -> PerftCounts {
    let mut leaf = PerftCounts {
        nodes: 1,
        captures: mv.is_capture() as usize,
        en_passant: mv.is_en_passant as usize,
        castles: mv.is_castle as usize,
        promotions: mv.is_promotion as usize,
        ..PerftCounts::default()
    };

    if after.in_check() {
        leaf.checks = 1;
        if generator.generate_legal_moves(after).moves.is_empty() {
            leaf.checkmates = 1;
        }
    }
    leaf
}
