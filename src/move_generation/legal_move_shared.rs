//! Helpers shared by the per-piece generators.

use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Read-only mapping from pinned square to the pin line's direction (king
/// outward). Built once per legal-move query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinMap {
    lines: [[Option<Direction>; 8]; 8],
}

impl PinMap {
    #[inline]
    pub fn insert(&mut self, square: Square, direction: Direction) {
        self.lines[square.row() as usize][square.col() as usize] = Some(direction);
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Direction> {
        self.lines[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_pinned(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    /// A piece on `square` may step along `direction` when it is unpinned or
    /// the step stays on its pin line.
    #[inline]
    pub fn allows(&self, square: Square, direction: Direction) -> bool {
        self.get(square)
            .map_or(true, |pin| pin.is_collinear_with(direction))
    }

    pub fn len(&self) -> usize {
        self.lines.iter().flatten().filter(|line| line.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, Direction)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|dir| (square, dir)))
    }
}

/// Walks each allowed direction from `from` until the board edge, an own
/// piece (excluded) or an enemy piece (included as a capture).
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[Direction],
    pins: &PinMap,
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        if !pins.allows(from, direction) {
            continue;
        }

        for distance in 1..8 {
            let Some(to) = from.offset(direction, distance) else {
                break;
            };
            match board.get(to) {
                None => out.push(Move::new(from, to, piece, None)),
                Some(target) if target.color != piece.color => {
                    out.push(Move::new(from, to, piece, Some(target)));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
