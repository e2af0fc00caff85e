//! Direction and offset tables shared by the attack analyzer and generators.

use crate::game_state::chess_types::{Color, Direction};

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [
    Direction::new(-1, 0),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(0, 1),
];

pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [
    Direction::new(-1, -1),
    Direction::new(-1, 1),
    Direction::new(1, -1),
    Direction::new(1, 1),
];

/// Orthogonals first, then diagonals.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    ORTHOGONAL_DIRECTIONS[0],
    ORTHOGONAL_DIRECTIONS[1],
    ORTHOGONAL_DIRECTIONS[2],
    ORTHOGONAL_DIRECTIONS[3],
    DIAGONAL_DIRECTIONS[0],
    DIAGONAL_DIRECTIONS[1],
    DIAGONAL_DIRECTIONS[2],
    DIAGONAL_DIRECTIONS[3],
];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    Direction::new(-2, -1),
    Direction::new(-2, 1),
    Direction::new(-1, 2),
    Direction::new(1, 2),
    Direction::new(2, -1),
    Direction::new(2, 1),
    Direction::new(-1, -2),
    Direction::new(1, -2),
];

/// Diagonal steps a pawn of `color` captures along.
#[inline]
pub const fn pawn_capture_directions(color: Color) -> [Direction; 2] {
    let step = color.pawn_step();
    [Direction::new(step, -1), Direction::new(step, 1)]
}
