//! Attack analysis: checks, absolute pins and square attacks.
//!
//! `analyze_king_safety` casts the eight queen rays and the knight offsets out
//! from a king square. `is_square_attacked` answers the same question for an
//! arbitrary square and an explicit attacking color, so callers never need to
//! flip the side to move.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::PinMap;
use crate::moves::move_offsets::{pawn_capture_directions, ALL_DIRECTIONS, KNIGHT_OFFSETS};

/// An enemy piece attacking the king. `direction` points from the king
/// toward the attacker (a knight offset for knight checks).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub attacker: Square,
    pub direction: Direction,
}

impl Check {
    /// True when the check comes along a ray, so it can be blocked.
    #[inline]
    pub fn is_ray(&self) -> bool {
        self.direction.is_orthogonal() || self.direction.is_diagonal()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KingSafety {
    pub in_check: bool,
    pub pins: PinMap,
    pub checks: Vec<Check>,
}

impl KingSafety {
    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checks.len() >= 2
    }
}

/// Checks and pins against the `color` king standing on `king_square`.
///
/// The board's own king is treated as transparent, so probing a square the
/// king would step to accounts for rays it currently blocks itself.
pub fn analyze_king_safety(board: &Board, color: Color, king_square: Square) -> KingSafety {
    let mut safety = KingSafety::default();

    for direction in ALL_DIRECTIONS {
        let mut candidate_pin: Option<Square> = None;

        for distance in 1..8 {
            let Some(square) = king_square.offset(direction, distance) else {
                break;
            };
            let Some(piece) = board.get(square) else {
                continue;
            };

            if piece.color == color {
                if piece.kind == PieceKind::King {
                    continue;
                }
                if candidate_pin.is_some() {
                    break;
                }
                candidate_pin = Some(square);
                continue;
            }

            if attacks_along_ray(piece, direction, distance) {
                match candidate_pin {
                    None => safety.checks.push(Check {
                        attacker: square,
                        direction,
                    }),
                    Some(pinned) => safety.pins.insert(pinned, direction),
                }
            }
            break;
        }
    }

    let enemy_knight = Piece::new(color.opposite(), PieceKind::Knight);
    for offset in KNIGHT_OFFSETS {
        if let Some(square) = king_square.offset(offset, 1) {
            if board.get(square) == Some(enemy_knight) {
                safety.checks.push(Check {
                    attacker: square,
                    direction: offset,
                });
            }
        }
    }

    safety.in_check = !safety.checks.is_empty();
    safety
}

/// Whether any `attacker_color` piece attacks `square` on `board`.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    for direction in ALL_DIRECTIONS {
        for distance in 1..8 {
            let Some(target) = square.offset(direction, distance) else {
                break;
            };
            let Some(piece) = board.get(target) else {
                continue;
            };
            if piece.color == attacker_color && attacks_along_ray(piece, direction, distance) {
                return true;
            }
            break;
        }
    }

    let knight = Piece::new(attacker_color, PieceKind::Knight);
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&offset| square.offset(offset, 1))
        .any(|target| board.get(target) == Some(knight))
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color, king_square: Square) -> bool {
    is_square_attacked(board, king_square, color.opposite())
}

/// Whether `piece`, found `distance` steps along `ray` from a target square,
/// attacks that target. `ray` points from the target toward the piece.
fn attacks_along_ray(piece: Piece, ray: Direction, distance: i8) -> bool {
    match piece.kind {
        PieceKind::Rook => ray.is_orthogonal(),
        PieceKind::Bishop => ray.is_diagonal(),
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        PieceKind::Pawn => {
            distance == 1 && pawn_capture_directions(piece.color).contains(&ray.opposite())
        }
        PieceKind::Knight => false,
    }
}
