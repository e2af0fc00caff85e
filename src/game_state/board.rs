//! 8×8 mailbox board.

use std::ops::Index;

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Square contents indexed as `[row][col]`. `None` is an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().copied().enumerate() {
            let col = col as u8;
            board.put(Square::at(0, col), Piece::new(Color::Black, kind));
            board.put(Square::at(1, col), Piece::new(Color::Black, PieceKind::Pawn));
            board.put(Square::at(6, col), Piece::new(Color::White, PieceKind::Pawn));
            board.put(Square::at(7, col), Piece::new(Color::White, kind));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn put(&mut self, square: Square, piece: Piece) {
        self.set(square, Some(piece));
    }

    /// Empties `square`, returning whatever stood there.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// All pieces of `color` with their squares, row by row.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.get(square) {
            Some(piece) if piece.color == color => Some((square, piece)),
            _ => None,
        })
    }

    pub fn count(&self, piece: Piece) -> usize {
        Square::all()
            .filter(|&square| self.get(square) == Some(piece))
            .count()
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&square| self.get(square) == Some(Piece::new(color, PieceKind::King)))
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, square: Square) -> &Self::Output {
        &self.squares[square.row() as usize][square.col() as usize]
    }
}
