//! Crate root module declarations for the ply_chess rules engine.
//!
//! This file exposes the board and game state model, move values, the legal
//! move generation pipeline with apply/undo and perft, and the text helpers
//! (algebraic squares, FEN setup) used by callers, tests and benches.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod castle_rights;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod move_offsets;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
}
