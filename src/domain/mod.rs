pub mod bitboard;
pub mod board;
pub mod game;
pub mod models;
pub mod rules;
pub mod square;
