//! Tic-Tac-Toe instance of the game contract

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BoardState, Cell, Move, Player};
pub use game::TicTacToe;
pub use lines::{LineAnalyzer, WINNING_LINES};
