//! [`Game`] contract implementation for 3x3 Tic-Tac-Toe

use crate::error::{Error, Result};
use crate::game::{Game, Utility};

use super::board::{BoardState, Move, Player, BOARD_SIDE};

/// The concrete 3x3 Tic-Tac-Toe game. Stateless: every position lives in the
/// [`BoardState`] values flowing through the contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe;

impl Game for TicTacToe {
    type State = BoardState;
    type Action = Move;
    type Player = Player;

    fn initial(&self) -> BoardState {
        BoardState::new()
    }

    fn player(&self, state: &BoardState) -> Player {
        state.to_move()
    }

    fn actions(&self, state: &BoardState) -> Vec<Move> {
        // Transparently empty on a full board; on a won-but-not-full board
        // this still lists the open cells, and callers never branch on
        // terminal states during search.
        state.empty_moves()
    }

    fn result(&self, state: &BoardState, action: &Move) -> Result<BoardState> {
        state.place(*action)
    }

    fn is_final(&self, state: &BoardState) -> bool {
        state.is_terminal()
    }

    fn utility(&self, state: &BoardState, player: Player) -> Result<Utility> {
        if !state.is_terminal() {
            return Err(Error::NotTerminal);
        }
        Ok(match state.winner() {
            Some(winner) if winner == player => Utility::Win,
            Some(_) => Utility::Loss,
            None => Utility::Draw,
        })
    }

    fn render(&self, state: &BoardState) -> String {
        let mut out = String::new();
        for row in 0..BOARD_SIDE {
            if row > 0 {
                out.push_str("---+---+---\n");
            }
            for col in 0..BOARD_SIDE {
                if col > 0 {
                    out.push('|');
                }
                out.push(' ');
                out.push(state.cells[row * BOARD_SIDE + col].to_char());
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}
