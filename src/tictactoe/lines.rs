//! Winning line analysis for the 3x3 board

use super::board::{Cell, Player};

/// Winning line indices on the 3x3 board, in the order they are checked:
/// rows, then columns, then diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing completed lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row anywhere on the board
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Get the winner, if either player has a completed line
    pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
        if Self::has_won(cells, Player::X) {
            Some(Player::X)
        } else if Self::has_won(cells, Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[3] = Cell::X;
        cells[4] = Cell::X;
        cells[5] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[1] = Cell::O;
        cells[4] = Cell::O;
        cells[7] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_has_won_diagonals() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[4] = Cell::X;
        cells[8] = Cell::X;
        assert!(LineAnalyzer::has_won(&cells, Player::X));

        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::O;
        cells[4] = Cell::O;
        cells[6] = Cell::O;
        assert!(LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_winner_none_on_empty_board() {
        let cells = [Cell::Empty; 9];
        assert_eq!(LineAnalyzer::winner(&cells), None);
    }

    #[test]
    fn test_winner_finds_the_lined_player() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[1] = Cell::O;
        cells[2] = Cell::O;
        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::O));
    }
}
