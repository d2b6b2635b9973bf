//! Full-board detection.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (no `Empty` cell left).
///
/// A full board with no winning line is a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|c| c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::winning_line;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && winning_line(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XXX XXX XXX".parse().unwrap();
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXX OOX OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
