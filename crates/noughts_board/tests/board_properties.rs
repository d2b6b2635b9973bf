//! Property tests for the board engine.

use noughts_board::{
    Board, CELLS, Cell, GameOutcome, Line, Mark, MoveError, Position, apply_move, classify,
    is_full, new_game,
};
use proptest::prelude::*;

fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Empty), Just(Cell::PlayerA), Just(Cell::PlayerB)]
}

fn arb_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::PlayerA), Just(Mark::PlayerB)]
}

/// Any of the 3^9 grids, legal or not.
fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(arb_cell(), CELLS).prop_map(|cells| {
        let mut rows = [[Cell::Empty; 3]; 3];
        for (i, cell) in cells.into_iter().enumerate() {
            rows[i / 3][i % 3] = cell;
        }
        Board::from_rows(rows)
    })
}

/// A board reached by alternating legal moves, stopping at the first
/// terminal outcome.
fn arb_played_board() -> impl Strategy<Value = Board> {
    (
        Just((0..CELLS).collect::<Vec<_>>()).prop_shuffle(),
        0..=CELLS,
        arb_mark(),
    )
        .prop_map(|(order, len, first)| {
            let mut board = new_game();
            let mut mark = first;
            for index in order.into_iter().take(len) {
                if classify(&board).is_terminal() {
                    break;
                }
                let pos = Position::from_index(index).unwrap();
                board = apply_move(&board, pos.row(), pos.col(), mark).unwrap();
                mark = mark.opponent();
            }
            board
        })
}

proptest! {
    #[test]
    fn classify_draw_only_when_full_without_line(board in arb_board()) {
        let outcome = classify(&board);
        let any_line = Line::ALL.iter().any(|line| line.is_won(&board));

        match outcome {
            GameOutcome::Draw => prop_assert!(is_full(&board) && !any_line),
            GameOutcome::InProgress => prop_assert!(!is_full(&board) && !any_line),
            _ => prop_assert!(any_line),
        }
    }

    #[test]
    fn classify_reports_first_line_in_precedence(board in arb_board()) {
        let first = Line::ALL.into_iter().find(|line| line.is_won(&board));
        prop_assert_eq!(classify(&board).line(), first);
    }

    #[test]
    fn classify_is_deterministic(board in arb_board()) {
        prop_assert_eq!(classify(&board), classify(&board));
    }

    #[test]
    fn played_boards_have_single_winner(board in arb_played_board()) {
        let outcome = classify(&board);
        if let Some(winner) = outcome.winner(&board) {
            let owner = |line: &Line| line.cells().and_then(|[first, ..]| board.get(first).mark());
            let loser_lines = Line::ALL
                .iter()
                .filter(|line| line.is_won(&board))
                .filter(|line| owner(*line) != Some(winner))
                .count();
            prop_assert_eq!(loser_lines, 0);
        }
    }

    #[test]
    fn apply_move_fills_exactly_the_target(
        board in arb_board(),
        row in 0usize..5,
        col in 0usize..5,
        mark in arb_mark(),
    ) {
        match apply_move(&board, row, col, mark) {
            Ok(after) => {
                let pos = Position::new(row, col).unwrap();
                prop_assert_eq!(board.get(pos), Cell::Empty);
                prop_assert_eq!(after.get(pos), Cell::from(mark));
                for other in Position::ALL.into_iter().filter(|p| *p != pos) {
                    prop_assert_eq!(after.get(other), board.get(other));
                }
            }
            Err(MoveError::OutOfRange { .. }) => prop_assert!(row >= 3 || col >= 3),
            Err(MoveError::CellOccupied(pos)) => {
                prop_assert_eq!((pos.row(), pos.col()), (row, col));
                prop_assert!(!board.is_empty(pos));
            }
        }
    }
}
