//! Kani harnesses for the board engine.
//!
//! These proofs check the classifier and move application over every
//! possible 3x3 board, not only boards reachable by legal play.

#[cfg(kani)]
impl kani::Arbitrary for crate::Mark {
    fn any() -> Self {
        if kani::any() {
            crate::Mark::PlayerA
        } else {
            crate::Mark::PlayerB
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for crate::Cell {
    fn any() -> Self {
        let code: u8 = kani::any();
        kani::assume(code < 3);
        match code {
            0 => crate::Cell::Empty,
            1 => crate::Cell::PlayerA,
            _ => crate::Cell::PlayerB,
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for crate::Board {
    fn any() -> Self {
        let rows: [[crate::Cell; 3]; 3] = kani::any();
        crate::Board::from_rows(rows)
    }
}

#[cfg(kani)]
mod proofs {
    use crate::{Board, Cell, GameOutcome, Line, Mark, apply_move, classify, is_full};

    /// Draw is reported only for full boards, InProgress only for non-full ones.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_classify_draw_requires_full() {
        let board: Board = kani::any();
        match classify(&board) {
            GameOutcome::Draw => assert!(is_full(&board)),
            GameOutcome::InProgress => assert!(!is_full(&board)),
            _ => {}
        }
    }

    /// The reported line is the first complete one in precedence order.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_classify_follows_line_precedence() {
        let board: Board = kani::any();
        let first = Line::ALL.into_iter().find(|line| line.is_won(&board));
        assert_eq!(classify(&board).line(), first);
    }

    /// A successful move changes exactly the requested cell.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_apply_move_never_overwrites() {
        let board: Board = kani::any();
        let row: usize = kani::any();
        let col: usize = kani::any();
        let mark: Mark = kani::any();

        match apply_move(&board, row, col, mark) {
            Ok(after) => {
                assert!(row < 3 && col < 3);
                assert_eq!(board.rows()[row][col], Cell::Empty);
                assert_eq!(after.rows()[row][col], Cell::from(mark));
                assert_eq!(after.count(Cell::Empty) + 1, board.count(Cell::Empty));
            }
            Err(_) => assert!(row >= 3 || col >= 3 || board.rows()[row][col] != Cell::Empty),
        }
    }
}
