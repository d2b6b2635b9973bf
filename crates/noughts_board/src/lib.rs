//! Board engine for tic-tac-toe.
//!
//! Owns the 3x3 grid and every rule about it: move legality, win and draw
//! detection, and outcome classification. Everything here is a pure value or
//! a pure function; there is no I/O and no hidden state, so boards can be
//! shared freely between threads.
//!
//! # Example
//!
//! ```
//! use noughts_board::{GameOutcome, Mark, apply_move, classify, new_game};
//!
//! let board = new_game();
//! let board = apply_move(&board, 1, 1, Mark::PlayerA)?;
//! assert_eq!(classify(&board), GameOutcome::InProgress);
//! # Ok::<(), noughts_board::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;
mod verification;

pub use action::{Move, MoveError};
pub use engine::{apply_move, classify, is_full, new_game};
pub use invariants::{BalancedMarks, Invariant, InvariantViolation, MonotonicTransition};
pub use outcome::GameOutcome;
pub use position::Position;
pub use rules::{Diagonal, Line};
pub use types::{Board, CELLS, Cell, Mark, ParseBoardError, SIDE};
