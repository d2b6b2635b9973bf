//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the classifier and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Diagonal, Line, winning_line};
