//! Decision engine for the automated tic-tac-toe player.
//!
//! A board is encoded as nine numbers, pushed through one or more dense
//! layers with logistic activation, and the empty cell with the highest
//! output wins. Weights are supplied by the caller as a [`ModelConfig`];
//! the engine performs inference only and never learns.
//!
//! # Example
//!
//! ```
//! use noughts_board::new_game;
//! use noughts_decision::{CellCodes, DecisionEngine, DenseLayer, ModelConfig};
//!
//! // Bias-only layer preferring the centre.
//! let rows = (0..9)
//!     .map(|cell| {
//!         let mut row = vec![0.0; 10];
//!         row[0] = if cell == 4 { 1.0 } else { 0.0 };
//!         row
//!     })
//!     .collect();
//! let config = ModelConfig::new(CellCodes::default(), vec![DenseLayer::new(rows, true)?]);
//! let engine = DecisionEngine::from_config(config)?;
//!
//! let pos = engine.select_move(&new_game())?;
//! assert_eq!((pos.row(), pos.col()), (1, 1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod encoding;
mod engine;
mod error;
mod layer;
mod model;
mod network;

pub use encoding::{CellCodes, encode};
pub use engine::{DecisionEngine, select_move};
pub use error::{ConfigurationError, DecisionError};
pub use layer::{DenseLayer, sigmoid};
pub use model::ModelConfig;
pub use network::Network;
