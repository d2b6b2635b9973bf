//! Noughts - tic-tac-toe against a feed-forward move selector.
//!
//! # Architecture
//!
//! - **Board engine** ([`noughts_board`]): grid, move legality, outcomes
//! - **Decision engine** ([`noughts_decision`]): picks the automated move
//! - **Session**: sequences the two and tracks whose turn it is
//! - **Config**: play settings and model files
//!
//! # Example
//!
//! ```
//! use noughts::{MatchState, PlayConfig, Session};
//!
//! let engine = PlayConfig::default().load_engine()?;
//! let mut session = Session::new(engine);
//!
//! let turn = session.play_human(0, 0)?;
//! assert_eq!(turn.state, MatchState::InProgress);
//! session.play_automated()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod input;
mod session;

pub use config::{ConfigError, DEFAULT_MODEL, PlayConfig, default_model, load_model};
pub use input::{is_quit, parse_coords};
pub use session::{MatchState, Session, SessionError, Tally, Turn};
