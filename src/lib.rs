//! Clock Studio - A terminal suite of time tools
//! 
//! This library provides a wall clock, a stopwatch, a countdown timer and a
//! two-player chess clock, driven by a single frame loop and rendered to a
//! line-oriented console.

pub mod clock;
pub mod config;
pub mod console;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use clock::{Side, TimeControl, TurnClock};
pub use config::Config;
pub use state::Studio;
pub use utils::signals::shutdown_signal;
