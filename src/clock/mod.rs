//! Time-keeping core
//!
//! Pure state machines for each tool. None of them read the system clock;
//! the frame driver passes deltas and instants in.

pub mod countdown;
pub mod format;
pub mod frame;
pub mod side;
pub mod stopwatch;
pub mod turn_clock;
pub mod wall_clock;

// Re-export main types
pub use countdown::{CountdownTimer, TimerPreset, TimerTick};
pub use frame::FrameClock;
pub use side::Side;
pub use stopwatch::{Lap, Stopwatch};
pub use turn_clock::{StartOutcome, SwitchOutcome, TickOutcome, TimeControl, TurnClock};
pub use wall_clock::{HandAngles, WallClock};
