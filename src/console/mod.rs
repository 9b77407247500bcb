//! Console module
//!
//! This module contains command parsing and the text/JSON renderings
//! printed for the user.

pub mod commands;
pub mod responses;

pub use commands::{Command, CommandError, HELP};
pub use responses::OutputFormat;
