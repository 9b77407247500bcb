//! Persistence services module
//! 
//! This module contains the load/save hooks for the theme preference, the
//! only setting that outlives a session.

pub mod theme_store;

// Re-export main types
pub use theme_store::{ThemeError, ThemeStore};
