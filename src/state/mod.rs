//! State management module
//! 
//! This module contains the studio shell, the per-tab tool state and the
//! snapshots handed to the renderer.

pub mod panel;
pub mod snapshot;
pub mod studio;
pub mod theme;

// Re-export main types
pub use panel::{Panel, Tab};
pub use snapshot::{ChessView, PanelView, SideView, StudioSnapshot};
pub use studio::{Applied, Studio, StudioEvent};
pub use theme::ThemePreference;
