//! Theme preference, the only persisted setting

use serde::{Deserialize, Serialize};

/// Dark or light appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemePreference {
    #[serde(rename = "theme:dark")]
    pub dark: bool,
}

impl ThemePreference {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    /// Flip between dark and light, returning the new preference
    pub fn toggle(&mut self) -> Self {
        self.dark = !self.dark;
        *self
    }

    pub fn label(&self) -> &'static str {
        if self.dark { "dark" } else { "light" }
    }
}
