//! Theme preference file

use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::state::ThemePreference;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write theme file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("theme file {path} is not valid: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },

    #[error("failed to encode theme: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Explicit load/save hooks for the persisted theme flag
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved preference; `None` when nothing has been saved yet
    pub async fn load(&self) -> Result<Option<ThemePreference>, ThemeError> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No theme file at {}", self.path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(ThemeError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| ThemeError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    /// Load the saved preference, falling back to `default` on any problem
    pub async fn load_or(&self, default: ThemePreference) -> ThemePreference {
        match self.load().await {
            Ok(Some(theme)) => {
                info!("Loaded {} theme from {}", theme.label(), self.path.display());
                theme
            }
            Ok(None) => default,
            Err(e) => {
                warn!("{}; using {} theme", e, default.label());
                default
            }
        }
    }

    pub async fn save(&self, theme: ThemePreference) -> Result<(), ThemeError> {
        let contents = serde_json::to_string_pretty(&theme)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|source| ThemeError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        fs::write(&self.path, contents)
            .await
            .map_err(|source| ThemeError::Write {
                path: self.path.clone(),
                source,
            })?;

        debug!("Saved {} theme to {}", theme.label(), self.path.display());
        Ok(())
    }
}
