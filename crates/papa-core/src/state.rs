use crate::error::Result;
use crate::paths;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The reading bookmark: which zero-based day index the user is looking at.
/// The web app keeps this in memory per visit; the CLI persists it so
/// `papa next` and `papa prev` carry over between invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderState {
    pub current_day: usize,
    pub updated_at: DateTime<Utc>,
}

impl ReaderState {
    pub fn new(current_day: usize) -> Self {
        Self {
            current_day,
            updated_at: Utc::now(),
        }
    }

    /// Load the bookmark. Missing or corrupt state reads as `None`; the
    /// caller falls back to today's index.
    pub fn load(root: &Path) -> Result<Option<Self>> {
        let path = paths::state_path(root);
        if !path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&path)?;
        match serde_json::from_str(&data) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                tracing::warn!("corrupt reader state at {}: {e}", path.display());
                Ok(None)
            }
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::state_path(root);
        let data = serde_json::to_string_pretty(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    /// Delete the bookmark. Idempotent.
    pub fn clear(root: &Path) -> Result<()> {
        crate::io::remove_if_exists(&paths::state_path(root))?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
