use crate::error::Result;
use crate::paths;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Display fallbacks
// ---------------------------------------------------------------------------

pub const DEFAULT_PARTNER_NAME: &str = "schat";
pub const DEFAULT_USER_NAME: &str = "maat";
pub const DEFAULT_BABY_NAME: &str = "de kleine";

// ---------------------------------------------------------------------------
// UserProfile
// ---------------------------------------------------------------------------

/// The single on-device profile produced by onboarding. Names are stored
/// verbatim (possibly empty); display fallbacks are applied via [`Names`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub partner_name: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub baby_name: String,
    #[serde(default)]
    pub first_time: String,
    #[serde(default)]
    pub biggest_worry: String,
    #[serde(default)]
    pub hormonal_approach: String,
    #[serde(default)]
    pub planning_style: String,
}

impl UserProfile {
    /// The due date as a calendar date. Empty or unparseable strings are
    /// `None`; day resolution then falls back to index 0.
    pub fn parsed_due_date(&self) -> Option<NaiveDate> {
        parse_due_date(&self.due_date)
    }

    pub fn names(&self) -> Names {
        Names {
            partner: or_default(&self.partner_name, DEFAULT_PARTNER_NAME),
            user: or_default(&self.user_name, DEFAULT_USER_NAME),
            baby: or_default(&self.baby_name, DEFAULT_BABY_NAME),
        }
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    /// Load the profile. A missing file reads as `None`; so does a corrupt
    /// payload (the onboarding restarts rather than crashing on it).
    pub fn load(root: &Path) -> Result<Option<Self>> {
        let path = paths::profile_path(root);
        if !path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&path)?;
        match serde_json::from_str(&data) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                tracing::warn!("corrupt profile at {}: {e}", path.display());
                Ok(None)
            }
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::profile_path(root);
        let data = serde_json::to_string_pretty(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    /// Delete the profile. Idempotent.
    pub fn clear(root: &Path) -> Result<()> {
        crate::io::remove_if_exists(&paths::profile_path(root))?;
        Ok(())
    }
}

/// Parse a user-supplied due date. Whitespace is trimmed; anything that is
/// not a plain `YYYY-MM-DD` reads as `None`.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

fn or_default(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// Resolved display names, fallbacks already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Names {
    pub partner: String,
    pub user: String,
    pub baby: String,
}

impl Default for Names {
    fn default() -> Self {
        UserProfile::default().names()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
