use crate::paths;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Highest day number the new schema covers; later days live in the legacy
/// archive.
pub const NEW_SCHEMA_MAX_DAY: u32 = 28;

// ---------------------------------------------------------------------------
// Schemas
// ---------------------------------------------------------------------------

/// New-schema record: one titled, markdown-ish body per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    pub day: u32,
    pub week: u32,
    pub length_cm: f64,
    pub weight_gr: f64,
    pub title: String,
    pub content: String,
}

/// Legacy-schema record: the older flat shape with separate text slots and a
/// media search hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyDayEntry {
    pub day: u32,
    pub week: u32,
    pub day_of_week: String,
    pub length_cm: f64,
    pub weight_gr: f64,
    pub baby_size_comparison: String,
    pub baby_size_comparison_text: String,
    pub partner_observation_title: String,
    pub partner_observation_text: String,
    pub papas_life_lesson_title: String,
    pub papas_life_lesson_text: String,
    pub image_idea: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info_url: Option<String>,
}

// ---------------------------------------------------------------------------
// ContentSet
// ---------------------------------------------------------------------------

const EMBEDDED_DAYS: &str = include_str!("../assets/days.json");
const EMBEDDED_ARCHIVE: &str = include_str!("../assets/archive.json");

/// Both datasets, loaded once and treated as an immutable snapshot for the
/// duration of a command or request.
#[derive(Debug, Clone, Default)]
pub struct ContentSet {
    pub days: Vec<DayEntry>,
    pub archive: Vec<LegacyDayEntry>,
}

impl ContentSet {
    /// One-shot load. Override files under `.papa/content/` take precedence
    /// over the embedded defaults; a dataset that fails to read or parse
    /// degrades to empty with a warning, never an error.
    pub fn load(root: &Path) -> Self {
        Self {
            days: load_dataset(&paths::days_path(root), EMBEDDED_DAYS, "days"),
            archive: load_dataset(&paths::archive_path(root), EMBEDDED_ARCHIVE, "archive"),
        }
    }

    /// The embedded defaults only, ignoring any overrides.
    pub fn builtin() -> Self {
        Self {
            days: parse_dataset(EMBEDDED_DAYS, "days"),
            archive: parse_dataset(EMBEDDED_ARCHIVE, "archive"),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The content length: the highest day number present in either dataset.
    pub fn available_days(&self) -> usize {
        self.days
            .iter()
            .map(|d| d.day)
            .chain(self.archive.iter().map(|d| d.day))
            .max()
            .unwrap_or(0) as usize
    }

    pub fn day(&self, day: u32) -> Option<&DayEntry> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn archive_day(&self, day: u32) -> Option<&LegacyDayEntry> {
        self.archive.iter().find(|d| d.day == day)
    }
}

fn load_dataset<T: DeserializeOwned>(override_path: &Path, embedded: &str, label: &str) -> Vec<T> {
    if override_path.exists() {
        match std::fs::read_to_string(override_path) {
            Ok(raw) => parse_dataset(&raw, label),
            Err(e) => {
                tracing::warn!("failed to read {} dataset override: {e}", label);
                Vec::new()
            }
        }
    } else {
        parse_dataset(embedded, label)
    }
}

fn parse_dataset<T: DeserializeOwned>(raw: &str, label: &str) -> Vec<T> {
    match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("failed to parse {} dataset: {e}", label);
            Vec::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
