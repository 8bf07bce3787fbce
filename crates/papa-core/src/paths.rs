use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const PAPA_DIR: &str = ".papa";
pub const CONTENT_DIR: &str = ".papa/content";

pub const PROFILE_FILE: &str = ".papa/profile.json";
pub const STATE_FILE: &str = ".papa/state.json";
pub const CONFIG_FILE: &str = ".papa/config.json";

/// Override for the new-schema dataset.
pub const DAYS_FILE: &str = ".papa/content/days.json";
/// Override for the legacy-schema dataset.
pub const ARCHIVE_FILE: &str = ".papa/content/archive.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn papa_dir(root: &Path) -> PathBuf {
    root.join(PAPA_DIR)
}

pub fn content_dir(root: &Path) -> PathBuf {
    root.join(CONTENT_DIR)
}

pub fn profile_path(root: &Path) -> PathBuf {
    root.join(PROFILE_FILE)
}

pub fn state_path(root: &Path) -> PathBuf {
    root.join(STATE_FILE)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn days_path(root: &Path) -> PathBuf {
    root.join(DAYS_FILE)
}

pub fn archive_path(root: &Path) -> PathBuf {
    root.join(ARCHIVE_FILE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
