use super::view;
use crate::output;
use anyhow::Context;
use papa_core::content::ContentSet;
use papa_core::profile::UserProfile;
use papa_core::state::ReaderState;
use papa_core::{resolver, PapaError};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let profile = UserProfile::load(root)?.ok_or(PapaError::NotOnboarded)?;
    let content = ContentSet::load(root);
    let total = content.available_days();

    if total == 0 {
        if json {
            return output::print_json(&serde_json::json!({ "empty": true, "total_days": 0 }));
        }
        output::render_empty_day();
        return Ok(());
    }

    let today_index = resolver::current_index(&profile, total);
    ReaderState::new(today_index)
        .save(root)
        .context("failed to save reading position")?;

    view::show(root, &content, &profile, today_index, today_index, json)
}
