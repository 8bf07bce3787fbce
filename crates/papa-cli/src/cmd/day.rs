use super::view;
use crate::output;
use anyhow::Context;
use papa_core::content::ContentSet;
use papa_core::profile::UserProfile;
use papa_core::state::ReaderState;
use papa_core::{resolver, PapaError};
use std::path::Path;

pub fn run(root: &Path, number: u32, json: bool) -> anyhow::Result<()> {
    if number == 0 {
        anyhow::bail!("dagen beginnen bij 1");
    }
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
    let target = (number - 1) as usize;

    // Jumping ahead of today is the same boundary as `papa next`.
    if target > today_index {
        if json {
            return output::print_json(&serde_json::json!({
                "blocked_by_today": true,
                "today_index": today_index,
            }));
        }
        println!("{}", output::tomorrow_phrase());
        return Ok(());
    }

    ReaderState::new(target)
        .save(root)
        .context("failed to save reading position")?;

    view::show(root, &content, &profile, target, today_index, json)
}
