use super::view;
use crate::output;
use anyhow::Context;
use papa_core::content::ContentSet;
use papa_core::profile::UserProfile;
use papa_core::resolver::{self, Direction, StepOutcome};
use papa_core::state::ReaderState;
use papa_core::PapaError;
use std::path::Path;

pub fn run(root: &Path, direction: Direction, json: bool) -> anyhow::Result<()> {
    let profile = UserProfile::load(root)?.ok_or(PapaError::NotOnboarded)?;
    let content = ContentSet::load(root);
    let total = content.available_days();
    let today_index = resolver::current_index(&profile, total);

    let current = ReaderState::load(root)?
        .map(|s| resolver::clamp_index(s.current_day, total))
        .unwrap_or(today_index);

    match resolver::step(current, direction, today_index, total) {
        StepOutcome::Moved(index) => {
            ReaderState::new(index)
                .save(root)
                .context("failed to save reading position")?;
            view::show(root, &content, &profile, index, today_index, json)
        }
        StepOutcome::BlockedByToday => {
            if json {
                return output::print_json(&serde_json::json!({
                    "blocked_by_today": true,
                    "today_index": today_index,
                }));
            }
            println!("{}", output::tomorrow_phrase());
            Ok(())
        }
        StepOutcome::AtEnd => {
            if json {
                return output::print_json(&serde_json::json!({ "at_end": true }));
            }
            println!("Dit was voorlopig de laatste dag.");
            Ok(())
        }
        StepOutcome::AtStart => {
            if json {
                return output::print_json(&serde_json::json!({ "at_start": true }));
            }
            println!("Je bent al bij dag 1.");
            Ok(())
        }
        StepOutcome::NoContent => {
            if json {
                return output::print_json(&serde_json::json!({ "empty": true }));
            }
            output::render_empty_day();
            Ok(())
        }
    }
}
