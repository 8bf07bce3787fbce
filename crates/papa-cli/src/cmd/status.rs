use crate::output;
use chrono::Local;
use papa_core::content::ContentSet;
use papa_core::profile::UserProfile;
use papa_core::resolver::{self, PREGNANCY_DAYS};
use papa_core::PapaError;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let profile = UserProfile::load(root)?.ok_or(PapaError::NotOnboarded)?;
    let content = ContentSet::load(root);
    let total = content.available_days();
    let today_index = resolver::current_index(&profile, total);
    let names = profile.names();

    let days_to_go = profile
        .parsed_due_date()
        .map(|due| (due - Local::now().date_naive()).num_days());

    if json {
        return output::print_json(&serde_json::json!({
            "due_date": profile.due_date,
            "names": names,
            "today_day_number": today_index + 1,
            "total_days": total,
            "pregnancy_days": PREGNANCY_DAYS,
            "days_to_go": days_to_go,
        }));
    }

    let due_line = if profile.due_date.is_empty() {
        "onbekend".to_string()
    } else {
        profile.due_date.clone()
    };
    let countdown = match days_to_go {
        Some(n) if n > 0 => format!("nog {n} dagen"),
        Some(0) => "vandaag!".to_string(),
        Some(_) => "de datum is al voorbij".to_string(),
        None => "geen geldige datum".to_string(),
    };

    output::print_kv(&[
        ("Uitgerekend", format!("{due_line} ({countdown})")),
        ("Partner", names.partner.clone()),
        ("Baby", names.baby.clone()),
        ("Papa", names.user.clone()),
        (
            "Vandaag",
            format!("dag {} van {} geladen dagen", today_index + 1, total),
        ),
    ]);
    Ok(())
}
