use crate::content::{ContentSet, DayEntry, LegacyDayEntry, NEW_SCHEMA_MAX_DAY};
use crate::markdown;
use crate::personalize;
use crate::profile::Names;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Schema selection
// ---------------------------------------------------------------------------

/// Which schema serves a given day. Callers must handle all three arms; an
/// absent day is an empty state, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayContent<'a> {
    New(&'a DayEntry),
    Legacy(&'a LegacyDayEntry),
    Absent,
}

/// Pick the record for a 1-based day number. Through day 28 the new schema
/// is authoritative when it has a record, with the legacy one as fallback;
/// from day 29 on only the legacy archive serves.
pub fn select(day_number: u32, set: &ContentSet) -> DayContent<'_> {
    if day_number == 0 {
        return DayContent::Absent;
    }
    if day_number <= NEW_SCHEMA_MAX_DAY {
        if let Some(entry) = set.day(day_number) {
            return DayContent::New(entry);
        }
    }
    match set.archive_day(day_number) {
        Some(entry) => DayContent::Legacy(entry),
        None => DayContent::Absent,
    }
}

// ---------------------------------------------------------------------------
// Normalized view
// ---------------------------------------------------------------------------

/// The normalized per-day view model both frontends render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayView {
    pub day: u32,
    pub week: u32,
    pub length_cm: f64,
    pub weight_gr: f64,
    pub title: String,
    pub body_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

/// Select and normalize a day. `None` is the defined empty state; callers
/// render "nothing here yet" with a jump-to-day-1 recovery action.
///
/// Personalization substitution runs as the final step over every
/// personalizable field.
pub fn day_view(day_number: u32, set: &ContentSet, names: &Names) -> Option<DayView> {
    match select(day_number, set) {
        DayContent::New(entry) => Some(normalize_new(entry, names)),
        DayContent::Legacy(entry) => Some(normalize_legacy(entry, names)),
        DayContent::Absent => None,
    }
}

fn normalize_new(entry: &DayEntry, names: &Names) -> DayView {
    DayView {
        day: entry.day,
        week: entry.week,
        length_cm: entry.length_cm,
        weight_gr: entry.weight_gr,
        title: personalize::substitute(&entry.title, names),
        body_html: personalize::substitute(&markdown::to_html(&entry.content), names),
        media_hint: None,
        more_info: None,
    }
}

fn normalize_legacy(entry: &LegacyDayEntry, names: &Names) -> DayView {
    let body = [
        format!("<p>{}</p>", entry.baby_size_comparison_text),
        format!(
            "<p><strong>{}</strong></p>\n<p>{}</p>",
            entry.partner_observation_title, entry.partner_observation_text
        ),
        format!(
            "<p><strong>{}</strong></p>\n<p>{}</p>",
            entry.papas_life_lesson_title, entry.papas_life_lesson_text
        ),
    ]
    .join("\n");

    DayView {
        day: entry.day,
        week: entry.week,
        length_cm: entry.length_cm,
        weight_gr: entry.weight_gr,
        title: personalize::substitute(&entry.baby_size_comparison, names),
        body_html: personalize::substitute(&body, names),
        media_hint: non_empty(&entry.image_idea),
        more_info: entry.more_info_url.clone(),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
