use crate::profile::UserProfile;
use chrono::{Duration, Local, NaiveDate};

/// A full-term pregnancy, counted back from the due date.
pub const PREGNANCY_DAYS: i64 = 280;

// ---------------------------------------------------------------------------
// Today's index
// ---------------------------------------------------------------------------

/// Compute the zero-based content index for `today`.
///
/// The pregnancy starts 280 days before the due date; the index is the whole
/// number of days since then, clamped to `[0, available_len - 1]`. A missing
/// due date or an empty content set resolves to 0 — both are defined
/// fallbacks, not errors.
pub fn resolve_today_index(
    due_date: Option<NaiveDate>,
    available_len: usize,
    today: NaiveDate,
) -> usize {
    if available_len == 0 {
        return 0;
    }
    let Some(due) = due_date else {
        return 0;
    };
    let start = due - Duration::days(PREGNANCY_DAYS);
    let raw = (today - start).num_days();
    let max_index = (available_len - 1) as i64;
    raw.clamp(0, max_index) as usize
}

/// Today's index for a profile against the wall clock.
pub fn current_index(profile: &UserProfile, available_len: usize) -> usize {
    resolve_today_index(
        profile.parsed_due_date(),
        available_len,
        Local::now().date_naive(),
    )
}

/// Clamp a stored or requested index into the available range.
pub fn clamp_index(index: usize, available_len: usize) -> usize {
    if available_len == 0 {
        0
    } else {
        index.min(available_len - 1)
    }
}

// ---------------------------------------------------------------------------
// Navigation gate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Back,
}

/// Outcome of a navigation step. Everything except `Moved` is a no-op; only
/// `BlockedByToday` warrants a notice (presentation picks the phrasing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved(usize),
    BlockedByToday,
    AtEnd,
    AtStart,
    NoContent,
}

/// Gate a navigation step from `current`.
///
/// Forward stops at `min(today_index, available_len - 1)`: the user may not
/// browse past the day computed as "today", nor past the last loaded day.
/// When both boundaries coincide the today boundary wins. Backward stops
/// silently at 0. An empty content set is closed in both directions.
pub fn step(
    current: usize,
    direction: Direction,
    today_index: usize,
    available_len: usize,
) -> StepOutcome {
    if available_len == 0 {
        return StepOutcome::NoContent;
    }
    let max_index = available_len - 1;
    match direction {
        Direction::Back => {
            if current == 0 {
                StepOutcome::AtStart
            } else {
                StepOutcome::Moved(current.min(max_index) - 1)
            }
        }
        Direction::Forward => {
            let limit = today_index.min(max_index);
            if current < limit {
                StepOutcome::Moved(current + 1)
            } else if today_index <= max_index {
                StepOutcome::BlockedByToday
            } else {
                StepOutcome::AtEnd
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
