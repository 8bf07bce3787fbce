use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use papa_core::profile::{Names, UserProfile};
use papa_core::resolver::{self, Direction, StepOutcome};
use papa_core::selector;

/// GET /api/day/today
pub async fn get_today(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    day_response(app, None).await
}

/// GET /api/day/{number}
pub async fn get_day(
    State(app): State<AppState>,
    Path(number): Path<u32>,
) -> Result<Json<serde_json::Value>, AppError> {
    day_response(app, Some(number)).await
}

async fn day_response(
    app: AppState,
    number: Option<u32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let content = app.content.clone();
    let result = tokio::task::spawn_blocking(move || {
        let profile = UserProfile::load(&root)?;
        let names = profile
            .as_ref()
            .map(UserProfile::names)
            .unwrap_or_else(Names::default);
        let total = content.available_days();
        let today_index = profile
            .as_ref()
            .map(|p| resolver::current_index(p, total))
            .unwrap_or(0);

        let day_number = number.unwrap_or(today_index as u32 + 1).max(1);
        let day_index = (day_number - 1) as usize;

        // A day past the loaded content is simply absent; a loaded day past
        // "today" is withheld until the calendar catches up.
        if day_number as usize <= total && day_index > today_index {
            return Ok::<_, papa_core::PapaError>(serde_json::json!({
                "day_number": day_number,
                "today_day_number": today_index + 1,
                "total_days": total,
                "blocked_by_today": true,
                "empty": false,
                "view": serde_json::Value::Null,
            }));
        }

        let view = selector::day_view(day_number, &content, &names);
        Ok(serde_json::json!({
            "day_number": day_number,
            "today_day_number": today_index + 1,
            "total_days": total,
            "is_today": day_index == today_index,
            "blocked_by_today": false,
            "empty": view.is_none(),
            "view": view,
            "can_forward": matches!(
                resolver::step(day_index, Direction::Forward, today_index, total),
                StepOutcome::Moved(_)
            ),
            "can_back": matches!(
                resolver::step(day_index, Direction::Back, today_index, total),
                StepOutcome::Moved(_)
            ),
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
