use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use papa_core::profile::{Names, UserProfile};
use papa_core::resolver;

/// GET /api/state — app bootstrap summary: onboarded or not, today's day
/// number, and the resolved display names.
pub async fn get_state(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let content = app.content.clone();
    let result = tokio::task::spawn_blocking(move || {
        let profile = UserProfile::load(&root)?;
        let total = content.available_days();
        let today_index = profile
            .as_ref()
            .map(|p| resolver::current_index(p, total))
            .unwrap_or(0);
        let names = profile
            .as_ref()
            .map(UserProfile::names)
            .unwrap_or_else(Names::default);

        Ok::<_, papa_core::PapaError>(serde_json::json!({
            "onboarded": profile.is_some(),
            "due_date": profile.as_ref().map(|p| p.due_date.clone()),
            "names": names,
            "today_day_number": today_index + 1,
            "total_days": total,
            "pregnancy_days": resolver::PREGNANCY_DAYS,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
