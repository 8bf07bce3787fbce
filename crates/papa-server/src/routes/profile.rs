use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use papa_core::onboarding::{self, QuestionId};
use papa_core::profile::UserProfile;
use papa_core::state::ReaderState;
use papa_core::PapaError;

/// GET /api/profile
pub async fn get_profile(State(app): State<AppState>) -> Result<Json<UserProfile>, AppError> {
    let root = app.root.clone();
    let profile = tokio::task::spawn_blocking(move || UserProfile::load(&root))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    match profile {
        Some(profile) => Ok(Json(profile)),
        None => Err(AppError::not_found("no profile yet")),
    }
}

/// PUT /api/profile — overwrite the profile wholesale (onboarding completion
/// and settings edits both land here).
pub async fn put_profile(
    State(app): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<UserProfile>, AppError> {
    validate(&profile)?;

    let root = app.root.clone();
    let saved = tokio::task::spawn_blocking(move || {
        profile.save(&root)?;
        Ok::<_, PapaError>(profile)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(saved))
}

/// DELETE /api/profile — reset. Idempotent.
pub async fn delete_profile(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    tokio::task::spawn_blocking(move || {
        UserProfile::clear(&root)?;
        ReaderState::clear(&root)?;
        Ok::<_, PapaError>(())
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(serde_json::json!({ "deleted": true })))
}

/// Write-time validation: an unparseable non-empty due date or an unknown
/// selection code is a loud 400, not something to silently persist.
fn validate(profile: &UserProfile) -> Result<(), AppError> {
    if !profile.due_date.trim().is_empty() {
        onboarding::validate(onboarding::question(QuestionId::DueDate), &profile.due_date)
            .map_err(AppError::from)?;
    }
    let choices = [
        (QuestionId::FirstTime, &profile.first_time),
        (QuestionId::BiggestWorry, &profile.biggest_worry),
        (QuestionId::HormonalApproach, &profile.hormonal_approach),
        (QuestionId::PlanningStyle, &profile.planning_style),
    ];
    for (id, value) in choices {
        if !value.trim().is_empty() {
            onboarding::validate(onboarding::question(id), value).map_err(AppError::from)?;
        }
    }
    Ok(())
}
