use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use papa_core::config::AppConfig;
use papa_core::media::MediaClient;

#[derive(Debug, Deserialize)]
pub struct MediaQuery {
    pub q: String,
    /// The day the client is currently showing. Echoed back so a client can
    /// drop a response that arrives after it navigated away.
    #[serde(default)]
    pub day: Option<u32>,
}

/// GET /api/media?q=...&day=... — keyword lookup. Always 200: a failed
/// lookup degrades to the placeholder, it is never a user-facing error.
pub async fn search(
    State(app): State<AppState>,
    Query(params): Query<MediaQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let config = AppConfig::load(&root);
        if !config.media.enabled {
            return serde_json::json!({
                "day": params.day,
                "found": false,
                "placeholder": true,
            });
        }
        match MediaClient::new(&config.media).search(&params.q) {
            Ok(Some(hit)) => serde_json::json!({
                "day": params.day,
                "found": true,
                "url": hit.url,
                "title": hit.title,
            }),
            Ok(None) => serde_json::json!({
                "day": params.day,
                "found": false,
            }),
            Err(e) => {
                tracing::warn!("media lookup failed, degrading to placeholder: {e}");
                serde_json::json!({
                    "day": params.day,
                    "found": false,
                    "placeholder": true,
                })
            }
        }
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?;

    Ok(Json(result))
}
