use axum::http::StatusCode;
use chrono::{Duration, Local};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Send a GET request via `oneshot` and return (status, parsed JSON body).
async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Send a GET request and return (status, raw body text).
async fn get_text(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&body).into_owned())
}

/// Send a PUT/DELETE request with an optional JSON body.
async fn send_json(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let req = builder
        .body(match body {
            Some(v) => axum::body::Body::from(serde_json::to_vec(&v).unwrap()),
            None => axum::body::Body::empty(),
        })
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn profile_json(due_date: &str) -> serde_json::Value {
    serde_json::json!({
        "due_date": due_date,
        "partner_name": "Lisa",
        "user_name": "Tom",
        "baby_name": "",
        "first_time": "veteran",
        "biggest_worry": "money",
        "hormonal_approach": "chocolate",
        "planning_style": "balanced",
    })
}

/// A due date such that today resolves to the given 1-based day number.
fn due_for_day(day_number: i64) -> String {
    let due = Local::now().date_naive() + Duration::days(280 - (day_number - 1));
    due.format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// /api/state
// ---------------------------------------------------------------------------

#[tokio::test]
async fn state_without_profile_reports_not_onboarded() {
    let dir = TempDir::new().unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());

    let (status, json) = get(app, "/api/state").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["onboarded"], false);
    assert_eq!(json["names"]["user"], "maat");
    assert_eq!(json["today_day_number"], 1);
    assert!(json["total_days"].as_u64().unwrap() > 28);
}

#[tokio::test]
async fn state_with_profile_resolves_today() {
    let dir = TempDir::new().unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());
    let (status, _) = send_json(
        app.clone(),
        "PUT",
        "/api/profile",
        Some(profile_json(&due_for_day(3))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = get(app, "/api/state").await;
    assert_eq!(json["onboarded"], true);
    assert_eq!(json["today_day_number"], 3);
    assert_eq!(json["names"]["partner"], "Lisa");
    assert_eq!(json["names"]["baby"], "de kleine");
}

// ---------------------------------------------------------------------------
// /api/profile
// ---------------------------------------------------------------------------

#[tokio::test]
async fn profile_get_without_profile_is_404() {
    let dir = TempDir::new().unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());

    let (status, _) = get(app, "/api/profile").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn profile_put_then_get_roundtrips() {
    let dir = TempDir::new().unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());

    let (status, _) = send_json(
        app.clone(),
        "PUT",
        "/api/profile",
        Some(profile_json("2026-11-01")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = get(app, "/api/profile").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["partner_name"], "Lisa");
    assert_eq!(json["due_date"], "2026-11-01");
}

#[tokio::test]
async fn profile_put_rejects_bad_due_date() {
    let dir = TempDir::new().unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());

    let (status, _) = send_json(
        app,
        "PUT",
        "/api/profile",
        Some(profile_json("volgende week")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn profile_put_rejects_bad_choice_code() {
    let dir = TempDir::new().unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());

    let mut body = profile_json("2026-11-01");
    body["planning_style"] = serde_json::json!("chaos");
    let (status, _) = send_json(app, "PUT", "/api/profile", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn profile_delete_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());
    send_json(
        app.clone(),
        "PUT",
        "/api/profile",
        Some(profile_json("2026-11-01")),
    )
    .await;

    let (status, json) = send_json(app.clone(), "DELETE", "/api/profile", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["deleted"], true);

    // Second delete: still fine.
    let (status, _) = send_json(app.clone(), "DELETE", "/api/profile", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(app, "/api/profile").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// /api/day
// ---------------------------------------------------------------------------

#[tokio::test]
async fn day_one_renders_view_with_default_names() {
    let dir = TempDir::new().unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());

    let (status, json) = get(app, "/api/day/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["empty"], false);
    assert_eq!(json["view"]["day"], 1);
    assert_eq!(json["view"]["week"], 1);
    // No profile: placeholders substitute with the defaults.
    assert!(json["view"]["body_html"]
        .as_str()
        .unwrap()
        .contains("maat"));
}

#[tokio::test]
async fn day_today_matches_profile() {
    let dir = TempDir::new().unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());
    send_json(
        app.clone(),
        "PUT",
        "/api/profile",
        Some(profile_json(&due_for_day(3))),
    )
    .await;

    let (status, json) = get(app, "/api/day/today").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["day_number"], 3);
    assert_eq!(json["is_today"], true);
    assert_eq!(json["can_back"], true);
    // Forward is gated by today.
    assert_eq!(json["can_forward"], false);
}

#[tokio::test]
async fn day_ahead_of_today_is_blocked() {
    let dir = TempDir::new().unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());
    send_json(
        app.clone(),
        "PUT",
        "/api/profile",
        Some(profile_json(&due_for_day(1))),
    )
    .await;

    let (status, json) = get(app, "/api/day/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["blocked_by_today"], true);
    assert!(json["view"].is_null());
}

#[tokio::test]
async fn day_beyond_content_is_empty_state() {
    let dir = TempDir::new().unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());

    let (status, json) = get(app, "/api/day/999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["empty"], true);
    assert_eq!(json["blocked_by_today"], false);
    assert!(json["view"].is_null());
}

#[tokio::test]
async fn legacy_day_carries_media_hint() {
    let dir = TempDir::new().unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());
    // Due date long past: everything up to the last day is unlocked.
    send_json(
        app.clone(),
        "PUT",
        "/api/profile",
        Some(profile_json("2020-01-01")),
    )
    .await;

    let (status, json) = get(app, "/api/day/29").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["empty"], false);
    assert!(json["view"]["media_hint"].as_str().is_some());
    assert!(json["view"]["body_html"]
        .as_str()
        .unwrap()
        .contains("<strong>"));
}

// ---------------------------------------------------------------------------
// /api/media
// ---------------------------------------------------------------------------

#[tokio::test]
async fn media_disabled_degrades_to_placeholder() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".papa")).unwrap();
    std::fs::write(
        dir.path().join(".papa/config.json"),
        r#"{"media":{"enabled":false}}"#,
    )
    .unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());

    let (status, json) = get(app, "/api/media?q=grape&day=30").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["found"], false);
    assert_eq!(json["placeholder"], true);
    assert_eq!(json["day"], 30);
}

#[tokio::test]
async fn media_lookup_echoes_requested_day() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/search")
        .match_query(mockito::Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results":[{"url":"https://m.example/grape.gif"}]}"#)
        .create_async()
        .await;

    std::fs::create_dir_all(dir.path().join(".papa")).unwrap();
    std::fs::write(
        dir.path().join(".papa/config.json"),
        serde_json::json!({
            "media": { "enabled": true, "endpoint": format!("{}/search", server.url()) }
        })
        .to_string(),
    )
    .unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());

    let (status, json) = get(app, "/api/media?q=grape&day=31").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["found"], true);
    assert_eq!(json["url"], "https://m.example/grape.gif");
    // The day is echoed so the client can drop stale responses.
    assert_eq!(json["day"], 31);
}

#[tokio::test]
async fn media_endpoint_failure_is_not_a_user_error() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/search")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    std::fs::create_dir_all(dir.path().join(".papa")).unwrap();
    std::fs::write(
        dir.path().join(".papa/config.json"),
        serde_json::json!({
            "media": { "enabled": true, "endpoint": format!("{}/search", server.url()) }
        })
        .to_string(),
    )
    .unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());

    let (status, json) = get(app, "/api/media?q=boom&day=29").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["found"], false);
    assert_eq!(json["placeholder"], true);
}

// ---------------------------------------------------------------------------
// Embedded shell
// ---------------------------------------------------------------------------

#[tokio::test]
async fn shell_is_served_at_root() {
    let dir = TempDir::new().unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());

    let (status, body) = get_text(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Project Papa"));
}

#[tokio::test]
async fn unknown_path_falls_back_to_shell() {
    let dir = TempDir::new().unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());

    let (status, body) = get_text(app, "/instellingen").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Project Papa"));
}

#[tokio::test]
async fn manifest_is_served() {
    let dir = TempDir::new().unwrap();
    let app = papa_server::build_router(dir.path().to_path_buf());

    let (status, body) = get_text(app, "/manifest.webmanifest").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("standalone"));
}
