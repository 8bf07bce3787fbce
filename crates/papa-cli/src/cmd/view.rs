use crate::output;
use papa_core::config::AppConfig;
use papa_core::content::ContentSet;
use papa_core::media::MediaClient;
use papa_core::profile::UserProfile;
use papa_core::selector;
use std::path::Path;

/// Render one selected day, shared by `today`, `day`, and `next`/`prev`.
pub fn show(
    root: &Path,
    content: &ContentSet,
    profile: &UserProfile,
    day_index: usize,
    today_index: usize,
    json: bool,
) -> anyhow::Result<()> {
    let names = profile.names();
    let day_number = (day_index + 1) as u32;
    let view = selector::day_view(day_number, content, &names);
    let media_url = view
        .as_ref()
        .and_then(|v| v.media_hint.as_deref())
        .and_then(|hint| lookup_media(root, hint));

    if json {
        return output::print_json(&serde_json::json!({
            "day_number": day_number,
            "today_index": today_index,
            "total_days": content.available_days(),
            "empty": view.is_none(),
            "view": view,
            "media_url": media_url,
        }));
    }

    match view {
        Some(v) => output::render_day(&v, day_index == today_index, media_url.as_deref()),
        None => output::render_empty_day(),
    }
    Ok(())
}

/// Resolve a media hint to a URL. Every failure degrades to the placeholder
/// (`None`); a broken lookup must never block reading.
fn lookup_media(root: &Path, hint: &str) -> Option<String> {
    let config = AppConfig::load(root);
    if !config.media.enabled {
        return None;
    }
    match MediaClient::new(&config.media).search(hint) {
        Ok(Some(hit)) => Some(hit.url),
        Ok(None) => None,
        Err(e) => {
            tracing::warn!("media lookup failed, showing placeholder: {e}");
            None
        }
    }
}
