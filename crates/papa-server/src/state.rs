use papa_core::content::ContentSet;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
///
/// The content snapshot is loaded once at startup and treated as immutable
/// for the lifetime of the server; the profile is read per request.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
    pub content: Arc<ContentSet>,
}

impl AppState {
    pub fn new(root: PathBuf) -> Self {
        let content = Arc::new(ContentSet::load(&root));
        Self { root, content }
    }
}
