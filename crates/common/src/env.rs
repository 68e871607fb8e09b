//! Environment/runtime helpers
//!
//! Startup sanity checks for directories the server expects.

use tracing::warn;

/// Warn when the static asset directory is missing. The registry API works
/// without it, but `GET /` will 404.
pub async fn ensure_env(static_dir: &str) {
    if tokio::fs::metadata(static_dir).await.is_err() {
        warn!(%static_dir, "static asset directory not found; index page may 404");
    }
}
