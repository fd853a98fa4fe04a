//! Local preview host for an exported site.
//!
//! Behaves like a plain static file host: files are served as-is, open route
//! templates are rewritten to their generic shell, and everything else gets
//! `404.html` with a 404 status. No application logic runs here.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_status::SetStatus;
use tower_http::trace::TraceLayer;

use crate::export::{MANIFEST_FILE, NOT_FOUND_FILE, RouteManifest, shell_file};

#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid routes manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("server error: {0}")]
    Serve(std::io::Error),
}

/// Convert a `:name` route pattern to axum's `{name}` syntax.
#[must_use]
pub fn axum_pattern(pattern: &str) -> String {
    pattern
        .split('/')
        .map(|part| match part.strip_prefix(':') {
            Some(name) => format!("{{{name}}}"),
            None => part.to_owned(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Read `routes.json` from an export directory.
///
/// # Errors
///
/// Returns an error if the file is missing or malformed.
pub fn load_manifest(dir: &Path) -> Result<RouteManifest, PreviewError> {
    let path = dir.join(MANIFEST_FILE);
    let raw = std::fs::read_to_string(&path).map_err(|source| PreviewError::Read { path, source })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Static-host router for `dir`.
pub fn router(dir: &Path, manifest: &RouteManifest) -> Router {
    let mut app = Router::new();
    for rewrite in &manifest.rewrites {
        let shell = dir.join(shell_file(&rewrite.shell));
        app = app.route_service(&axum_pattern(&rewrite.pattern), ServeFile::new(shell));
    }

    let not_found = SetStatus::new(ServeFile::new(dir.join(NOT_FOUND_FILE)), StatusCode::NOT_FOUND);
    app.fallback_service(ServeDir::new(dir).not_found_service(not_found))
        .layer(TraceLayer::new_for_http())
}

/// Serve `dir` on `port` until the process exits.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or the port cannot be bound.
pub async fn serve(dir: &Path, port: u16) -> Result<(), PreviewError> {
    let manifest = load_manifest(dir)?;
    let app = router(dir, &manifest);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .map_err(PreviewError::Serve)?;

    tracing::info!(%port, dir = %dir.display(), rewrites = manifest.rewrites.len(), "preview listening");
    axum::serve(listener, app).await.map_err(PreviewError::Serve)
}
