//! Static export: one HTML shell per enumerated route.
//!
//! ARCHITECTURE
//! ============
//! The route table in `client::routing::table` is the only source of truth.
//! `plan` turns it into a manifest (shell paths, closed templates, rewrites
//! for open templates), `write_site` renders and writes every shell, and the
//! manifest is written next to them so the preview host can apply the same
//! rewrites a production static host would.
//!
//! Closed templates get no rewrite: any value without a shell falls through
//! to `404.html`.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use client::routing::table::{self, NOT_FOUND_PATH};
use client::routing::{ParamPolicy, RouteError};
use leptos::config::LeptosOptions;
use serde::{Deserialize, Serialize};

pub const MANIFEST_FILE: &str = "routes.json";
pub const NOT_FOUND_FILE: &str = "404.html";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("invalid route table: {0}")]
    Route(#[from] RouteError),
    #[error("two routes produce the shell path {0}")]
    DuplicateShell(String),
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("manifest encoding failed: {0}")]
    Manifest(#[from] serde_json::Error),
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError + '_ {
    move |source| ExportError::Io { path: path.to_path_buf(), source }
}

/// Open template served by a generic shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewrite {
    /// Route pattern with `:name` segments.
    pub pattern: String,
    /// Shell path served for every match.
    pub shell: String,
}

/// What was exported, written as `routes.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteManifest {
    pub shells: Vec<String>,
    pub closed: Vec<String>,
    pub rewrites: Vec<Rewrite>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub shells: usize,
    pub rewrites: usize,
}

/// Build the manifest from the route table. Order is deterministic: static
/// pages first, then each template's placeholders in declared order.
///
/// # Errors
///
/// Returns an error if a template is invalid or two routes map to one path.
pub fn plan() -> Result<RouteManifest, ExportError> {
    let mut manifest = RouteManifest::default();
    let mut seen = BTreeSet::new();
    let mut push_shell = |manifest: &mut RouteManifest, path: String| {
        if seen.insert(path.clone()) {
            manifest.shells.push(path);
            Ok(())
        } else {
            Err(ExportError::DuplicateShell(path))
        }
    };

    for page in table::STATIC_PAGES {
        push_shell(&mut manifest, page.path.to_owned())?;
    }
    for route in table::dynamic_routes()? {
        let paths = route.shell_paths();
        match route.policy() {
            ParamPolicy::Closed => manifest.closed.push(route.pattern().to_owned()),
            ParamPolicy::Open => {
                if let Some(shell) = paths.first() {
                    manifest.rewrites.push(Rewrite { pattern: route.pattern().to_owned(), shell: shell.clone() });
                }
            }
        }
        for path in paths {
            push_shell(&mut manifest, path)?;
        }
    }
    Ok(manifest)
}

/// File a shell path is written to, relative to the export root.
#[must_use]
pub fn shell_file(route_path: &str) -> PathBuf {
    if route_path == NOT_FOUND_PATH {
        return PathBuf::from(NOT_FOUND_FILE);
    }
    let mut file = PathBuf::new();
    for part in route_path.split('/').filter(|p| !p.is_empty()) {
        file.push(part);
    }
    file.push("index.html");
    file
}

fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err(parent))?;
    }
    std::fs::write(path, contents).map_err(io_err(path))
}

/// Render every shell in `manifest` with `render` and write the site.
///
/// # Errors
///
/// Returns an error if any file cannot be written.
pub fn write_site<F>(out_dir: &Path, manifest: &RouteManifest, render: F) -> Result<ExportSummary, ExportError>
where
    F: Fn(&str) -> String,
{
    std::fs::create_dir_all(out_dir).map_err(io_err(out_dir))?;

    for path in &manifest.shells {
        let file = out_dir.join(shell_file(path));
        write_file(&file, &render(path))?;
        tracing::debug!(%path, file = %file.display(), "wrote shell");
    }
    write_file(&out_dir.join(NOT_FOUND_FILE), &render(NOT_FOUND_PATH))?;

    let manifest_json = serde_json::to_string_pretty(manifest)?;
    write_file(&out_dir.join(MANIFEST_FILE), &manifest_json)?;

    Ok(ExportSummary { shells: manifest.shells.len(), rewrites: manifest.rewrites.len() })
}

fn copy_dir(from: &Path, to: &Path) -> Result<usize, ExportError> {
    std::fs::create_dir_all(to).map_err(io_err(to))?;
    let mut copied = 0;
    for entry in std::fs::read_dir(from).map_err(io_err(from))? {
        let entry = entry.map_err(io_err(from))?;
        let source = entry.path();
        let target = to.join(entry.file_name());
        if source.is_dir() {
            copied += copy_dir(&source, &target)?;
        } else {
            std::fs::copy(&source, &target).map_err(io_err(&source))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Export the whole site to `out_dir` using Leptos SSR for each shell, then
/// copy the compiled client bundle if it has been built.
///
/// # Errors
///
/// Returns an error if planning, rendering output, or copying fails.
pub fn run(out_dir: &Path, options: &LeptosOptions) -> Result<ExportSummary, ExportError> {
    let manifest = plan()?;
    let summary = write_site(out_dir, &manifest, |path| client::app::render_static_shell(path, options))?;

    let pkg_src = Path::new(options.site_root.as_ref()).join(options.site_pkg_dir.as_ref());
    if pkg_src.is_dir() {
        let copied = copy_dir(&pkg_src, &out_dir.join(options.site_pkg_dir.as_ref()))?;
        tracing::info!(files = copied, from = %pkg_src.display(), "copied client bundle");
    } else {
        tracing::warn!(from = %pkg_src.display(), "client bundle not found; shells will not hydrate");
    }

    Ok(summary)
}
