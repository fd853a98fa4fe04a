//! Export/preview configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_OUT_DIR: &str = "dist";
pub const DEFAULT_PREVIEW_PORT: u16 = 4173;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub out_dir: PathBuf,
    pub preview_port: u16,
}

impl SiteConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `SITE_OUT_DIR`: export directory, default `dist`
    /// - `SITE_PREVIEW_PORT`: preview server port, default 4173
    pub fn from_env() -> Result<Self, ConfigError> {
        let out_dir = std::env::var("SITE_OUT_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_OUT_DIR), PathBuf::from);
        let preview_port = parse_port(std::env::var("SITE_PREVIEW_PORT").ok().as_deref())?;
        Ok(Self { out_dir, preview_port })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PREVIEW_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid { var: "SITE_PREVIEW_PORT", value: value.to_owned() }),
    }
}
