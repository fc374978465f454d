//! Site-wide configuration.
//!
//! Every site-wide constant (base URL, default images, the blog path) lives
//! in one immutable [`SiteConfig`] that is handed to the renderer at
//! construction. Nothing in the render path reads process-wide state.

use std::path::Path;

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

use crate::types::PageConfig;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Canonical origin for og:url and absolute links, no trailing slash.
    pub base_url: String,
    pub site_name: String,
    pub author: String,
    /// Fallback cover banner when a page supplies none.
    pub default_cover: String,
    /// Fallback page icon image when a page supplies none.
    pub profile_image: String,
    /// Path segment blog posts are written under.
    pub blog_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://example.com".into(),
            site_name: "folio".into(),
            author: String::new(),
            default_cover: "/images/default-banner.png".into(),
            profile_image: "/images/profile.png".into(),
            blog_path: "blog".into(),
        }
    }
}

impl SiteConfig {
    /// Loads `site.json`. A missing file is not an error, since every field has
    /// a default, but unreadable or malformed JSON is fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no site config, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Reads one page config JSON document.
pub fn load_page_config(path: impl AsRef<Path>) -> Result<PageConfig, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    #[diagnostic(code(folio::config::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    #[diagnostic(
        code(folio::config::parse),
        help("page configs are objects like {{\"slug\": ..., \"title\": ..., \"blocks\": [...]}}")
    )]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_config_fills_missing_fields() {
        let cfg: SiteConfig = serde_json::from_str(r#"{"siteName":"tidepool"}"#).unwrap();
        assert_eq!(cfg.site_name, "tidepool");
        assert_eq!(cfg.blog_path, "blog");
    }
}
