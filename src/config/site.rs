//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,

    // Directory
    pub source_dir: String,
    pub posts_dir: String,
    pub public_dir: String,
    pub assets_dir: String,

    // Posts
    /// Glob matched against file names in `posts_dir`
    pub posts_pattern: String,
    /// Explicit ordered manifest of post files; overrides the directory scan
    pub posts: Option<Vec<String>>,
    pub link_label: String,
    pub emit_manifest: bool,

    // Page
    pub stylesheet: String,
    pub content_id: String,
    pub list_id: String,

    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: String::new(),
            language: "en".to_string(),

            source_dir: "src".to_string(),
            posts_dir: "posts".to_string(),
            public_dir: "dist".to_string(),
            assets_dir: "assets".to_string(),

            posts_pattern: "*.md".to_string(),
            posts: None,
            link_label: "Post".to_string(),
            emit_manifest: true,

            stylesheet: "styles/main.scss".to_string(),
            content_id: "content".to_string(),
            list_id: "post-list".to_string(),

            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}
