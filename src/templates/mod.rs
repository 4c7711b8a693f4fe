//! Host page templates using the Tera template engine
//!
//! The built-in layout is embedded in the binary. A site may replace it by
//! providing its own `index.html` in the source directory.

use anyhow::{Context as _, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tera::{Context, Tera};

use crate::config::SiteConfig;

const LAYOUT: &str = "layout.html";

/// Built-in host page
pub const DEFAULT_LAYOUT: &str = include_str!("layout.html");

/// Template renderer for the host page
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a renderer with the built-in layout
    pub fn new() -> Result<Self> {
        Self::from_source(DEFAULT_LAYOUT)
    }

    /// Use `path` as the layout if it exists, the built-in one otherwise
    pub fn with_override(path: &Path) -> Result<Self> {
        if path.is_file() {
            tracing::debug!("Using host page template {:?}", path);
            let source = fs::read_to_string(path)?;
            Self::from_source(&source).with_context(|| format!("Invalid template {:?}", path))
        } else {
            Self::new()
        }
    }

    fn from_source(source: &str) -> Result<Self> {
        let mut tera = Tera::default();

        // Post content is already HTML
        tera.autoescape_on(vec![]);
        tera.add_raw_template(LAYOUT, source)?;

        Ok(Self { tera })
    }

    /// Render the host page
    pub fn render(&self, page: &PageData) -> Result<String> {
        let context = Context::from_serialize(page)?;
        Ok(self.tera.render(LAYOUT, &context)?)
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    pub config: ConfigData,
    pub stylesheet_href: Option<String>,
    pub post_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub description: String,
    pub language: String,
    pub content_id: String,
    pub list_id: String,
}

impl From<&SiteConfig> for ConfigData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            language: config.language.clone(),
            content_id: config.content_id.clone(),
            list_id: config.list_id.clone(),
        }
    }
}
