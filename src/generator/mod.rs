//! Generator module - writes the single-page site

mod script;

pub use script::{client_bundle, manifest_json, DATA_ELEMENT_ID};

use anyhow::Result;
use std::fs;
use walkdir::WalkDir;

use crate::board::PostBoard;
use crate::content::Post;
use crate::dom::{ContentElement, HostPage, ListElement};
use crate::styles::{self, STYLESHEET_OUTPUT};
use crate::templates::{ConfigData, PageData, TemplateRenderer};
use crate::Site;

/// File name of the emitted post manifest
pub const MANIFEST_FILE: &str = "posts.json";

/// Static site generator
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::with_override(&site.source_dir.join("index.html"))?;

        Ok(Self {
            site: site.clone(),
            renderer,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, posts: &[Post]) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)?;

        self.copy_assets()?;

        let stylesheet_href = self.write_stylesheet()?;

        let html = self.render_page(posts, stylesheet_href)?;
        let index_path = self.site.public_dir.join("index.html");
        fs::write(&index_path, html)?;
        tracing::debug!("Generated: {:?}", index_path);

        if self.site.config.emit_manifest {
            let manifest_path = self.site.public_dir.join(MANIFEST_FILE);
            let contents: Vec<&str> = posts.iter().map(|p| p.content.as_str()).collect();
            fs::write(&manifest_path, serde_json::to_string_pretty(&contents)?)?;
            tracing::debug!("Generated: {:?}", manifest_path);
        }

        Ok(())
    }

    /// Render the host page with the board's initial state mounted
    pub fn render_page(&self, posts: &[Post], stylesheet_href: Option<String>) -> Result<String> {
        let config = &self.site.config;

        let data = PageData {
            config: ConfigData::from(config),
            stylesheet_href,
            post_count: posts.len(),
        };
        let mut page = HostPage::new(self.renderer.render(&data)?);

        page.require(&config.content_id)?;
        page.require(&config.list_id)?;

        let board = PostBoard::initialize_with_label(
            ContentElement::new(&config.content_id),
            ListElement::new(&config.list_id),
            posts.to_vec(),
            &config.link_label,
        );
        let (content, list) = board.into_parts();

        page.mount(list.id(), &list.inner_html())?;
        if let Some(inner) = content.inner_html() {
            page.mount(content.id(), inner)?;
        }

        let bundle = client_bundle(posts, &config.content_id, &config.list_id)?;
        page.append_to_body(&bundle)?;

        Ok(page.into_html())
    }

    /// Compile the stylesheet into the public dir, returning its href
    fn write_stylesheet(&self) -> Result<Option<String>> {
        let Some(css) = styles::compile_stylesheet(&self.site)? else {
            return Ok(None);
        };

        let dest = self.site.public_dir.join(STYLESHEET_OUTPUT);
        fs::write(&dest, css)?;
        tracing::debug!("Generated: {:?}", dest);

        Ok(Some(STYLESHEET_OUTPUT.to_string()))
    }

    /// Copy static assets (images, etc.)
    fn copy_assets(&self) -> Result<()> {
        let assets_dir = self.site.source_dir.join(&self.site.config.assets_dir);
        if !assets_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(&assets_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(&self.site.source_dir)?;
            let dest = self.site.public_dir.join(relative);

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::copy(path, &dest)?;
        }

        Ok(())
    }
}
