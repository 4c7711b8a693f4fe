//! Content loader - resolves post files and renders them in order

use anyhow::{bail, Context, Result};
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer, Post};
use crate::Site;

/// Loads posts from the posts directory
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        let renderer = MarkdownRenderer::with_options(&site.config.highlight);
        Self { site, renderer }
    }

    /// Load every post, in display order
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        match &self.site.config.posts {
            Some(manifest) => self.load_manifest(manifest),
            None => self.scan(),
        }
    }

    /// Files of the posts directory matching `posts_pattern`, sorted by name
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let posts_dir = &self.site.posts_dir;
        if !posts_dir.exists() {
            tracing::debug!("Posts directory {:?} does not exist", posts_dir);
            return Ok(Vec::new());
        }

        let pattern = Pattern::new(&self.site.config.posts_pattern).with_context(|| {
            format!("Invalid posts_pattern {:?}", self.site.config.posts_pattern)
        })?;

        let files = WalkDir::new(posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|name| pattern.matches(name))
                    .unwrap_or(false)
            })
            .map(|e| e.into_path())
            .collect();

        Ok(files)
    }

    /// Directory scan; files that fail to load are skipped
    fn scan(&self) -> Result<Vec<Post>> {
        let mut posts = Vec::new();

        for path in self.discover()? {
            match self.load_post(&path) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        Ok(posts)
    }

    /// Explicit list of files; every entry must load
    fn load_manifest(&self, manifest: &[String]) -> Result<Vec<Post>> {
        let mut posts = Vec::with_capacity(manifest.len());

        for name in manifest {
            let path = self.site.posts_dir.join(name);
            if !path.is_file() {
                bail!("Post listed in manifest not found: {:?}", path);
            }
            posts.push(
                self.load_post(&path)
                    .with_context(|| format!("Failed to load post {:?}", path))?,
            );
        }

        Ok(posts)
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<Post> {
        let raw = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&raw);

        let source = path
            .strip_prefix(&self.site.posts_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let mut post = Post::new(self.renderer.render(body)?, source);
        post.title = fm.title;

        tracing::debug!("Loaded post {}", post.source);
        Ok(post)
    }
}
