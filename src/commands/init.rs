//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;

const CONFIG_TEMPLATE: &str = r#"# Site
title: Blog
description: ''
language: en

# Directory
source_dir: src
posts_dir: posts
public_dir: dist
assets_dir: assets

# Posts
## Glob matched against file names in posts_dir
posts_pattern: '*.md'
## Uncomment to list post files explicitly, in display order
# posts:
#   - my-first-post.md
link_label: Post
emit_manifest: true

# Page
stylesheet: styles/main.scss
content_id: content
list_id: post-list

highlight:
  enable: true
  theme: base16-ocean.dark
  line_number: false
"#;

const SAMPLE_POST: &str = r#"---
title: My First Post
---

# My First Post

Welcome! Every Markdown file in the posts directory shows up in the list
on the left. Create another one with:

```bash
$ postpane new "My Second Post"
```
"#;

const SAMPLE_STYLESHEET: &str = r#"$accent: #3a6ea5;

body {
  display: flex;
  gap: 2rem;
  font-family: system-ui, sans-serif;
}

#post-list {
  min-width: 8rem;

  a {
    color: $accent;
    text-decoration: none;
  }
}
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config = SiteConfig::default();
    let source_dir = target_dir.join(&config.source_dir);

    // Create directory structure
    fs::create_dir_all(source_dir.join(&config.posts_dir))?;
    fs::create_dir_all(source_dir.join(&config.assets_dir))?;

    write_if_missing(&target_dir.join("_config.yml"), CONFIG_TEMPLATE)?;
    write_if_missing(
        &source_dir.join(&config.posts_dir).join("my-first-post.md"),
        SAMPLE_POST,
    )?;
    write_if_missing(&source_dir.join(&config.stylesheet), SAMPLE_STYLESHEET)?;

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::info!("Keeping existing {:?}", path);
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::debug!("Created {:?}", path);
    Ok(())
}
