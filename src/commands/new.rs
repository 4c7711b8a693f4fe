//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Site;

/// Create a new post file, named after `path` or the slugified title
pub fn create_post(site: &Site, title: &str, path: Option<&str>) -> Result<PathBuf> {
    fs::create_dir_all(&site.posts_dir)?;

    let name = match path {
        Some(p) if p.ends_with(".md") => p.to_string(),
        Some(p) => format!("{}.md", p),
        None => format!("{}.md", slug::slugify(title)),
    };
    let file_path = site.posts_dir.join(name);

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        "---\ntitle: {}\n---\n\n# {}\n",
        serde_yaml::to_string(title)?.trim_end(),
        title
    );
    fs::write(&file_path, content)?;

    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}
