//! Stylesheet compilation

use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::Site;

/// File name of the compiled stylesheet inside the public directory
pub const STYLESHEET_OUTPUT: &str = "main.css";

/// Path of the configured stylesheet entry
pub fn stylesheet_path(site: &Site) -> PathBuf {
    site.source_dir.join(&site.config.stylesheet)
}

/// Compile the configured stylesheet, `None` when there is none
pub fn compile_stylesheet(site: &Site) -> Result<Option<String>> {
    let path = stylesheet_path(site);
    if !path.is_file() {
        tracing::debug!("No stylesheet at {:?}", path);
        return Ok(None);
    }

    let css = match path.extension().and_then(|e| e.to_str()) {
        Some("scss") | Some("sass") => compile_scss(&path)?,
        _ => fs::read_to_string(&path)?,
    };

    Ok(Some(css))
}

fn compile_scss(path: &Path) -> Result<String> {
    let include_path = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    grass::from_path(
        path,
        &grass::Options::default()
            .load_path(include_path)
            .style(grass::OutputStyle::Compressed),
    )
    .map_err(|e| anyhow!("Failed to compile SCSS at {:?}: {}", path, e))
}
