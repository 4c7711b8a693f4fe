//! Generate static files

use anyhow::Result;
use notify_debouncer_mini::notify::{RecursiveMode, Watcher};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::{Duration, Instant};

use crate::content::ContentLoader;
use crate::generator::Generator;
use crate::Site;

/// Load all posts and write the site
pub fn run(site: &Site) -> Result<()> {
    let start = Instant::now();

    let posts = ContentLoader::new(site).load_posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    Generator::new(site)?.generate(&posts)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Reload the config and regenerate
pub fn rebuild(site: &Site) -> Result<Site> {
    let site = Site::new(&site.base_dir)?;
    run(&site)?;
    Ok(site)
}

/// Watch sources and the config file, regenerating after each batch of changes
pub async fn watch(site: &Site) -> Result<()> {
    let (tx, rx) = channel::<Vec<PathBuf>>();

    let mut debouncer = new_debouncer(
        Duration::from_millis(500),
        move |res: DebounceEventResult| match res {
            Ok(events) => {
                let _ = tx.send(events.into_iter().map(|e| e.path).collect());
            }
            Err(e) => tracing::error!("Watch error: {:?}", e),
        },
    )?;

    if site.source_dir.exists() {
        debouncer
            .watcher()
            .watch(&site.source_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", site.source_dir);
    }

    let config_path = site.config_path();
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let site = site.clone();
    let rebuilds = tokio::task::spawn_blocking(move || watch_loop(site, rx));

    tokio::select! {
        result = rebuilds => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Stopped watching");
        }
    }

    drop(debouncer);
    Ok(())
}

/// Rebuild once per batch of changed paths until the sender is dropped
///
/// Batches that arrive while a rebuild runs stay queued and trigger the next one.
pub fn watch_loop(mut site: Site, rx: Receiver<Vec<PathBuf>>) -> Site {
    for paths in rx {
        let changed: Vec<_> = paths
            .iter()
            .filter(|path| is_relevant(path, &site.public_dir))
            .collect();

        if changed.is_empty() {
            continue;
        }

        for path in &changed {
            tracing::info!("File changed: {}", path.display());
        }

        match rebuild(&site) {
            Ok(reloaded) => {
                site = reloaded;
                tracing::info!("Regenerated successfully");
            }
            Err(e) => tracing::error!("Generation failed: {}", e),
        }
    }

    site
}

/// Whether a change at `path` should trigger a rebuild
fn is_relevant(path: &Path, public_dir: &Path) -> bool {
    let path_str = path.to_string_lossy();
    !path.starts_with(public_dir)
        && !path.components().any(|c| c.as_os_str() == ".git")
        && !path_str.ends_with(".DS_Store")
        && !path_str.ends_with('~')
}
