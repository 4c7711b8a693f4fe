//! List site posts

use anyhow::Result;

use crate::board::PostLink;
use crate::content::ContentLoader;
use crate::Site;

/// One line per post, in display order
pub fn describe(site: &Site) -> Result<Vec<String>> {
    let posts = ContentLoader::new(site).load_posts()?;

    Ok(posts
        .iter()
        .enumerate()
        .map(|(i, post)| {
            let link = PostLink::new(&site.config.link_label, i);
            match &post.title {
                Some(title) => format!("  {} - {} [{}]", link.label, title, post.source),
                None => format!("  {} [{}]", link.label, post.source),
            }
        })
        .collect())
}

/// Print discovered posts
pub fn run(site: &Site) -> Result<()> {
    let lines = describe(site)?;
    println!("Posts ({}):", lines.len());
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_describe_posts() {
        let dir = TempDir::new().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default());
        fs::create_dir_all(&site.posts_dir).unwrap();
        fs::write(site.posts_dir.join("a.md"), "---\ntitle: Alpha\n---\nx").unwrap();
        fs::write(site.posts_dir.join("b.md"), "y").unwrap();

        assert_eq!(
            describe(&site).unwrap(),
            vec!["  Post 1 - Alpha [a.md]", "  Post 2 [b.md]"]
        );
    }
}
