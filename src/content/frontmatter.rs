//! Front-matter stripping

use serde::Deserialize;

/// Optional YAML header of a post file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
}

impl FrontMatter {
    /// Split a leading `---` block off the content
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> (Self, &str) {
        let Some(rest) = content.strip_prefix("---") else {
            return (FrontMatter::default(), content);
        };

        // The opening fence must be alone on its line
        let Some(rest) = rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))
        else {
            return (FrontMatter::default(), content);
        };

        let Some(end_pos) = find_closing_fence(rest) else {
            return (FrontMatter::default(), content);
        };

        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos..]
            .trim_start_matches('\n')
            .trim_start_matches("---")
            .trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return (FrontMatter::default(), remaining);
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_content) {
            Ok(fm) => (fm, remaining),
            Err(e) => {
                // A thematic break followed by prose, not a header
                tracing::debug!("Not treating leading block as front-matter: {}", e);
                (FrontMatter::default(), content)
            }
        }
    }
}

/// Offset of the `\n` preceding a line that is exactly `---`
fn find_closing_fence(rest: &str) -> Option<usize> {
    if rest.starts_with("---\n") || rest.starts_with("---\r\n") || rest == "---" {
        return Some(0);
    }
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if offset > 0 && line.trim_end_matches(['\n', '\r']) == "---" {
            return Some(offset - 1);
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = "---\ntitle: Hello World\n---\n\nThis is the content.\n";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(remaining, "This is the content.\n");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Heading\n\nBody";
        let (fm, remaining) = FrontMatter::parse(content);
        assert!(fm.title.is_none());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_unclosed_block_is_content() {
        let content = "---\ntitle: Oops\n\nno closing fence";
        let (fm, remaining) = FrontMatter::parse(content);
        assert!(fm.title.is_none());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_prose_between_rules_is_content() {
        let content = "---\nJust some prose here\n---\nmore";
        let (fm, remaining) = FrontMatter::parse(content);
        assert!(fm.title.is_none());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let content = "---\ntitle: T\ndate: 2024-01-15\ntags: [a]\n---\nbody";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("T"));
        assert_eq!(remaining, "body");
    }
}
