//! Host page document

use lol_html::html_content::ContentType;
use lol_html::{element, rewrite_str, RewriteStrSettings, Selector};
use std::cell::Cell;

use crate::board::BoardError;

const INNER_START: &str = "<!--postpane:inner-start-->";
const INNER_END: &str = "<!--postpane:inner-end-->";

/// A rendered host page whose elements are addressed by id
#[derive(Debug, Clone)]
pub struct HostPage {
    html: String,
}

impl HostPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Fail unless an element with `id` exists
    pub fn require(&self, id: &str) -> Result<(), BoardError> {
        let selector = id_selector(id)?;
        let found = Cell::new(false);

        rewrite(
            &self.html,
            RewriteStrSettings {
                element_content_handlers: vec![element!(selector, |el| {
                    if el.can_have_content() {
                        found.set(true);
                    }
                    Ok(())
                })],
                ..RewriteStrSettings::new()
            },
        )?;

        if found.get() {
            Ok(())
        } else {
            Err(BoardError::MissingElement(id.to_string()))
        }
    }

    /// Markup currently inside the element with `id`
    pub fn inner_html(&self, id: &str) -> Result<String, BoardError> {
        let missing = || BoardError::MissingElement(id.to_string());
        let selector = id_selector(id)?;
        let done = Cell::new(false);

        let marked = rewrite(
            &self.html,
            RewriteStrSettings {
                element_content_handlers: vec![element!(selector, |el| {
                    if !done.get() && el.can_have_content() {
                        el.prepend(INNER_START, ContentType::Html);
                        el.append(INNER_END, ContentType::Html);
                        done.set(true);
                    }
                    Ok(())
                })],
                ..RewriteStrSettings::new()
            },
        )?;

        let start = marked.find(INNER_START).ok_or_else(missing)? + INNER_START.len();
        let end = marked[start..].find(INNER_END).ok_or_else(missing)? + start;
        Ok(marked[start..end].to_string())
    }

    /// Replace the inner markup of the first element with `id`
    pub fn mount(&mut self, id: &str, inner_html: &str) -> Result<(), BoardError> {
        let selector = id_selector(id)?;
        let done = Cell::new(false);

        let html = rewrite(
            &self.html,
            RewriteStrSettings {
                element_content_handlers: vec![element!(selector, |el| {
                    if !done.get() && el.can_have_content() {
                        el.set_inner_content(inner_html, ContentType::Html);
                        done.set(true);
                    }
                    Ok(())
                })],
                ..RewriteStrSettings::new()
            },
        )?;

        if !done.get() {
            return Err(BoardError::MissingElement(id.to_string()));
        }

        self.html = html;
        tracing::debug!("Mounted {} bytes into #{}", inner_html.len(), id);
        Ok(())
    }

    /// Append markup at the end of `<body>`, or of the document without one
    pub fn append_to_body(&mut self, snippet: &str) -> Result<(), BoardError> {
        let done = Cell::new(false);

        let html = rewrite(
            &self.html,
            RewriteStrSettings {
                element_content_handlers: vec![element!("body", |el| {
                    if !done.get() {
                        el.append(snippet, ContentType::Html);
                        done.set(true);
                    }
                    Ok(())
                })],
                ..RewriteStrSettings::new()
            },
        )?;

        self.html = html;
        if !done.get() {
            self.html.push_str(snippet);
        }
        Ok(())
    }
}

/// Attribute selector matching `id` exactly (ids are case-sensitive)
fn id_selector(id: &str) -> Result<String, BoardError> {
    let selector = format!(
        "[id=\"{}\"]",
        id.replace('\\', "\\\\").replace('"', "\\\"")
    );
    if selector.parse::<Selector>().is_err() {
        return Err(BoardError::MissingElement(id.to_string()));
    }
    Ok(selector)
}

fn rewrite(html: &str, settings: RewriteStrSettings<'_, '_>) -> Result<String, BoardError> {
    rewrite_str(html, settings).map_err(|e| BoardError::Rewrite(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
<nav><div id="post-list"></div></nav>
<main id="content"><p>loading</p></main>
</body></html>"#;

    #[test]
    fn test_require_existing_and_missing() {
        let page = HostPage::new(PAGE);
        assert!(page.require("content").is_ok());
        assert!(page.require("post-list").is_ok());
        assert_eq!(
            page.require("sidebar"),
            Err(BoardError::MissingElement("sidebar".to_string()))
        );
    }

    #[test]
    fn test_mount_replaces_inner_markup() {
        let mut page = HostPage::new(PAGE);
        page.mount("content", "<h1>Hi</h1>").unwrap();
        assert!(page.html().contains(r#"<main id="content"><h1>Hi</h1></main>"#));
        assert!(!page.html().contains("loading"));
    }

    #[test]
    fn test_mount_respects_nested_tags() {
        let mut page =
            HostPage::new(r#"<div id="content"><div>old</div><div>older</div></div><div>keep</div>"#);
        page.mount("content", "new").unwrap();
        assert_eq!(page.html(), r#"<div id="content">new</div><div>keep</div>"#);
    }

    #[test]
    fn test_id_must_be_exact_attribute() {
        let page = HostPage::new(r#"<div data-id="content"></div><div id="content-x"></div>"#);
        assert!(page.require("content").is_err());
    }

    #[test]
    fn test_ids_are_case_sensitive() {
        let mut page = HostPage::new(r#"<div id="Content">keep</div><div id="content">old</div>"#);
        page.mount("content", "new").unwrap();
        assert_eq!(
            page.html(),
            r#"<div id="Content">keep</div><div id="content">new</div>"#
        );
    }

    #[test]
    fn test_commented_out_element_is_ignored() {
        let mut page =
            HostPage::new(r#"<!-- <div id="content"></div> --><main id="content">old</main>"#);
        page.mount("content", "NEW").unwrap();
        assert_eq!(
            page.html(),
            r#"<!-- <div id="content"></div> --><main id="content">NEW</main>"#
        );
    }

    #[test]
    fn test_unquoted_id_and_gt_in_attribute() {
        let page = HostPage::new(r#"<main id=content>a</main><div title="a>b" id="post-list">b</div>"#);
        assert_eq!(page.inner_html("content").unwrap(), "a");
        assert_eq!(page.inner_html("post-list").unwrap(), "b");
    }

    #[test]
    fn test_attributes_before_id_and_single_quotes() {
        let page = HostPage::new(r#"<section class="list" id='post-list'>x</section>"#);
        assert_eq!(page.inner_html("post-list").unwrap(), "x");
    }

    #[test]
    fn test_void_element_cannot_host_content() {
        let mut page = HostPage::new(r#"<img id="content">"#);
        assert!(page.require("content").is_err());
        assert!(page.mount("content", "x").is_err());
        assert_eq!(page.html(), r#"<img id="content">"#);
    }

    #[test]
    fn test_append_to_body() {
        let mut page = HostPage::new("<html><body><p>x</p></body></html>");
        page.append_to_body("<script></script>").unwrap();
        assert_eq!(
            page.html(),
            "<html><body><p>x</p><script></script></body></html>"
        );

        let mut fragment = HostPage::new("<p>x</p>");
        fragment.append_to_body("S").unwrap();
        assert_eq!(fragment.into_html(), "<p>x</p>S");
    }
}
