//! In-memory page elements and the host page document

mod page;

pub use page::HostPage;

use crate::board::{ClickEvent, ContentArea, PostLink, PostListContainer};

/// Content pane backed by a string
#[derive(Debug, Clone, Default)]
pub struct ContentElement {
    id: String,
    inner_html: Option<String>,
}

impl ContentElement {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            inner_html: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current markup, `None` if never set
    pub fn inner_html(&self) -> Option<&str> {
        self.inner_html.as_deref()
    }
}

impl ContentArea for ContentElement {
    fn set_inner_html(&mut self, html: &str) {
        self.inner_html = Some(html.to_string());
    }
}

/// Child node of a [`ListElement`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListNode {
    Link(PostLink),
    Break,
}

/// Post list backed by a node vector
#[derive(Debug, Clone, Default)]
pub struct ListElement {
    id: String,
    children: Vec<ListNode>,
}

impl ListElement {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn children(&self) -> &[ListNode] {
        &self.children
    }

    pub fn links(&self) -> Vec<&PostLink> {
        self.children
            .iter()
            .filter_map(|n| match n {
                ListNode::Link(link) => Some(link),
                ListNode::Break => None,
            })
            .collect()
    }

    /// Serialize children as HTML
    pub fn inner_html(&self) -> String {
        let mut html = String::new();
        for node in &self.children {
            match node {
                ListNode::Link(link) => html.push_str(&format!(
                    r#"<a href="{}" data-post-index="{}">{}</a>"#,
                    link.href(),
                    link.index,
                    html_escape(&link.label)
                )),
                ListNode::Break => html.push_str("<br>"),
            }
        }
        html
    }
}

impl PostListContainer for ListElement {
    fn append_link(&mut self, link: &PostLink) {
        self.children.push(ListNode::Link(link.clone()));
    }

    fn append_break(&mut self) {
        self.children.push(ListNode::Break);
    }
}

/// A click that records whether its default action was suppressed
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseClick {
    default_prevented: bool,
}

impl MouseClick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl ClickEvent for MouseClick {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// Simple HTML escaping
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_serialization() {
        let mut list = ListElement::new("post-list");
        list.append_link(&PostLink::new("Post", 0));
        list.append_break();
        list.append_link(&PostLink::new("Post", 1));
        list.append_break();
        assert_eq!(
            list.inner_html(),
            r##"<a href="#" data-post-index="0">Post 1</a><br><a href="#" data-post-index="1">Post 2</a><br>"##
        );
    }

    #[test]
    fn test_label_is_escaped() {
        let mut list = ListElement::new("post-list");
        list.append_link(&PostLink::new("<b>", 0));
        assert!(list.inner_html().contains("&lt;b&gt; 1"));
    }

    #[test]
    fn test_content_element_starts_unset() {
        let mut content = ContentElement::new("content");
        assert_eq!(content.inner_html(), None);
        content.set_inner_html("<p>x</p>");
        assert_eq!(content.inner_html(), Some("<p>x</p>"));
    }
}
