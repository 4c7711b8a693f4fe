//! Post board - the content pane and the clickable post list
//!
//! A [`PostBoard`] owns the two page elements it drives and the ordered
//! posts it displays. It is created once through [`PostBoard::initialize`];
//! afterwards [`PostBoard::click`] is the only entry point.

use thiserror::Error;

use crate::content::Post;

/// Board errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Post index {index} out of range ({len} posts)")]
    PostIndexOutOfRange { index: usize, len: usize },

    #[error("Element not found: #{0}")]
    MissingElement(String),

    #[error("Failed to rewrite host page: {0}")]
    Rewrite(String),
}

/// The element whose markup shows the current post
pub trait ContentArea {
    fn set_inner_html(&mut self, html: &str);
}

/// The element receiving one link per post
pub trait PostListContainer {
    fn append_link(&mut self, link: &PostLink);
    fn append_break(&mut self);
}

/// A click delivered to a list entry
pub trait ClickEvent {
    fn prevent_default(&mut self);
}

/// A single entry of the post list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLink {
    /// Zero-based post index
    pub index: usize,
    /// Visible text, e.g. "Post 1"
    pub label: String,
}

impl PostLink {
    /// Entry `index` labeled `"{prefix} {index + 1}"`
    pub fn new(prefix: &str, index: usize) -> Self {
        Self {
            index,
            label: format!("{} {}", prefix, index + 1),
        }
    }

    /// Link target; navigation is always suppressed
    pub fn href(&self) -> &'static str {
        "#"
    }
}

/// Drives a content area and a post list over a fixed set of posts
pub struct PostBoard<C, L> {
    content: C,
    list: L,
    posts: Vec<Post>,
    label: String,
    current: Option<usize>,
}

impl<C: ContentArea, L: PostListContainer> PostBoard<C, L> {
    /// Build the list and show the first post, if any
    pub fn initialize(container: C, list_container: L, posts: Vec<Post>) -> Self {
        Self::initialize_with_label(container, list_container, posts, "Post")
    }

    /// Same as [`PostBoard::initialize`] with a custom link label prefix
    pub fn initialize_with_label(
        container: C,
        list_container: L,
        posts: Vec<Post>,
        label: &str,
    ) -> Self {
        let mut board = Self {
            content: container,
            list: list_container,
            posts,
            label: label.to_string(),
            current: None,
        };

        board.build_list();

        if !board.posts.is_empty() {
            // Index 0 exists, so this cannot fail
            let _ = board.render(0);
        }

        tracing::debug!("Initialized post board with {} posts", board.posts.len());
        board
    }

    /// Replace the content area's markup with post `post_index`
    pub fn render(&mut self, post_index: usize) -> Result<(), BoardError> {
        let post = self
            .posts
            .get(post_index)
            .ok_or(BoardError::PostIndexOutOfRange {
                index: post_index,
                len: self.posts.len(),
            })?;

        self.content.set_inner_html(&post.content);
        self.current = Some(post_index);
        Ok(())
    }

    /// Append one labeled link and a line break per post, in order
    pub fn build_list(&mut self) {
        for index in 0..self.posts.len() {
            let link = PostLink::new(&self.label, index);
            self.list.append_link(&link);
            self.list.append_break();
        }
    }

    /// Click handler for list entry `index`
    pub fn click<E: ClickEvent>(&mut self, index: usize, event: &mut E) -> Result<(), BoardError> {
        event.prevent_default();
        self.render(index)
    }
}

impl<C, L> PostBoard<C, L> {
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Index of the displayed post
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn post_list(&self) -> &L {
        &self.list
    }

    /// Give back the two elements
    pub fn into_parts(self) -> (C, L) {
        (self.content, self.list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ContentElement, ListElement, ListNode, MouseClick};

    fn posts(blobs: &[&str]) -> Vec<Post> {
        blobs
            .iter()
            .enumerate()
            .map(|(i, b)| Post::new(b.to_string(), format!("{}.md", i)))
            .collect()
    }

    fn board(blobs: &[&str]) -> PostBoard<ContentElement, ListElement> {
        PostBoard::initialize(
            ContentElement::new("content"),
            ListElement::new("post-list"),
            posts(blobs),
        )
    }

    #[test]
    fn test_list_has_one_labeled_entry_per_post() {
        let board = board(&["<p>a</p>", "<p>b</p>", "<p>c</p>"]);
        let links = board.post_list().links();
        let labels: Vec<_> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Post 1", "Post 2", "Post 3"]);
        assert_eq!(
            links.iter().map(|l| l.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_each_link_is_followed_by_break() {
        let board = board(&["<p>a</p>", "<p>b</p>"]);
        let nodes = board.post_list().children();
        assert_eq!(nodes.len(), 4);
        assert!(matches!(nodes[0], ListNode::Link(_)));
        assert_eq!(nodes[1], ListNode::Break);
        assert!(matches!(nodes[2], ListNode::Link(_)));
        assert_eq!(nodes[3], ListNode::Break);
    }

    #[test]
    fn test_first_post_shown_after_initialize() {
        let board = board(&["<h1>First</h1>", "<h1>Second</h1>"]);
        assert_eq!(board.content().inner_html(), Some("<h1>First</h1>"));
        assert_eq!(board.current(), Some(0));
    }

    #[test]
    fn test_click_shows_selected_post_regardless_of_history() {
        let mut board = board(&["a", "b", "c"]);

        let mut event = MouseClick::new();
        board.click(2, &mut event).unwrap();
        assert_eq!(board.content().inner_html(), Some("c"));

        board.click(0, &mut MouseClick::new()).unwrap();
        board.click(1, &mut MouseClick::new()).unwrap();
        board.click(1, &mut MouseClick::new()).unwrap();
        assert_eq!(board.content().inner_html(), Some("b"));
        assert_eq!(board.current(), Some(1));
    }

    #[test]
    fn test_click_prevents_navigation() {
        let mut board = board(&["a", "b"]);
        let mut event = MouseClick::new();
        assert!(!event.default_prevented());
        board.click(1, &mut event).unwrap();
        assert!(event.default_prevented());
    }

    #[test]
    fn test_no_posts_leaves_everything_empty() {
        let board = board(&[]);
        assert!(board.is_empty());
        assert_eq!(board.content().inner_html(), None);
        assert!(board.post_list().children().is_empty());
        assert_eq!(board.current(), None);
    }

    #[test]
    fn test_out_of_range_render_keeps_content() {
        let mut board = board(&["a", "b"]);
        let err = board.render(5).unwrap_err();
        assert_eq!(err, BoardError::PostIndexOutOfRange { index: 5, len: 2 });
        assert_eq!(board.content().inner_html(), Some("a"));

        let mut event = MouseClick::new();
        assert!(board.click(2, &mut event).is_err());
        assert!(event.default_prevented());
        assert_eq!(board.current(), Some(0));
    }

    #[test]
    fn test_custom_label() {
        let board = PostBoard::initialize_with_label(
            ContentElement::new("content"),
            ListElement::new("post-list"),
            posts(&["a", "b"]),
            "Entry",
        );
        assert_eq!(board.post_list().links()[1].label, "Entry 2");
    }
}
