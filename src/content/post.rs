//! Post model

use serde::{Deserialize, Serialize};

/// A pre-rendered post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Rendered HTML content
    pub content: String,

    /// Source file name (relative to the posts directory)
    pub source: String,

    /// Title from front-matter, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Post {
    /// Create a new post from rendered content
    pub fn new(content: String, source: String) -> Self {
        Self {
            content,
            source,
            title: None,
        }
    }
}
