//! Client side of the post board

use anyhow::Result;

use crate::content::Post;
use crate::dom::html_escape;

/// Id of the embedded post data element
pub const DATA_ELEMENT_ID: &str = "postpane-data";

/// Binds the pre-rendered list entries to the embedded post data
const CLIENT_SCRIPT: &str = r#"<script>
(function() {
    var data = document.getElementById('postpane-data');
    var posts = JSON.parse(data.textContent);
    var content = document.getElementById(data.getAttribute('data-content'));
    var postList = document.getElementById(data.getAttribute('data-list'));
    if (!content || !postList) {
        throw new Error('postpane: content or post list element not found');
    }

    function loadPost(index) {
        if (index >= 0 && index < posts.length) {
            content.innerHTML = posts[index];
        }
    }

    var links = postList.querySelectorAll('a[data-post-index]');
    Array.prototype.forEach.call(links, function(link) {
        var index = Number(link.getAttribute('data-post-index'));
        link.onclick = function(event) {
            event.preventDefault();
            loadPost(index);
        };
    });
})();
</script>
"#;

/// Post contents as JSON that is safe inside a `<script>` element
pub fn manifest_json(posts: &[Post]) -> Result<String> {
    let contents: Vec<&str> = posts.iter().map(|p| p.content.as_str()).collect();
    let json = serde_json::to_string(&contents)?;

    // `<`, `>` and `&` only occur inside JSON strings here
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

/// Data element plus the script that wires up the list
pub fn client_bundle(posts: &[Post], content_id: &str, list_id: &str) -> Result<String> {
    Ok(format!(
        "<script type=\"application/json\" id=\"{}\" data-content=\"{}\" data-list=\"{}\">{}</script>\n{}",
        DATA_ELEMENT_ID,
        html_escape(content_id),
        html_escape(list_id),
        manifest_json(posts)?,
        CLIENT_SCRIPT
    ))
}
