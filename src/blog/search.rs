//! Case-insensitive title search.

use crate::blog::types::Blog;

/// Keep the blogs whose title contains `query`, ignoring case.
///
/// Order is preserved. An empty query matches everything.
pub fn search_blogs(blogs: Vec<Blog>, query: &str) -> Vec<Blog> {
    let needle = query.to_lowercase();
    blogs
        .into_iter()
        .filter(|blog| blog.title.to_lowercase().contains(&needle))
        .collect()
}
