//! Blog payload types and error definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// One blog entry from the upstream list.
///
/// Only `title` is interpreted; every other field is carried through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub title: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Blog {
    /// A blog with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            extra: Map::new(),
        }
    }
}

/// Upstream response body: `{ "blogs": [ ... ] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogListResponse {
    pub blogs: Vec<Blog>,
}

impl BlogListResponse {
    /// Interpret a raw upstream document.
    ///
    /// Fails unless the document is an object whose `blogs` key holds an
    /// array of objects with a string `title`.
    pub fn from_value(value: Value) -> BlogResult<Self> {
        serde_json::from_value(value).map_err(BlogError::InvalidFormat)
    }
}

/// Aggregate statistics over one blog list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogStats {
    pub total_blogs: usize,
    pub longest_blog: String,
    pub blogs_with_privacy: usize,
    pub unique_blog_titles: Vec<String>,
}

/// Errors raised while interpreting or summarizing blog data.
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Invalid data format received from the API: {0}")]
    InvalidFormat(#[source] serde_json::Error),

    #[error("Cannot compute statistics over an empty blog list")]
    EmptyBlogList,
}

/// Result type for blog operations.
pub type BlogResult<T> = Result<T, BlogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_keeps_extra_fields() {
        let list = BlogListResponse::from_value(json!({
            "blogs": [
                { "id": "b-1", "title": "Hello", "image_url": "https://img.test/1.png" }
            ]
        }))
        .unwrap();

        assert_eq!(list.blogs.len(), 1);
        let blog = &list.blogs[0];
        assert_eq!(blog.title, "Hello");
        assert_eq!(blog.extra["id"], "b-1");

        let round = serde_json::to_value(blog).unwrap();
        assert_eq!(
            round,
            json!({ "id": "b-1", "title": "Hello", "image_url": "https://img.test/1.png" })
        );
    }

    #[test]
    fn test_missing_blogs_key_is_invalid() {
        let err = BlogListResponse::from_value(json!({ "posts": [] })).unwrap_err();
        assert!(matches!(err, BlogError::InvalidFormat(_)));
    }

    #[test]
    fn test_non_array_blogs_is_invalid() {
        let err = BlogListResponse::from_value(json!({ "blogs": "nope" })).unwrap_err();
        assert!(err.to_string().starts_with("Invalid data format"));
    }

    #[test]
    fn test_non_object_payload_is_invalid() {
        assert!(BlogListResponse::from_value(json!([{ "title": "x" }])).is_err());
        assert!(BlogListResponse::from_value(Value::Null).is_err());
    }

    #[test]
    fn test_blog_without_title_is_invalid() {
        let err = BlogListResponse::from_value(json!({ "blogs": [{ "id": 1 }] })).unwrap_err();
        assert!(matches!(err, BlogError::InvalidFormat(_)));
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let stats = BlogStats {
            total_blogs: 1,
            longest_blog: "A".into(),
            blogs_with_privacy: 0,
            unique_blog_titles: vec!["A".into()],
        };
        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            json!({
                "totalBlogs": 1,
                "longestBlog": "A",
                "blogsWithPrivacy": 0,
                "uniqueBlogTitles": ["A"]
            })
        );
    }
}
