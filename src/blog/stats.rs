//! Aggregate statistics over a blog list.

use std::collections::HashSet;

use crate::blog::types::{Blog, BlogError, BlogResult, BlogStats};

/// Keyword counted by `blogs_with_privacy`.
pub const PRIVACY_KEYWORD: &str = "privacy";

/// Compute statistics for a non-empty blog list.
///
/// Title length is measured in UTF-16 code units. Ties for the longest title go to
/// the earliest blog.
pub fn compute_stats(blogs: &[Blog]) -> BlogResult<BlogStats> {
    let longest = longest_title(blogs).ok_or(BlogError::EmptyBlogList)?;

    Ok(BlogStats {
        total_blogs: blogs.len(),
        longest_blog: longest.to_string(),
        blogs_with_privacy: count_containing(blogs, PRIVACY_KEYWORD),
        unique_blog_titles: unique_titles(blogs),
    })
}

fn longest_title(blogs: &[Blog]) -> Option<&str> {
    let mut best: Option<(&str, usize)> = None;
    for blog in blogs {
        let len = blog.title.encode_utf16().count();
        match best {
            Some((_, best_len)) if len <= best_len => {}
            _ => best = Some((blog.title.as_str(), len)),
        }
    }
    best.map(|(title, _)| title)
}

fn count_containing(blogs: &[Blog], keyword: &str) -> usize {
    let keyword = keyword.to_lowercase();
    blogs
        .iter()
        .filter(|blog| blog.title.to_lowercase().contains(&keyword))
        .count()
}

fn unique_titles(blogs: &[Blog]) -> Vec<String> {
    let mut seen = HashSet::new();
    blogs
        .iter()
        .filter(|blog| seen.insert(blog.title.as_str()))
        .map(|blog| blog.title.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blogs(titles: &[&str]) -> Vec<Blog> {
        titles.iter().map(|t| Blog::titled(*t)).collect()
    }

    #[test]
    fn test_reference_scenario() {
        let titles = ["Our Privacy Policy", "Hello World", "Hello World"];
        let stats = compute_stats(&blogs(&titles)).unwrap();

        assert_eq!(
            stats,
            BlogStats {
                total_blogs: 3,
                longest_blog: "Our Privacy Policy".into(),
                blogs_with_privacy: 1,
                unique_blog_titles: vec!["Our Privacy Policy".into(), "Hello World".into()],
            }
        );
    }

    #[test]
    fn test_longest_tie_goes_to_first() {
        let stats = compute_stats(&blogs(&["abc", "xyz", "ab", "def"])).unwrap();
        assert_eq!(stats.longest_blog, "abc");
    }

    #[test]
    fn test_longest_counts_utf16_units_not_bytes() {
        // "ééééé" is 5 units / 10 bytes.
        let stats = compute_stats(&blogs(&["ééééé", "abcdef"])).unwrap();
        assert_eq!(stats.longest_blog, "abcdef");
    }

    #[test]
    fn test_astral_characters_count_as_two_units() {
        // Three emoji are 3 chars but 6 UTF-16 units.
        let stats = compute_stats(&blogs(&["😀😀😀", "abcde"])).unwrap();
        assert_eq!(stats.longest_blog, "😀😀😀");
    }

    #[test]
    fn test_privacy_is_case_insensitive() {
        let stats = compute_stats(&blogs(&[
            "PRIVACY Policy",
            "data privacy matters",
            "PrIvAcY",
            "Private affairs",
        ]))
        .unwrap();
        assert_eq!(stats.blogs_with_privacy, 3);
    }

    #[test]
    fn test_unique_titles_are_exact_and_ordered() {
        let stats = compute_stats(&blogs(&["b", "a", "B", "b", "a", "c"])).unwrap();
        assert_eq!(stats.unique_blog_titles, vec!["b", "a", "B", "c"]);
        assert_eq!(stats.total_blogs, 6);
    }

    #[test]
    fn test_single_blog() {
        let stats = compute_stats(&blogs(&["Only one"])).unwrap();
        assert_eq!(stats.total_blogs, 1);
        assert_eq!(stats.longest_blog, "Only one");
        assert_eq!(stats.unique_blog_titles, vec!["Only one"]);
    }

    #[test]
    fn test_empty_list_is_error() {
        let err = compute_stats(&[]).unwrap_err();
        assert!(matches!(err, BlogError::EmptyBlogList));
    }

    #[test]
    fn test_empty_titles() {
        let stats = compute_stats(&blogs(&["", ""])).unwrap();
        assert_eq!(stats.longest_blog, "");
        assert_eq!(stats.unique_blog_titles, vec![""]);
    }
}
