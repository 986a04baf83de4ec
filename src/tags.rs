//! Tag vocabulary.
//!
//! The vocabulary is every distinct tag in the catalog, sorted so the
//! pricing tags come first: `free`, then `paid`, then `free tier`, then
//! everything else in locale-style order.

use crate::catalog::Catalog;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Pricing tags that sort ahead of all others, in priority order.
pub const PRIORITY_TAGS: [&str; 3] = ["free", "paid", "free tier"];

/// Collect, dedupe and sort the tags of every tool in the catalog.
pub fn vocabulary(catalog: &Catalog) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags: Vec<String> = catalog
        .tools()
        .iter()
        .flat_map(|tool| tool.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect();

    tags.sort_by(|a, b| compare_tags(a, b));
    tags
}

/// Tag comparator.
///
/// Checked in a fixed chain: whichever side is `free` wins, then `paid`,
/// then `free tier`. A priority tag compared with itself reports `Less`
/// rather than `Equal`; `vocabulary` dedupes first so the sort never sees
/// that case.
pub fn compare_tags(a: &str, b: &str) -> Ordering {
    for priority in PRIORITY_TAGS {
        if a == priority {
            return Ordering::Less;
        }
        if b == priority {
            return Ordering::Greater;
        }
    }
    locale_compare(a, b)
}

/// Case-insensitive ordering, lowercase first on ties.
fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Tool;

    fn catalog(tag_lists: &[&[&str]]) -> Catalog {
        let tools = tag_lists
            .iter()
            .enumerate()
            .map(|(i, tags)| Tool {
                id: format!("tool-{}", i),
                title: String::new(),
                description: String::new(),
                url: String::new(),
                image: String::new(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
            })
            .collect();
        Catalog::new(tools).unwrap()
    }

    #[test]
    fn test_bundled_vocabulary_order() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(
            vocabulary(&catalog),
            vec!["free", "paid", "free tier", "art", "gamedev", "IDE", "OSS", "react", "ui"]
        );
    }

    #[test]
    fn test_vocabulary_dedupes() {
        let catalog = catalog(&[&["ui", "art"], &["art", "ui"], &["ui"]]);
        assert_eq!(vocabulary(&catalog), vec!["art", "ui"]);
    }

    #[test]
    fn test_free_before_everything_else() {
        let catalog = catalog(&[&["aaa", "free"], &["0-first"]]);
        let vocab = vocabulary(&catalog);
        assert_eq!(vocab[0], "free");
    }

    #[test]
    fn test_priority_chain_is_consistent() {
        assert_eq!(compare_tags("free", "paid"), Ordering::Less);
        assert_eq!(compare_tags("paid", "free"), Ordering::Greater);
        assert_eq!(compare_tags("paid", "free tier"), Ordering::Less);
        assert_eq!(compare_tags("free tier", "paid"), Ordering::Greater);
        assert_eq!(compare_tags("free tier", "art"), Ordering::Less);
        assert_eq!(compare_tags("art", "free tier"), Ordering::Greater);
    }

    #[test]
    fn test_priority_tag_against_itself() {
        assert_eq!(compare_tags("free", "free"), Ordering::Less);
        assert_eq!(compare_tags("react", "react"), Ordering::Equal);
    }

    #[test]
    fn test_locale_style_fallback() {
        assert_eq!(compare_tags("art", "IDE"), Ordering::Less);
        assert_eq!(compare_tags("OSS", "react"), Ordering::Less);
        assert_eq!(compare_tags("ui", "ui"), Ordering::Equal);
        assert_eq!(compare_tags("ide", "IDE"), Ordering::Less);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(vocabulary(&Catalog::default()).is_empty());
    }
}
