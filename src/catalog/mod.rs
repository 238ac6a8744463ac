//! Tag vocabulary harvested from the unfiltered project listing
//!
//! The backend has no tag endpoint; the catalog is built by flattening the
//! `tags` of every project in the unfiltered listing. Each tag has its first
//! dash replaced by a space before deduplication, so `robotic-arm` is offered
//! as `robotic arm` while `multi-axis-arm` becomes `multi axis-arm`.

use serde::Deserialize;
use std::collections::BTreeSet;

/// Minimal view of a listing element; only the tags are needed
///
/// `tags` is required: an element without it fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaggedEntry {
    pub tags: Vec<String>,
}

/// Normalize a raw backend tag for display and selection
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    tag.replacen('-', " ", 1)
}

/// Sorted, deduplicated set of selectable tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCatalog {
    tags: Vec<String>,
}

impl TagCatalog {
    #[must_use]
    pub const fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Build the catalog from raw tags
    #[must_use]
    pub fn from_raw_tags<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = raw.into_iter().map(|t| normalize_tag(t.as_ref())).collect();
        Self {
            tags: set.into_iter().collect(),
        }
    }

    /// Build the catalog from a decoded listing
    #[must_use]
    pub fn from_entries(entries: &[TaggedEntry]) -> Self {
        Self::from_raw_tags(entries.iter().flat_map(|e| e.tags.iter()))
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.binary_search_by(|t| t.as_str().cmp(tag)).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_replaces_first_dash_only() {
        assert_eq!(normalize_tag("robotic-arm"), "robotic arm");
        assert_eq!(normalize_tag("multi-axis-arm"), "multi axis-arm");
        assert_eq!(normalize_tag("ros2"), "ros2");
        assert_eq!(normalize_tag(""), "");
    }

    #[test]
    fn test_catalog_sorted_and_normalized() {
        let catalog = TagCatalog::from_raw_tags(["robotic-arm", "multi-axis-arm"]);
        assert_eq!(catalog.tags(), ["multi axis-arm", "robotic arm"]);
    }

    #[test]
    fn test_catalog_deduplicates_after_normalization() {
        let catalog = TagCatalog::from_raw_tags(["robotic-arm", "robotic arm", "ros2", "ros2"]);
        assert_eq!(catalog.tags(), ["robotic arm", "ros2"]);
    }

    #[test]
    fn test_catalog_from_entries_flattens_all_projects() {
        let entries = vec![
            TaggedEntry {
                tags: vec!["ros2".into(), "navigation".into()],
            },
            TaggedEntry { tags: vec![] },
            TaggedEntry {
                tags: vec!["humanoid".into(), "ros2".into()],
            },
        ];
        let catalog = TagCatalog::from_entries(&entries);

        assert_eq!(catalog.tags(), ["humanoid", "navigation", "ros2"]);
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("navigation"));
        assert!(!catalog.contains("lidar"));
    }

    #[test]
    fn test_entry_requires_tags_field() {
        let missing: Result<Vec<TaggedEntry>, _> = serde_json::from_str(r#"[{"name": "x"}]"#);
        assert!(missing.is_err());

        let present: Vec<TaggedEntry> =
            serde_json::from_str(r#"[{"name": "x", "tags": ["a-b"]}]"#).unwrap();
        assert_eq!(present[0].tags, vec!["a-b"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = TagCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog, TagCatalog::from_entries(&[]));
    }
}
