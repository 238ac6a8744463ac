//! Fuzzy narrowing of the tag catalog
//!
//! Typing after `/` in the tag pane narrows the visible tags with nucleo.
//! Matching tags keep catalog (alphabetical) order rather than score order so
//! the list does not jump around while typing.

use nucleo::pattern::{CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher, Utf32Str};
use std::fmt;

/// Filter text plus the catalog indices it currently matches
pub struct TagFilter {
    query: String,
    matcher: Matcher,
    visible: Vec<usize>,
}

impl fmt::Debug for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagFilter")
            .field("query", &self.query)
            .field("visible", &self.visible.len())
            .finish_non_exhaustive()
    }
}

impl Default for TagFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TagFilter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: String::new(),
            matcher: Matcher::new(Config::DEFAULT),
            visible: Vec::new(),
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Indices into the catalog's tag list, in catalog order
    #[must_use]
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub fn push(&mut self, c: char, tags: &[String]) {
        self.query.push(c);
        self.apply(tags);
    }

    pub fn pop(&mut self, tags: &[String]) {
        self.query.pop();
        self.apply(tags);
    }

    pub fn clear(&mut self, tags: &[String]) {
        self.query.clear();
        self.apply(tags);
    }

    /// Recompute the visible indices for `tags`
    pub fn apply(&mut self, tags: &[String]) {
        if self.query.trim().is_empty() {
            self.visible = (0..tags.len()).collect();
            return;
        }

        let pattern = Pattern::parse(&self.query, CaseMatching::Smart, Normalization::Smart);
        let mut buf = Vec::new();
        let matcher = &mut self.matcher;
        self.visible = tags
            .iter()
            .enumerate()
            .filter_map(|(idx, tag)| {
                pattern
                    .score(Utf32Str::new(tag, &mut buf), matcher)
                    .map(|_| idx)
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags() -> Vec<String> {
        ["lidar", "manipulation", "robotic arm", "ros2", "simulation"]
            .iter()
            .map(|s| (*s).to_string())
            .collect()
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let tags = tags();
        let mut filter = TagFilter::new();
        filter.apply(&tags);
        assert_eq!(filter.visible(), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_query_narrows_in_catalog_order() {
        let tags = tags();
        let mut filter = TagFilter::new();
        for c in "ros".chars() {
            filter.push(c, &tags);
        }

        let names: Vec<&str> = filter.visible().iter().map(|&i| tags[i].as_str()).collect();
        assert!(names.contains(&"ros2"));
        assert!(!names.contains(&"lidar"));
        let mut sorted = filter.visible().to_vec();
        sorted.sort_unstable();
        assert_eq!(filter.visible(), sorted.as_slice());
    }

    #[test]
    fn test_pop_and_clear_widen_again() {
        let tags = tags();
        let mut filter = TagFilter::new();
        filter.push('z', &tags);
        filter.push('q', &tags);
        assert!(filter.visible().is_empty());

        filter.clear(&tags);
        assert_eq!(filter.query(), "");
        assert_eq!(filter.visible().len(), tags.len());
    }

    #[test]
    fn test_apply_after_catalog_change() {
        let mut filter = TagFilter::new();
        filter.push('a', &[]);
        assert!(filter.visible().is_empty());

        filter.apply(&tags());
        assert!(!filter.visible().is_empty());
    }
}
