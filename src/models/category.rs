//! Category set model
//!
//! An ordered set of unique category names. The set is seeded with a fixed
//! default list and can only grow: there is no removal and no rename.

use serde::{Deserialize, Serialize};

use super::record::DEFAULT_CATEGORY;

/// Fixed seed list for new category sets
pub const DEFAULT_CATEGORIES: [&str; 5] = [
    "Food",
    "Transport",
    "School Supplies",
    "Leisure",
    DEFAULT_CATEGORY,
];

/// Ordered, append-only set of unique category names
///
/// Serializes as a plain JSON array of strings to match the persisted
/// document shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet {
    names: Vec<String>,
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CategorySet {
    /// Build from an explicit list, dropping duplicates while keeping order
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self { names: Vec::new() };
        for name in names {
            set.add(&name.into());
        }
        set
    }

    /// Append `name` if it is non-empty and not already present
    ///
    /// Matching is case-sensitive and exact. Returns true when the name was
    /// actually added, false for the no-op cases.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Exact, case-sensitive membership check
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    /// All names in insertion order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_list() {
        let set = CategorySet::default();
        assert_eq!(set.len(), 5);
        assert!(set.contains("Food"));
        assert!(set.contains(DEFAULT_CATEGORY));
    }

    #[test]
    fn test_add_unique_appends() {
        let mut set = CategorySet::default();
        assert!(set.add("Books"));
        assert_eq!(set.names().last().map(String::as_str), Some("Books"));
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let mut set = CategorySet::default();
        let before = set.len();
        assert!(!set.add("Food"));
        assert_eq!(set.len(), before);
    }

    #[test]
    fn test_add_is_case_sensitive() {
        let mut set = CategorySet::default();
        assert!(set.add("food"));
        assert!(set.contains("food"));
        assert!(set.contains("Food"));
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut set = CategorySet::default();
        assert!(!set.add("   "));
        assert!(!set.add(""));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let set = CategorySet::from_names(["Food", "Transport"]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["Food","Transport"]"#);
    }
}
