use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered set of named attributes attached to a variant.
///
/// Externally published legacy configurations carry no attributes of their
/// own, so the empty set is the common case here; the type exists because
/// variant-aware consumers select on it. Insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    entries: IndexMap<String, String>,
}

impl Attributes {
    /// Returns the empty attribute set
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the value of the named attribute, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Adds an attribute, returning the extended set (builder style)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        write!(f, "{{")?;
        for (name, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value)?;
            first = false;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_attributes() {
        let attrs = Attributes::empty();

        assert!(attrs.is_empty());
        assert_eq!(attrs.len(), 0);
        assert_eq!(attrs.get("usage"), None);
    }

    #[test]
    fn test_with_preserves_insertion_order() {
        let attrs = Attributes::empty()
            .with("usage", "runtime")
            .with("status", "release");

        let names: Vec<&str> = attrs.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["usage", "status"]);
        assert_eq!(attrs.get("usage"), Some("runtime"));
    }

    #[test]
    fn test_display() {
        let attrs = Attributes::empty().with("usage", "runtime");

        assert_eq!(attrs.to_string(), "{usage=runtime}");
        assert_eq!(Attributes::empty().to_string(), "{}");
    }
}
