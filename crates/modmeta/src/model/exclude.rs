use serde::{Deserialize, Serialize};
use std::fmt;

/// A pattern suppressing matching transitive dependencies introduced through
/// a configuration.
///
/// Either segment may be the `*` wildcard, matching any group or module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExcludeRule {
    pub group: String,
    pub module: String,
}

impl ExcludeRule {
    pub fn new(group: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            module: module.into(),
        }
    }

    /// Whether this rule excludes every transitive dependency
    pub fn excludes_all(&self) -> bool {
        self.group == "*" && self.module == "*"
    }

    /// Whether this rule matches the given target coordinates
    pub fn matches(&self, group: &str, module: &str) -> bool {
        segment_matches(&self.group, group) && segment_matches(&self.module, module)
    }
}

fn segment_matches(pattern: &str, value: &str) -> bool {
    pattern == "*" || pattern == value
}

impl fmt::Display for ExcludeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let rule = ExcludeRule::new("org.example", "lib");

        assert!(rule.matches("org.example", "lib"));
        assert!(!rule.matches("org.example", "other"));
        assert!(!rule.matches("org.other", "lib"));
    }

    #[test]
    fn test_group_wildcard() {
        let rule = ExcludeRule::new("*", "lib");

        assert!(rule.matches("org.example", "lib"));
        assert!(rule.matches("com.acme", "lib"));
        assert!(!rule.matches("org.example", "other"));
    }

    #[test]
    fn test_excludes_all() {
        let rule = ExcludeRule::new("*", "*");

        assert!(rule.excludes_all());
        assert!(rule.matches("anything", "at-all"));
        assert!(!ExcludeRule::new("org.example", "*").excludes_all());
    }

    #[test]
    fn test_display() {
        assert_eq!(ExcludeRule::new("org.example", "lib").to_string(), "org.example:lib");
    }
}
