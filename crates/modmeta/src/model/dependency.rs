use serde::{Deserialize, Serialize};
use std::fmt;

use super::component::ComponentId;

/// A capability requested on a dependency edge.
///
/// Variant-aware resolution uses requested capabilities to pick between
/// variants of the target module; legacy descriptors rarely declare any.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub group: String,
    pub name: String,
}

impl Capability {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}

/// One declared dependency edge of a configuration.
///
/// A dependency points at target coordinates with a version constraint and an
/// optional list of requested capabilities. The constraint is carried as an
/// opaque string; interpreting it is the resolver's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDependency {
    /// Target group
    pub group: String,
    /// Target module name
    pub module: String,
    /// Version constraint string (e.g. "1.2.0", "[1.0,2.0)")
    pub constraint: String,
    /// Capabilities requested from the target
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requested_capabilities: Vec<Capability>,
}

impl ModuleDependency {
    /// Creates a new dependency edge
    pub fn new(
        group: impl Into<String>,
        module: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            module: module.into(),
            constraint: constraint.into(),
            requested_capabilities: Vec::new(),
        }
    }

    /// Adds a requested capability (builder style)
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.requested_capabilities.push(capability);
        self
    }

    /// Returns the version-less target identifier, e.g. `org.example:lib`
    pub fn module_id(&self) -> String {
        format!("{}:{}", self.group, self.module)
    }

    /// Whether this edge points at the given component
    pub fn targets(&self, component: &ComponentId) -> bool {
        self.group == component.group && self.module == component.name
    }

    /// Returns a human-readable description of this dependency
    pub fn description(&self) -> String {
        format!("{}:{} ({})", self.group, self.module, self.constraint)
    }
}

impl fmt::Display for ModuleDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl Default for ModuleDependency {
    fn default() -> Self {
        Self {
            group: String::new(),
            module: String::new(),
            constraint: "*".to_string(),
            requested_capabilities: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_creation() {
        let dep = ModuleDependency::new("org.example", "lib", "1.2.0");

        assert_eq!(dep.group, "org.example");
        assert_eq!(dep.module, "lib");
        assert_eq!(dep.constraint, "1.2.0");
        assert!(dep.requested_capabilities.is_empty());
    }

    #[test]
    fn test_dependency_display() {
        let dep = ModuleDependency::new("org.example", "lib", "[1.0,2.0)");

        assert_eq!(dep.to_string(), "org.example:lib ([1.0,2.0))");
    }

    #[test]
    fn test_with_capability() {
        let dep = ModuleDependency::new("org.example", "lib", "1.0.0")
            .with_capability(Capability::new("org.example", "lib-test-fixtures"));

        assert_eq!(dep.requested_capabilities.len(), 1);
        assert_eq!(
            dep.requested_capabilities[0].to_string(),
            "org.example:lib-test-fixtures"
        );
    }

    #[test]
    fn test_targets() {
        let dep = ModuleDependency::new("org.example", "lib", "1.0.0");

        assert!(dep.targets(&ComponentId::new("org.example", "lib", "9.9.9")));
        assert!(!dep.targets(&ComponentId::new("org.example", "other", "1.0.0")));
    }
}
