use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of the published module that owns a configuration.
///
/// Opaque to this crate beyond stable equality and display: it is supplied by
/// the metadata source at construction time and threaded into artifact
/// references and diagnostics unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentId {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl ComponentId {
    /// Creates a new component identity
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Returns the version-less module identifier, e.g. `org.example:lib`
    pub fn module_id(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_display() {
        let id = ComponentId::new("org.example", "lib", "1.2.0");

        assert_eq!(id.to_string(), "org.example:lib:1.2.0");
        assert_eq!(id.module_id(), "org.example:lib");
    }

    #[test]
    fn test_component_equality() {
        let a = ComponentId::new("org.example", "lib", "1.2.0");
        let b = ComponentId::new("org.example", "lib", "1.2.0");
        let c = ComponentId::new("org.example", "lib", "2.0.0");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
