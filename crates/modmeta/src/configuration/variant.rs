use std::fmt;
use std::sync::Arc;

use crate::model::{Attributes, ComponentArtifact};

/// Read-only projection of a configuration as a capability-attributed variant.
///
/// Variant-aware consumers select artifacts by attributes without caring
/// whether the source is a legacy configuration or a native variant. The
/// projection shares the owning configuration's artifact storage; it is a
/// lens over that data, not a copy of it.
///
/// Two variants are equal when display name, attributes and artifact list are
/// all equal. Consumers must not rely on instance identity across calls to
/// [`ExternalConfiguration::variants`](super::ExternalConfiguration::variants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationVariant {
    display_name: String,
    attributes: Attributes,
    artifacts: Arc<[ComponentArtifact]>,
}

impl ConfigurationVariant {
    pub fn new(
        display_name: impl Into<String>,
        attributes: Attributes,
        artifacts: Arc<[ComponentArtifact]>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            attributes,
            artifacts,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn artifacts(&self) -> &[ComponentArtifact] {
        &self.artifacts
    }
}

impl fmt::Display for ConfigurationVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArtifactName, ComponentId};

    fn artifacts() -> Arc<[ComponentArtifact]> {
        let component = ComponentId::new("org.example", "lib", "1.0.0");
        Arc::from(vec![ComponentArtifact::new(component, ArtifactName::jar("lib"))])
    }

    #[test]
    fn test_structural_equality() {
        let a = ConfigurationVariant::new("lib runtime", Attributes::empty(), artifacts());
        let b = ConfigurationVariant::new("lib runtime", Attributes::empty(), artifacts());

        // Distinct Arc allocations, equal contents
        assert_eq!(a, b);
    }

    #[test]
    fn test_artifacts_are_shared_not_copied() {
        let shared = artifacts();
        let variant =
            ConfigurationVariant::new("lib runtime", Attributes::empty(), shared.clone());

        assert!(std::ptr::eq(variant.artifacts().as_ptr(), shared.as_ptr()));
    }
}
