pub mod configuration;
pub mod error;
pub mod model;

pub use configuration::{
    ConfigurationMetadata, ConfigurationVariant, DependencyRules, ExternalConfiguration,
    RuleAction, RuleError,
};
pub use error::{MetadataError, Result};
pub use model::{
    ArtifactName, Attributes, Capability, ComponentArtifact, ComponentId, ExcludeRule,
    ModuleDependency,
};
