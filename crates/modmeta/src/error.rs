use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    // Construction errors
    #[error("Configuration name must not be empty (component {component})")]
    EmptyConfigurationName { component: String },

    // Construction-protocol violations
    #[error("Dependencies already set for {configuration}")]
    DependenciesAlreadySet { configuration: String },

    #[error("Dependencies have not been set for {configuration}")]
    DependenciesNotSet { configuration: String },

    // Rule execution errors
    #[error("Dependency rule '{rule}' failed: {source}")]
    Rule {
        rule: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, MetadataError>;
