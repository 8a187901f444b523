// Value model for published module metadata.
//
// This module provides the pure value types a configuration is built from:
// component identity, artifact names, exclude rules, dependency edges and
// variant attributes. None of these carry behavior beyond construction,
// matching and display.

mod artifact;
mod attributes;
mod component;
mod dependency;
mod exclude;

pub use artifact::{ArtifactName, ComponentArtifact};
pub use attributes::Attributes;
pub use component::ComponentId;
pub use dependency::{Capability, ModuleDependency};
pub use exclude::ExcludeRule;
