use serde::{Deserialize, Serialize};
use std::fmt;

use super::component::ComponentId;

/// Ivy-style artifact name: base name, type, extension and classifier.
///
/// The extension defaults to the type when not given explicitly, which is how
/// published descriptors almost always declare their artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactName {
    pub name: String,
    /// Artifact type (e.g. "jar", "pom", "zip")
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

impl ArtifactName {
    /// Creates an artifact name whose extension equals its type
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        let kind = kind.into();

        Self {
            name: name.into(),
            extension: Some(kind.clone()),
            kind,
            classifier: None,
        }
    }

    /// Creates a plain jar artifact name, the common case for published modules
    pub fn jar(name: impl Into<String>) -> Self {
        Self::new(name, "jar")
    }

    /// Sets the classifier (e.g. "sources", "javadoc")
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// Overrides the extension independently of the type
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Renders the file name: `name[-classifier][.extension]`
    pub fn file_name(&self) -> String {
        let mut out = self.name.clone();
        if let Some(classifier) = &self.classifier {
            out.push('-');
            out.push_str(classifier);
        }
        if let Some(extension) = &self.extension {
            out.push('.');
            out.push_str(extension);
        }
        out
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// One publishable artifact bound to its owning component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentArtifact {
    pub component: ComponentId,
    pub name: ArtifactName,
}

impl ComponentArtifact {
    pub fn new(component: ComponentId, name: ArtifactName) -> Self {
        Self { component, name }
    }

    pub fn file_name(&self) -> String {
        self.name.file_name()
    }
}

impl fmt::Display for ComponentArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name.file_name(), self.component)
    }
}
