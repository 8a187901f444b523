//! Configuration metadata for externally published modules.
//!
//! An [`ExternalConfiguration`] models one named configuration of a published
//! module (Ivy/Maven style): hierarchy, visibility flags, artifacts, excludes
//! and the declared dependency list, plus the lazily-derived *effective*
//! dependency list produced by an optional [`DependencyRules`] pipeline.
//!
//! Construction is two-phase: the configuration object is built first, then
//! the declared dependencies are assigned exactly once (they may reference
//! the configuration's own hierarchy, so the object must exist before the
//! list can be computed). After that single assignment the value is immutable
//! and safe to share across concurrent readers.

mod rules;
mod variant;

pub use rules::{DependencyRules, RuleAction, RuleError};
pub use variant::ConfigurationVariant;

use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::error::{MetadataError, Result};
use crate::model::{
    ArtifactName, Attributes, ComponentArtifact, ComponentId, ExcludeRule, ModuleDependency,
};

/// Common read surface over the configuration flavors of the dependency graph.
///
/// This crate ships the externally-published legacy flavor
/// ([`ExternalConfiguration`]); native variant-aware flavors live with the
/// resolver and implement the same surface.
pub trait ConfigurationMetadata: Send + Sync {
    fn name(&self) -> &str;

    /// Configuration names this configuration inherits from, itself included.
    /// Order is significant for upstream dependency/artifact aggregation.
    fn hierarchy(&self) -> &[String];

    fn is_transitive(&self) -> bool;

    fn is_visible(&self) -> bool;

    fn attributes(&self) -> Attributes;

    fn can_be_consumed(&self) -> bool;

    fn can_be_resolved(&self) -> bool;

    /// The effective dependency list, after rule transformation.
    fn dependencies(&self) -> Result<Arc<[ModuleDependency]>>;

    fn artifacts(&self) -> &[ComponentArtifact];

    fn excludes(&self) -> &[ExcludeRule];

    fn variants(&self) -> Vec<ConfigurationVariant>;

    /// Human-readable rendering for diagnostics, never used for equality.
    fn describe(&self) -> String;
}

/// Metadata of one externally published configuration.
///
/// Effectively immutable: every field is fixed at construction except the
/// declared dependency list (assigned exactly once via
/// [`set_dependencies`](Self::set_dependencies)) and the memoized effective
/// list derived from it on first read.
///
/// This flavor is always consumable and never resolvable, and carries no
/// variant attributes of its own.
#[derive(Debug)]
pub struct ExternalConfiguration {
    component: ComponentId,
    name: String,
    transitive: bool,
    visible: bool,
    hierarchy: Vec<String>,
    artifacts: Arc<[ComponentArtifact]>,
    rules: Option<Arc<DependencyRules>>,
    excludes: Vec<ExcludeRule>,
    // Write-once: assigned by set_dependencies, never replaced.
    declared: OnceLock<Arc<[ModuleDependency]>>,
    // Compute-once: populated under the lock so the rule pipeline runs at
    // most once even with concurrent readers; left empty if a rule fails.
    effective: Mutex<Option<Arc<[ModuleDependency]>>>,
}

impl ExternalConfiguration {
    /// Creates the configuration from everything except its dependency list.
    ///
    /// `rules` is `None` for the common case of a configuration without any
    /// registered dependency rules; `dependencies()` then returns the
    /// declared list itself.
    pub fn new(
        component: ComponentId,
        name: impl Into<String>,
        transitive: bool,
        visible: bool,
        hierarchy: Vec<String>,
        artifacts: Vec<ComponentArtifact>,
        rules: Option<Arc<DependencyRules>>,
        excludes: Vec<ExcludeRule>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(MetadataError::EmptyConfigurationName {
                component: component.to_string(),
            });
        }

        Ok(Self {
            component,
            name,
            transitive,
            visible,
            hierarchy,
            artifacts: Arc::from(artifacts),
            rules,
            excludes,
            declared: OnceLock::new(),
            effective: Mutex::new(None),
        })
    }

    pub fn component(&self) -> &ComponentId {
        &self.component
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hierarchy(&self) -> &[String] {
        &self.hierarchy
    }

    pub fn is_transitive(&self) -> bool {
        self.transitive
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Always empty for externally published configurations.
    pub fn attributes(&self) -> Attributes {
        Attributes::empty()
    }

    pub fn can_be_consumed(&self) -> bool {
        true
    }

    pub fn can_be_resolved(&self) -> bool {
        false
    }

    /// Assigns the declared dependency list. Single assignment: a second call
    /// is a construction-protocol bug and fails without overwriting.
    pub fn set_dependencies(&self, dependencies: Vec<ModuleDependency>) -> Result<()> {
        self.declared
            .set(Arc::from(dependencies))
            .map_err(|_| MetadataError::DependenciesAlreadySet {
                configuration: self.describe(),
            })
    }

    /// The declared list as assigned, before any rule transformation.
    pub fn raw_dependencies(&self) -> Option<Arc<[ModuleDependency]>> {
        self.declared.get().cloned()
    }

    /// Returns the effective dependency list.
    ///
    /// Without rules this is the declared list itself. With rules, the
    /// pipeline runs at most once and the result is memoized; a failing rule
    /// propagates to the caller and leaves the memo unpopulated, so the next
    /// call retries.
    ///
    /// Fails with [`MetadataError::DependenciesNotSet`] if called before
    /// [`set_dependencies`](Self::set_dependencies).
    pub fn dependencies(&self) -> Result<Arc<[ModuleDependency]>> {
        let declared = self
            .declared
            .get()
            .ok_or_else(|| MetadataError::DependenciesNotSet {
                configuration: self.describe(),
            })?;

        let rules = match &self.rules {
            None => return Ok(declared.clone()),
            Some(rules) => rules,
        };

        let mut cached = self.effective.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(effective) = cached.as_ref() {
            return Ok(effective.clone());
        }

        log::debug!("Computing effective dependencies for {}", self.describe());
        let effective: Arc<[ModuleDependency]> = Arc::from(rules.execute(declared)?);
        *cached = Some(effective.clone());
        Ok(effective)
    }

    pub fn artifacts(&self) -> &[ComponentArtifact] {
        &self.artifacts
    }

    pub fn excludes(&self) -> &[ExcludeRule] {
        &self.excludes
    }

    /// Projects this configuration as its single variant.
    ///
    /// The projection is rebuilt on demand; callers may rely on equality of
    /// the returned variants across calls, not on identity.
    pub fn variants(&self) -> Vec<ConfigurationVariant> {
        vec![ConfigurationVariant::new(
            self.describe(),
            self.attributes(),
            self.artifacts.clone(),
        )]
    }

    /// Binds an artifact name to this configuration's owning component.
    pub fn artifact(&self, name: ArtifactName) -> ComponentArtifact {
        ComponentArtifact::new(self.component.clone(), name)
    }

    pub fn describe(&self) -> String {
        format!("{} configuration '{}'", self.component, self.name)
    }
}

impl ConfigurationMetadata for ExternalConfiguration {
    fn name(&self) -> &str {
        ExternalConfiguration::name(self)
    }

    fn hierarchy(&self) -> &[String] {
        ExternalConfiguration::hierarchy(self)
    }

    fn is_transitive(&self) -> bool {
        ExternalConfiguration::is_transitive(self)
    }

    fn is_visible(&self) -> bool {
        ExternalConfiguration::is_visible(self)
    }

    fn attributes(&self) -> Attributes {
        ExternalConfiguration::attributes(self)
    }

    fn can_be_consumed(&self) -> bool {
        ExternalConfiguration::can_be_consumed(self)
    }

    fn can_be_resolved(&self) -> bool {
        ExternalConfiguration::can_be_resolved(self)
    }

    fn dependencies(&self) -> Result<Arc<[ModuleDependency]>> {
        ExternalConfiguration::dependencies(self)
    }

    fn artifacts(&self) -> &[ComponentArtifact] {
        ExternalConfiguration::artifacts(self)
    }

    fn excludes(&self) -> &[ExcludeRule] {
        ExternalConfiguration::excludes(self)
    }

    fn variants(&self) -> Vec<ConfigurationVariant> {
        ExternalConfiguration::variants(self)
    }

    fn describe(&self) -> String {
        ExternalConfiguration::describe(self)
    }
}

impl fmt::Display for ExternalConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
