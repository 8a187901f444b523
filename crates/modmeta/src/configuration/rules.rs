use std::fmt;

use crate::error::{MetadataError, Result};
use crate::model::ModuleDependency;

/// Error produced by a failing rule action.
pub type RuleError = Box<dyn std::error::Error + Send + Sync>;

/// Opaque transformation from a dependency list to a dependency list.
///
/// Actions receive an owned list and return a new one; the caller's view of
/// the pre-rule list is never mutated.
pub type RuleAction =
    Box<dyn Fn(Vec<ModuleDependency>) -> std::result::Result<Vec<ModuleDependency>, RuleError> + Send + Sync>;

struct NamedRule {
    label: String,
    action: RuleAction,
}

/// Ordered pipeline of dependency-rewriting rules.
///
/// Rules run strictly in registration order, each receiving the output of the
/// previous rule. A rule may add, remove or rewrite entries. The first
/// failing rule aborts the pipeline and its error is reported to the caller.
///
/// A configuration with no rules at all carries no engine
/// (`Option<Arc<DependencyRules>>::None`), so the identity fast path never
/// touches this type.
#[derive(Default)]
pub struct DependencyRules {
    rules: Vec<NamedRule>,
}

impl DependencyRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule action; the label is used in diagnostics and errors
    pub fn add<F>(&mut self, label: impl Into<String>, action: F) -> &mut Self
    where
        F: Fn(Vec<ModuleDependency>) -> std::result::Result<Vec<ModuleDependency>, RuleError>
            + Send
            + Sync
            + 'static,
    {
        self.rules.push(NamedRule {
            label: label.into(),
            action: Box::new(action),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs the declared dependency list through the pipeline.
    ///
    /// The input slice is copied up front; callers holding the declared list
    /// retain a stable view of it regardless of what the rules produce.
    pub fn execute(&self, input: &[ModuleDependency]) -> Result<Vec<ModuleDependency>> {
        log::debug!(
            "Running {} dependency rule(s) over {} declared dependencies",
            self.rules.len(),
            input.len()
        );

        let mut current = input.to_vec();
        for rule in &self.rules {
            current = (rule.action)(current).map_err(|source| MetadataError::Rule {
                rule: rule.label.clone(),
                source,
            })?;
            log::trace!("Rule '{}' produced {} dependencies", rule.label, current.len());
        }

        Ok(current)
    }
}

impl fmt::Debug for DependencyRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.rules.iter().map(|r| r.label.as_str()).collect();
        f.debug_struct("DependencyRules").field("rules", &labels).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(module: &str) -> ModuleDependency {
        ModuleDependency::new("org.example", module, "1.0.0")
    }

    #[test]
    fn test_rules_run_in_registration_order() {
        let mut rules = DependencyRules::new();
        rules.add("add-core", |mut deps| {
            deps.push(dep("core"));
            Ok(deps)
        });
        rules.add("drop-legacy", |deps| {
            Ok(deps.into_iter().filter(|d| d.module != "legacy").collect())
        });

        // "legacy" is dropped even though "add-core" ran first and kept it
        let out = rules.execute(&[dep("legacy"), dep("api")]).unwrap();
        let modules: Vec<&str> = out.iter().map(|d| d.module.as_str()).collect();

        assert_eq!(modules, vec!["api", "core"]);
    }

    #[test]
    fn test_input_list_is_not_mutated() {
        let mut rules = DependencyRules::new();
        rules.add("clear", |_| Ok(Vec::new()));

        let input = vec![dep("api")];
        let out = rules.execute(&input).unwrap();

        assert!(out.is_empty());
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn test_failing_rule_names_itself() {
        let mut rules = DependencyRules::new();
        rules.add("ok", Ok);
        rules.add("broken", |_| Err("no such module".into()));

        let err = rules.execute(&[dep("api")]).unwrap_err();

        match err {
            MetadataError::Rule { rule, .. } => assert_eq!(rule, "broken"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
