//! Rule registration data.
//!
//! Hosts build a [`Registry`] once at startup and pass the metadata it holds
//! by reference into rule constructors.

use crate::rules::naming::NamingPattern;
use crate::{Category, DeclarationKind, Priority, Severity};

const NAMING_PATTERN_PRIORITY: Priority = match Priority::new(6) {
    Some(priority) => priority,
    None => panic!("priority out of range"),
};

const NAMING_PATTERN_EXPLANATION: &str = "Write class name using CamelCase.
See examples on: https://google.github.io/styleguide/javaguide.html#s5.3-camel-case";

/// Static description of a rule, read by the host when registering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMetadata {
    id: &'static str,
    title: &'static str,
    explanation: &'static str,
    category: Category,
    default_severity: Severity,
    default_priority: Priority,
    scope: &'static [DeclarationKind],
}

impl RuleMetadata {
    /// Metadata for [`NamingPattern`].
    pub fn naming_pattern() -> Self {
        Self {
            id: NamingPattern::ID,
            title: "Class naming need to be done using CamelCase",
            explanation: NAMING_PATTERN_EXPLANATION,
            category: Category::Correctness,
            default_severity: Severity::Warning,
            default_priority: NAMING_PATTERN_PRIORITY,
            scope: DeclarationKind::ALL,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn explanation(&self) -> &'static str {
        self.explanation
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn default_severity(&self) -> Severity {
        self.default_severity
    }

    pub fn default_priority(&self) -> Priority {
        self.default_priority
    }

    /// Declaration kinds the rule applies to.
    pub fn scope(&self) -> &'static [DeclarationKind] {
        self.scope
    }
}

/// Metadata of every built-in rule.
#[derive(Debug, Clone)]
pub struct Registry {
    rules: Vec<RuleMetadata>,
}

impl Registry {
    pub fn builtin() -> Self {
        Self {
            rules: vec![RuleMetadata::naming_pattern()],
        }
    }

    pub fn get(&self, id: &str) -> Option<&RuleMetadata> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleMetadata> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
