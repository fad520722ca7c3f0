//! NamingPattern rule implementation.
//!
//! Checks that type names are written in CamelCase, reporting names that
//! contain two consecutive uppercase characters.

use tracing::{debug, trace};
use typecase_diagnostics::{Finding, Violation};

use crate::casing::classify;
use crate::{Declaration, DeclarationKind, FromConfig, Properties, Rule, RuleMetadata};

/// Violation for a type name with adjacent uppercase characters.
#[derive(Debug, Clone)]
pub struct ClassNameNotCamelCase;

impl Violation for ClassNameNotCamelCase {
    const RULE_ID: &'static str = NamingPattern::ID;

    fn message(&self) -> String {
        "Class naming must use CamelCase".to_string()
    }
}

/// Configuration for NamingPattern rule.
#[derive(Debug, Clone)]
pub struct NamingPattern<'m> {
    metadata: &'m RuleMetadata,
    /// Declaration kinds to check
    tokens: Vec<DeclarationKind>,
}

impl<'m> NamingPattern<'m> {
    pub const ID: &'static str = "NamingPattern";

    pub fn new(metadata: &'m RuleMetadata) -> Self {
        Self {
            metadata,
            tokens: metadata.scope().to_vec(),
        }
    }
}

impl<'m> FromConfig<'m> for NamingPattern<'m> {
    const MODULE_NAME: &'static str = NamingPattern::ID;

    fn from_config(metadata: &'m RuleMetadata, properties: &Properties) -> Self {
        let mut rule = Self::new(metadata);

        if let Some(tokens) = properties.get("tokens") {
            let kinds: Vec<_> = DeclarationKind::parse_tokens(tokens)
                .into_iter()
                .filter(|kind| metadata.scope().contains(kind))
                .collect();
            if !kinds.is_empty() {
                rule.tokens = kinds;
            }
        }

        rule
    }
}

impl Rule for NamingPattern<'_> {
    fn name(&self) -> &'static str {
        Self::ID
    }

    fn metadata(&self) -> &RuleMetadata {
        self.metadata
    }

    fn relevant_kinds(&self) -> &[DeclarationKind] {
        &self.tokens
    }

    fn check_declaration<L>(&self, declaration: Declaration<'_, L>) -> Option<Finding<L>> {
        if !self.tokens.contains(&declaration.kind) {
            trace!(rule = Self::ID, kind = %declaration.kind, "declaration kind not checked");
            return None;
        }

        let Some(name) = declaration.name else {
            trace!(rule = Self::ID, "skipping declaration without a name");
            return None;
        };

        if classify(name).is_accepted() {
            return None;
        }

        debug!(rule = Self::ID, name, "type name is not CamelCase");
        Some(Finding::new(
            &ClassNameNotCamelCase,
            self.metadata.default_severity(),
            declaration.location,
            name,
        ))
    }
}
