//! Type-name casing rules for hosts that walk Java-like declarations.
//!
//! The host discovers nominal type declarations and hands each one to a
//! [`Rule`]; the rule answers with at most one [`Finding`] per declaration.

pub mod casing;
mod declaration;
mod metadata;
pub mod rules;

pub use declaration::{Declaration, DeclarationKind};
pub use metadata::{Registry, RuleMetadata};
pub use typecase_config::Properties;
pub use typecase_diagnostics::{Category, Finding, FindingSink, Priority, Severity};

/// A rule checked against every declaration the host discovers.
pub trait Rule: Send + Sync {
    /// The rule name, as used in configuration.
    fn name(&self) -> &'static str;

    /// Registration data the rule was built with.
    fn metadata(&self) -> &RuleMetadata;

    /// Declaration kinds this rule looks at. Others are skipped.
    fn relevant_kinds(&self) -> &[DeclarationKind] {
        DeclarationKind::ALL
    }

    /// Check one declaration, returning the finding it raises if any.
    fn check_declaration<L>(&self, declaration: Declaration<'_, L>) -> Option<Finding<L>>;

    /// Check one declaration and push its finding, if any, into `sink`.
    fn report<L, S>(&self, declaration: Declaration<'_, L>, sink: &mut S)
    where
        S: FindingSink<L> + ?Sized,
    {
        if let Some(finding) = self.check_declaration(declaration) {
            sink.accept(finding);
        }
    }
}

/// Build a rule from its configured properties.
pub trait FromConfig<'m>: Sized {
    /// Module name matched against the configuration.
    const MODULE_NAME: &'static str;

    fn from_config(metadata: &'m RuleMetadata, properties: &Properties) -> Self;
}
