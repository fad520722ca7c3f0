use std::fmt::Debug;

/// A rule-specific description of a single problem.
pub trait Violation: Debug {
    /// Identifier of the rule that raises this violation.
    const RULE_ID: &'static str;

    /// The message displayed to the user.
    fn message(&self) -> String;
}
