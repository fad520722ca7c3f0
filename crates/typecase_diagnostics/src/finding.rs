use std::fmt;

use get_size2::GetSize;

use crate::{Severity, Violation};

/// Rule id and rendered message of a finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, GetSize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FindingKind {
    /// The identifier of the rule that produced the finding.
    pub name: String,
    /// The message body to display to the user.
    pub body: String,
}

impl FindingKind {
    pub fn from_violation<V: Violation>(violation: &V) -> Self {
        Self {
            name: V::RULE_ID.to_string(),
            body: violation.message(),
        }
    }
}

/// A single reported problem, located with a handle owned by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Finding<L> {
    pub kind: FindingKind,
    pub severity: Severity,
    pub location: L,
    /// The name the finding is about.
    pub subject: String,
}

impl<L> Finding<L> {
    pub fn new<V: Violation>(
        violation: &V,
        severity: Severity,
        location: L,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            kind: FindingKind::from_violation(violation),
            severity,
            location,
            subject: subject.into(),
        }
    }

    pub fn rule_id(&self) -> &str {
        &self.kind.name
    }

    pub fn message(&self) -> &str {
        &self.kind.body
    }
}

impl<L> fmt::Display for Finding<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ('{}')", self.kind.name, self.kind.body, self.subject)
    }
}

/// Receiver for findings emitted by a rule.
pub trait FindingSink<L> {
    fn accept(&mut self, finding: Finding<L>);
}

impl<L> FindingSink<L> for Vec<Finding<L>> {
    fn accept(&mut self, finding: Finding<L>) {
        self.push(finding);
    }
}
