//! Finding model shared by typecase rules and their hosts.
//!
//! A rule describes what it found through a [`Violation`], and wraps it into a
//! [`Finding`] together with the severity and the host's location handle.

mod finding;
mod severity;
mod violation;

pub use finding::{Finding, FindingKind, FindingSink};
pub use severity::{Category, Priority, Severity};
pub use violation::Violation;
