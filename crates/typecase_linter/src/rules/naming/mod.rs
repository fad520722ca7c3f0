//! Naming convention rules.
//!
//! These rules check that type declarations follow naming conventions.

mod naming_pattern;

pub use naming_pattern::{ClassNameNotCamelCase, NamingPattern};
