//! Casing classification for type names.
//!
//! A name is accepted unless two consecutive characters are both uppercase.
//! This catches embedded acronyms such as `HTTPServer` or `MyXMLParser`. It
//! does not require a leading capital and lets digits and underscores
//! through, so `myClass` and `my_class` are accepted too.

use is_macro::Is;

/// Outcome of classifying a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Is)]
pub enum Verdict {
    Accepted,
    Rejected,
}

/// Classify `name`. Total over all strings, including the empty one.
pub fn classify(name: &str) -> Verdict {
    let mut previous_upper = false;
    for c in name.chars() {
        let upper = c.is_uppercase();
        if previous_upper && upper {
            return Verdict::Rejected;
        }
        previous_upper = upper;
    }
    Verdict::Accepted
}

/// Whether `name` is acceptable UpperCamelCase.
pub fn is_upper_camel_case(name: &str) -> bool {
    classify(name).is_accepted()
}
