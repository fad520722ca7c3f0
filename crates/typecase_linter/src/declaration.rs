use std::fmt;

/// Kinds of nominal type declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

impl DeclarationKind {
    pub const ALL: &'static [DeclarationKind] = &[
        DeclarationKind::Class,
        DeclarationKind::Interface,
        DeclarationKind::Enum,
        DeclarationKind::Record,
        DeclarationKind::Annotation,
    ];

    /// Checkstyle token name, e.g. `CLASS_DEF`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Class => "CLASS_DEF",
            Self::Interface => "INTERFACE_DEF",
            Self::Enum => "ENUM_DEF",
            Self::Record => "RECORD_DEF",
            Self::Annotation => "ANNOTATION_DEF",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.token() == token)
    }

    /// Parse a comma separated token list, dropping unknown tokens.
    pub fn parse_tokens(tokens: &str) -> Vec<Self> {
        let mut kinds = vec![];
        for kind in tokens.split(',').filter_map(|t| Self::from_token(t.trim())) {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A declaration as seen by the host.
///
/// `name` is `None` when the host could not determine it, as for synthetic
/// or anonymous declarations. `location` is opaque to the rules and moves
/// into any finding they raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a, L> {
    pub name: Option<&'a str>,
    pub kind: DeclarationKind,
    pub location: L,
}

impl<'a, L> Declaration<'a, L> {
    pub fn new(name: Option<&'a str>, kind: DeclarationKind, location: L) -> Self {
        Self {
            name,
            kind,
            location,
        }
    }

    pub fn named(name: &'a str, kind: DeclarationKind, location: L) -> Self {
        Self::new(Some(name), kind, location)
    }

    pub fn unnamed(kind: DeclarationKind, location: L) -> Self {
        Self::new(None, kind, location)
    }
}
