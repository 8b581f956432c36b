use serde::Serialize;
use std::fmt;

/// A semantic type name attached to a declared member.
///
/// The primitive set is the `@type` vocabulary used by legacy declaration
/// stubs (`String`, `Number`, `Boolean`, `Object`, `HTML`). Everything else
/// is a by-name reference to another declaration; named references are
/// checked for identifier syntax at registration and are otherwise opaque to
/// the registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TypeRef {
    String,
    Number,
    Boolean,
    Object,
    Html,
    /// Reference to another declaration by type name.
    Named(String),
}

impl TypeRef {
    /// Build a by-name reference.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// The referenced declaration name, for named references only.
    pub fn referent(&self) -> Option<&str> {
        match self {
            TypeRef::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::String => write!(f, "String"),
            TypeRef::Number => write!(f, "Number"),
            TypeRef::Boolean => write!(f, "Boolean"),
            TypeRef::Object => write!(f, "Object"),
            TypeRef::Html => write!(f, "HTML"),
            TypeRef::Named(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referent_is_named_only() {
        assert_eq!(TypeRef::named("TextRange").referent(), Some("TextRange"));
        assert_eq!(TypeRef::String.referent(), None);
    }

    #[test]
    fn display_matches_stub_vocabulary() {
        assert_eq!(TypeRef::Html.to_string(), "HTML");
        assert_eq!(TypeRef::named("childNodes").to_string(), "childNodes");
    }
}
