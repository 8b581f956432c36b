//! Identifier syntax checking for declaration names.
//!
//! Declaration stubs name everything with ASCII identifiers, so the rule here
//! is the classic `[A-Za-z_][A-Za-z0-9_]*`. Existence of the named
//! declaration is a separate, later concern; this module only answers whether
//! a string could legally name one.

/// Check whether `name` is syntactically a valid declaration identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
