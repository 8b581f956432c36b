//! Common types for the domdex declaration registry.
//!
//! This crate provides the foundational vocabulary shared by all domdex crates:
//! - Member classification (`MemberKind`)
//! - Semantic type names (`TypeRef`)
//! - Identifier syntax checking (`is_valid_identifier`)

// Member classification - property, method, or event-handler hook
pub mod kind;
pub use kind::MemberKind;

// Semantic type names for declared members
pub mod type_ref;
pub use type_ref::TypeRef;

// Identifier syntax checking for declaration names
pub mod ident;
pub use ident::is_valid_identifier;
