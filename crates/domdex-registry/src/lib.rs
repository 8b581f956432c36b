//! Element declaration registry for editor and documentation tooling.
//!
//! This crate is the core of domdex: it owns immutable descriptions of
//! element API surfaces (properties, methods, event-handler hooks) and
//! answers name-resolution queries against them, including inherited members
//! through declared super types.
//!
//! The registry has a two-phase lifecycle. During the load phase it accepts
//! descriptors through [`Registry::register`], each validated for
//! well-formedness before insertion. [`Registry::finalize`] then resolves
//! every super-type reference, rejects unknown targets and inheritance
//! cycles, and switches the registry to its immutable query phase. After
//! finalization all queries take `&self` and are safe for unsynchronized
//! concurrent readers.

// Descriptor records - immutable member and element descriptions
pub mod descriptor;
pub use descriptor::{ElementDescriptor, MemberDescriptor, Param};

// Error type shared by registration, finalization, and queries
pub mod error;
pub use error::{DescriptorRule, RegistryError};

// The registry itself - load phase, finalization, lookup
pub mod registry;
pub use registry::Registry;

// Inheritance-aware member resolution and listing
pub mod resolve;
pub use resolve::MembersIter;

// Descriptor well-formedness checks
pub mod validate;
pub use validate::validate;

// Re-export the vocabulary crate so dependents need only one import path.
pub use domdex_common::{MemberKind, TypeRef, is_valid_identifier};
