//! Built-in catalogue of legacy DHTML element declarations.
//!
//! The descriptors here are recovered from a scripting-engine declaration
//! stub for the `ul` (unordered list) element: default-valued properties,
//! no-op methods, and `on*` event-handler hooks, each annotated with its
//! MSDN reference URL and the engine version it appeared in.
//!
//! The stub attaches every member to the element prototype and inherits the
//! rest ambiently. The catalogue re-architects that into an explicit,
//! validated super-type chain:
//!
//! - `Object` - empty root (the stub declares `@super Object`)
//! - `Element` - the shared DHTML element surface
//! - `ul` - list-specific members only (`type`, `compact`)

// The shared DHTML element surface
mod surface;

// The ul element and the root object declaration
mod ul;

use domdex_registry::{MemberDescriptor, Registry, RegistryError};
use once_cell::sync::Lazy;
use tracing::debug;

/// Root declaration name.
pub const OBJECT: &str = "Object";
/// The shared DHTML element surface.
pub const ELEMENT: &str = "Element";
/// The unordered-list element.
pub const UL: &str = "ul";

/// Engine version every catalogued member is annotated with.
pub const JSCRIPT_5_6: &str = "JScript 5.6";

/// Register the built-in declarations into `registry`.
///
/// The registry is left open so callers can register their own declarations
/// alongside the catalogue before finalizing.
pub fn install(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(ul::object_descriptor())?;
    registry.register(surface::element_descriptor())?;
    registry.register(ul::ul_descriptor())?;
    debug!("installed built-in element catalogue");
    Ok(())
}

/// The memoized, finalized built-in catalogue.
///
/// Suitable for sharing across threads; the registry is immutable once
/// built.
pub fn registry() -> &'static Registry {
    static CATALOG: Lazy<Registry> = Lazy::new(|| {
        let mut registry = Registry::new();
        install(&mut registry).expect("built-in catalogue is well-formed");
        registry.finalize().expect("built-in catalogue has an acyclic super chain");
        registry
    });
    &CATALOG
}

/// Stamp a member group with the engine version the stub documents.
pub(crate) fn stamp(members: Vec<MemberDescriptor>) -> Vec<MemberDescriptor> {
    members
        .into_iter()
        .map(|member| member.since(JSCRIPT_5_6))
        .collect()
}
