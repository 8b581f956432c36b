//! The declaration registry and its two-phase lifecycle.
//!
//! `Open` accepts registrations; `finalize` resolves super-type references,
//! rejects unknown targets and cycles, and moves the registry to `Finalized`.
//! There is no reverse transition. After finalization every operation takes
//! `&self`, holds no interior mutability, and is safe for unsynchronized
//! concurrent readers.

use crate::descriptor::ElementDescriptor;
use crate::error::RegistryError;
use crate::validate::validate;
use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashSet};
use tracing::debug;

/// Insertion-ordered map with the fast hasher used throughout domdex.
/// Insertion order is what `list_types` exposes.
type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Owner of all element declarations, keyed by type name.
#[derive(Debug, Default)]
pub struct Registry {
    types: FxIndexMap<String, ElementDescriptor>,
    finalized: bool,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Insert a validated descriptor.
    ///
    /// Fails with [`RegistryError::RegistryClosed`] after finalization,
    /// [`RegistryError::MalformedDescriptor`] when validation rejects the
    /// descriptor, and [`RegistryError::DuplicateType`] when the name is
    /// taken. Failed registrations leave the registry untouched.
    pub fn register(&mut self, descriptor: ElementDescriptor) -> Result<(), RegistryError> {
        if self.finalized {
            return Err(RegistryError::RegistryClosed);
        }
        validate(&descriptor)?;
        if self.types.contains_key(descriptor.type_name()) {
            return Err(RegistryError::DuplicateType {
                type_name: descriptor.type_name().to_string(),
            });
        }
        debug!(
            type_name = descriptor.type_name(),
            members = descriptor.members().len(),
            "registered element declaration"
        );
        self.types
            .insert(descriptor.type_name().to_string(), descriptor);
        Ok(())
    }

    /// Resolve every super-type reference and close the registry to further
    /// registration.
    ///
    /// Fails with [`RegistryError::UnknownSuperType`] when a referenced
    /// super type was never registered and [`RegistryError::CyclicInheritance`]
    /// when resolution finds a cycle. On failure the registry stays `Open`,
    /// so the caller can register the missing type and retry. Idempotent
    /// once finalized.
    pub fn finalize(&mut self) -> Result<(), RegistryError> {
        if self.finalized {
            return Ok(());
        }

        // Depth-first walk over super chains. Every type on a fully-walked
        // chain lands in `resolved`, keeping the whole pass O(N).
        let mut resolved: FxHashSet<&str> = FxHashSet::default();
        for start in self.types.keys() {
            if resolved.contains(start.as_str()) {
                continue;
            }
            let mut trail: Vec<&str> = vec![start];
            let mut on_trail: FxHashSet<&str> = trail.iter().copied().collect();
            let mut current = start.as_str();
            loop {
                let Some(descriptor) = self.types.get(current) else {
                    break;
                };
                let Some(super_name) = descriptor.super_type_name() else {
                    break;
                };
                if resolved.contains(super_name) {
                    break;
                }
                if !self.types.contains_key(super_name) {
                    return Err(RegistryError::UnknownSuperType {
                        type_name: current.to_string(),
                        super_type: super_name.to_string(),
                    });
                }
                if on_trail.contains(super_name) {
                    let entry = trail
                        .iter()
                        .position(|&name| name == super_name)
                        .unwrap_or(0);
                    let mut cycle: Vec<String> =
                        trail[entry..].iter().map(|&name| name.to_string()).collect();
                    cycle.push(super_name.to_string());
                    return Err(RegistryError::CyclicInheritance { cycle });
                }
                trail.push(super_name);
                on_trail.insert(super_name);
                current = super_name;
            }
            resolved.extend(trail);
        }

        debug!(types = self.types.len(), "finalized registry");
        self.finalized = true;
        Ok(())
    }

    /// Whether `finalize` has completed.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Fetch a descriptor by type name.
    pub fn lookup(&self, type_name: &str) -> Result<&ElementDescriptor, RegistryError> {
        self.types
            .get(type_name)
            .ok_or_else(|| RegistryError::NotFound {
                type_name: type_name.to_string(),
            })
    }

    pub(crate) fn get(&self, type_name: &str) -> Option<&ElementDescriptor> {
        self.types.get(type_name)
    }

    /// All registered type names, in registration order.
    pub fn list_types(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// All registered descriptors, in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ElementDescriptor> {
        self.types.values()
    }

    /// Named type references that no registered declaration satisfies.
    ///
    /// Legacy stubs freely reference ambient declarations (`document`,
    /// `event`, `TextRange`) that live outside the file being catalogued.
    /// Finalization does not reject these; this query lets tooling surface
    /// them instead. Sorted, deduplicated.
    pub fn unresolved_type_refs(&self) -> Vec<&str> {
        let mut missing: FxHashSet<&str> = FxHashSet::default();
        for descriptor in self.types.values() {
            for member in descriptor.members() {
                let referenced = member
                    .value_type
                    .iter()
                    .chain(member.return_type.iter())
                    .chain(member.params.iter().map(|param| &param.ty));
                for ty in referenced {
                    if let Some(name) = ty.referent()
                        && !self.types.contains_key(name)
                    {
                        missing.insert(name);
                    }
                }
            }
        }
        let mut names: Vec<&str> = missing.into_iter().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::MemberDescriptor;
    use domdex_common::TypeRef;

    #[test]
    fn registration_order_drives_list_types() {
        let mut registry = Registry::new();
        registry
            .register(ElementDescriptor::new("Object"))
            .unwrap();
        registry
            .register(ElementDescriptor::new("Element").super_type("Object"))
            .unwrap();
        registry
            .register(ElementDescriptor::new("ul").super_type("Element"))
            .unwrap();

        let names: Vec<&str> = registry.list_types().collect();
        assert_eq!(names, ["Object", "Element", "ul"]);
    }

    #[test]
    fn unresolved_type_refs_reports_ambient_names() {
        let mut registry = Registry::new();
        registry
            .register(
                ElementDescriptor::new("Element")
                    .member(MemberDescriptor::property("ownerDocument", TypeRef::named("document")))
                    .member(
                        MemberDescriptor::method("createTextRange")
                            .returns(TypeRef::named("TextRange")),
                    )
                    .member(MemberDescriptor::property("tagName", TypeRef::String)),
            )
            .unwrap();
        registry
            .register(ElementDescriptor::new("document"))
            .unwrap();

        assert_eq!(registry.unresolved_type_refs(), ["TextRange"]);
    }
}
