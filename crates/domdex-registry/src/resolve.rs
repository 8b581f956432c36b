//! Inheritance-aware member resolution.
//!
//! Resolution walks from the queried type up its declared super chain,
//! nearest first. A member declared on a subtype always shadows an
//! ancestor's member of the same name, whatever its kind. Queries that need
//! the super chain require the registry to be finalized; a descriptor with
//! no super type may be queried during the load phase.

use crate::descriptor::{ElementDescriptor, MemberDescriptor};
use crate::error::RegistryError;
use crate::registry::Registry;
use rustc_hash::FxHashSet;
use tracing::trace;

impl Registry {
    /// Resolve `member_name` against `type_name`, considering inherited
    /// members.
    ///
    /// Returns the nearest (most-derived) match. Fails with
    /// [`RegistryError::MemberNotFound`] when the chain is exhausted and
    /// [`RegistryError::NotFinalized`] when the descriptor declares a super
    /// type but the registry is still open.
    pub fn resolve_member(
        &self,
        type_name: &str,
        member_name: &str,
    ) -> Result<&MemberDescriptor, RegistryError> {
        let descriptor = self.lookup(type_name)?;
        if descriptor.super_type_name().is_some() && !self.is_finalized() {
            return Err(RegistryError::NotFinalized {
                type_name: type_name.to_string(),
            });
        }

        let mut current = descriptor;
        loop {
            if let Some(member) = current.own_member(member_name) {
                trace!(
                    type_name,
                    member_name,
                    declared_on = current.type_name(),
                    "resolved member"
                );
                return Ok(member);
            }
            match current.super_type_name() {
                None => {
                    return Err(RegistryError::MemberNotFound {
                        type_name: type_name.to_string(),
                        member_name: member_name.to_string(),
                    });
                }
                Some(super_name) => {
                    // Finalization guarantees the target exists; propagate
                    // rather than panic if that invariant is ever broken.
                    current = self.get(super_name).ok_or_else(|| {
                        RegistryError::UnknownSuperType {
                            type_name: current.type_name().to_string(),
                            super_type: super_name.to_string(),
                        }
                    })?;
                }
            }
        }
    }

    /// Iterate the members visible on `type_name`.
    ///
    /// Own members come first in declaration order, then ancestor members
    /// nearest-first, skipping any name already yielded. The iterator is
    /// lazy, finite, and cloneable for restarts. With `include_inherited`
    /// and an unresolved super chain this fails with
    /// [`RegistryError::NotFinalized`] at call time.
    pub fn list_members(
        &self,
        type_name: &str,
        include_inherited: bool,
    ) -> Result<MembersIter<'_>, RegistryError> {
        let descriptor = self.lookup(type_name)?;
        if include_inherited && descriptor.super_type_name().is_some() && !self.is_finalized() {
            return Err(RegistryError::NotFinalized {
                type_name: type_name.to_string(),
            });
        }
        Ok(MembersIter {
            registry: self,
            current: Some(descriptor),
            position: 0,
            include_inherited,
            yielded: FxHashSet::default(),
        })
    }
}

/// Lazy walk over the members visible on a type. Created by
/// [`Registry::list_members`].
#[derive(Clone, Debug)]
pub struct MembersIter<'a> {
    registry: &'a Registry,
    current: Option<&'a ElementDescriptor>,
    position: usize,
    include_inherited: bool,
    yielded: FxHashSet<&'a str>,
}

impl<'a> Iterator for MembersIter<'a> {
    type Item = &'a MemberDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let descriptor = self.current?;
            if let Some(member) = descriptor.members().get(self.position) {
                self.position += 1;
                if self.yielded.insert(member.name.as_str()) {
                    return Some(member);
                }
                continue;
            }
            if !self.include_inherited {
                self.current = None;
                return None;
            }
            self.current = descriptor
                .super_type_name()
                .and_then(|name| self.registry.get(name));
            self.position = 0;
        }
    }
}
