//! Descriptor well-formedness checks.
//!
//! Run synchronously inside [`crate::Registry::register`] before insertion,
//! so a failed registration never partially mutates the registry. Checks
//! cover duplicate member names, duplicate method parameter names, and
//! identifier syntax for every name that refers to a declaration. Whether a
//! referenced declaration actually exists is deferred to finalization.

use crate::descriptor::ElementDescriptor;
use crate::error::{DescriptorRule, RegistryError};
use domdex_common::{MemberKind, TypeRef, is_valid_identifier};
use rustc_hash::FxHashSet;

/// Check `descriptor` for well-formedness.
pub fn validate(descriptor: &ElementDescriptor) -> Result<(), RegistryError> {
    let malformed = |rule: DescriptorRule| RegistryError::MalformedDescriptor {
        type_name: descriptor.type_name().to_string(),
        rule,
    };

    check_identifier(descriptor.type_name()).map_err(&malformed)?;
    if let Some(super_name) = descriptor.super_type_name() {
        check_identifier(super_name).map_err(&malformed)?;
    }

    let mut seen_members: FxHashSet<&str> = FxHashSet::default();
    for member in descriptor.members() {
        if !seen_members.insert(&member.name) {
            return Err(malformed(DescriptorRule::DuplicateMember {
                member: member.name.clone(),
            }));
        }

        if let Some(ty) = &member.value_type {
            check_type_ref(ty).map_err(&malformed)?;
        }

        if member.kind == MemberKind::Method {
            let mut seen_params: FxHashSet<&str> = FxHashSet::default();
            for param in &member.params {
                if !seen_params.insert(&param.name) {
                    return Err(malformed(DescriptorRule::DuplicateParameter {
                        member: member.name.clone(),
                        param: param.name.clone(),
                    }));
                }
                check_type_ref(&param.ty).map_err(&malformed)?;
            }
            if let Some(ty) = &member.return_type {
                check_type_ref(ty).map_err(&malformed)?;
            }
        }
    }

    Ok(())
}

fn check_identifier(name: &str) -> Result<(), DescriptorRule> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(DescriptorRule::InvalidIdentifier {
            name: name.to_string(),
        })
    }
}

fn check_type_ref(ty: &TypeRef) -> Result<(), DescriptorRule> {
    match ty.referent() {
        Some(name) => check_identifier(name),
        None => Ok(()),
    }
}
