//! Immutable descriptor records for element API surfaces.
//!
//! A descriptor carries no behavior: it is a static record of names, kinds,
//! and type shapes, plus the documentation metadata legacy stubs attach to
//! each entry (`@see` reference URL, `@since` engine version). Descriptors
//! are built with chained constructors during the load phase and never
//! mutated after registration.

use domdex_common::{MemberKind, TypeRef};
use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;

/// A named method parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
}

/// One declared member of an element surface.
///
/// Which fields are meaningful depends on [`MemberKind`]: properties and
/// event hooks carry `value_type`, methods carry `params` and an optional
/// `return_type`. The constructors keep the unused fields empty rather than
/// encoding the split in the type, matching how declaration stubs present
/// their entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemberDescriptor {
    pub name: String,
    pub kind: MemberKind,
    /// Declared type, for properties and event hooks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<TypeRef>,
    /// Ordered parameter list, for methods.
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub params: SmallVec<[Param; 4]>,
    /// Declared return type, for methods documented with one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,
    /// Reference-documentation URL (`@see`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_ref: Option<String>,
    /// Engine version the member first appeared in (`@since`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
}

impl MemberDescriptor {
    fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        MemberDescriptor {
            name: name.into(),
            kind,
            value_type: None,
            params: SmallVec::new(),
            return_type: None,
            doc_ref: None,
            since: None,
        }
    }

    /// A default-valued property declaration.
    pub fn property(name: impl Into<String>, ty: TypeRef) -> Self {
        let mut member = Self::new(name, MemberKind::Property);
        member.value_type = Some(ty);
        member
    }

    /// A method declaration. Parameters are added with [`Self::param`].
    pub fn method(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Method)
    }

    /// An event-handler hook declaration (`on*`).
    pub fn event(name: impl Into<String>, ty: TypeRef) -> Self {
        let mut member = Self::new(name, MemberKind::Event);
        member.value_type = Some(ty);
        member
    }

    /// Append a method parameter.
    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.params.push(Param {
            name: name.into(),
            ty,
        });
        self
    }

    /// Set the declared return type.
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Attach a reference-documentation URL.
    pub fn doc_ref(mut self, url: impl Into<String>) -> Self {
        self.doc_ref = Some(url.into());
        self
    }

    /// Record the engine version the member first appeared in.
    pub fn since(mut self, version: impl Into<String>) -> Self {
        self.since = Some(version.into());
        self
    }
}

/// A complete element declaration: its name, optional super type, and
/// declaration-ordered members.
///
/// The super type is a weak, by-name reference. It stays unresolved until
/// [`crate::Registry::finalize`] checks that the target exists and that the
/// resulting chain is acyclic.
#[derive(Clone, Debug, Serialize)]
pub struct ElementDescriptor {
    type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    super_type: Option<String>,
    members: Vec<MemberDescriptor>,
    /// Member name -> position in `members`. First declaration wins; the
    /// validator rejects descriptors where that ever matters.
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl ElementDescriptor {
    pub fn new(type_name: impl Into<String>) -> Self {
        ElementDescriptor {
            type_name: type_name.into(),
            super_type: None,
            members: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Declare the super type by name.
    pub fn super_type(mut self, name: impl Into<String>) -> Self {
        self.super_type = Some(name.into());
        self
    }

    /// Append a member in declaration order.
    pub fn member(mut self, member: MemberDescriptor) -> Self {
        let position = self.members.len();
        self.index.entry(member.name.clone()).or_insert(position);
        self.members.push(member);
        self
    }

    /// Append several members in declaration order.
    pub fn members_from(mut self, members: impl IntoIterator<Item = MemberDescriptor>) -> Self {
        for member in members {
            self = self.member(member);
        }
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn super_type_name(&self) -> Option<&str> {
        self.super_type.as_deref()
    }

    /// Declared members, in declaration order.
    pub fn members(&self) -> &[MemberDescriptor] {
        &self.members
    }

    /// Look up an own member by name. Inherited members are the registry's
    /// concern, not the descriptor's.
    pub fn own_member(&self, name: &str) -> Option<&MemberDescriptor> {
        self.index.get(name).map(|&position| &self.members[position])
    }
}
