//! The `ul` element declaration and the root it ultimately derives from.

use domdex_registry::{ElementDescriptor, MemberDescriptor, TypeRef};

use crate::{ELEMENT, OBJECT, UL, stamp};

/// The empty root every catalogued chain ends at.
pub(crate) fn object_descriptor() -> ElementDescriptor {
    ElementDescriptor::new(OBJECT)
}

/// List-specific members; the rest of the surface is inherited from
/// `Element`.
pub(crate) fn ul_descriptor() -> ElementDescriptor {
    ElementDescriptor::new(UL)
        .super_type(ELEMENT)
        .members_from(stamp(vec![
            MemberDescriptor::property("compact", TypeRef::Boolean)
                .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533585.aspx"),
            MemberDescriptor::property("type", TypeRef::String)
                .doc_ref("http://msdn2.microsoft.com/en-us/library/ms534691.aspx"),
        ]))
}
