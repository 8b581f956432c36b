//! Tests for the built-in catalogue: shape, inheritance through the
//! `Object <- Element <- ul` chain, and fidelity to the recovered stub.

use domdex_catalog::{ELEMENT, JSCRIPT_5_6, OBJECT, UL, install, registry};
use domdex_registry::{MemberKind, Registry, TypeRef};

#[test]
fn catalogue_is_finalized_and_ordered() {
    let catalog = registry();
    assert!(catalog.is_finalized());
    let types: Vec<&str> = catalog.list_types().collect();
    assert_eq!(types, [OBJECT, ELEMENT, UL]);
}

#[test]
fn ul_inherits_the_element_surface() {
    let catalog = registry();

    let access_key = catalog.resolve_member(UL, "accessKey").unwrap();
    assert_eq!(access_key.kind, MemberKind::Property);
    assert_eq!(access_key.value_type, Some(TypeRef::String));

    let own_type = catalog.resolve_member(UL, "type").unwrap();
    assert_eq!(own_type.value_type, Some(TypeRef::String));

    assert!(catalog.resolve_member(UL, "marquee").is_err());
}

#[test]
fn ul_declares_only_list_members() {
    let catalog = registry();
    let own: Vec<&str> = catalog
        .list_members(UL, false)
        .unwrap()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(own, ["compact", "type"]);
}

#[test]
fn visible_surface_counts_match_the_stub() {
    let catalog = registry();
    let element = catalog.lookup(ELEMENT).unwrap();

    let count_kind = |kind: MemberKind| {
        element
            .members()
            .iter()
            .filter(|m| m.kind == kind)
            .count()
    };
    assert_eq!(count_kind(MemberKind::Property), 65);
    assert_eq!(count_kind(MemberKind::Method), 45);
    assert_eq!(count_kind(MemberKind::Event), 50);

    // ul adds its two own members; nothing shadows.
    let visible = catalog.list_members(UL, true).unwrap().count();
    assert_eq!(visible, 162);
}

#[test]
fn event_hooks_keep_their_stub_types() {
    let catalog = registry();
    let onclick = catalog.resolve_member(UL, "onclick").unwrap();
    assert_eq!(onclick.kind, MemberKind::Event);
    assert_eq!(onclick.value_type, Some(TypeRef::named("onclick")));
    assert_eq!(
        onclick.doc_ref.as_deref(),
        Some("http://msdn2.microsoft.com/en-us/library/ms536913.aspx")
    );
}

#[test]
fn get_attribute_uses_the_documented_two_parameter_form() {
    let catalog = registry();
    let get_attribute = catalog.resolve_member(UL, "getAttribute").unwrap();
    assert_eq!(get_attribute.kind, MemberKind::Method);
    let params: Vec<&str> = get_attribute
        .params
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(params, ["sAttrName", "iFlags"]);
    assert_eq!(get_attribute.return_type, Some(TypeRef::Object));
}

#[test]
fn every_member_carries_doc_ref_and_since() {
    let catalog = registry();
    for type_name in [ELEMENT, UL] {
        let descriptor = catalog.lookup(type_name).unwrap();
        for member in descriptor.members() {
            assert!(
                member.doc_ref.is_some(),
                "{type_name}.{} has no doc_ref",
                member.name
            );
            assert_eq!(member.since.as_deref(), Some(JSCRIPT_5_6));
        }
    }
}

#[test]
fn ambient_stub_references_are_reported_not_rejected() {
    let catalog = registry();
    let unresolved = catalog.unresolved_type_refs();
    // The stub references declarations that live outside the file.
    assert!(unresolved.contains(&"TextRange"));
    assert!(unresolved.contains(&"document"));
    assert!(unresolved.contains(&"onclick"));
    // Everything registered is resolved.
    assert!(!unresolved.contains(&ELEMENT));
    assert!(!unresolved.contains(&OBJECT));
}

#[test]
fn install_leaves_the_registry_open_for_callers() {
    use domdex_registry::{ElementDescriptor, MemberDescriptor};

    let mut custom = Registry::new();
    install(&mut custom).unwrap();
    assert!(!custom.is_finalized());

    custom
        .register(
            ElementDescriptor::new("ol")
                .super_type(ELEMENT)
                .member(MemberDescriptor::property("start", TypeRef::Number)),
        )
        .unwrap();
    custom.finalize().unwrap();

    let inherited = custom.resolve_member("ol", "accessKey").unwrap();
    assert_eq!(inherited.value_type, Some(TypeRef::String));
}
