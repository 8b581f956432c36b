//! Registration and lifecycle tests: duplicate rejection, atomic failure,
//! finalization, cycle detection, and the open/finalized state machine.

use domdex_registry::{
    DescriptorRule, ElementDescriptor, MemberDescriptor, Registry, RegistryError, TypeRef,
};

fn element_with_tag_name() -> ElementDescriptor {
    ElementDescriptor::new("Element")
        .member(MemberDescriptor::property("tagName", TypeRef::String))
}

#[test]
fn duplicate_type_rejected_first_registration_retained() {
    let mut registry = Registry::new();
    registry.register(element_with_tag_name()).unwrap();

    let replacement = ElementDescriptor::new("Element")
        .member(MemberDescriptor::property("id", TypeRef::String));
    let err = registry.register(replacement).unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateType {
            type_name: "Element".to_string()
        }
    );

    // The original descriptor is untouched.
    let descriptor = registry.lookup("Element").unwrap();
    assert!(descriptor.own_member("tagName").is_some());
    assert!(descriptor.own_member("id").is_none());
    assert_eq!(registry.len(), 1);
}

#[test]
fn malformed_registration_is_atomic() {
    let mut registry = Registry::new();
    let malformed = ElementDescriptor::new("ul")
        .member(MemberDescriptor::property("type", TypeRef::String))
        .member(MemberDescriptor::method("type"));

    let err = registry.register(malformed).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::MalformedDescriptor {
            rule: DescriptorRule::DuplicateMember { .. },
            ..
        }
    ));
    assert!(registry.is_empty());
    assert_eq!(
        registry.lookup("ul").unwrap_err(),
        RegistryError::NotFound {
            type_name: "ul".to_string()
        }
    );
}

#[test]
fn finalize_rejects_unknown_super_type() {
    let mut registry = Registry::new();
    registry
        .register(ElementDescriptor::new("ul").super_type("Element"))
        .unwrap();

    let err = registry.finalize().unwrap_err();
    assert_eq!(
        err,
        RegistryError::UnknownSuperType {
            type_name: "ul".to_string(),
            super_type: "Element".to_string(),
        }
    );

    // Still open: registering the missing type and retrying succeeds.
    assert!(!registry.is_finalized());
    registry.register(element_with_tag_name()).unwrap();
    registry.finalize().unwrap();
    assert!(registry.is_finalized());
}

#[test]
fn finalize_detects_two_cycle_and_stays_open() {
    let mut registry = Registry::new();
    registry
        .register(ElementDescriptor::new("a").super_type("b"))
        .unwrap();
    registry
        .register(ElementDescriptor::new("b").super_type("a"))
        .unwrap();

    let err = registry.finalize().unwrap_err();
    let RegistryError::CyclicInheritance { cycle } = err else {
        panic!("expected CyclicInheritance, got {err:?}");
    };
    assert_eq!(cycle.first().map(String::as_str), cycle.last().map(String::as_str));
    assert!(cycle.len() >= 3);
    assert!(!registry.is_finalized());

    // Open means register still works.
    registry.register(ElementDescriptor::new("c")).unwrap();
}

#[test]
fn finalize_detects_self_cycle() {
    let mut registry = Registry::new();
    registry
        .register(ElementDescriptor::new("worm").super_type("worm"))
        .unwrap();

    let err = registry.finalize().unwrap_err();
    assert_eq!(
        err,
        RegistryError::CyclicInheritance {
            cycle: vec!["worm".to_string(), "worm".to_string()],
        }
    );
}

#[test]
fn finalize_is_idempotent() {
    let mut registry = Registry::new();
    registry.register(element_with_tag_name()).unwrap();
    registry
        .register(ElementDescriptor::new("ul").super_type("Element"))
        .unwrap();

    registry.finalize().unwrap();
    let before: Vec<String> = registry
        .list_members("ul", true)
        .unwrap()
        .map(|m| m.name.clone())
        .collect();

    registry.finalize().unwrap();
    let after: Vec<String> = registry
        .list_members("ul", true)
        .unwrap()
        .map(|m| m.name.clone())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn register_after_finalize_fails_closed() {
    let mut registry = Registry::new();
    registry.register(element_with_tag_name()).unwrap();
    registry.finalize().unwrap();

    let err = registry.register(ElementDescriptor::new("ul")).unwrap_err();
    assert_eq!(err, RegistryError::RegistryClosed);
    assert_eq!(registry.len(), 1);
}

#[test]
fn descriptor_export_shape() {
    let descriptor = ElementDescriptor::new("ul")
        .super_type("Element")
        .member(
            MemberDescriptor::property("compact", TypeRef::Boolean)
                .doc_ref("http://msdn2.microsoft.com/en-us/library/ms533581.aspx")
                .since("JScript 5.6"),
        )
        .member(
            MemberDescriptor::method("getAttribute")
                .param("sAttrName", TypeRef::String)
                .param("iFlags", TypeRef::Number)
                .returns(TypeRef::Object),
        );

    let value = serde_json::to_value(&descriptor).unwrap();
    assert_eq!(value["type_name"], "ul");
    assert_eq!(value["super_type"], "Element");
    assert_eq!(value["members"][0]["kind"], "Property");
    assert_eq!(value["members"][0]["value_type"], "Boolean");
    assert_eq!(value["members"][1]["params"][1]["name"], "iFlags");
    // Fields that do not apply to the kind are omitted entirely.
    assert!(value["members"][0].get("params").is_none());
    assert!(value["members"][1].get("value_type").is_none());
}
