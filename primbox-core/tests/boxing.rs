use primbox_core::well_known::{self, boxed, primitive};
use primbox_core::{
    BOXING_TABLE, PrimitiveKind, ResolveError, TypeDescriptor, TypeKind, box_descriptor, resolve_boxed,
    resolve_unboxed,
};
use primbox_testhelpers::test;

const USER_TYPE: &TypeDescriptor =
    &TypeDescriptor::reference("com.example.Account", "Lcom/example/Account;");

#[test]
fn documented_mapping() {
    let table = [
        ("boolean", "java.lang.Boolean"),
        ("byte", "java.lang.Byte"),
        ("short", "java.lang.Short"),
        ("char", "java.lang.Character"),
        ("int", "java.lang.Integer"),
        ("long", "java.lang.Long"),
        ("float", "java.lang.Float"),
        ("double", "java.lang.Double"),
    ];
    for (keyword, wrapper) in table {
        let prim = well_known::lookup(keyword).unwrap();
        let resolved = resolve_boxed(Some(prim)).unwrap();
        assert_eq!(resolved.type_identifier(), wrapper);
        assert_eq!(resolved, well_known::lookup(wrapper).unwrap());
    }
}

#[test]
fn string_is_unchanged() {
    assert_eq!(resolve_boxed(Some(well_known::STRING)), Ok(well_known::STRING));
}

#[test]
fn already_boxed_is_unchanged() {
    assert_eq!(resolve_boxed(Some(boxed::INTEGER)), Ok(boxed::INTEGER));
}

#[test]
fn user_types_are_unchanged() {
    assert_eq!(resolve_boxed(Some(USER_TYPE)), Ok(USER_TYPE));
    assert_eq!(resolve_unboxed(USER_TYPE), USER_TYPE);
}

#[test]
fn primitive_names_cannot_be_reused_for_references() {
    let err = TypeDescriptor::try_reference("int", "Lcom/example/Int;").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"`int` is reserved for a primitive or `void` and cannot name a reference type");
    assert!(TypeDescriptor::try_reference("com.example.Flag", "Z").is_err());

    let wrapper = TypeDescriptor::try_reference("java.lang.Integer", "Ljava/lang/Integer;").unwrap();
    assert_eq!(&wrapper, boxed::INTEGER);
    assert_eq!(wrapper.unboxed_kind(), Some(PrimitiveKind::Integer));
}

#[test]
fn only_built_in_descriptors_are_primitive() {
    let primitives: Vec<_> = well_known::ALL
        .iter()
        .filter(|d| matches!(d.kind(), TypeKind::Primitive(_)))
        .map(|d| d.type_identifier())
        .collect();
    assert_eq!(
        primitives,
        ["boolean", "byte", "short", "char", "int", "long", "float", "double"]
    );
    assert_eq!(USER_TYPE.kind(), TypeKind::Reference);
    assert_eq!(box_descriptor(USER_TYPE).kind(), TypeKind::Reference);
}

#[test]
fn absent_is_invalid_argument() {
    let err = resolve_boxed(None).unwrap_err();
    assert_eq!(err, ResolveError::InvalidArgument);
    insta::assert_snapshot!(err.to_string(), @"invalid argument: cannot resolve the boxed form of an absent type");
}

#[test]
fn idempotent_for_every_known_type() {
    for d in well_known::ALL.iter().copied().chain([USER_TYPE]) {
        let once = box_descriptor(d);
        assert_eq!(box_descriptor(once), once, "{d}");
        assert!(!once.is_primitive(), "{d}");
    }
}

#[test]
fn void_passes_through() {
    assert_eq!(resolve_boxed(Some(well_known::VOID)), Ok(well_known::VOID));
}

#[test]
fn table_has_eight_distinct_entries() {
    assert_eq!(BOXING_TABLE.len(), 8);
    let mut seen: Vec<&str> = BOXING_TABLE
        .iter()
        .map(|(_, boxed)| boxed.type_identifier())
        .collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 8);
}

#[test]
fn table_debug_output() {
    insta::assert_snapshot!(format!("{BOXING_TABLE:#?}"), @r#"
    {
        "boolean": "java.lang.Boolean",
        "byte": "java.lang.Byte",
        "short": "java.lang.Short",
        "char": "java.lang.Character",
        "int": "java.lang.Integer",
        "long": "java.lang.Long",
        "float": "java.lang.Float",
        "double": "java.lang.Double",
    }
    "#);
}

#[test]
fn same_answer_from_many_threads() {
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    PrimitiveKind::ALL
                        .into_iter()
                        .map(|kind| box_descriptor(kind.descriptor()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            let results = handle.join().unwrap();
            for (kind, boxed) in PrimitiveKind::ALL.into_iter().zip(results) {
                assert_eq!(boxed, BOXING_TABLE.get(kind));
            }
        }
    });
}

#[test]
fn unknown_names() {
    let err = well_known::lookup("java.util.Optional").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"unknown type `java.util.Optional`");
    let err = "integer".parse::<PrimitiveKind>().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"expected one of: boolean, byte, short, char, int, long, float, double");
    assert_eq!(primitive::CHAR.boxed(), boxed::CHARACTER);
}
