#![cfg(feature = "serde")]

use primbox_core::PrimitiveKind;
use primbox_testhelpers::test;

#[test]
fn kinds_serialize_as_keywords() {
    let json = serde_json::to_string(&PrimitiveKind::ALL).unwrap();
    assert_eq!(
        json,
        r#"["boolean","byte","short","char","int","long","float","double"]"#
    );
}

#[test]
fn kinds_deserialize_from_keywords() {
    let kind: PrimitiveKind = serde_json::from_str(r#""char""#).unwrap();
    assert_eq!(kind, PrimitiveKind::Character);
    assert!(serde_json::from_str::<PrimitiveKind>(r#""Character""#).is_err());
}
