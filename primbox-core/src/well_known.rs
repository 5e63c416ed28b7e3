//! Descriptors for the built-in types.
//!
//! Primitive descriptors are in [`primitive`], their wrapper classes in
//! [`boxed`]. A handful of other `java.lang` types that reflective callers
//! commonly meet are declared at the top level.

use crate::{PrimitiveKind, TypeDescriptor, UnknownTypeError};

/// The eight primitive value types.
pub mod primitive {
    use super::*;

    /// `boolean`
    pub const BOOLEAN: &TypeDescriptor =
        &TypeDescriptor::primitive(PrimitiveKind::Boolean, "boolean", "Z");
    /// `byte`
    pub const BYTE: &TypeDescriptor = &TypeDescriptor::primitive(PrimitiveKind::Byte, "byte", "B");
    /// `short`
    pub const SHORT: &TypeDescriptor =
        &TypeDescriptor::primitive(PrimitiveKind::Short, "short", "S");
    /// `char`
    pub const CHAR: &TypeDescriptor =
        &TypeDescriptor::primitive(PrimitiveKind::Character, "char", "C");
    /// `int`
    pub const INT: &TypeDescriptor = &TypeDescriptor::primitive(PrimitiveKind::Integer, "int", "I");
    /// `long`
    pub const LONG: &TypeDescriptor = &TypeDescriptor::primitive(PrimitiveKind::Long, "long", "J");
    /// `float`
    pub const FLOAT: &TypeDescriptor =
        &TypeDescriptor::primitive(PrimitiveKind::Float, "float", "F");
    /// `double`
    pub const DOUBLE: &TypeDescriptor =
        &TypeDescriptor::primitive(PrimitiveKind::Double, "double", "D");
}

/// The canonical wrapper classes.
pub mod boxed {
    use super::*;

    /// `java.lang.Boolean`
    pub const BOOLEAN: &TypeDescriptor =
        &TypeDescriptor::reference("java.lang.Boolean", "Ljava/lang/Boolean;");
    /// `java.lang.Byte`
    pub const BYTE: &TypeDescriptor =
        &TypeDescriptor::reference("java.lang.Byte", "Ljava/lang/Byte;");
    /// `java.lang.Short`
    pub const SHORT: &TypeDescriptor =
        &TypeDescriptor::reference("java.lang.Short", "Ljava/lang/Short;");
    /// `java.lang.Character`
    pub const CHARACTER: &TypeDescriptor =
        &TypeDescriptor::reference("java.lang.Character", "Ljava/lang/Character;");
    /// `java.lang.Integer`
    pub const INTEGER: &TypeDescriptor =
        &TypeDescriptor::reference("java.lang.Integer", "Ljava/lang/Integer;");
    /// `java.lang.Long`
    pub const LONG: &TypeDescriptor =
        &TypeDescriptor::reference("java.lang.Long", "Ljava/lang/Long;");
    /// `java.lang.Float`
    pub const FLOAT: &TypeDescriptor =
        &TypeDescriptor::reference("java.lang.Float", "Ljava/lang/Float;");
    /// `java.lang.Double`
    pub const DOUBLE: &TypeDescriptor =
        &TypeDescriptor::reference("java.lang.Double", "Ljava/lang/Double;");
}

/// `void`
pub const VOID: &TypeDescriptor = &TypeDescriptor::void();

/// `java.lang.Void`. Not the boxed form of [`VOID`]; `void` is never boxed.
pub const VOID_CLASS: &TypeDescriptor =
    &TypeDescriptor::reference("java.lang.Void", "Ljava/lang/Void;");

/// `java.lang.Object`
pub const OBJECT: &TypeDescriptor =
    &TypeDescriptor::reference("java.lang.Object", "Ljava/lang/Object;");

/// `java.lang.String`
pub const STRING: &TypeDescriptor =
    &TypeDescriptor::reference("java.lang.String", "Ljava/lang/String;");

/// `java.lang.Number`
pub const NUMBER: &TypeDescriptor =
    &TypeDescriptor::reference("java.lang.Number", "Ljava/lang/Number;");

/// Every descriptor declared in this module.
pub const ALL: &[&TypeDescriptor] = &[
    primitive::BOOLEAN,
    primitive::BYTE,
    primitive::SHORT,
    primitive::CHAR,
    primitive::INT,
    primitive::LONG,
    primitive::FLOAT,
    primitive::DOUBLE,
    VOID,
    boxed::BOOLEAN,
    boxed::BYTE,
    boxed::SHORT,
    boxed::CHARACTER,
    boxed::INTEGER,
    boxed::LONG,
    boxed::FLOAT,
    boxed::DOUBLE,
    VOID_CLASS,
    OBJECT,
    STRING,
    NUMBER,
];

/// Find a built-in descriptor by its qualified name (`int`, `java.lang.Integer`).
///
/// ```
/// use primbox_core::well_known;
///
/// assert_eq!(well_known::lookup("long"), Ok(well_known::primitive::LONG));
/// assert!(well_known::lookup("java.util.List").is_err());
/// ```
pub fn lookup(type_identifier: &str) -> Result<&'static TypeDescriptor, UnknownTypeError<'_>> {
    ALL.iter()
        .copied()
        .find(|d| d.type_identifier() == type_identifier)
        .ok_or_else(|| {
            debug!(type_identifier, "no built-in descriptor with this name");
            UnknownTypeError::new(type_identifier)
        })
}

/// Find a built-in descriptor by its class-file field descriptor (`I`, `Ljava/lang/Integer;`).
pub fn from_field_descriptor(
    field_descriptor: &str,
) -> Result<&'static TypeDescriptor, UnknownTypeError<'_>> {
    let mut chars = field_descriptor.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(kind) = PrimitiveKind::from_descriptor_char(c) {
            return Ok(kind.descriptor());
        }
    }
    ALL.iter()
        .copied()
        .find(|d| d.field_descriptor() == field_descriptor)
        .ok_or_else(|| {
            debug!(field_descriptor, "no built-in descriptor for this field descriptor");
            UnknownTypeError::new(field_descriptor)
        })
}
