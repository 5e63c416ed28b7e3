use core::fmt;

use crate::{PrimitiveKind, ReservedNameError};

/// What sort of type a [`TypeDescriptor`] stands for.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TypeKind {
    /// One of the eight primitive value types.
    Primitive(PrimitiveKind),
    /// The `void` pseudo-type. It has no values, is not a [`PrimitiveKind`],
    /// and is never boxed.
    Void,
    /// Any reference type, wrapper classes included.
    Reference,
}

/// An opaque handle naming one type.
///
/// Two descriptors denote the same type exactly when they compare equal. The
/// built-in descriptors live in [`well_known`](crate::well_known); reference
/// types of your own are made with [`TypeDescriptor::reference`].
///
/// Only this crate can make a primitive or `void` descriptor, so the kind
/// always agrees with the name:
///
/// ```compile_fail
/// use primbox_core::{PrimitiveKind, TypeDescriptor, TypeKind};
///
/// let forged = TypeDescriptor {
///     type_identifier: "java.lang.String",
///     field_descriptor: "Ljava/lang/String;",
///     kind: TypeKind::Primitive(PrimitiveKind::Integer),
/// };
/// ```
///
/// ```compile_fail
/// use primbox_core::{PrimitiveKind, TypeKind, well_known};
///
/// let mut forged = *well_known::STRING;
/// forged.kind = TypeKind::Primitive(PrimitiveKind::Integer);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    type_identifier: &'static str,
    field_descriptor: &'static str,
    kind: TypeKind,
}

impl TypeDescriptor {
    /// Descriptor of a reference type.
    ///
    /// ```
    /// use primbox_core::TypeDescriptor;
    ///
    /// const UUID: TypeDescriptor = TypeDescriptor::reference("java.util.UUID", "Ljava/util/UUID;");
    /// assert!(!UUID.is_primitive());
    /// assert_eq!(UUID.boxed(), &UUID);
    /// ```
    ///
    /// # Panics
    ///
    /// If the name is a primitive keyword or `void`, or the field descriptor
    /// is a primitive letter or `V`. In a `const` this is a compile error:
    ///
    /// ```compile_fail
    /// use primbox_core::TypeDescriptor;
    ///
    /// const INT: TypeDescriptor = TypeDescriptor::reference("int", "I");
    /// ```
    ///
    /// Use [`TypeDescriptor::try_reference`] for names only known at run time.
    pub const fn reference(type_identifier: &'static str, field_descriptor: &'static str) -> Self {
        match Self::try_reference(type_identifier, field_descriptor) {
            Ok(descriptor) => descriptor,
            Err(_) => panic!("primitive keywords and `void` cannot name a reference type"),
        }
    }

    /// Descriptor of a reference type, or an error if the name or field
    /// descriptor belongs to a primitive or `void`.
    pub const fn try_reference(
        type_identifier: &'static str,
        field_descriptor: &'static str,
    ) -> Result<Self, ReservedNameError> {
        if is_reserved_name(type_identifier) {
            return Err(ReservedNameError::new(type_identifier));
        }
        if is_reserved_field_descriptor(field_descriptor) {
            return Err(ReservedNameError::new(field_descriptor));
        }
        Ok(Self {
            type_identifier,
            field_descriptor,
            kind: TypeKind::Reference,
        })
    }

    pub(crate) const fn primitive(
        kind: PrimitiveKind,
        type_identifier: &'static str,
        field_descriptor: &'static str,
    ) -> Self {
        Self {
            type_identifier,
            field_descriptor,
            kind: TypeKind::Primitive(kind),
        }
    }

    pub(crate) const fn void() -> Self {
        Self {
            type_identifier: "void",
            field_descriptor: "V",
            kind: TypeKind::Void,
        }
    }

    /// Fully qualified name, e.g. `int` or `java.lang.Integer`.
    #[inline]
    pub const fn type_identifier(&self) -> &'static str {
        self.type_identifier
    }

    /// Field descriptor as written in class files, e.g. `I` or `Ljava/lang/Integer;`.
    #[inline]
    pub const fn field_descriptor(&self) -> &'static str {
        self.field_descriptor
    }

    /// Primitive, void or reference.
    #[inline]
    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Whether this is one of the eight primitive value types. `void` is not.
    #[inline]
    pub const fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeKind::Primitive(_))
    }

    /// The primitive kind, if this is a primitive value type.
    #[inline]
    pub const fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self.kind {
            TypeKind::Primitive(kind) => Some(kind),
            _ => None,
        }
    }

    /// Whether this is the `void` pseudo-type.
    #[inline]
    pub const fn is_void(&self) -> bool {
        matches!(self.kind, TypeKind::Void)
    }

    /// Whether this is a reference type.
    #[inline]
    pub const fn is_reference(&self) -> bool {
        matches!(self.kind, TypeKind::Reference)
    }

    /// The boxed form of this type: the wrapper class for a primitive,
    /// `self` for anything else. See [`resolve_boxed`](crate::resolve_boxed).
    #[inline]
    pub fn boxed(&self) -> &TypeDescriptor {
        crate::box_descriptor(self)
    }

    /// If this is the canonical wrapper class of a primitive kind, that kind.
    #[inline]
    pub fn unboxed_kind(&self) -> Option<PrimitiveKind> {
        crate::BOXING_TABLE.kind_of_boxed(self)
    }

    /// Whether this is one of the eight canonical wrapper classes.
    #[inline]
    pub fn is_boxed(&self) -> bool {
        self.unboxed_kind().is_some()
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn is_reserved_name(type_identifier: &str) -> bool {
    if str_eq(type_identifier, "void") {
        return true;
    }
    let mut i = 0;
    while i < PrimitiveKind::COUNT {
        if str_eq(type_identifier, PrimitiveKind::ALL[i].keyword()) {
            return true;
        }
        i += 1;
    }
    false
}

const fn is_reserved_field_descriptor(field_descriptor: &str) -> bool {
    match field_descriptor.as_bytes() {
        [b'V'] => true,
        [c] => PrimitiveKind::from_descriptor_char(*c as char).is_some(),
        _ => false,
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeDescriptor({})", self.type_identifier)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_identifier)
    }
}
