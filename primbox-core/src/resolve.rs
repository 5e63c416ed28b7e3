//! Boxing and unboxing of type descriptors.

use crate::{BOXING_TABLE, ResolveError, TypeDescriptor, TypeKind};

/// Resolve a type to its boxed equivalent.
///
/// A primitive resolves to its wrapper class from [`BOXING_TABLE`]; every
/// other type, `void` included, resolves to itself. Passing `None` (an absent
/// handle) is an error.
///
/// The result is never primitive, so resolving twice gives the same answer as
/// resolving once.
///
/// ```
/// use primbox_core::{resolve_boxed, ResolveError, well_known};
///
/// let int = well_known::primitive::INT;
/// assert_eq!(resolve_boxed(Some(int)), Ok(well_known::boxed::INTEGER));
/// assert_eq!(resolve_boxed(Some(well_known::STRING)), Ok(well_known::STRING));
/// assert_eq!(resolve_boxed(None), Err(ResolveError::InvalidArgument));
/// ```
pub fn resolve_boxed(
    descriptor: Option<&TypeDescriptor>,
) -> Result<&TypeDescriptor, ResolveError> {
    match descriptor {
        Some(descriptor) => Ok(box_descriptor(descriptor)),
        None => {
            debug!("resolve_boxed called without a descriptor");
            Err(ResolveError::InvalidArgument)
        }
    }
}

/// Infallible core of [`resolve_boxed`], for callers that hold a descriptor.
pub fn box_descriptor(descriptor: &TypeDescriptor) -> &TypeDescriptor {
    match descriptor.kind() {
        TypeKind::Primitive(kind) => {
            let boxed = BOXING_TABLE.get(kind);
            trace!(from = descriptor.type_identifier(), to = boxed.type_identifier(), "boxed");
            boxed
        }
        TypeKind::Void | TypeKind::Reference => descriptor,
    }
}

/// Inverse of [`box_descriptor`]: a canonical wrapper class resolves to its
/// primitive, every other type to itself.
pub fn resolve_unboxed(descriptor: &TypeDescriptor) -> &TypeDescriptor {
    match BOXING_TABLE.kind_of_boxed(descriptor) {
        Some(kind) => {
            let primitive = kind.descriptor();
            trace!(from = descriptor.type_identifier(), to = primitive.type_identifier(), "unboxed");
            primitive
        }
        None => descriptor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrimitiveKind;
    use crate::well_known::{self, boxed, primitive};

    #[test]
    fn primitives_box_to_their_wrappers() {
        let expected = [
            (primitive::BOOLEAN, boxed::BOOLEAN),
            (primitive::BYTE, boxed::BYTE),
            (primitive::SHORT, boxed::SHORT),
            (primitive::CHAR, boxed::CHARACTER),
            (primitive::INT, boxed::INTEGER),
            (primitive::LONG, boxed::LONG),
            (primitive::FLOAT, boxed::FLOAT),
            (primitive::DOUBLE, boxed::DOUBLE),
        ];
        for (prim, wrapper) in expected {
            assert_eq!(resolve_boxed(Some(prim)), Ok(wrapper));
        }
    }

    #[test]
    fn references_pass_through() {
        for d in well_known::ALL.iter().filter(|d| !d.is_primitive()) {
            assert_eq!(box_descriptor(d), *d);
        }
    }

    #[test]
    fn void_is_not_boxed() {
        assert_eq!(box_descriptor(well_known::VOID), well_known::VOID);
        assert_ne!(box_descriptor(well_known::VOID), well_known::VOID_CLASS);
    }

    #[test]
    fn absent_descriptor_is_invalid() {
        assert_eq!(resolve_boxed(None), Err(ResolveError::InvalidArgument));
    }

    #[test]
    fn unboxing_inverts_boxing() {
        for kind in PrimitiveKind::ALL {
            let prim = kind.descriptor();
            assert_eq!(resolve_unboxed(box_descriptor(prim)), prim);
            assert_eq!(resolve_unboxed(prim), prim);
        }
        assert_eq!(resolve_unboxed(well_known::STRING), well_known::STRING);
    }
}
