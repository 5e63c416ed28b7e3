use crate::TypeDescriptor;
use crate::well_known::{self, boxed, primitive};

/// Rust types that have a [`TypeDescriptor`].
///
/// Primitive Rust types map to the matching primitive descriptor. Wrapping
/// one in [`Option`] makes it nullable, and a nullable primitive is boxed:
///
/// ```
/// use primbox_core::{Described, well_known};
///
/// assert_eq!(<i32 as Described>::DESCRIPTOR, well_known::primitive::INT);
/// assert_eq!(<Option<i32> as Described>::DESCRIPTOR, well_known::boxed::INTEGER);
/// ```
///
/// `u16` stands for the 16-bit `char` kind, since Rust's `char` is a 32-bit
/// scalar value and has no counterpart.
pub trait Described {
    /// The descriptor for this type.
    const DESCRIPTOR: &'static TypeDescriptor;
}

macro_rules! impl_described {
    ($($ty:ty => $descriptor:expr),* $(,)?) => {
        $(
            impl Described for $ty {
                const DESCRIPTOR: &'static TypeDescriptor = $descriptor;
            }
        )*
    };
}

impl_described! {
    bool => primitive::BOOLEAN,
    i8 => primitive::BYTE,
    i16 => primitive::SHORT,
    u16 => primitive::CHAR,
    i32 => primitive::INT,
    i64 => primitive::LONG,
    f32 => primitive::FLOAT,
    f64 => primitive::DOUBLE,

    Option<bool> => boxed::BOOLEAN,
    Option<i8> => boxed::BYTE,
    Option<i16> => boxed::SHORT,
    Option<u16> => boxed::CHARACTER,
    Option<i32> => boxed::INTEGER,
    Option<i64> => boxed::LONG,
    Option<f32> => boxed::FLOAT,
    Option<f64> => boxed::DOUBLE,

    () => well_known::VOID,
    str => well_known::STRING,
    &str => well_known::STRING,
    Option<&str> => well_known::STRING,
}

#[cfg(feature = "std")]
impl_described! {
    String => well_known::STRING,
    Option<String> => well_known::STRING,
}

/// The descriptor of `T`.
#[inline]
pub const fn descriptor_of<T: Described + ?Sized>() -> &'static TypeDescriptor {
    T::DESCRIPTOR
}
