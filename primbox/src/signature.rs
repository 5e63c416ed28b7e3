//! Matching runtime argument types against declared parameter types.
//!
//! Arguments reach a reflective call site boxed, while the declaration may
//! name the primitive. Both sides are boxed before comparing. There is no
//! subtyping here: a `java.lang.Integer` argument does not match a
//! `java.lang.Number` parameter.

use core::fmt;

use primbox_core::{TypeDescriptor, box_descriptor};

/// Whether an argument of type `actual` fits a parameter declared as `declared`.
///
/// ```
/// use primbox::{matches_argument, well_known::{boxed, primitive}};
///
/// assert!(matches_argument(primitive::LONG, boxed::LONG));
/// assert!(matches_argument(boxed::LONG, primitive::LONG));
/// assert!(!matches_argument(primitive::LONG, boxed::INTEGER));
/// ```
pub fn matches_argument(declared: &TypeDescriptor, actual: &TypeDescriptor) -> bool {
    box_descriptor(declared) == box_descriptor(actual)
}

/// The declared parameter types of a callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature<'a> {
    params: &'a [&'a TypeDescriptor],
}

impl<'a> Signature<'a> {
    /// A signature with the given parameter types, in order.
    pub const fn new(params: &'a [&'a TypeDescriptor]) -> Self {
        Self { params }
    }

    /// The declared parameter types.
    pub const fn params(&self) -> &'a [&'a TypeDescriptor] {
        self.params
    }

    /// Number of parameters.
    pub const fn arity(&self) -> usize {
        self.params.len()
    }

    /// Whether `args` can be bound to this signature.
    pub fn accepts(&self, args: &[&TypeDescriptor]) -> bool {
        self.check(args).is_ok()
    }

    /// Check `args` against this signature, reporting the first mismatch.
    pub fn check(&self, args: &[&TypeDescriptor]) -> Result<(), SignatureMismatch> {
        if args.len() != self.params.len() {
            return Err(SignatureMismatch::Arity {
                expected: self.params.len(),
                actual: args.len(),
            });
        }
        for (index, (declared, actual)) in self.params.iter().zip(args).enumerate() {
            if !matches_argument(declared, actual) {
                return Err(SignatureMismatch::Parameter {
                    index,
                    declared: **declared,
                    actual: **actual,
                });
            }
        }
        Ok(())
    }
}

/// Why a set of arguments does not fit a [`Signature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SignatureMismatch {
    /// Wrong number of arguments.
    Arity {
        /// Number of declared parameters.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },

    /// An argument's type differs from its parameter's, even after boxing.
    Parameter {
        /// 0-based parameter position.
        index: usize,
        /// The declared parameter type.
        declared: TypeDescriptor,
        /// The argument type.
        actual: TypeDescriptor,
    },
}

impl fmt::Display for SignatureMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureMismatch::Arity { expected, actual } => {
                write!(f, "expected {expected} argument(s), got {actual}")
            }
            SignatureMismatch::Parameter {
                index,
                declared,
                actual,
            } => write!(
                f,
                "argument {index}: `{actual}` does not match parameter type `{declared}`"
            ),
        }
    }
}

impl core::error::Error for SignatureMismatch {}
