use core::fmt;

/// Error returned by [`resolve_boxed`](crate::resolve_boxed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveError {
    /// No descriptor was supplied.
    ///
    /// This is a contract violation by the caller, not a condition worth
    /// retrying.
    InvalidArgument,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::InvalidArgument => {
                write!(f, "invalid argument: cannot resolve the boxed form of an absent type")
            }
        }
    }
}

impl core::error::Error for ResolveError {}

/// Error returned when parsing a [`PrimitiveKind`](crate::PrimitiveKind) from a keyword fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseKindError {
    _priv: (),
}

impl ParseKindError {
    pub(crate) const fn new() -> Self {
        Self { _priv: () }
    }
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected one of: boolean, byte, short, char, int, long, float, double"
        )
    }
}

impl core::error::Error for ParseKindError {}

/// Error returned by the [`well_known`](crate::well_known) lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownTypeError<'a> {
    /// The name or field descriptor that matched nothing.
    pub name: &'a str,
}

impl<'a> UnknownTypeError<'a> {
    pub(crate) const fn new(name: &'a str) -> Self {
        Self { name }
    }
}

impl fmt::Display for UnknownTypeError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown type `{}`", self.name)
    }
}

impl core::error::Error for UnknownTypeError<'_> {}

/// Error returned by [`TypeDescriptor::try_reference`](crate::TypeDescriptor::try_reference)
/// when the name or field descriptor belongs to a primitive or `void`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedNameError {
    /// The offending name or field descriptor.
    pub name: &'static str,
}

impl ReservedNameError {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl fmt::Display for ReservedNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` is reserved for a primitive or `void` and cannot name a reference type",
            self.name
        )
    }
}

impl core::error::Error for ReservedNameError {}
