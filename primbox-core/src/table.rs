//! The primitive-to-wrapper lookup table.

use core::fmt;

use crate::{PrimitiveKind, TypeDescriptor};

/// Maps every [`PrimitiveKind`] to the descriptor of its wrapper class.
///
/// There is exactly one entry per kind, indexed by [`PrimitiveKind::index`].
/// The only instance is [`BOXING_TABLE`]; it is evaluated at compile time
/// and never changes.
pub struct BoxingTable {
    entries: [&'static TypeDescriptor; PrimitiveKind::COUNT],
}

/// The process-wide boxing table.
pub static BOXING_TABLE: BoxingTable = BoxingTable::new();

impl BoxingTable {
    const fn new() -> Self {
        let mut entries = [PrimitiveKind::Boolean.boxed_descriptor(); PrimitiveKind::COUNT];
        let mut i = 0;
        while i < PrimitiveKind::COUNT {
            let kind = PrimitiveKind::ALL[i];
            entries[kind.index()] = kind.boxed_descriptor();
            i += 1;
        }
        Self { entries }
    }

    /// Number of entries. Always [`PrimitiveKind::COUNT`].
    #[inline]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The wrapper class descriptor for `kind`.
    #[inline]
    pub const fn get(&self, kind: PrimitiveKind) -> &'static TypeDescriptor {
        self.entries[kind.index()]
    }

    /// Reverse lookup: the kind whose wrapper class is `descriptor`, if any.
    pub fn kind_of_boxed(&self, descriptor: &TypeDescriptor) -> Option<PrimitiveKind> {
        // Primitives and void never appear as values.
        if !descriptor.is_reference() {
            return None;
        }
        self.iter()
            .find(|(_, boxed)| *boxed == descriptor)
            .map(|(kind, _)| kind)
    }

    /// All `(kind, wrapper)` pairs, in [`PrimitiveKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveKind, &'static TypeDescriptor)> + '_ {
        PrimitiveKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }
}

impl fmt::Debug for BoxingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(kind, boxed)| (kind.keyword(), boxed.type_identifier())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_entry_per_kind() {
        assert_eq!(BOXING_TABLE.len(), PrimitiveKind::COUNT);
        assert!(!BOXING_TABLE.is_empty());
        for (kind, boxed) in BOXING_TABLE.iter() {
            assert_eq!(BOXING_TABLE.get(kind), boxed);
        }
    }

    #[test]
    fn no_two_kinds_share_a_wrapper() {
        for (a, boxed_a) in BOXING_TABLE.iter() {
            for (b, boxed_b) in BOXING_TABLE.iter() {
                assert_eq!(a == b, boxed_a == boxed_b, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn entries_are_reference_types() {
        for (_, boxed) in BOXING_TABLE.iter() {
            assert!(boxed.is_reference());
            assert!(boxed.field_descriptor().starts_with("Ljava/lang/"));
        }
    }

    #[test]
    fn reverse_lookup_ignores_primitives() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(BOXING_TABLE.kind_of_boxed(kind.boxed_descriptor()), Some(kind));
            assert_eq!(BOXING_TABLE.kind_of_boxed(kind.descriptor()), None);
        }
        assert_eq!(BOXING_TABLE.kind_of_boxed(crate::well_known::STRING), None);
    }
}
