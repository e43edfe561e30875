use std::borrow::Cow;
use std::fmt::Debug;

/// Runtime category of a value, as seen by [`crate::deep_equal`].
///
/// Only [`Kind::Object`] values are compared structurally; every other
/// category is compared by identity alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Primitive,
    Function,
    /// Anything whose own enumerable keys can be listed: records, maps,
    /// arrays.
    Object,
}

/// Structural introspection over a dynamically shaped value.
///
/// A `Structural` type is a sum type covering every shape a value can take.
/// Object-like values expose their own enumerable keys, a membership test
/// that also sees inherited keys, and property resolution.
pub trait Structural: Clone {
    type Key: Debug;

    fn kind(&self) -> Kind;

    /// Strict identity: the same primitive value or the same reference.
    fn is_identical(&self, other: &Self) -> bool;

    /// Own enumerable keys. Empty for non-object values.
    fn own_keys(&self) -> Vec<Self::Key>;

    fn own_key_count(&self) -> usize {
        self.own_keys().len()
    }

    /// Whether `key` resolves on this value, either as an own property
    /// (enumerable or not) or through inheritance. Never evaluates getters.
    fn has_property(&self, key: &Self::Key) -> bool;

    /// Resolves `key` to its value. Own properties shadow inherited ones.
    fn property(&self, key: &Self::Key) -> Option<Cow<'_, Self>>;
}

/// Parses a canonical array index: `"0"`, `"17"`, but not `"01"`, `"+1"`
/// or anything at or above `u32::MAX`.
pub(crate) fn array_index(key: &str) -> Option<u32> {
    let index = key.parse::<u32>().ok().filter(|&i| i != u32::MAX)?;
    if index.to_string() == key {
        Some(index)
    } else {
        None
    }
}
