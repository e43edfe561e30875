use log::trace;

use crate::equality::Equality;
use crate::structural::{Kind, Structural};

/// Performs a deep equality check between two values.
///
/// Identical values (same primitive, same reference) are equal without
/// looking inside them. Two object-like values are equal when they have the
/// same number of own enumerable keys and every own enumerable key of `a`
/// resolves on `b` to a deep-equal value. Everything else is unequal.
///
/// Membership on `b` accepts inherited keys, so the check is not symmetric
/// for values with prototype chains. There is no cycle detection.
///
/// # Examples
///
/// ```
/// use equality::deep_equal;
/// use serde_json::json;
///
/// assert!(deep_equal(&json!({"a": [1, {"b": 2}]}), &json!({"a": [1, {"b": 2}]})));
/// assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
/// ```
pub fn deep_equal<T: Structural>(a: &T, b: &T) -> bool {
    if a.is_identical(b) {
        return true;
    }

    if a.kind() == Kind::Object && b.kind() == Kind::Object {
        let keys = a.own_keys();
        let count = b.own_key_count();
        if keys.len() != count {
            trace!(target: "equality", "own key count differs: {} != {}", keys.len(), count);
            return false;
        }
        return keys.iter().all(|key| {
            if !b.has_property(key) {
                trace!(target: "equality", "key {:?} does not resolve on right side", key);
                return false;
            }
            match (a.property(key), b.property(key)) {
                (Some(left), Some(right)) => deep_equal(&*left, &*right),
                _ => false,
            }
        });
    }

    false
}

/// [`deep_equal`] as a strategy value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeepEqual;

impl<T: Structural> Equality<T> for DeepEqual {
    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        deep_equal(a, b)
    }
}
