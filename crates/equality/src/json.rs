//! [`Structural`] for `serde_json::Value`.
//!
//! JSON values are viewed the way a dynamic host language sees parsed JSON:
//! arrays and objects are both object-like, array indices are string keys,
//! numbers are doubles and arrays expose an inherited `length`.

use std::borrow::Cow;
use std::ptr;

use serde_json::{Number, Value};

use crate::structural::{array_index, Kind, Structural};

const LENGTH: &str = "length";

fn numbers_identical(a: &Number, b: &Number) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        // Only reachable with serde_json's `arbitrary_precision`.
        _ => a == b,
    }
}

impl Structural for Value {
    type Key = String;

    fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Kind::Primitive,
            Value::Array(_) | Value::Object(_) => Kind::Object,
        }
    }

    fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => numbers_identical(a, b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => {
                ptr::eq(self, other)
            }
            _ => false,
        }
    }

    fn own_keys(&self) -> Vec<String> {
        match self {
            Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
            Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    fn own_key_count(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    fn has_property(&self, key: &String) -> bool {
        match self {
            Value::Array(items) => {
                key == LENGTH || array_index(key).is_some_and(|i| (i as usize) < items.len())
            }
            Value::Object(map) => map.contains_key(key),
            _ => false,
        }
    }

    fn property(&self, key: &String) -> Option<Cow<'_, Value>> {
        match self {
            Value::Array(items) if key == LENGTH => Some(Cow::Owned(Value::from(items.len()))),
            Value::Array(items) => array_index(key)
                .and_then(|i| items.get(i as usize))
                .map(Cow::Borrowed),
            Value::Object(map) => map.get(key).map(Cow::Borrowed),
            _ => None,
        }
    }
}
