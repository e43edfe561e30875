#![cfg(feature = "json")]
//! Deep equality matrix over `serde_json::Value` covering primitives, null
//! handling, arrays, objects, nesting and the host-model quirks of treating
//! arrays as objects keyed by index.

mod common;

use equality::{deep_equal, DeepEqual, Equality};
use serde_json::{json, Value};

fn eq(a: &Value, b: &Value) -> bool {
    common::init_logging();
    deep_equal(a, b)
}

// ---------------------------------------------------------------------------
// Reflexivity
// ---------------------------------------------------------------------------

#[test]
fn reflexivity_scalars() {
    for v in [json!(null), json!(true), json!(42), json!(1.5), json!("hello")] {
        assert!(eq(&v, &v), "{v} should equal itself");
    }
}

#[test]
fn reflexivity_containers() {
    let v = json!({"complex": [1, 2, {"nested": true}], "empty": {}});
    assert!(eq(&v, &v));
    assert!(eq(&v, &v.clone()));
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

#[test]
fn primitive_equality() {
    assert!(eq(&json!(1), &json!(1)));
    assert!(!eq(&json!(1), &json!("1")));
    assert!(eq(&json!(null), &json!(null)));
    assert!(!eq(&json!(null), &json!({})));
}

#[test]
fn no_type_coercion() {
    assert!(!eq(&json!(1), &json!(true)));
    assert!(!eq(&json!(0), &json!(false)));
    assert!(!eq(&json!(true), &json!("true")));
    assert!(!eq(&json!(""), &json!(false)));
}

#[test]
fn numbers_compare_as_doubles() {
    assert!(eq(&json!(0), &json!(0.0)));
    assert!(eq(&json!(-0.0), &json!(0)));
    assert!(eq(&json!(1.5), &json!(1.5)));
    assert!(!eq(&json!(1.5), &json!(1.6)));
    assert!(!eq(&json!(-1), &json!(1)));
    assert!(!eq(&json!(999999999), &json!(999999998)));
}

#[test]
fn strings() {
    assert!(eq(&json!("\u{1F600}"), &json!("\u{1F600}")));
    assert!(!eq(&json!("\u{1F600}"), &json!("\u{1F601}")));
    assert!(!eq(&json!(""), &json!("a")));
}

// ---------------------------------------------------------------------------
// Null handling
// ---------------------------------------------------------------------------

#[test]
fn null_is_not_an_object() {
    for other in [json!(0), json!(false), json!(""), json!([]), json!({})] {
        assert!(!eq(&json!(null), &other));
        assert!(!eq(&other, &json!(null)));
    }
}

// ---------------------------------------------------------------------------
// Arrays
// ---------------------------------------------------------------------------

#[test]
fn arrays() {
    assert!(eq(&json!([]), &json!([])));
    assert!(eq(&json!([1, 2, 3]), &json!([1, 2, 3])));
    assert!(!eq(&json!([1, 2, 3]), &json!([1, 2, 3, 4])));
    assert!(!eq(&json!([1, 2, 3, 4]), &json!([1, 2, 3])));
    assert!(!eq(&json!([1, 2, 3]), &json!([3, 2, 1])));
}

#[test]
fn arrays_of_objects() {
    assert!(eq(
        &json!([{"a": "a"}, {"b": "b"}]),
        &json!([{"a": "a"}, {"b": "b"}])
    ));
    assert!(!eq(
        &json!([{"a": "a"}, {"b": "b"}]),
        &json!([{"a": "a"}, {"b": "c"}])
    ));
}

#[test]
fn primitive_never_equals_container() {
    assert!(!eq(&json!(1), &json!([1])));
    assert!(!eq(&json!("a"), &json!(["a"])));
    assert!(!eq(&json!({}), &json!("")));
}

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

#[test]
fn objects() {
    assert!(eq(&json!({}), &json!({})));
    assert!(eq(&json!({"a": 1, "b": 2}), &json!({"a": 1, "b": 2})));
    assert!(eq(&json!({"a": 1, "b": "2"}), &json!({"b": "2", "a": 1})));
    assert!(!eq(&json!({"a": 1, "b": 2}), &json!({"a": 1, "b": 3})));
    assert!(!eq(&json!({"a": 1}), &json!({"b": 1})));
}

#[test]
fn key_count_mismatch() {
    assert!(!eq(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
    assert!(!eq(&json!({"a": 1, "b": 2}), &json!({"a": 1})));
}

// ---------------------------------------------------------------------------
// Nesting
// ---------------------------------------------------------------------------

#[test]
fn nested_structures() {
    assert!(eq(&json!({"a": [1, {"b": 2}]}), &json!({"a": [1, {"b": 2}]})));
    assert!(!eq(&json!({"a": [1, {"b": 2}]}), &json!({"a": [1, {"b": 3}]})));
}

#[test]
fn deeply_nested_reordered() {
    let a = json!({
        "prop1": "value1",
        "prop4": {
            "subProp1": "sub value1",
            "subProp2": {
                "subSubProp1": "sub sub value1",
                "subSubProp2": [1, 2, {"prop2": 1, "prop": 2}, 4, 5]
            }
        },
        "prop5": 1000
    });
    let b = json!({
        "prop5": 1000,
        "prop1": "value1",
        "prop4": {
            "subProp2": {
                "subSubProp1": "sub sub value1",
                "subSubProp2": [1, 2, {"prop": 2, "prop2": 1}, 4, 5]
            },
            "subProp1": "sub value1"
        }
    });
    assert!(eq(&a, &b));
    assert!(eq(&b, &a));
}

// ---------------------------------------------------------------------------
// Arrays are objects keyed by index
// ---------------------------------------------------------------------------

#[test]
fn empty_object_equals_empty_array() {
    assert!(eq(&json!({}), &json!([])));
    assert!(eq(&json!([]), &json!({})));
}

#[test]
fn index_keyed_object_equals_array() {
    assert!(eq(&json!({"0": "x", "1": "y"}), &json!(["x", "y"])));
    assert!(eq(&json!(["x", "y"]), &json!({"1": "y", "0": "x"})));
    assert!(!eq(&json!({"00": "x"}), &json!(["x"])));
}

#[test]
fn inherited_length_is_asymmetric() {
    let object = json!({"0": 1, "length": 2});
    let array = json!([1, 5]);
    assert!(eq(&object, &array));
    assert!(!eq(&array, &object));
}

// ---------------------------------------------------------------------------
// Strategy value
// ---------------------------------------------------------------------------

#[test]
fn deep_equal_strategy() {
    assert!(DeepEqual.equal(&json!({"a": [1]}), &json!({"a": [1]})));
    assert!(!DeepEqual.equal(&json!({"a": [1]}), &json!({"a": [2]})));
}
