//! equality - equality predicates and combinators.
//!
//! Provides three building blocks:
//!
//! - [`Equality`], the contract every comparison strategy satisfies;
//! - [`equality_at`], which lifts an equality over `U` to an equality over
//!   `T` through an accessor `T -> U`;
//! - [`deep_equal`], a recursive structural comparison over any
//!   [`Structural`] value.
//!
//! `deep_equal` is implemented for `serde_json::Value` (feature `json`) and
//! for the dynamic [`value::Value`] model, which carries enumerability,
//! getters and prototype chains.
//!
//! ```
//! use equality::{deep_equal, equality_at, Equality};
//! use serde_json::{json, Value};
//!
//! let by_id = equality_at(|v: &Value| v["id"].clone(), deep_equal::<Value>);
//! assert!(by_id.equal(&json!({"id": 5, "name": "a"}), &json!({"id": 5, "name": "b"})));
//! assert!(!by_id.equal(&json!({"id": 5}), &json!({"id": 6})));
//! ```

mod deep_equal;
mod equality;
#[cfg(feature = "json")]
mod json;
mod structural;
pub mod value;

pub use deep_equal::{deep_equal, DeepEqual};
pub use equality::{equality_at, try_equality_at, Equality, EqualityFn};
pub use structural::{Kind, Structural};
