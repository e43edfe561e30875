//! A dynamic value model with enumerability, getters and prototype chains.
//!
//! Objects are immutable once built and shared by reference: cloning a
//! [`Value::Object`] yields the same object, which is identical to the
//! original under [`Structural::is_identical`]. Since an object can only
//! reference objects built before it, values are always acyclic.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::structural::{array_index, Kind, Structural};

/// Computes a property value on every read.
pub type Getter = Rc<dyn Fn() -> Value>;

#[derive(Clone, Debug)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Rc<str>),
    Function(Function),
    Object(Object),
}

impl Value {
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Object(Object::array(items))
    }

    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(Object::from_entries(entries))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(Rc::from(v))
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Value::Object(v)
    }
}

impl From<Function> for Value {
    fn from(v: Function) -> Self {
        Value::Function(v)
    }
}

#[cfg(feature = "json")]
impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::from(s.as_str()),
            serde_json::Value::Array(items) => Value::array(items.iter().map(Value::from)),
            serde_json::Value::Object(map) => {
                Value::object(map.iter().map(|(k, v)| (k.as_str(), Value::from(v))))
            }
        }
    }
}

/// An opaque callable. Functions are compared by reference only.
#[derive(Clone)]
pub struct Function(Rc<str>);

impl Function {
    pub fn new(name: &str) -> Self {
        Function(Rc::from(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Function: {}]", self.0)
    }
}

#[derive(Clone)]
enum Slot {
    Data(Value),
    Accessor(Getter),
}

#[derive(Clone)]
struct Property {
    slot: Slot,
    enumerable: bool,
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Data(value) => fmt::Debug::fmt(value, f),
            Slot::Accessor(_) => f.write_str("[Getter]"),
        }
    }
}

struct ObjectData {
    properties: IndexMap<String, Property>,
    prototype: Option<Object>,
}

/// A shared, immutable property table with an optional prototype.
#[derive(Clone)]
pub struct Object(Rc<ObjectData>);

impl Object {
    pub fn builder() -> ObjectBuilder {
        ObjectBuilder::default()
    }

    /// A plain object with enumerable data properties in `entries` order.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        entries
            .into_iter()
            .fold(ObjectBuilder::default(), |builder, (k, v)| builder.property(k, v))
            .build()
    }

    /// An array: enumerable index properties and a hidden `length`.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut builder = ObjectBuilder::default();
        let mut len = 0usize;
        for item in items {
            builder = builder.property(len.to_string(), item);
            len += 1;
        }
        builder.hidden("length", Value::Number(len as f64)).build()
    }

    pub fn prototype(&self) -> Option<&Object> {
        self.0.prototype.as_ref()
    }

    pub fn is(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Own enumerable keys: array indices in ascending order, then the
    /// remaining keys in definition order.
    pub fn keys(&self) -> Vec<&str> {
        let mut indices = Vec::new();
        let mut named = Vec::new();
        for (key, prop) in &self.0.properties {
            if !prop.enumerable {
                continue;
            }
            match array_index(key) {
                Some(index) => indices.push((index, key.as_str())),
                None => named.push(key.as_str()),
            }
        }
        indices.sort_unstable_by_key(|&(index, _)| index);
        indices.into_iter().map(|(_, key)| key).chain(named).collect()
    }

    pub fn has_own(&self, key: &str) -> bool {
        self.0.properties.contains_key(key)
    }

    /// Membership along the prototype chain.
    pub fn has(&self, key: &str) -> bool {
        let mut current = Some(self);
        while let Some(object) = current {
            if object.has_own(key) {
                return true;
            }
            current = object.prototype();
        }
        false
    }

    /// Resolves `key` along the prototype chain, running getters.
    pub fn get(&self, key: &str) -> Option<Cow<'_, Value>> {
        let mut current = Some(self);
        while let Some(object) = current {
            if let Some(prop) = object.0.properties.get(key) {
                return Some(match &prop.slot {
                    Slot::Data(value) => Cow::Borrowed(value),
                    Slot::Accessor(getter) => Cow::Owned(getter()),
                });
            }
            current = object.prototype();
        }
        None
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.properties.iter()).finish()
    }
}

#[derive(Default)]
pub struct ObjectBuilder {
    properties: IndexMap<String, Property>,
    prototype: Option<Object>,
}

impl ObjectBuilder {
    fn define(mut self, key: String, slot: Slot, enumerable: bool) -> Self {
        self.properties.insert(key, Property { slot, enumerable });
        self
    }

    pub fn property(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.define(key.into(), Slot::Data(value.into()), true)
    }

    /// A non-enumerable data property.
    pub fn hidden(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.define(key.into(), Slot::Data(value.into()), false)
    }

    /// An enumerable property computed by `getter` on each read.
    pub fn getter<F>(self, key: impl Into<String>, getter: F) -> Self
    where
        F: Fn() -> Value + 'static,
    {
        self.define(key.into(), Slot::Accessor(Rc::new(getter)), true)
    }

    pub fn prototype(mut self, prototype: Object) -> Self {
        self.prototype = Some(prototype);
        self
    }

    pub fn build(self) -> Object {
        Object(Rc::new(ObjectData {
            properties: self.properties,
            prototype: self.prototype,
        }))
    }
}

impl Structural for Value {
    type Key = String;

    fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Undefined | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                Kind::Primitive
            }
            Value::Function(_) => Kind::Function,
            Value::Object(_) => Kind::Object,
        }
    }

    fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.is(b),
            (Value::Object(a), Value::Object(b)) => a.is(b),
            _ => false,
        }
    }

    fn own_keys(&self) -> Vec<String> {
        match self {
            Value::Object(object) => object.keys().into_iter().map(str::to_owned).collect(),
            _ => Vec::new(),
        }
    }

    fn own_key_count(&self) -> usize {
        match self {
            Value::Object(object) => object.keys().len(),
            _ => 0,
        }
    }

    fn has_property(&self, key: &String) -> bool {
        match self {
            Value::Object(object) => object.has(key),
            _ => false,
        }
    }

    fn property(&self, key: &String) -> Option<Cow<'_, Value>> {
        match self {
            Value::Object(object) => object.get(key),
            _ => None,
        }
    }
}
