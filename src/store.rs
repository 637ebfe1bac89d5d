//! The flyweight value model.
//!
//! Parsed data lives in a [ValueStore]: one append-only sequence per value kind, indexed
//! by small integers. A [Value] is a copyable (kind, index) handle into the store and owns
//! nothing itself, which sidesteps the ownership and lifetime problems of a pointer-based
//! JSON tree. A completed parse is handed back as a [Document], which owns the store plus
//! the root handle - the only way to obtain a [Value] is from the [Document] that owns its
//! backing data.

use std::fmt::{Display, Formatter};

use crate::stringify::Stringifier;

/// Discriminant for the different kinds of JSON value a [Value] can refer to
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValueKind {
    /// A decoded string, stored in the string sequence
    String,
    /// An i64, stored in the integer sequence
    Integer,
    /// An f64, stored in the float sequence
    Float,
    /// The `true` literal (no backing storage)
    True,
    /// The `false` literal (no backing storage)
    False,
    /// The `null` literal (no backing storage)
    Null,
    /// An array of values
    Array,
    /// An object, held as a sequence of [ValueKind::KeyValue] entries
    Object,
    /// A single key/value slot within an object
    KeyValue,
    /// The "no value" sentinel
    None,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A non-owning handle to a value held within a [ValueStore].
///
/// Handles are plain (kind, index) pairs: cheap to copy, compared by both fields, and only
/// meaningful against the store that issued them. Mixing handles between stores is a
/// precondition violation, not a recoverable condition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Value {
    /// The kind of the referent
    pub kind: ValueKind,
    /// Index into the store sequence matching [Self::kind]
    pub store_id: usize,
}

impl Value {
    /// The "no value" sentinel, used before any value exists
    pub const NONE: Value = Value {
        kind: ValueKind::None,
        store_id: 0,
    };

    pub fn is_none(&self) -> bool {
        self.kind == ValueKind::None
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, ValueKind::Array | ValueKind::Object)
    }
}

/// A single object entry: a decoded key plus the handle of its value
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValue {
    pub key: String,
    pub value: Value,
}

/// Flat, append-only backing storage for every parsed scalar and container.
///
/// Indices are stable for the lifetime of one parse generation: never reused, never
/// compacted, invalidated only by [ValueStore::clear]. Every accessor requires that the
/// supplied handle was produced by this store in the current generation; a kind mismatch
/// is a programming error and trips a debug assertion rather than being reported.
#[derive(Debug, Default)]
pub struct ValueStore {
    strings: Vec<String>,
    integers: Vec<i64>,
    floats: Vec<f64>,
    arrays: Vec<Vec<Value>>,
    objects: Vec<Vec<Value>>,
    key_values: Vec<KeyValue>,
}

impl ValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty all sequences, invalidating every previously issued handle
    pub fn clear(&mut self) {
        self.strings.clear();
        self.integers.clear();
        self.floats.clear();
        self.arrays.clear();
        self.objects.clear();
        self.key_values.clear();
    }

    pub fn add_string(&mut self, value: String) -> Value {
        self.strings.push(value);
        Value {
            kind: ValueKind::String,
            store_id: self.strings.len() - 1,
        }
    }

    pub fn add_integer(&mut self, value: i64) -> Value {
        self.integers.push(value);
        Value {
            kind: ValueKind::Integer,
            store_id: self.integers.len() - 1,
        }
    }

    pub fn add_float(&mut self, value: f64) -> Value {
        self.floats.push(value);
        Value {
            kind: ValueKind::Float,
            store_id: self.floats.len() - 1,
        }
    }

    /// Append an empty array and return its handle
    pub fn new_array(&mut self) -> Value {
        self.arrays.push(Vec::new());
        Value {
            kind: ValueKind::Array,
            store_id: self.arrays.len() - 1,
        }
    }

    /// Append an empty object and return its handle
    pub fn new_object(&mut self) -> Value {
        self.objects.push(Vec::new());
        Value {
            kind: ValueKind::Object,
            store_id: self.objects.len() - 1,
        }
    }

    /// Append a key/value slot with no value yet attached and return its handle
    pub fn new_key_value(&mut self, key: String) -> Value {
        self.key_values.push(KeyValue {
            key,
            value: Value::NONE,
        });
        Value {
            kind: ValueKind::KeyValue,
            store_id: self.key_values.len() - 1,
        }
    }

    pub fn string(&self, value: Value) -> &str {
        debug_assert_eq!(value.kind, ValueKind::String);
        &self.strings[value.store_id]
    }

    pub fn integer(&self, value: Value) -> i64 {
        debug_assert_eq!(value.kind, ValueKind::Integer);
        self.integers[value.store_id]
    }

    pub fn float(&self, value: Value) -> f64 {
        debug_assert_eq!(value.kind, ValueKind::Float);
        self.floats[value.store_id]
    }

    pub fn array(&self, value: Value) -> &[Value] {
        debug_assert_eq!(value.kind, ValueKind::Array);
        &self.arrays[value.store_id]
    }

    /// The entries of an object, each a [ValueKind::KeyValue] handle
    pub fn entries(&self, value: Value) -> &[Value] {
        debug_assert_eq!(value.kind, ValueKind::Object);
        &self.objects[value.store_id]
    }

    pub fn key_value(&self, value: Value) -> &KeyValue {
        debug_assert_eq!(value.kind, ValueKind::KeyValue);
        &self.key_values[value.store_id]
    }

    pub(crate) fn array_mut(&mut self, value: Value) -> &mut Vec<Value> {
        debug_assert_eq!(value.kind, ValueKind::Array);
        &mut self.arrays[value.store_id]
    }

    pub(crate) fn object_mut(&mut self, value: Value) -> &mut Vec<Value> {
        debug_assert_eq!(value.kind, ValueKind::Object);
        &mut self.objects[value.store_id]
    }

    pub(crate) fn key_value_mut(&mut self, value: Value) -> &mut KeyValue {
        debug_assert_eq!(value.kind, ValueKind::KeyValue);
        &mut self.key_values[value.store_id]
    }
}

/// The result of a successful parse: the [ValueStore] holding all parsed data, plus the
/// root [Value] designating the top-level entity.
#[derive(Debug)]
pub struct Document {
    store: ValueStore,
    root: Value,
}

impl Document {
    pub(crate) fn new(store: ValueStore, root: Value) -> Self {
        Document { store, root }
    }

    /// Handle of the top-level parsed value
    pub fn root(&self) -> Value {
        self.root
    }

    pub fn store(&self) -> &ValueStore {
        &self.store
    }

    /// Linear scan of an object's entries for a matching key. Not recursive - nested
    /// lookups are the caller's own loop.
    pub fn lookup(&self, object: Value, key: &str) -> Option<Value> {
        self.store
            .entries(object)
            .iter()
            .map(|kv| self.store.key_value(*kv))
            .find(|kv| kv.key == key)
            .map(|kv| kv.value)
    }

    /// Element of an array by position. Out-of-range access is a precondition violation
    /// and panics.
    pub fn element(&self, array: Value, index: usize) -> Value {
        self.store.array(array)[index]
    }

    pub fn array_len(&self, array: Value) -> usize {
        self.store.array(array).len()
    }

    pub fn entry_count(&self, object: Value) -> usize {
        self.store.entries(object).len()
    }

    pub fn string(&self, value: Value) -> &str {
        self.store.string(value)
    }

    pub fn integer(&self, value: Value) -> i64 {
        self.store.integer(value)
    }

    pub fn float(&self, value: Value) -> f64 {
        self.store.float(value)
    }

    /// Render the whole document as compact JSON using the default [Stringifier]
    pub fn to_json(&self) -> String {
        Stringifier::default().stringify(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_issue_sequential_ids_per_kind() {
        let mut store = ValueStore::new();
        let s0 = store.add_string("a".to_string());
        let i0 = store.add_integer(1);
        let s1 = store.add_string("b".to_string());
        assert_eq!(s0.store_id, 0);
        assert_eq!(s1.store_id, 1);
        assert_eq!(i0.store_id, 0);
        assert_eq!(store.string(s1), "b");
        assert_eq!(store.integer(i0), 1);
    }

    #[test]
    fn should_attach_values_through_key_value_slots() {
        let mut store = ValueStore::new();
        let object = store.new_object();
        let kv = store.new_key_value("answer".to_string());
        store.object_mut(object).push(kv);
        let value = store.add_integer(42);
        store.key_value_mut(kv).value = value;

        let entries = store.entries(object);
        assert_eq!(entries.len(), 1);
        let slot = store.key_value(entries[0]);
        assert_eq!(slot.key, "answer");
        assert_eq!(store.integer(slot.value), 42);
    }

    #[test]
    fn clear_should_empty_every_sequence() {
        let mut store = ValueStore::new();
        store.add_string("x".to_string());
        store.add_float(1.5);
        let array = store.new_array();
        let one = store.add_integer(1);
        store.array_mut(array).push(one);
        store.clear();
        let fresh = store.new_array();
        assert_eq!(fresh.store_id, 0);
        assert!(store.array(fresh).is_empty());
    }

    #[test]
    fn handles_compare_by_kind_and_id() {
        let int = Value {
            kind: ValueKind::Integer,
            store_id: 3,
        };
        let float = Value {
            kind: ValueKind::Float,
            store_id: 3,
        };
        assert_ne!(int, float);
        assert_eq!(int, int);
        assert!(Value::NONE.is_none());
    }

    #[test]
    fn only_arrays_and_objects_are_containers() {
        let mut store = ValueStore::new();
        assert!(store.new_array().is_container());
        assert!(store.new_object().is_container());
        assert!(!store.add_integer(1).is_container());
        assert!(!store.new_key_value("k".to_string()).is_container());
        assert!(!Value::NONE.is_container());
    }
}
