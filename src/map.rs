//! An ordered collection of key-value pairs.
//!
//! [`Map`] keeps its entries in insertion order: iterating a decoded
//! map yields the entries in the order the sender inserted them, and
//! re-encoding writes them back in that order. Keys must be strings or
//! integers and may not be null; [`Map::insert`] checks this and
//! rejects anything else, so every [`Map`] that exists holds only
//! valid keys.
//!
//! # Example
//!
//! ```
//! use thinwire::prelude::*;
//!
//! let mut map = Map::new();
//!
//! map.insert("name", "laser").unwrap();
//! map.insert("port", 4424).unwrap();
//!
//! assert_eq!(map.get(&Value::from("port")), Some(&Value::I32(4424)));
//!
//! // null keys are rejected
//! assert!(map.insert(Value::Null, 0).is_err());
//!
//! // insertion order is preserved
//! let keys: Vec<&Value> = map.keys().collect();
//! assert_eq!(keys, vec![&Value::from("name"), &Value::from("port")]);
//! ```

use crate::{errors::CodecError, Value};
use std::{slice::Iter, vec::IntoIter};

#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug, Default)]
/// An insertion-ordered map with string or integer keys.
///
/// Equality is order-sensitive: two maps are equal when they hold the
/// same entries in the same order.
///
/// See also: [module level documentation](`crate::map`).
pub struct Map(Vec<(Value, Value)>);

fn check_key(key: &Value) -> Result<(), CodecError> {
    match key {
        Value::Null => Err(CodecError::InvalidArgument("map keys cannot be null")),
        Value::Str(_) | Value::I32(_) | Value::I64(_) => Ok(()),
        _ => Err(CodecError::InvalidArgument(
            "map keys must be strings or integers",
        )),
    }
}

impl Map {
    /// Creates an empty [`Map`].
    pub fn new() -> Self { Map(Vec::new()) }

    /// Creates an empty [`Map`] with room for `cap` entries.
    pub fn with_capacity(cap: usize) -> Self { Map(Vec::with_capacity(cap)) }

    /// Returns the number of entries.
    pub fn len(&self) -> usize { self.0.len() }

    /// Indicates whether the [`Map`] is empty.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Inserts a key-value pair, returning the value previously stored
    /// under `key`, if any.
    ///
    /// A key that is already present keeps its original position; only
    /// its value changes. A new key goes to the back.
    ///
    /// # Errors
    ///
    /// Fails with [`CodecError::InvalidArgument`] when `key` is null or
    /// not a string or integer. The map is unchanged in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let mut map = Map::new();
    ///
    /// assert_eq!(map.insert("a", 1).unwrap(), None);
    /// assert_eq!(map.insert("a", 2).unwrap(), Some(Value::I32(1)));
    ///
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert<K: Into<Value>, V: Into<Value>>(
        &mut self,
        key: K,
        value: V,
    ) -> Result<Option<Value>, CodecError> {
        let key = key.into();
        check_key(&key)?;
        Ok(self.upsert(key, value.into()))
    }

    /// Returns a reference to the value stored under `key`, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let mut map = Map::new();
    /// map.insert(42, "answer").unwrap();
    ///
    /// assert_eq!(map.get(&Value::I32(42)), Some(&Value::from("answer")));
    /// assert_eq!(map.get(&Value::I32(0)), None);
    /// ```
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.position(key).map(|ix| &self.0[ix].1)
    }

    /// Removes the entry stored under `key`, returning its value, if
    /// any. The entries after it shift left.
    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        self.position(key).map(|ix| self.0.remove(ix).1)
    }

    /// Indicates whether an entry is stored under `key`.
    pub fn contains_key(&self, key: &Value) -> bool { self.position(key).is_some() }

    /// Indicates whether any entry holds a value equal to `value`.
    pub fn contains_value(&self, value: &Value) -> bool {
        self.0.iter().any(|(_, v)| v == value)
    }

    /// Inserts every entry of `other`, in order, as if by repeated
    /// [`Map::insert`].
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let mut map = Map::new();
    /// map.insert("a", 1).unwrap();
    ///
    /// let mut other = Map::new();
    /// other.insert("a", 10).unwrap();
    /// other.insert("b", 20).unwrap();
    ///
    /// map.insert_all(other);
    ///
    /// assert_eq!(map.get(&Value::from("a")), Some(&Value::I32(10)));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn insert_all(&mut self, other: Map) {
        for (k, v) in other {
            self.upsert(k, v);
        }
    }

    /// Removes all entries.
    pub fn clear(&mut self) { self.0.clear() }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> { self.0.iter().map(|(k, _)| k) }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> { self.0.iter().map(|(_, v)| v) }

    /// Returns an [`Iter`] of the key-value pairs in insertion order.
    pub fn iter(&self) -> Iter<(Value, Value)> { self.0.iter() }

    /// Builds a [`Map`] from a vector of entries, as if by repeated
    /// [`Map::insert`].
    ///
    /// # Errors
    ///
    /// Fails with [`CodecError::InvalidArgument`] when any key is null
    /// or not a string or integer.
    pub fn from_entries(entries: Vec<(Value, Value)>) -> Result<Map, CodecError> {
        let mut map = Map::with_capacity(entries.len());
        for (k, v) in entries {
            map.insert(k, v)?;
        }
        Ok(map)
    }

    // key is known valid here
    fn upsert(&mut self, key: Value, value: Value) -> Option<Value> {
        match self.position(&key) {
            Some(ix) => Some(std::mem::replace(&mut self.0[ix].1, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    fn position(&self, key: &Value) -> Option<usize> {
        self.0.iter().position(|(k, _)| k == key)
    }
}

impl IntoIterator for Map {
    type IntoIter = IntoIter<(Value, Value)>;
    type Item = (Value, Value);

    fn into_iter(self) -> IntoIter<(Value, Value)> { self.0.into_iter() }
}

impl<'a> IntoIterator for &'a Map {
    type IntoIter = Iter<'a, (Value, Value)>;
    type Item = &'a (Value, Value);

    fn into_iter(self) -> Iter<'a, (Value, Value)> { self.0.iter() }
}

impl std::fmt::Display for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", crate::fmt_map(self, 0))
    }
}
