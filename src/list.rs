//! An ordered sequence of values.
//!
//! [`List`] wraps a [`Vec`] of [`Value`]s and keeps every index
//! operation checked: a bad index comes back as
//! [`CodecError::OutOfBounds`] instead of a panic, so a malformed
//! index from the far side of a connection cannot take the process
//! down.
//!
//! # Example
//!
//! ```
//! use thinwire::prelude::*;
//!
//! let mut list = List::new();
//!
//! list.push(1);
//! list.push("two");
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.get(1).unwrap(), &Value::from("two"));
//!
//! // out of range indices are errors, not panics
//! assert!(list.get(2).is_err());
//! ```

use crate::{errors::CodecError, Value};
use std::{iter::FromIterator, slice::Iter, vec::IntoIter};

#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug, Default)]
/// An ordered sequence of [`Value`]s with checked indexing.
///
/// See also: [module level documentation](`crate::list`).
pub struct List(Vec<Value>);

impl List {
    /// Creates an empty [`List`].
    pub fn new() -> Self { List(Vec::new()) }

    /// Creates an empty [`List`] with room for `cap` elements.
    pub fn with_capacity(cap: usize) -> Self { List(Vec::with_capacity(cap)) }

    /// Returns length.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let mut list = List::new();
    /// list.push(true);
    ///
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.0.len() }

    /// Indicates whether the [`List`] is empty.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`CodecError::OutOfBounds`] when `index >= self.len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let mut list = List::new();
    /// list.push(10);
    ///
    /// assert_eq!(list.get(0).unwrap(), &Value::I32(10));
    /// assert!(list.get(1).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&Value, CodecError> {
        self.range_check(index)?;
        Ok(&self.0[index])
    }

    /// Replaces the element at `index`, returning the old element.
    ///
    /// # Errors
    ///
    /// Fails with [`CodecError::OutOfBounds`] when `index >= self.len()`.
    pub fn set<T: Into<Value>>(&mut self, index: usize, t: T) -> Result<Value, CodecError> {
        self.range_check(index)?;
        Ok(std::mem::replace(&mut self.0[index], t.into()))
    }

    /// Appends an element to the back.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let mut list = List::new();
    ///
    /// list.push(1);
    /// list.push(Value::Null);
    ///
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn push<T: Into<Value>>(&mut self, t: T) { self.0.push(t.into()) }

    /// Inserts an element at `index`, shifting the elements after it to
    /// the right. `index == self.len()` appends.
    ///
    /// # Errors
    ///
    /// Fails with [`CodecError::OutOfBounds`] when `index > self.len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let mut list = List::new();
    /// list.push(1);
    /// list.push(3);
    ///
    /// list.insert(1, 2).unwrap();
    ///
    /// assert_eq!(list.get(1).unwrap(), &Value::I32(2));
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn insert<T: Into<Value>>(&mut self, index: usize, t: T) -> Result<(), CodecError> {
        self.range_check_for_add(index)?;
        self.0.insert(index, t.into());
        Ok(())
    }

    /// Removes the element at `index` and returns it, shifting the
    /// elements after it to the left.
    ///
    /// # Errors
    ///
    /// Fails with [`CodecError::OutOfBounds`] when `index >= self.len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let mut list = List::new();
    /// list.push("a");
    /// list.push("b");
    ///
    /// assert_eq!(list.remove(0).unwrap(), Value::from("a"));
    /// assert_eq!(list.get(0).unwrap(), &Value::from("b"));
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<Value, CodecError> {
        self.range_check(index)?;
        Ok(self.0.remove(index))
    }

    /// Indicates whether the [`List`] contains an element equal to
    /// `value`.
    pub fn contains(&self, value: &Value) -> bool { self.0.contains(value) }

    /// Returns the index of the first element equal to `value`, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let mut list = List::new();
    /// list.push(1);
    /// list.push(2);
    ///
    /// assert_eq!(list.index_of(&Value::I32(2)), Some(1));
    /// assert_eq!(list.index_of(&Value::I32(3)), None);
    /// ```
    pub fn index_of(&self, value: &Value) -> Option<usize> {
        self.0.iter().position(|v| v == value)
    }

    /// Inserts all elements of `other` at `index`, preserving their
    /// order and shifting the elements after `index` to the right.
    ///
    /// # Errors
    ///
    /// Fails with [`CodecError::OutOfBounds`] when `index > self.len()`.
    pub fn insert_all(&mut self, index: usize, other: List) -> Result<(), CodecError> {
        self.range_check_for_add(index)?;
        self.0.splice(index..index, other.0);
        Ok(())
    }

    /// Removes all elements.
    pub fn clear(&mut self) { self.0.clear() }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[Value] { &self.0 }

    /// Consumes the [`List`], returning the underlying [`Vec`].
    pub fn into_vec(self) -> Vec<Value> { self.0 }

    /// Returns an [`Iter`] of the elements.
    pub fn iter(&self) -> Iter<Value> { self.0.iter() }

    fn range_check(&self, index: usize) -> Result<(), CodecError> {
        if index < self.0.len() {
            Ok(())
        } else {
            Err(CodecError::OutOfBounds {
                index,
                len: self.0.len(),
            })
        }
    }

    fn range_check_for_add(&self, index: usize) -> Result<(), CodecError> {
        if index <= self.0.len() {
            Ok(())
        } else {
            Err(CodecError::OutOfBounds {
                index,
                len: self.0.len(),
            })
        }
    }
}

impl From<Vec<Value>> for List {
    fn from(v: Vec<Value>) -> Self { List(v) }
}

impl IntoIterator for List {
    type IntoIter = IntoIter<Value>;
    type Item = Value;

    fn into_iter(self) -> IntoIter<Value> { self.0.into_iter() }
}

impl<'a> IntoIterator for &'a List {
    type IntoIter = Iter<'a, Value>;
    type Item = &'a Value;

    fn into_iter(self) -> Iter<'a, Value> { self.0.iter() }
}

impl<T: Into<Value>> FromIterator<T> for List {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> List {
        List(iter.into_iter().map(T::into).collect())
    }
}

impl<T: Into<Value>> Extend<T> for List {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(T::into))
    }
}

impl std::fmt::Display for List {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_appends_at_len() {
        let mut list = List::new();
        list.push(1);

        list.insert(1, 2).unwrap();

        assert_eq!(list.as_slice(), &[Value::I32(1), Value::I32(2)]);
    }

    #[test]
    fn bad_indices_report_bounds() {
        let mut list = List::new();
        list.push(0);

        assert_eq!(
            list.get(3).unwrap_err(),
            CodecError::OutOfBounds { index: 3, len: 1 }
        );
        assert_eq!(
            list.insert(2, 0).unwrap_err(),
            CodecError::OutOfBounds { index: 2, len: 1 }
        );
        assert_eq!(
            list.remove(1).unwrap_err(),
            CodecError::OutOfBounds { index: 1, len: 1 }
        );
        assert_eq!(
            list.set(1, 0).unwrap_err(),
            CodecError::OutOfBounds { index: 1, len: 1 }
        );
    }

    #[test]
    fn remove_shifts_left() {
        let mut list: List = vec![1, 2, 3].into_iter().collect();

        assert_eq!(list.remove(1).unwrap(), Value::I32(2));
        assert_eq!(list.as_slice(), &[Value::I32(1), Value::I32(3)]);
    }

    #[test]
    fn insert_all_splices_in_order() {
        let mut list: List = vec![1, 4].into_iter().collect();
        let mid: List = vec![2, 3].into_iter().collect();

        list.insert_all(1, mid).unwrap();

        let flat: Vec<i64> = list.iter().map(|v| v.to_i64().unwrap()).collect();
        assert_eq!(flat, vec![1, 2, 3, 4]);
    }
}
