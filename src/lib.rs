//! # Thinwire
//!
//! Thinwire is a compact, self-describing binary encoding for dynamically
//! typed values, and the encoder/decoder pair that reads and writes it. It is
//! the codec layer underneath a thin RPC client: callers build a [`Value`]
//! tree, hand it to the encoder, and ship the resulting bytes over whatever
//! transport they like.
//!
//! # Usage
//!
//! Build a [`Value`], encode it with [`encoding::encode_full`], and read it
//! back with [`encoding::decode_full`]:
//!
//! ```
//! use thinwire::prelude::*;
//!
//! let mut list = List::new();
//! list.push(1);
//! list.push("two");
//!
//! let value = Value::from(list);
//!
//! // encode
//! let encoded = encode_full(&value).unwrap();
//!
//! // and then immediately decode, because this is a silly example
//! let decoded: Value = decode_full(encoded).unwrap();
//!
//! assert_eq!(decoded, value);
//! ```
//!
//! Anything that implements [`encoding::Ser`] can be encoded directly, and
//! anything implementing [`encoding::De`] can be read back without going
//! through [`Value`] at all.
//!
//! # An overview of thinwire values
//!
//! This section is a brief tour of the value kinds. For the bytes they turn
//! into, see [Specification](#specification).
//!
//! ## Integers
//!
//! Thinwire carries signed 32-bit and 64-bit integers. Plain integers pick
//! the narrower wire kind when the value fits; [`Number`] forces a specific
//! kind when the wire representation matters more than the magnitude.
//!
//! ```
//! use thinwire::prelude::*;
//!
//! // fits in 32 bits, so it rides as an i32
//! let small = Value::from(23);
//!
//! // too wide, promoted to i64
//! let large = Value::from(99_999_999_999i64);
//!
//! // a small number forced onto the wide kind
//! let forced = Value::from(Number::Long(23));
//!
//! assert_eq!(forced, Value::I64(23));
//! ```
//!
//! See also: [`Number`] and the [integer specification](#integers-1).
//!
//! ## Floats
//!
//! Single and double precision floating-point numbers, stored by bit pattern
//! so that equality and hashing stay total.
//!
//! ```
//! use thinwire::prelude::*;
//!
//! let single = Value::from(1f32);
//!
//! let double = Value::from(1f64);
//! ```
//!
//! See also: [`Float`] and the [float specification](#floats-1).
//!
//! ## Strings and bytestrings
//!
//! Text is UTF-8 and validated at decode time; raw bytes pass through
//! untouched.
//!
//! ```
//! use thinwire::prelude::*;
//!
//! let text = Value::from("hello world");
//!
//! let literal = Value::from_static(b"this is a bytestring literal");
//!
//! let owned = "This is a string".to_string();
//! let a_string = Value::from(owned);
//! ```
//!
//! See also: [`Bytes`] and the [bytestring specification](#strings-and-bytestrings-1).
//!
//! ## Lists
//!
//! Lists are ordered sequences of values, mixed kinds welcome.
//!
//! ```
//! use thinwire::prelude::*;
//!
//! let some_numbers = Value::from(vec![1, 2, 3, 4, 5]);
//! ```
//!
//! See also: [`List`] and the [list specification](#lists-1).
//!
//! ## Maps
//!
//! Maps take string or integer keys and preserve first-insertion order, so
//! the wire layout is exactly the order entries went in.
//!
//! ```
//! use thinwire::prelude::*;
//!
//! let mut a_map = Map::new();
//!
//! a_map.insert("key", 250).unwrap();
//!
//! let v_map = Value::from(a_map);
//! ```
//!
//! See also: [`Map`] and the [map specification](#maps-1).
//!
//! # Specification
//!
//! This section describes the thinwire binary format.
//!
//! ## Tags
//!
//! The first byte of every encoded value is called the *tag*. The high
//! nibble of the tag selects the type, and the low nibble is *metadata*
//! whose meaning depends on the type.
//!
//! ## Constants
//!
//! Constants are values that fit entirely into the tag byte.
//!
//! | Tag    | Semantics |
//! | ---    | ---       |
//! | `0x00` | `false`   |
//! | `0x01` | `true`    |
//! | `0xF0` | `null`    |
//!
//! Booleans must use exactly the bytes above. The null tag ignores its
//! metadata bits when read back, so `0xF1` through `0xFF` also decode to
//! null.
//!
//! ## Integers
//!
//! Integers come in a 32-bit and a 64-bit kind. Their tag byte is
//! constructed as follows:
//!
//! | 0010 (i32) or 0100 (i64) | x        | xxx                     |
//! | ---                      | ---      | ---                     |
//! | Type                     | Sign bit | Width in bytes, minus 1 |
//!
//! The magnitude follows as `width` little-endian bytes, using the smallest
//! width that keeps the top bit of the widest byte clear. When the sign bit
//! is set the magnitude is `-(n + 1)`, where `n` is the encoded value, so
//! `-1` has magnitude `0`.
//!
//! ## Floats
//!
//! Floats are encoded according to [IEEE 754](https://en.wikipedia.org/wiki/IEEE_754),
//! always at full width for their kind:
//!
//! | Tag    | Payload                       |
//! | ---    | ---                           |
//! | `0x60` | 4 little-endian bytes, single |
//! | `0x70` | 8 little-endian bytes, double |
//!
//! ## Strings and bytestrings
//!
//! Strings are UTF-8 text; bytestrings are arbitrary bytes. Their tag byte
//! is constructed as follows:
//!
//! | 1000 (string) or 1001 (bytes) | 0xxx                           |
//! | ---                           | ---                            |
//! | Type                          | Length of the length, in bytes |
//!
//! A size class of 0 means the value is empty and the tag is the whole
//! encoding. Otherwise the payload length follows as `class` little-endian
//! bytes, then the payload itself. Classes run from 0 to 4, so payloads are
//! capped at `2^32 - 1` bytes.
//!
//! ## Lists
//!
//! Lists share the bytestring scheme, with the length counted in elements:
//!
//! | 1010 | 0xxx                           |
//! | ---  | ---                            |
//! | Type | Length of the length, in bytes |
//!
//! The count follows, then each element recursively encoded.
//!
//! ## Maps
//!
//! Maps share the list scheme, with the length counted in pairs:
//!
//! | 1011 | 0xxx                           |
//! | ---  | ---                            |
//! | Type | Length of the length, in bytes |
//!
//! The count follows, then each entry as a key then a value, in the map's
//! insertion order.

#![warn(
//    missing_docs,
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    unreachable_pub,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(clippy::cast_lossless)]

pub mod encoding;
pub mod errors;
pub mod float;
pub mod list;
pub mod map;
pub mod number;
pub mod prelude;
pub mod util;

use bytes::{buf::FromBuf, Bytes, IntoBuf};
use failure::Error;

pub use errors::{CodecError, Kind};
pub use float::Float;
pub use list::List;
pub use map::Map;
pub use number::Number;

#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug)]
/// [`Value`] and its variants.
///
/// # Example
///
/// ```
/// use thinwire::prelude::*;
///
/// let b = Value::Bool(true);
///
/// let val = match b {
///     Value::Bool(b) => b,
///     _ => panic!(),
/// };
///
/// assert!(val);
/// ```
pub enum Value {
    /// Null. Corresponds to [`None`].
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let v_null = Value::Null;
    /// ```
    Null,
    /// Boolean.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let v_bool = Value::Bool(true);
    /// ```
    Bool(bool),
    /// 32-bit signed integer.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let v_num = Value::I32(42);
    /// ```
    I32(i32),
    /// 64-bit signed integer.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let v_num = Value::I64(99_999_999_999);
    /// ```
    I64(i64),
    /// Floating point number, single or double precision.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let f = Float::Single(1f32.to_bits());
    ///
    /// let v_float = Value::Float(f);
    /// ```
    Float(Float),
    /// UTF-8 string.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let v_str = Value::Str("hello world".to_string());
    /// ```
    Str(String),
    /// Bytestring.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let bytes = Bytes::from_static(b"hello world");
    ///
    /// let v_bytes = Value::Byt(bytes);
    /// ```
    Byt(Bytes),
    /// List.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let v_list = Value::List(vec![1, 2, 3, 4].into_iter().collect());
    /// ```
    List(List),
    /// Map.
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let mut map = Map::new();
    /// map.insert("hello world", 1).unwrap();
    ///
    /// let v_map = Value::Map(map);
    /// ```
    Map(Map),
}

impl Value {
    /// The [`Kind`] a value will claim on the wire.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// assert_eq!(Value::from(5).kind(), Kind::I32);
    /// assert_eq!(Value::from(1f32).kind(), Kind::F32);
    /// ```
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::I32(_) => Kind::I32,
            Value::I64(_) => Kind::I64,
            Value::Float(f) => f.kind(),
            Value::Str(_) => Kind::Str,
            Value::Byt(_) => Kind::Bytes,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
        }
    }

    /// Converts a bytestring literal to [`Value`].
    ///
    /// # Arguments
    ///
    /// * `bytes: &'static [u8]` - the bytestring literal to be converted.
    ///
    /// # Example
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// // bytestring literal
    /// let foo = b"this is an example";
    ///
    /// // convert to `Value`
    /// let v_foo = Value::from_static(foo);
    /// ```
    pub fn from_static(bytes: &'static [u8]) -> Value { Value::Byt(Bytes::from_static(bytes)) }

    /// Converts anything displayable to a [`Value::Str`] holding its
    /// canonical text form. This is the fallback for data with no native
    /// wire kind; it never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use std::net::Ipv4Addr;
    /// use thinwire::prelude::*;
    ///
    /// let addr = Value::stringify(Ipv4Addr::LOCALHOST);
    ///
    /// assert_eq!(addr, Value::Str("127.0.0.1".to_string()));
    /// ```
    pub fn stringify<T: std::fmt::Display>(t: T) -> Value { Value::Str(t.to_string()) }

    /// Indicates whether a value is [`Value::Null`].
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::Value;
    ///
    /// let foo = Value::Null;
    ///
    /// assert!(foo.is_null());
    /// ```
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            _ => false,
        }
    }

    /// Tries to convert a value to a [`bool`].
    /// This will return an [`Error`] if the value is not a [`Value::Bool`].
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let b = Value::from(true);
    ///
    /// // should be `true`
    /// assert!(b.to_bool().unwrap());
    /// ```
    pub fn to_bool(&self) -> Result<bool, Error> {
        match self {
            Value::Bool(b) => Ok(*b),
            v => Err(CodecError::TypeMismatch {
                expected: Kind::Bool,
                found: v.kind(),
            }
            .into()),
        }
    }

    /// Tries to convert a value to an [`i64`], widening a [`Value::I32`]
    /// along the way.
    /// This will return an [`Error`] if the value is not an integer.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let v_num = Value::from(1);
    ///
    /// assert_eq!(v_num.to_i64().unwrap(), 1);
    /// ```
    pub fn to_i64(&self) -> Result<i64, Error> {
        match self {
            Value::I32(i) => Ok(i64::from(*i)),
            Value::I64(i) => Ok(*i),
            v => Err(CodecError::TypeMismatch {
                expected: Kind::I64,
                found: v.kind(),
            }
            .into()),
        }
    }

    /// Tries to convert a value to a [`Float`].
    /// This will return an [`Error`] if the value is not a float of either
    /// width.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let v_float = Value::from(1f64);
    ///
    /// assert_eq!(v_float.to_float().unwrap(), &Float::from(1f64));
    /// ```
    pub fn to_float(&self) -> Result<&Float, Error> {
        match self {
            Value::Float(f) => Ok(f),
            v => Err(CodecError::TypeMismatch {
                expected: Kind::F64,
                found: v.kind(),
            }
            .into()),
        }
    }

    /// Tries to convert a value to a [`str`] slice.
    /// This will return an [`Error`] if the value is not a [`Value::Str`].
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let v_str = Value::from("word");
    ///
    /// assert_eq!(v_str.to_str().unwrap(), "word");
    /// ```
    pub fn to_str(&self) -> Result<&str, Error> {
        match self {
            Value::Str(s) => Ok(s),
            v => Err(CodecError::TypeMismatch {
                expected: Kind::Str,
                found: v.kind(),
            }
            .into()),
        }
    }

    /// Tries to convert a value to [`Bytes`].
    /// This will return an [`Error`] if the value is not a bytestring.
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::Value;
    ///
    /// let foo = Value::from_static(b"This is an example");
    ///
    /// let foo_bytes = foo.to_bytes().unwrap();
    /// ```
    pub fn to_bytes(&self) -> Result<&Bytes, Error> {
        match self {
            Value::Byt(s) => Ok(s),
            v => Err(CodecError::TypeMismatch {
                expected: Kind::Bytes,
                found: v.kind(),
            }
            .into()),
        }
    }

    /// Tries to convert a value to a [`List`].
    /// This will return an [`Error`] if the value is not a [`Value::List`].
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let v_list = Value::from(vec![1, 2, 3]);
    ///
    /// assert_eq!(v_list.to_list().unwrap().len(), 3);
    /// ```
    pub fn to_list(&self) -> Result<&List, Error> {
        match self {
            Value::List(l) => Ok(l),
            v => Err(CodecError::TypeMismatch {
                expected: Kind::List,
                found: v.kind(),
            }
            .into()),
        }
    }

    /// Tries to convert a value to a [`Map`].
    /// This will return an [`Error`] if the value is not a [`Value::Map`].
    pub fn to_map(&self) -> Result<&Map, Error> {
        match self {
            Value::Map(m) => Ok(m),
            v => Err(CodecError::TypeMismatch {
                expected: Kind::Map,
                found: v.kind(),
            }
            .into()),
        }
    }

    /// Consumes the value, converting it to a [`String`].
    /// This will return an [`Error`] if the value is not a [`Value::Str`].
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let word = Value::from("word").into_str().unwrap();
    ///
    /// assert_eq!(word, "word".to_string());
    /// ```
    pub fn into_str(self) -> Result<String, Error> {
        match self {
            Value::Str(s) => Ok(s),
            v => Err(CodecError::TypeMismatch {
                expected: Kind::Str,
                found: v.kind(),
            }
            .into()),
        }
    }

    /// Consumes the value, converting it to [`Bytes`].
    /// This will return an [`Error`] if the value is not a bytestring.
    pub fn into_bytes(self) -> Result<Bytes, Error> {
        match self {
            Value::Byt(b) => Ok(b),
            v => Err(CodecError::TypeMismatch {
                expected: Kind::Bytes,
                found: v.kind(),
            }
            .into()),
        }
    }

    /// Consumes the value, converting it to a [`List`].
    /// This will return an [`Error`] if the value is not a [`Value::List`].
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// // a vector of numbers
    /// let numbers = vec![1, 2, 3];
    ///
    /// // convert into `Value`
    /// let v_list = Value::from(numbers);
    ///
    /// // get the list back out
    /// let list = v_list.into_list().unwrap();
    /// ```
    pub fn into_list(self) -> Result<List, Error> {
        match self {
            Value::List(l) => Ok(l),
            v => Err(CodecError::TypeMismatch {
                expected: Kind::List,
                found: v.kind(),
            }
            .into()),
        }
    }

    /// Consumes the value, converting it to a [`Map`].
    /// This will return an [`Error`] if the value is not a [`Value::Map`].
    ///
    /// # Example
    ///
    /// ```
    /// use thinwire::prelude::*;
    ///
    /// let mut map = Map::new();
    /// map.insert("foo", 1).unwrap();
    ///
    /// let map = Value::from(map).into_map().unwrap();
    ///
    /// assert_eq!(map.get(&Value::from("foo")), Some(&Value::I32(1)));
    /// ```
    pub fn into_map(self) -> Result<Map, Error> {
        match self {
            Value::Map(m) => Ok(m),
            v => Err(CodecError::TypeMismatch {
                expected: Kind::Map,
                found: v.kind(),
            }
            .into()),
        }
    }
}

fn fmt_bytes(bytes: &Bytes) -> String {
    let mut bytes_string: String = "b\"".to_owned();
    bytes
        .iter()
        .for_each(|c| bytes_string.push_str(&format!("{:02x}", c)));
    bytes_string.push('"');

    bytes_string
}

pub(crate) fn fmt_map(m: &Map, indent: usize) -> String {
    let mut map_string: String = "{".to_owned();
    for (i, (k, v)) in m.iter().enumerate() {
        if i == 0 {
            map_string.push_str(&format!("\n{:indent$}", "", indent = indent + 2));
        } else {
            map_string.push_str(&format!(",\n{:indent$}", "", indent = indent + 2));
        }

        let value = fmt_helper(v, indent + 2);
        map_string.push_str(&format!(
            "{key}: {value}",
            key = fmt_helper(k, indent + 2),
            value = value,
        ));

        // check if we're at last element
        if i == m.len() - 1 {
            map_string.push_str(&format!("\n{:indent$}", "", indent = indent));
        }
    }
    map_string.push('}');

    map_string
}

pub(crate) fn fmt_helper(v: &Value, indent: usize) -> String {
    match v {
        Value::Null => "NULL".to_owned(),
        Value::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_owned(),
        Value::I32(i) => format!("{}", i),
        Value::I64(i) => format!("{}", i),
        Value::Float(float) => format!("{}", float),
        Value::Str(s) => format!("\"{}\"", s),
        Value::Byt(bytes) => fmt_bytes(bytes),
        Value::List(l) => format!("{}", l),
        Value::Map(m) => fmt_map(m, indent),
    }
}

// TODO propagate indentation through list elements
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", fmt_helper(self, 0))
    }
}

impl FromBuf for Value {
    fn from_buf<T>(buf: T) -> Self
    where
        T: IntoBuf,
    {
        Value::Byt(Bytes::from_buf(buf.into_buf()))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value { Value::Str(s.to_string()) }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Value { Value::List(v.into_iter().collect()) }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Value {
        match opt {
            Some(t) => t.into(),
            None => Value::Null,
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        if i64::from(i32::min_value()) <= i && i <= i64::from(i32::max_value()) {
            Value::I32(i as i32)
        } else {
            Value::I64(i)
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Value {
        match n {
            Number::Int(i) => Value::I32(i),
            Number::Long(i) => Value::I64(i),
            Number::Float(f) => Value::Float(Float::from(f)),
            Number::Double(f) => Value::Float(Float::from(f)),
        }
    }
}

// bool -> Value, From
from_fn!(Value, bool, Value::Bool);
// bool -> Value, TryFrom
try_from_ctor!(Value, bool, Value::Bool);

// i32 -> Value, From
from_fn!(Value, i32, Value::I32);
// i32 -> Value, TryFrom
try_from_ctor!(Value, i32, Value::I32);

// i64 -> Value, TryFrom
try_from_ctor!(Value, i64, Value::I64);

// Float -> Value, From
from_fn!(Value, Float, Value::Float);
// Float -> Value, TryFrom
try_from_ctor!(Value, Float, Value::Float);

// String -> Value, From
from_fn!(Value, String, Value::Str);
// String -> Value, TryFrom
try_from_ctor!(Value, String, Value::Str);

// Bytes -> Value, From
from_fn!(Value, Bytes, Value::Byt);
// Bytes -> Value, TryFrom
try_from_ctor!(Value, Bytes, Value::Byt);

// List -> Value, From
from_fn!(Value, List, Value::List);
// List -> Value, TryFrom
try_from_ctor!(Value, List, Value::List);

// Map -> Value, From
from_fn!(Value, Map, Value::Map);
// Map -> Value, TryFrom
try_from_ctor!(Value, Map, Value::Map);

// Narrow integers ride through i32
compose_from!(Value, i32, i8);
compose_from!(Value, i32, i16);
compose_from!(Value, i32, u8);
compose_from!(Value, i32, u16);
// u32 may not fit in i32, so it rides through i64
compose_from!(Value, i64, u32);

// Floats
compose_from!(Value, Float, f32);
compose_from!(Value, Float, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_tests() {
        assert!(Value::Null.is_null());

        assert_eq!(Value::from(5).kind(), Kind::I32);

        assert!(Value::from(true).to_bool().unwrap());

        assert_eq!(
            Value::from(Bytes::from("word")).to_bytes().unwrap(),
            &Bytes::from("word")
        );
    }

    #[test]
    fn from_vec() {
        let v = vec![0, 1, 2, 3, 4];
        let val: Vec<i64> = Value::from(v.clone())
            .into_list()
            .unwrap()
            .into_iter()
            .map(|v| v.to_i64().unwrap())
            .collect();
        assert_eq!(val, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn plain_integers_pick_their_width() {
        assert_eq!(Value::from(5i64), Value::I32(5));
        assert_eq!(
            Value::from(i64::from(i32::max_value())),
            Value::I32(i32::max_value())
        );
        assert_eq!(
            Value::from(i64::from(i32::max_value()) + 1),
            Value::I64(i64::from(i32::max_value()) + 1)
        );
        assert_eq!(Value::from(i64::min_value()), Value::I64(i64::min_value()));
    }

    #[test]
    fn hinted_numbers_keep_their_kind() {
        assert_eq!(Value::from(Number::Int(5)), Value::I32(5));
        assert_eq!(Value::from(Number::Long(5)), Value::I64(5));
        assert_eq!(
            Value::from(Number::Float(1.0)),
            Value::Float(Float::from(1f32))
        );
        assert_eq!(
            Value::from(Number::Double(1.0)),
            Value::Float(Float::from(1f64))
        );
    }

    #[test]
    fn mismatches_name_both_kinds() {
        let err = Value::from("word").to_i64().unwrap_err();
        assert_eq!(
            err.downcast_ref::<CodecError>(),
            Some(&CodecError::TypeMismatch {
                expected: Kind::I64,
                found: Kind::Str,
            })
        );
    }

    #[test]
    fn display_is_readable() {
        let mut map = Map::new();
        map.insert("a", 1).unwrap();
        map.insert("b", vec![Value::Bool(true), Value::Null]).unwrap();

        assert_eq!(
            format!("{}", Value::from(map)),
            "{\n  \"a\": 1,\n  \"b\": [TRUE, NULL]\n}"
        );
        assert_eq!(format!("{}", Value::from_static(b"\x00\xff")), "b\"00ff\"");
    }
}
