//! Errors raised while building or transcoding values.

use failure::Fail;
use std::str::Utf8Error;

/// The wire kinds a [`Value`](crate::Value) can take on.
///
/// Used in diagnostics when a typed read meets a different kind than it
/// asked for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Kind {
    /// Absence of a value
    Null,
    /// Boolean
    Bool,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// Single precision float
    F32,
    /// Double precision float
    F64,
    /// UTF-8 string
    Str,
    /// Raw byte sequence
    Bytes,
    /// Ordered sequence of values
    List,
    /// Ordered sequence of key-value pairs
    Map,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Str => "string",
            Kind::Bytes => "bytes",
            Kind::List => "list",
            Kind::Map => "map",
        };
        write!(f, "{}", name)
    }
}

/// Everything that can go wrong with a container operation, an encode,
/// or a decode.
///
/// Codec entry points return [`failure::Error`]; downcast to this type
/// to branch on the cause:
///
/// ```
/// use thinwire::prelude::*;
///
/// let err = decode_full::<_, Value>(vec![0x15]).unwrap_err();
/// match err.downcast_ref::<CodecError>() {
///     Some(CodecError::UnknownTag(0x15)) => (),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Fail)]
pub enum CodecError {
    /// An argument the caller passed violates a container invariant.
    #[fail(display = "invalid argument: {}", _0)]
    InvalidArgument(&'static str),
    /// An index fell outside a list's bounds.
    #[fail(display = "index {} out of bounds for list of length {}", index, len)]
    OutOfBounds {
        /// The offending index
        index: usize,
        /// Length of the list at the time of the call
        len: usize,
    },
    /// A typed read met a value of a different kind.
    #[fail(display = "type mismatch: expected {}, found {}", expected, found)]
    TypeMismatch {
        /// The kind the caller asked for
        expected: Kind,
        /// The kind found on the wire
        found: Kind,
    },
    /// The input ended before a payload its tag promised.
    #[fail(
        display = "input truncated: needed {} more bytes, found {}",
        needed, remaining
    )]
    Truncated {
        /// Bytes the current payload still requires
        needed: usize,
        /// Bytes left in the input
        remaining: usize,
    },
    /// A magnitude or length does not fit the type being decoded into.
    #[fail(display = "unsupported length or magnitude: {}", _0)]
    UnsupportedLength(u64),
    /// A string payload was not valid UTF-8.
    #[fail(display = "string payload is not valid utf-8: {}", _0)]
    InvalidEncoding(Utf8Error),
    /// A byte that is not a tag in this encoding.
    #[fail(display = "unknown tag byte: 0x{:02x}", _0)]
    UnknownTag(u8),
}
