//! Numbers with an explicit wire kind attached.
//!
//! A plain `i64` narrows to the smallest integer kind that holds it and
//! a plain `f64` is always double precision. Wrapping a number in
//! [`Number`] pins the kind instead, so a small count can still travel
//! as [`Number::Long`] when the receiving end expects eight-byte
//! integers.
//!
//! ```
//! use thinwire::prelude::*;
//!
//! // plain construction narrows
//! assert_eq!(Value::from(5i64), Value::I32(5));
//! // wrapped construction does not
//! assert_eq!(Value::from(Number::Long(5)), Value::I64(5));
//! ```

use crate::errors::Kind;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
/// A number pinned to one of the four numeric wire kinds.
pub enum Number {
    /// 32-bit signed integer
    Int(i32),
    /// 64-bit signed integer
    Long(i64),
    /// Single precision float
    Float(f32),
    /// Double precision float
    Double(f64),
}

impl Number {
    /// The wire kind this number will encode as.
    pub fn kind(&self) -> Kind {
        match self {
            Number::Int(_) => Kind::I32,
            Number::Long(_) => Kind::I64,
            Number::Float(_) => Kind::F32,
            Number::Double(_) => Kind::F64,
        }
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Number { Number::Int(n) }
}

impl From<i64> for Number {
    fn from(n: i64) -> Number { Number::Long(n) }
}

impl From<f32> for Number {
    fn from(n: f32) -> Number { Number::Float(n) }
}

impl From<f64> for Number {
    fn from(n: f64) -> Number { Number::Double(n) }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Long(n) => write!(f, "{}", n),
            Number::Float(n) => write!(f, "{}", n),
            Number::Double(n) => write!(f, "{}", n),
        }
    }
}
