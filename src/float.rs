//! Floating point values, stored as their IEEE-754 bit patterns.
//!
//! Holding the raw bits keeps equality and hashing total: every NaN
//! payload is its own value and `-0.0` is distinct from `0.0`, so a
//! decoded [`Float`] always compares equal to the one that was encoded.

use crate::errors::Kind;
use std::{convert::TryFrom, fmt};

#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Debug)]
/// A single or double precision float, as bits.
pub enum Float {
    /// Single precision, from [`f32::to_bits`]
    Single(u32),
    /// Double precision, from [`f64::to_bits`]
    Double(u64),
}

use Float::*;

impl Float {
    /// The wire kind this float will encode as.
    pub fn kind(&self) -> Kind {
        match self {
            Single(_) => Kind::F32,
            Double(_) => Kind::F64,
        }
    }
}

impl From<f32> for Float {
    fn from(f: f32) -> Float { Single(f.to_bits()) }
}

impl From<f64> for Float {
    fn from(f: f64) -> Float { Double(f.to_bits()) }
}

impl TryFrom<Float> for f32 {
    type Error = Float;

    fn try_from(f: Float) -> Result<Self, Float> {
        match f {
            Single(n) => Ok(f32::from_bits(n)),
            _ => Err(f),
        }
    }
}

impl TryFrom<Float> for f64 {
    type Error = Float;

    fn try_from(f: Float) -> Result<Self, Float> {
        match f {
            Double(n) => Ok(f64::from_bits(n)),
            _ => Err(f),
        }
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Single(n) => write!(f, "{}", f32::from_bits(*n)),
            Double(n) => write!(f, "{}", f64::from_bits(*n)),
        }
    }
}
