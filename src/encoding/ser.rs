use super::*;
use smallvec::SmallVec;
use std::convert::TryFrom;

/// A sink for encoded bytes.
pub trait Serializer {
    /// The type of the output value.
    type Out;
    /// Add a byte to the output value.
    fn put_u8(&mut self, u: u8);
    /// Add a slice to the output value.
    fn put_slice(&mut self, slice: &[u8]);
    /// Return the output value.
    fn finalize(self) -> Self::Out;
}

/// Convenience methods for [`Serializer`], one per wire kind.
///
/// The integer and float writers cannot fail; the writers that carry a
/// length prefix fail with
/// [`UnsupportedLength`](crate::errors::CodecError::UnsupportedLength)
/// when the payload is too long for a four-byte prefix, before anything
/// reaches the output.
pub trait SerializerExt: Serializer {
    /// Add an [`i32`] to the output value.
    ///
    /// # Arguments
    ///
    /// * `i: i32` - The value to be added.
    fn put_i32(&mut self, i: i32);
    /// Add an [`i64`] to the output value.
    ///
    /// # Arguments
    ///
    /// * `i: i64` - The value to be added.
    fn put_i64(&mut self, i: i64);
    /// Add an [`f32`] to the output value.
    ///
    /// # Arguments
    ///
    /// * `f: f32` - The value to be added.
    fn put_f32(&mut self, f: f32);
    /// Add an [`f64`] to the output value.
    ///
    /// # Arguments
    ///
    /// * `f: f64` - The value to be added.
    fn put_f64(&mut self, f: f64);
    /// Add a [`bool`] to the output value.
    ///
    /// # Arguments
    ///
    /// * `b: bool` - The value to be added.
    fn put_bool(&mut self, b: bool);
    /// Add a null to the output value.
    fn put_null(&mut self);
    /// Add a string to the output value.
    ///
    /// # Arguments
    ///
    /// * `s: &str` - The value to be added.
    fn put_str(&mut self, s: &str) -> Result<(), Error>;
    /// Add [`Bytes`] to the output value.
    ///
    /// # Arguments
    ///
    /// * `b: &Bytes` - The value to be added.
    fn put_bytes(&mut self, b: &Bytes) -> Result<(), Error>;
    /// Add a sequence of values to the output value as a list.
    ///
    /// # Arguments
    ///
    /// * `v` - The elements to be added.
    fn put_list<T: Ser>(&mut self, v: &[T]) -> Result<(), Error>;
    /// Add a [`Map`] to the output value.
    ///
    /// # Arguments
    ///
    /// * `m: &Map` - The value to be added.
    fn put_map(&mut self, m: &Map) -> Result<(), Error>;
}

#[inline]
fn int_tag(type_bits: u8, neg: bool, width: u8) -> u8 {
    type_bits | ((neg as u8) << 3) | (width - 1)
}

/// Tag byte and length digits for a length-prefixed kind.
fn ref_tag(type_bits: u8, len: usize) -> Result<(u8, SmallVec<[u8; 4]>), Error> {
    let len = u32::try_from(len).map_err(|_| CodecError::UnsupportedLength(len as u64))?;
    let digs = len_digits(len);
    Ok((type_bits | digs.len() as u8, digs))
}

impl Serializer for Vec<u8> {
    type Out = Self;

    fn put_u8(&mut self, u: u8) { self.push(u) }

    fn put_slice(&mut self, slice: &[u8]) { self.extend_from_slice(slice) }

    fn finalize(self) -> Self::Out { self }
}

impl<S: Serializer> SerializerExt for S {
    #[inline]
    fn put_i32(&mut self, mut i: i32) {
        let neg = i.is_negative();
        if neg {
            i += 1;
            i *= -1;
        }
        debug_assert!(i >= 0);

        let digs = magnitude_digits(i as u64);
        debug_assert!(digs.len() <= 4);

        self.put_u8(int_tag(TYPE_I32, neg, digs.len() as u8));
        self.put_slice(&digs);
    }

    #[inline]
    fn put_i64(&mut self, mut i: i64) {
        let neg = i.is_negative();
        if neg {
            i += 1;
            i *= -1;
        }
        debug_assert!(i >= 0);

        let digs = magnitude_digits(i as u64);
        debug_assert!(digs.len() <= 8);

        self.put_u8(int_tag(TYPE_I64, neg, digs.len() as u8));
        self.put_slice(&digs);
    }

    fn put_f32(&mut self, f: f32) {
        self.put_u8(TAG_F32);
        self.put_slice(&u32::to_le_bytes(f.to_bits()));
    }

    fn put_f64(&mut self, f: f64) {
        self.put_u8(TAG_F64);
        self.put_slice(&u64::to_le_bytes(f.to_bits()));
    }

    fn put_bool(&mut self, b: bool) {
        if b {
            self.put_u8(CON_TRUE)
        } else {
            self.put_u8(CON_FALSE)
        }
    }

    fn put_null(&mut self) { self.put_u8(TYPE_NULL) }

    fn put_str(&mut self, s: &str) -> Result<(), Error> {
        let (tag, len_digs) = ref_tag(TYPE_STR, s.len())?;
        self.put_u8(tag);
        self.put_slice(&len_digs);
        self.put_slice(s.as_bytes());
        Ok(())
    }

    fn put_bytes(&mut self, b: &Bytes) -> Result<(), Error> {
        let (tag, len_digs) = ref_tag(TYPE_BYT, b.len())?;
        self.put_u8(tag);
        self.put_slice(&len_digs);
        self.put_slice(b);
        Ok(())
    }

    fn put_list<T: Ser>(&mut self, v: &[T]) -> Result<(), Error> {
        let (tag, len_digs) = ref_tag(TYPE_LIST, v.len())?;
        self.put_u8(tag);
        self.put_slice(&len_digs);
        for t in v {
            t.ser(self)?;
        }
        Ok(())
    }

    fn put_map(&mut self, m: &Map) -> Result<(), Error> {
        let (tag, len_digs) = ref_tag(TYPE_MAP, m.len())?;
        self.put_u8(tag);
        self.put_slice(&len_digs);
        for (k, v) in m.iter() {
            k.ser(self)?;
            v.ser(self)?;
        }
        Ok(())
    }
}

/// A value that can be serialized.
pub trait Ser {
    /// Writes `self` to a [`Serializer`].
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error>;
}

impl Ser for Value {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> {
        match self {
            Value::Null => {
                s.put_null();
                Ok(())
            }
            Value::Bool(b) => {
                s.put_bool(*b);
                Ok(())
            }
            Value::I32(i) => {
                s.put_i32(*i);
                Ok(())
            }
            Value::I64(i) => {
                s.put_i64(*i);
                Ok(())
            }
            Value::Float(Float::Single(n)) => {
                s.put_f32(f32::from_bits(*n));
                Ok(())
            }
            Value::Float(Float::Double(n)) => {
                s.put_f64(f64::from_bits(*n));
                Ok(())
            }
            Value::Str(st) => s.put_str(st),
            Value::Byt(bs) => s.put_bytes(bs),
            Value::List(l) => s.put_list(l.as_slice()),
            Value::Map(m) => s.put_map(m),
        }
    }
}

macro_rules! trivial_ser {
    ($t:ty, $put:tt) => {
        impl Ser for $t {
            fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> {
                s.$put(*self);
                Ok(())
            }
        }
    };
}

trivial_ser!(bool, put_bool);
trivial_ser!(i32, put_i32);
trivial_ser!(i64, put_i64);
trivial_ser!(f32, put_f32);
trivial_ser!(f64, put_f64);

impl Ser for () {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> {
        s.put_null();
        Ok(())
    }
}

impl Ser for str {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> { s.put_str(self) }
}

impl Ser for String {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> { s.put_str(self) }
}

impl Ser for Bytes {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> { s.put_bytes(self) }
}

impl Ser for List {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> { s.put_list(self.as_slice()) }
}

impl Ser for Map {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> { s.put_map(self) }
}

impl Ser for Number {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> {
        match self {
            Number::Int(i) => s.put_i32(*i),
            Number::Long(i) => s.put_i64(*i),
            Number::Float(f) => s.put_f32(*f),
            Number::Double(f) => s.put_f64(*f),
        }
        Ok(())
    }
}

impl<T: Ser> Ser for Vec<T> {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> { s.put_list(self) }
}

impl<T: Ser> Ser for Option<T> {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> {
        match self {
            Some(t) => t.ser(s),
            None => {
                s.put_null();
                Ok(())
            }
        }
    }
}
