use super::*;

/// A decoded tag byte.
///
/// Integer tags carry their sign flag and magnitude width; the
/// length-prefixed kinds carry their size class, the number of bytes
/// their length prefix occupies.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Tag {
    /// Absence of a value
    Null,
    /// Boolean constant
    Bool(bool),
    /// 32-bit integer; sign flag and magnitude width in bytes
    I32(bool, u8),
    /// 64-bit integer; sign flag and magnitude width in bytes
    I64(bool, u8),
    /// Single precision float
    F32,
    /// Double precision float
    F64,
    /// String; length size class
    Str(u8),
    /// Bytes; length size class
    Byt(u8),
    /// List; length size class
    List(u8),
    /// Map; length size class
    Map(u8),
}

impl Tag {
    /// The kind of value this tag announces.
    pub fn kind(&self) -> Kind {
        match self {
            Tag::Null => Kind::Null,
            Tag::Bool(_) => Kind::Bool,
            Tag::I32(..) => Kind::I32,
            Tag::I64(..) => Kind::I64,
            Tag::F32 => Kind::F32,
            Tag::F64 => Kind::F64,
            Tag::Str(_) => Kind::Str,
            Tag::Byt(_) => Kind::Bytes,
            Tag::List(_) => Kind::List,
            Tag::Map(_) => Kind::Map,
        }
    }
}

/// A source of encoded bytes with typed reads, one per wire kind.
///
/// The typed reads fail with
/// [`TypeMismatch`](crate::errors::CodecError::TypeMismatch) when the
/// next value on the wire has a different kind than the one asked for;
/// [`read_value`](Deserializer::read_value) accepts any kind. Every
/// read checks the remaining input before touching it, so a truncated
/// buffer fails with
/// [`Truncated`](crate::errors::CodecError::Truncated) instead of
/// panicking.
pub trait Deserializer {
    /// Reads the next tag byte.
    fn read_tag(&mut self) -> Result<Tag, Error>;
    /// Reads a null.
    fn read_null(&mut self) -> Result<(), Error>;
    /// Reads a [`bool`].
    fn read_bool(&mut self) -> Result<bool, Error>;
    /// Reads an [`i32`].
    fn read_i32(&mut self) -> Result<i32, Error>;
    /// Reads an [`i64`].
    fn read_i64(&mut self) -> Result<i64, Error>;
    /// Reads an [`f32`].
    fn read_f32(&mut self) -> Result<f32, Error>;
    /// Reads an [`f64`].
    fn read_f64(&mut self) -> Result<f64, Error>;
    /// Reads a [`String`].
    fn read_str(&mut self) -> Result<String, Error>;
    /// Reads [`Bytes`].
    fn read_bytes(&mut self) -> Result<Bytes, Error>;
    /// Reads a [`List`].
    fn read_list(&mut self) -> Result<List, Error>;
    /// Reads a [`Map`].
    fn read_map(&mut self) -> Result<Map, Error>;
    /// Reads a value of any kind.
    fn read_value(&mut self) -> Result<Value, Error>;
}

fn mismatch(expected: Kind, found: Tag) -> Error {
    CodecError::TypeMismatch {
        expected,
        found: found.kind(),
    }
    .into()
}

fn ref_size(byte: u8) -> Result<u8, Error> {
    let class = byte & MASK_REF_SIZE;
    if class <= MAX_REF_SIZE {
        Ok(class)
    } else {
        Err(CodecError::UnknownTag(byte).into())
    }
}

fn read_magnitude<B: Buf>(dat: &mut B, width: u8) -> Result<u64, Error> {
    let width = width as usize;
    if dat.remaining() < width {
        return Err(CodecError::Truncated {
            needed: width,
            remaining: dat.remaining(),
        }
        .into());
    }
    Ok(dat.get_uint_le(width))
}

fn i32_from_parts(neg: bool, mag: u64) -> Result<i32, CodecError> {
    if mag > i32::max_value() as u64 {
        return Err(CodecError::UnsupportedLength(mag));
    }
    let mag = mag as i32;
    Ok(if neg { -mag - 1 } else { mag })
}

fn i64_from_parts(neg: bool, mag: u64) -> Result<i64, CodecError> {
    if mag > i64::max_value() as u64 {
        return Err(CodecError::UnsupportedLength(mag));
    }
    let mag = mag as i64;
    Ok(if neg { -mag - 1 } else { mag })
}

fn read_f32_bits<B: Buf>(dat: &mut B) -> Result<u32, Error> {
    if dat.remaining() < 4 {
        return Err(CodecError::Truncated {
            needed: 4,
            remaining: dat.remaining(),
        }
        .into());
    }
    Ok(dat.get_u32_le())
}

fn read_f64_bits<B: Buf>(dat: &mut B) -> Result<u64, Error> {
    if dat.remaining() < 8 {
        return Err(CodecError::Truncated {
            needed: 8,
            remaining: dat.remaining(),
        }
        .into());
    }
    Ok(dat.get_u64_le())
}

fn read_len<B: Buf>(dat: &mut B, class: u8) -> Result<usize, Error> {
    if class == 0 {
        return Ok(0);
    }
    Ok(read_magnitude(dat, class)? as usize)
}

fn read_raw<B: Buf>(dat: &mut B, class: u8) -> Result<Vec<u8>, Error> {
    let len = read_len(dat, class)?;
    if dat.remaining() < len {
        return Err(CodecError::Truncated {
            needed: len,
            remaining: dat.remaining(),
        }
        .into());
    }
    let mut raw = vec![0u8; len];
    dat.copy_to_slice(&mut raw);
    Ok(raw)
}

fn read_string<B: Buf>(dat: &mut B, class: u8) -> Result<String, Error> {
    String::from_utf8(read_raw(dat, class)?)
        .map_err(|e| CodecError::InvalidEncoding(e.utf8_error()).into())
}

fn finish_list<B: Buf>(dat: &mut B, len: usize) -> Result<List, Error> {
    let mut list = List::with_capacity(len);
    for _ in 0..len {
        list.push(dat.read_value()?);
    }
    Ok(list)
}

// duplicate keys collapse the way repeated inserts would: first
// occurrence keeps the position, last occurrence keeps the value
fn finish_map<B: Buf>(dat: &mut B, len: usize) -> Result<Map, Error> {
    let mut map = Map::with_capacity(len);
    for _ in 0..len {
        let key = dat.read_value()?;
        let value = dat.read_value()?;
        map.insert(key, value)?;
    }
    Ok(map)
}

fn finish_value<B: Buf>(dat: &mut B, tag: Tag) -> Result<Value, Error> {
    match tag {
        Tag::Null => Ok(Value::Null),
        Tag::Bool(b) => Ok(Value::Bool(b)),
        Tag::I32(neg, width) => {
            let mag = read_magnitude(dat, width)?;
            Ok(Value::I32(i32_from_parts(neg, mag)?))
        }
        Tag::I64(neg, width) => {
            let mag = read_magnitude(dat, width)?;
            Ok(Value::I64(i64_from_parts(neg, mag)?))
        }
        Tag::F32 => Ok(Value::Float(Float::Single(read_f32_bits(dat)?))),
        Tag::F64 => Ok(Value::Float(Float::Double(read_f64_bits(dat)?))),
        Tag::Str(class) => Ok(Value::Str(read_string(dat, class)?)),
        Tag::Byt(class) => Ok(Value::Byt(Bytes::from(read_raw(dat, class)?))),
        Tag::List(class) => {
            let len = read_len(dat, class)?;
            Ok(Value::List(finish_list(dat, len)?))
        }
        Tag::Map(class) => {
            let len = read_len(dat, class)?;
            Ok(Value::Map(finish_map(dat, len)?))
        }
    }
}

impl<B: Buf> Deserializer for B {
    #[inline]
    fn read_tag(&mut self) -> Result<Tag, Error> {
        if !self.has_remaining() {
            return Err(CodecError::Truncated {
                needed: 1,
                remaining: 0,
            }
            .into());
        }
        let byte = self.get_u8();
        let tag = match byte {
            CON_FALSE => Tag::Bool(false),
            CON_TRUE => Tag::Bool(true),
            _ => match byte & MASK_TYPE {
                TYPE_NULL => Tag::Null,
                TYPE_I32 => Tag::I32(byte & INT_NEGATIVE != 0, (byte & MASK_INT_WIDTH) + 1),
                TYPE_I64 => Tag::I64(byte & INT_NEGATIVE != 0, (byte & MASK_INT_WIDTH) + 1),
                TAG_F32 => Tag::F32,
                TAG_F64 => Tag::F64,
                TYPE_STR => Tag::Str(ref_size(byte)?),
                TYPE_BYT => Tag::Byt(ref_size(byte)?),
                TYPE_LIST => Tag::List(ref_size(byte)?),
                TYPE_MAP => Tag::Map(ref_size(byte)?),
                _ => return Err(CodecError::UnknownTag(byte).into()),
            },
        };
        Ok(tag)
    }

    #[inline]
    fn read_null(&mut self) -> Result<(), Error> {
        match self.read_tag()? {
            Tag::Null => Ok(()),
            tag => Err(mismatch(Kind::Null, tag)),
        }
    }

    #[inline]
    fn read_bool(&mut self) -> Result<bool, Error> {
        match self.read_tag()? {
            Tag::Bool(b) => Ok(b),
            tag => Err(mismatch(Kind::Bool, tag)),
        }
    }

    #[inline]
    fn read_i32(&mut self) -> Result<i32, Error> {
        match self.read_tag()? {
            Tag::I32(neg, width) => {
                let mag = read_magnitude(self, width)?;
                Ok(i32_from_parts(neg, mag)?)
            }
            tag => Err(mismatch(Kind::I32, tag)),
        }
    }

    #[inline]
    fn read_i64(&mut self) -> Result<i64, Error> {
        match self.read_tag()? {
            Tag::I64(neg, width) => {
                let mag = read_magnitude(self, width)?;
                Ok(i64_from_parts(neg, mag)?)
            }
            tag => Err(mismatch(Kind::I64, tag)),
        }
    }

    #[inline]
    fn read_f32(&mut self) -> Result<f32, Error> {
        match self.read_tag()? {
            Tag::F32 => Ok(f32::from_bits(read_f32_bits(self)?)),
            tag => Err(mismatch(Kind::F32, tag)),
        }
    }

    #[inline]
    fn read_f64(&mut self) -> Result<f64, Error> {
        match self.read_tag()? {
            Tag::F64 => Ok(f64::from_bits(read_f64_bits(self)?)),
            tag => Err(mismatch(Kind::F64, tag)),
        }
    }

    #[inline]
    fn read_str(&mut self) -> Result<String, Error> {
        match self.read_tag()? {
            Tag::Str(class) => read_string(self, class),
            tag => Err(mismatch(Kind::Str, tag)),
        }
    }

    #[inline]
    fn read_bytes(&mut self) -> Result<Bytes, Error> {
        match self.read_tag()? {
            Tag::Byt(class) => Ok(Bytes::from(read_raw(self, class)?)),
            tag => Err(mismatch(Kind::Bytes, tag)),
        }
    }

    fn read_list(&mut self) -> Result<List, Error> {
        match self.read_tag()? {
            Tag::List(class) => {
                let len = read_len(self, class)?;
                finish_list(self, len)
            }
            tag => Err(mismatch(Kind::List, tag)),
        }
    }

    fn read_map(&mut self) -> Result<Map, Error> {
        match self.read_tag()? {
            Tag::Map(class) => {
                let len = read_len(self, class)?;
                finish_map(self, len)
            }
            tag => Err(mismatch(Kind::Map, tag)),
        }
    }

    fn read_value(&mut self) -> Result<Value, Error> {
        let tag = self.read_tag()?;
        finish_value(self, tag)
    }
}

/// A value that can be deserialized.
pub trait De: Sized {
    /// Reads a value of type `Self` from a [`Deserializer`].
    ///
    /// # Arguments
    ///
    /// * `d` - The [`Deserializer`] to be read from.
    fn de<D: Deserializer>(d: &mut D) -> Result<Self, Error>;
}

macro_rules! trivial_de {
    ($typ:ty, $read:tt) => {
        impl De for $typ {
            #[inline]
            fn de<D: Deserializer>(d: &mut D) -> Result<Self, Error> { d.$read() }
        }
    };
}

trivial_de!((), read_null);
trivial_de!(bool, read_bool);
trivial_de!(i32, read_i32);
trivial_de!(i64, read_i64);
trivial_de!(f32, read_f32);
trivial_de!(f64, read_f64);
trivial_de!(String, read_str);
trivial_de!(Bytes, read_bytes);
trivial_de!(List, read_list);
trivial_de!(Map, read_map);
trivial_de!(Value, read_value);
