//! # Binary encoder and decoder
//!
//! Encode and decode functions for [`Value`] and the primitive types
//! it wraps.
//!
//! # Example
//!
//! ```
//! use thinwire::prelude::*;
//!
//! let mut list = List::new();
//! list.push(1);
//! list.push("two");
//!
//! let value = Value::List(list);
//!
//! // encode into a fresh buffer
//! let enc = encode_full(&value).unwrap();
//!
//! // or into one you already have
//! let out = &mut Vec::new();
//! encode(&value, out).unwrap();
//!
//! // they are equivalent
//! assert_eq!(*out, enc);
//!
//! // decoding returns a `Result`
//! let dec: Value = decode_full(&enc).unwrap();
//!
//! // success!
//! assert_eq!(dec, value);
//! ```

#![allow(clippy::inconsistent_digit_grouping)]
use crate::{
    errors::{CodecError, Kind},
    float::Float,
    list::List,
    map::Map,
    number::Number,
    util::*,
    Value,
};
use bytes::{Buf, Bytes, IntoBuf};
use failure::Error;

pub mod ser;
pub use ser::*;
pub mod de;
pub use de::*;
mod constants;
use constants::*;

/// Encodes a value into its binary representation, storing output in
/// `out`.
///
/// # Arguments
///
/// * `t: &T` - A reference to the value to be encoded.
/// * `out: &mut Vec<u8>` - A mutable reference to the buffer where the
///   encoder output will be stored.
///
/// # Errors
///
/// Fails with [`CodecError::UnsupportedLength`] when a string, bytes,
/// list, or map is too long for a four-byte length prefix. Nothing is
/// written to `out` past the last complete value in that case.
///
/// # Example
///
/// ```
/// use thinwire::prelude::*;
///
/// // output buffer
/// let out = &mut Vec::new();
/// // value to encode
/// let v = Value::Null;
///
/// // encode value
/// encode(&v, out).unwrap();
///
/// assert_eq!(*out, vec![0xf0]);
/// ```
pub fn encode<T: Ser + ?Sized>(t: &T, out: &mut Vec<u8>) -> Result<(), Error> { t.ser(out) }

/// Tries to decode a buffer into a value.
///
/// # Arguments
///
/// * `data` - A buffer containing an encoded value.
///
/// # Example
///
/// ```
/// use thinwire::prelude::*;
///
/// // encoded value
/// let v_null = &mut encode_full(&Value::Null).unwrap().into_buf();
///
/// // did the decoding succeed?
/// let dec: Value = match decode(v_null) {
///     Ok(value) => value,
///     Err(e) => panic!("{}", e),
/// };
///
/// // should be equal
/// assert_eq!(dec, Value::Null);
/// ```
pub fn decode<D: Deserializer, T: De>(data: &mut D) -> Result<T, Error> { T::de(data) }

/// Encodes a value into a vector of bytes.
///
/// # Arguments
///
/// * `t` - A reference to the value to be encoded.
///
/// # Example
///
/// ```
/// use thinwire::prelude::*;
///
/// // value to encode
/// let v = Value::from(42);
///
/// // encoded value
/// let enc: Vec<u8> = encode_full(&v).unwrap();
///
/// assert_eq!(enc, vec![0x20, 42]);
/// ```
pub fn encode_full<T: Ser + ?Sized>(t: &T) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    t.ser(&mut out)?;
    Ok(out)
}

/// Decodes a buffer into a value, returning an error if decoding
/// fails.
///
/// # Arguments
///
/// * `bs` - A buffer containing the bytes to be decoded.
///
/// # Example
///
/// ```
/// use thinwire::prelude::*;
///
/// // encoded value
/// let bs = encode_full(&42i64).unwrap();
///
/// // decode value
/// let dec: i64 = decode_full(&bs).unwrap();
///
/// assert_eq!(dec, 42);
/// ```
pub fn decode_full<B: IntoBuf, T: De>(bs: B) -> Result<T, Error> { decode(&mut bs.into_buf()) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_meta_zero() {
        let n = Value::from(0);
        let out = encode_full(&n).unwrap();

        // tag
        assert_eq!(out[0], 0b0010_0_000);
        // digit, should be 0
        assert_eq!(out[1], 0);
    }

    #[test]
    fn int_meta_small_pos_one_byte() {
        let small_pos = Value::from(1);
        let out = encode_full(&small_pos).unwrap();

        // tag
        assert_eq!(out[0], 0b0010_0_000);
        // digit, should be 1
        assert_eq!(out[1], 1);
    }

    #[test]
    fn int_meta_small_pos_two_bytes() {
        let small_pos = Value::from(257);
        let out = encode_full(&small_pos).unwrap();

        // tag
        assert_eq!(out[0], 0b0010_0_001);
        // LSD, should be 1
        assert_eq!(out[1], 1);
        // MSD, should be 1
        assert_eq!(out[2], 1);
    }

    #[test]
    fn int_meta_width_tracks_sign_bit() {
        // 127 fits a byte, 128 does not
        let out = encode_full(&Value::from(127)).unwrap();
        assert_eq!(out[0], 0b0010_0_000);
        assert_eq!(out[1], 127);

        let out = encode_full(&Value::from(128)).unwrap();
        assert_eq!(out[0], 0b0010_0_001);
        assert_eq!(out[1..], [128, 0]);
    }

    #[test]
    fn int_meta_three_bytes() {
        let out = encode_full(&Value::from(100_000)).unwrap();

        // tag
        assert_eq!(out[0], 0b0010_0_010);
        // digits, little-endian
        assert_eq!(out[1..], [0xa0, 0x86, 0x01]);
    }

    #[test]
    fn int_meta_small_neg_one_byte() {
        let small_neg = Value::from(-2);
        let out = encode_full(&small_neg).unwrap();

        // tag
        assert_eq!(out[0], 0b0010_1_000);
        // magnitude, should be 1
        assert_eq!(out[1], 1);
    }

    #[test]
    fn int_meta_small_neg_two_bytes() {
        let small_neg = Value::from(-257);
        let out = encode_full(&small_neg).unwrap();

        // tag
        assert_eq!(out[0], 0b0010_1_001);
        // LSD, should be 0
        assert_eq!(out[1], 0);
        // MSD, should be 1
        assert_eq!(out[2], 1);
    }

    #[test]
    fn int_meta_bounds() {
        let out = encode_full(&Value::from(i32::max_value())).unwrap();

        // tag
        assert_eq!(out[0], 0b0010_0_011);
        assert_eq!(out[1..], [255, 255, 255, 127]);

        let out = encode_full(&Value::from(i32::min_value())).unwrap();

        // tag, negative with the same magnitude
        assert_eq!(out[0], 0b0010_1_011);
        assert_eq!(out[1..], [255, 255, 255, 127]);

        let dec: Value = decode_full(&out).unwrap();
        assert_eq!(dec, Value::I32(i32::min_value()));
    }

    #[test]
    fn long_meta_small() {
        let forced = Value::from(Number::Long(5));
        let out = encode_full(&forced).unwrap();

        // tag
        assert_eq!(out[0], 0b0100_0_000);
        // digit, should be 5
        assert_eq!(out[1], 5);
    }

    #[test]
    fn long_meta_bounds() {
        let out = encode_full(&Value::from(i64::max_value())).unwrap();

        // tag
        assert_eq!(out[0], 0b0100_0_111);
        assert_eq!(out[1..], [255, 255, 255, 255, 255, 255, 255, 127]);

        let out = encode_full(&Value::from(i64::min_value())).unwrap();

        // tag, negative with the same magnitude
        assert_eq!(out[0], 0b0100_1_111);
        assert_eq!(out[1..], [255, 255, 255, 255, 255, 255, 255, 127]);

        let dec: Value = decode_full(&out).unwrap();
        assert_eq!(dec, Value::I64(i64::min_value()));
    }

    #[test]
    fn constants() {
        let out = encode_full(&Value::Null).unwrap();

        assert_eq!(out[0], TYPE_NULL);
        assert_eq!(out.len(), 1);

        let out = encode_full(&Value::from(true)).unwrap();

        assert_eq!(out[0], CON_TRUE);
        assert_eq!(out.len(), 1);

        let out = encode_full(&Value::from(false)).unwrap();

        assert_eq!(out[0], CON_FALSE);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn null_aliases_decode() {
        for byte in 0xf0..=0xffu8 {
            let dec: Value = decode_full(vec![byte]).unwrap();
            assert_eq!(dec, Value::Null);
        }
    }

    #[test]
    fn bool_bytes_are_exact() {
        let dec: bool = decode_full(vec![0x00]).unwrap();
        assert!(!dec);

        let dec: bool = decode_full(vec![0x01]).unwrap();
        assert!(dec);

        // the rest of the low range is not a constant
        assert!(decode_full::<_, Value>(vec![0x02]).is_err());
        assert!(decode_full::<_, Value>(vec![0x1f]).is_err());
    }

    #[test]
    fn small_string() {
        let small = Value::from("w");
        let out = encode_full(&small).unwrap();

        // tag
        assert_eq!(out[0], 0b1000_0_001);
        // length
        assert_eq!(out[1], 1);
        // characters
        assert_eq!(out[2], 119);
    }

    #[test]
    fn empty_string_is_bare_tag() {
        let out = encode_full(&Value::from("")).unwrap();

        assert_eq!(out, vec![0b1000_0_000]);

        let dec: String = decode_full(&out).unwrap();
        assert_eq!(dec, "");
    }

    #[test]
    fn large_string() {
        let large = Value::from("w".repeat(300));
        let out = encode_full(&large).unwrap();

        // tag
        assert_eq!(out[0], 0b1000_0_010);
        // length, little-endian
        assert_eq!(out[1..3], [0x2c, 0x01]);
        // bytes
        assert_eq!(out[3..].to_vec(), vec![b'w'; 300]);
    }

    #[test]
    fn small_bytes() {
        let small = Value::from(Bytes::from_static(b"ab"));
        let out = encode_full(&small).unwrap();

        // tag
        assert_eq!(out[0], 0b1001_0_001);
        // length
        assert_eq!(out[1], 2);
        // bytes
        assert_eq!(out[2..], [97, 98]);
    }

    #[test]
    fn small_list() {
        let small_list = Value::from(vec![Value::from(0)]);
        let out = encode_full(&small_list).unwrap();

        // tag
        assert_eq!(out[0], 0b1010_0_001);
        // length
        assert_eq!(out[1], 1);
        // element tag
        assert_eq!(out[2], 0b0010_0_000);
        // check that the value is right
        assert_eq!(out[3], 0);
    }

    #[test]
    fn empty_containers_are_bare_tags() {
        let out = encode_full(&Value::List(List::new())).unwrap();
        assert_eq!(out, vec![0b1010_0_000]);

        let out = encode_full(&Value::Map(Map::new())).unwrap();
        assert_eq!(out, vec![0b1011_0_000]);

        let out = encode_full(&Value::from(Bytes::new())).unwrap();
        assert_eq!(out, vec![0b1001_0_000]);

        let dec: List = decode_full(vec![0b1010_0_000u8]).unwrap();
        assert!(dec.is_empty());

        let dec: Map = decode_full(vec![0b1011_0_000u8]).unwrap();
        assert!(dec.is_empty());
    }

    #[test]
    fn large_list() {
        let large_list = Value::from(vec![Value::from(0); 140]);
        let out = encode_full(&large_list).unwrap();

        // tag
        assert_eq!(out[0], 0b1010_0_001);
        // length
        assert_eq!(out[1], 140);

        // element tags
        let out_tags: Vec<&u8> = out[2..].iter().step_by(2).collect();
        assert_eq!(out_tags, vec![&0b0010_0_000; 140]);

        let out_vals: Vec<&u8> = out[3..].iter().step_by(2).collect();
        assert_eq!(out_vals, vec![&0; 140]);
    }

    #[test]
    fn small_map() {
        let mut map = Map::new();
        map.insert("a", "b").unwrap();

        let out = encode_full(&Value::Map(map)).unwrap();

        // tag
        assert_eq!(out[0], 0b1011_0_001);
        // length
        assert_eq!(out[1], 1);
        // entry tags
        assert_eq!(vec![out[2], out[5]], vec![0b1000_0_001, 0b1000_0_001]);
        // check that the lengths and characters are right
        assert_eq!(vec![out[3], out[6]], vec![1, 1]);
        assert_eq!(vec![out[4], out[7]], vec![b'a', b'b']);
    }

    #[test]
    fn large_map() {
        let mut map = Map::new();
        for i in 0..100 {
            map.insert(Value::I32(i), Value::I32(i)).unwrap();
        }

        let out = encode_full(&Value::Map(map)).unwrap();

        // tag
        assert_eq!(out[0], 0b1011_0_001);
        // length
        assert_eq!(out[1], 100);

        // key tags
        out[2..]
            .iter()
            .step_by(4)
            .for_each(|x| assert_eq!(*x, 0b0010_0_000));

        // val tags
        out[4..]
            .iter()
            .step_by(4)
            .for_each(|x| assert_eq!(*x, 0b0010_0_000));

        // keys
        out[3..]
            .iter()
            .step_by(4)
            .enumerate()
            .for_each(|(i, x)| assert_eq!(*x as usize, i));

        // values
        out[5..]
            .iter()
            .step_by(4)
            .enumerate()
            .for_each(|(i, x)| assert_eq!(*x as usize, i));
    }

    #[test]
    fn map_wire_order_is_insertion_order() {
        let mut map = Map::new();
        map.insert("b", 1).unwrap();
        map.insert("a", 2).unwrap();

        let out = encode_full(&Value::Map(map)).unwrap();

        // first key on the wire is "b"
        assert_eq!(out[4], b'b');
        assert_eq!(out[9], b'a');
    }

    #[test]
    fn duplicate_wire_keys_collapse() {
        // {"a": 1, "a": 2} on the wire
        let bs = vec![0b1011_0_001, 2, 0x81, 1, b'a', 0x20, 1, 0x81, 1, b'a', 0x20, 2];
        let dec: Map = decode_full(bs).unwrap();

        assert_eq!(dec.len(), 1);
        assert_eq!(dec.get(&Value::from("a")), Some(&Value::I32(2)));
    }

    #[test]
    fn single_floats() {
        let f = 1f32;
        let vf = Value::from(f);

        let out = encode_full(&vf).unwrap();

        // tag
        assert_eq!(out[0], TAG_F32);

        // bytes
        assert_eq!(out[1..5], [0, 0, 0b1000_0000, 0b0011_1111]);

        let f = -1f32;
        let vf = Value::from(f);

        let out = encode_full(&vf).unwrap();

        // tag
        assert_eq!(out[0], TAG_F32);

        // bytes
        assert_eq!(out[1..5], [0, 0, 0b1000_0000, 0b1011_1111]);

        let f = -0f32;
        let vf = Value::from(f);

        let out = encode_full(&vf).unwrap();

        // tag
        assert_eq!(out[0], TAG_F32);

        // bytes
        assert_eq!(out[1..5], [0, 0, 0, 0b1000_0000]);
    }

    #[test]
    fn double_floats() {
        let f = 1f64;
        let vf = Value::from(f);

        let out = encode_full(&vf).unwrap();

        // tag
        assert_eq!(out[0], TAG_F64);

        // bytes
        assert_eq!(out[1..9], [0, 0, 0, 0, 0, 0, 0b1111_0000, 0b0011_1111]);
    }

    #[test]
    fn unknown_tags() {
        for byte in &[0x02u8, 0x1f, 0xc0, 0xd4, 0xe7] {
            let err = decode_full::<_, Value>(vec![*byte]).unwrap_err();
            match err.downcast_ref::<CodecError>() {
                Some(CodecError::UnknownTag(b)) => assert_eq!(b, byte),
                other => panic!("expected unknown tag, got {:?}", other),
            }
        }
    }

    #[test]
    fn oversize_length_classes_are_rejected() {
        // a string tag with class bits 5 through 7 is not ours
        for byte in &[0x85u8, 0x96, 0xa7, 0xb5] {
            let err = decode_full::<_, Value>(vec![*byte]).unwrap_err();
            match err.downcast_ref::<CodecError>() {
                Some(CodecError::UnknownTag(b)) => assert_eq!(b, byte),
                other => panic!("expected unknown tag, got {:?}", other),
            }
        }
    }

    #[test]
    fn truncated_inputs_error() {
        // empty input
        assert!(decode_full::<_, Value>(vec![]).is_err());

        // integer tag with a missing digit
        let err = decode_full::<_, Value>(vec![0x22, 0xff]).unwrap_err();
        match err.downcast_ref::<CodecError>() {
            Some(CodecError::Truncated {
                needed: 3,
                remaining: 1,
            }) => (),
            other => panic!("expected truncation, got {:?}", other),
        }

        // string tag with a missing length
        assert!(decode_full::<_, Value>(vec![0x81]).is_err());

        // string tag with a short payload
        assert!(decode_full::<_, Value>(vec![0x81, 5, b'h', b'i']).is_err());

        // list that promises more elements than it holds
        assert!(decode_full::<_, Value>(vec![0xa1, 2, 0x20, 1]).is_err());
    }

    #[test]
    fn oversize_magnitudes_are_rejected() {
        // a four-byte magnitude too large for i32
        let err = decode_full::<_, Value>(vec![0x23, 0xff, 0xff, 0xff, 0xff]).unwrap_err();
        match err.downcast_ref::<CodecError>() {
            Some(CodecError::UnsupportedLength(0xffff_ffff)) => (),
            other => panic!("expected unsupported length, got {:?}", other),
        }

        // an eight-byte magnitude too large for i64
        let bs = vec![0x47, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
        assert!(decode_full::<_, Value>(bs).is_err());
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = decode_full::<_, Value>(vec![0x81, 1, 0xff]).unwrap_err();
        match err.downcast_ref::<CodecError>() {
            Some(CodecError::InvalidEncoding(_)) => (),
            other => panic!("expected invalid encoding, got {:?}", other),
        }

        // the same payload is fine as bytes
        let dec: Value = decode_full(vec![0x91, 1, 0xff]).unwrap();
        assert_eq!(dec, Value::Byt(Bytes::from_static(&[0xff])));
    }

    #[test]
    fn typed_reads_check_kinds() {
        let enc = encode_full(&Value::from("x")).unwrap();
        let err = decode_full::<_, i64>(&enc).unwrap_err();
        match err.downcast_ref::<CodecError>() {
            Some(CodecError::TypeMismatch {
                expected: Kind::I64,
                found: Kind::Str,
            }) => (),
            other => panic!("expected mismatch, got {:?}", other),
        }

        // narrow and wide integers do not mix
        let enc = encode_full(&5i64).unwrap();
        assert!(decode_full::<_, i32>(&enc).is_err());

        let enc = encode_full(&5i32).unwrap();
        assert!(decode_full::<_, i64>(&enc).is_err());
    }

    #[test]
    fn trailing_bytes_are_left_in_place() {
        let buf = &mut vec![0x20u8, 1, 0x20, 2].into_buf();

        let first: Value = decode(buf).unwrap();
        assert_eq!(first, Value::I32(1));

        let second: Value = decode(buf).unwrap();
        assert_eq!(second, Value::I32(2));
    }
}
