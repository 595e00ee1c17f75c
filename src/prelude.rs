pub use crate::{
    encoding::{
        decode, decode_full, encode, encode_full, De, Deserializer, Ser, Serializer,
        SerializerExt, Tag,
    },
    errors::{CodecError, Kind},
    float::Float,
    list::List,
    map::Map,
    number::Number,
    Value,
};
pub use bytes::{buf::FromBuf, Buf, Bytes, IntoBuf};
pub use failure::Error;
pub use std::convert::TryFrom;
