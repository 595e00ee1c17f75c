/// Type nibble mask, 0xf0
pub(crate) const MASK_TYPE: u8 = 0b1111_0000;
/// `False` constant, a complete tag
pub(crate) const CON_FALSE: u8 = 0b0000_0000;
/// `True` constant, a complete tag
pub(crate) const CON_TRUE: u8 = 0b0000_0001;
/// I32 type bits, 0x20
pub(crate) const TYPE_I32: u8 = 0b0010_0000;
/// I64 type bits, 0x40
pub(crate) const TYPE_I64: u8 = 0b0100_0000;
/// Single-precision tag, 0x60
pub(crate) const TAG_F32: u8 = 0b0110_0000;
/// Double-precision tag, 0x70
pub(crate) const TAG_F64: u8 = 0b0111_0000;
/// String type bits, 0x80
pub(crate) const TYPE_STR: u8 = 0b1000_0000;
/// Bytes type bits, 0x90
pub(crate) const TYPE_BYT: u8 = 0b1001_0000;
/// List type bits, 0xa0
pub(crate) const TYPE_LIST: u8 = 0b1010_0000;
/// Map type bits, 0xb0
pub(crate) const TYPE_MAP: u8 = 0b1011_0000;
/// Null type bits, 0xf0
pub(crate) const TYPE_NULL: u8 = 0b1111_0000;

/// Integer sign bit, set when the value is negative
pub(crate) const INT_NEGATIVE: u8 = 0b0000_1000;
/// Integer magnitude width bits, holding width minus one
pub(crate) const MASK_INT_WIDTH: u8 = 0b0000_0111;
/// Length size-class bits of string, bytes, list, and map tags
pub(crate) const MASK_REF_SIZE: u8 = 0b0000_0111;
/// Largest size class a length prefix can take
pub(crate) const MAX_REF_SIZE: u8 = 4;
