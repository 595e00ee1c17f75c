use smallvec::SmallVec;

/// Number of little-endian bytes needed to hold an integer magnitude,
/// keeping the top bit of the widest byte clear for the sign flag.
///
/// # Example
///
/// ```
/// use thinwire::util::magnitude_width;
///
/// assert_eq!(magnitude_width(127), 1);
/// // 128 takes the eighth bit, so it moves up a byte
/// assert_eq!(magnitude_width(128), 2);
/// ```
pub fn magnitude_width(mag: u64) -> u8 {
    match mag {
        0..=0x7f => 1,
        0x80..=0x7fff => 2,
        0x8000..=0x7f_ffff => 3,
        0x80_0000..=0x7fff_ffff => 4,
        0x8000_0000..=0x7f_ffff_ffff => 5,
        0x80_0000_0000..=0x7fff_ffff_ffff => 6,
        0x8000_0000_0000..=0x7f_ffff_ffff_ffff => 7,
        _ => 8,
    }
}

/// Converts an integer magnitude to its little-endian digits, truncated
/// to [`magnitude_width`] bytes.
///
/// # Example
///
/// ```
/// use thinwire::util::magnitude_digits;
///
/// let digs = magnitude_digits(4);
///
/// assert_eq!(digs[0], 4);
/// assert_eq!(digs.len(), 1);
/// ```
pub fn magnitude_digits(mag: u64) -> SmallVec<[u8; 8]> {
    let mut digs = SmallVec::from_slice(&u64::to_le_bytes(mag));
    digs.truncate(magnitude_width(mag) as usize);
    digs
}

/// Number of little-endian bytes needed to hold a payload length.
/// Zero lengths take no bytes at all.
pub fn len_width(len: u32) -> u8 {
    match len {
        0 => 0,
        1..=0xff => 1,
        0x100..=0xffff => 2,
        0x1_0000..=0xff_ffff => 3,
        _ => 4,
    }
}

/// Converts a payload length to its little-endian digits, truncated to
/// [`len_width`] bytes. An empty result means the length was zero.
pub fn len_digits(len: u32) -> SmallVec<[u8; 4]> {
    let mut digs = SmallVec::from_slice(&u32::to_le_bytes(len));
    digs.truncate(len_width(len) as usize);
    digs
}

#[macro_export]
/// Helper macro to compose `From` implementations.
macro_rules! compose_from {
    ($to:tt, $mid:tt, $from:ty) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self { Self::from($mid::from(f)) }
        }
    };
}

#[macro_export]
/// Helper macro to make implementing `From` easier.
macro_rules! from_fn {
    ($to:ty, $from:ty, $fn:expr) => {
        impl From<$from> for $to {
            fn from(f: $from) -> $to { $fn(f) }
        }
    };
}

#[macro_export]
/// Helper macro to make implementing `From` easier.
macro_rules! from_as {
    ($to:tt, $from:ty, $as:ty) => {
        impl From<$from> for $to {
            fn from(f: $from) -> $to { $to::from(f as $as) }
        }
    };
}

#[macro_export]
/// Helper macro to implement `TryFrom` by matching on a constructor.
macro_rules! try_from_ctor {
    ($from:ty, $to:ty, $ctor:path) => {
        impl std::convert::TryFrom<$from> for $to {
            type Error = $from;

            fn try_from(from: $from) -> Result<Self, $from> {
                match from {
                    $ctor(t) => Ok(t),
                    f => Err(f),
                }
            }
        }
    };
}
