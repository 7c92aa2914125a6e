//! Wire format tag bytes.
//!
//! Every encoded value starts with a tag byte. Small integers and short
//! headers pack their payload into the tag itself (the "fix" forms); wider
//! values use one of the fixed marker bytes below followed by a big-endian
//! payload.

/// A fixed, single-byte wire tag.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Marker {
    /// The nil singleton.
    Nil = 0xc0,
    /// The boolean `false` singleton.
    False = 0xc2,
    /// The boolean `true` singleton.
    True = 0xc3,
    /// A raw byte block of up to `2^8 - 1` bytes: one length byte follows,
    /// then the bytes verbatim.
    Bin8 = 0xc4,
    /// A raw byte block of up to `2^16 - 1` bytes: a big-endian 16-bit
    /// length follows, then the bytes verbatim.
    Bin16 = 0xc5,
    /// A raw byte block of up to `2^32 - 1` bytes: a big-endian 32-bit
    /// length follows, then the bytes verbatim.
    Bin32 = 0xc6,
    /// A 32-bit IEEE754 float: four big-endian bytes follow.
    F32 = 0xca,
    /// A 64-bit IEEE754 float: eight big-endian bytes follow.
    F64 = 0xcb,
    /// An 8-bit unsigned integer: one payload byte follows.
    U8 = 0xcc,
    /// A 16-bit unsigned integer: two big-endian payload bytes follow.
    U16 = 0xcd,
    /// A 32-bit unsigned integer: four big-endian payload bytes follow.
    U32 = 0xce,
    /// A 64-bit unsigned integer: eight big-endian payload bytes follow.
    U64 = 0xcf,
    /// An 8-bit signed integer: one two's-complement payload byte follows.
    I8 = 0xd0,
    /// A 16-bit signed integer: two big-endian payload bytes follow.
    I16 = 0xd1,
    /// A 32-bit signed integer: four big-endian payload bytes follow.
    I32 = 0xd2,
    /// A 64-bit signed integer: eight big-endian payload bytes follow.
    I64 = 0xd3,
    /// A string of up to `2^8 - 1` bytes: one length byte follows, then
    /// the UTF-8 bytes verbatim.
    Str8 = 0xd9,
    /// A string of up to `2^16 - 1` bytes: a big-endian 16-bit length
    /// follows.
    Str16 = 0xda,
    /// A string of up to `2^32 - 1` bytes: a big-endian 32-bit length
    /// follows.
    Str32 = 0xdb,
    /// An array header with up to `2^16 - 1` elements: a big-endian 16-bit
    /// count follows. The elements themselves are written by the caller.
    Array16 = 0xdc,
    /// An array header with up to `2^32 - 1` elements: a big-endian 32-bit
    /// count follows.
    Array32 = 0xdd,
    /// A map header with up to `2^16 - 1` key/value pairs: a big-endian
    /// 16-bit pair count follows. The `2N` entries are written by the
    /// caller.
    Map16 = 0xde,
    /// A map header with up to `2^32 - 1` key/value pairs: a big-endian
    /// 32-bit pair count follows.
    Map32 = 0xdf,
}

impl From<Marker> for u8 {
    #[inline]
    fn from(marker: Marker) -> u8 {
        marker as u8
    }
}

/// Base tag for a string of up to 31 bytes: the higher three bits are
/// `101`, the lower five bits are the length.
pub const FIXSTR_BASE: u8 = 0xa0;

/// Base tag for an array header of up to 15 elements: the higher four bits
/// are `1001`, the lower four bits are the element count.
pub const FIXARRAY_BASE: u8 = 0x90;

/// Base tag for a map header of up to 15 pairs: the higher four bits are
/// `1000`, the lower four bits are the pair count.
pub const FIXMAP_BASE: u8 = 0x80;

/// A positive fixint carries values `0..=127` in the tag byte itself; the
/// high bit is clear.
pub const POS_FIXINT_MAX: u8 = 0x7f;

/// A negative fixint carries values `-32..=-1` as two's complement in the
/// low five bits; the higher three bits are `111`.
pub const NEG_FIXINT_MIN: i8 = -32;
