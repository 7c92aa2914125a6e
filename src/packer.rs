//! The wire encoder.

use zerocopy::IntoBytes;
use zerocopy::byteorder::big_endian::{F32, F64, I16, I32, I64, U16, U32, U64};

use crate::error::{EncodeError, Result};
use crate::marker::{
    FIXARRAY_BASE, FIXMAP_BASE, FIXSTR_BASE, Marker, NEG_FIXINT_MIN, POS_FIXINT_MAX,
};
use crate::sink::ByteSink;

/// Largest count or byte length any header form can carry.
const MAX_HEADER_LEN: usize = u32::MAX as usize;

/// Encodes values into a [`ByteSink`].
///
/// `Packer` is a thin stateless layer over the sink reference: every method
/// maps one value to its exact wire bytes and appends them. With a concrete
/// sink type the whole chain is inlinable and free of indirection; with an
/// [`ErasedSink`](crate::ErasedSink) the same methods drive any sink behind
/// one indirect call.
///
/// The packer never owns the sink and holds no other state, so it can be
/// created and dropped freely around the same buffer.
///
/// # Compound values
///
/// Arrays and maps are encoded as a header followed by their elements, and
/// the traversal is the caller's: one [`pack_array`](Packer::pack_array)
/// call, then one encode call per element. Nesting depth is not limited
/// here; deeply recursive caller traversals are bounded only by the host
/// call stack.
///
/// # Examples
///
/// ```
/// use wirecast::Packer;
///
/// let mut buf = Vec::new();
/// let mut packer = Packer::new(&mut buf);
/// packer.pack_array(2)?;
/// packer.pack_uint(1)?;
/// packer.pack_str("two")?;
/// assert_eq!(buf, [0x92, 0x01, 0xa3, b't', b'w', b'o']);
/// # Ok::<(), wirecast::EncodeError>(())
/// ```
#[derive(Debug)]
pub struct Packer<'a, S: ByteSink> {
    sink: &'a mut S,
}

impl<'a, S: ByteSink> Packer<'a, S> {
    /// Create a packer writing into `sink`.
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink }
    }

    #[inline]
    fn push(&mut self, byte: u8) -> Result<()> {
        self.sink.append(&[byte])?;
        Ok(())
    }

    /// Append a marker byte and its fixed-width payload as one write.
    #[inline]
    fn marker_then(&mut self, marker: Marker, payload: &[u8]) -> Result<()> {
        let mut buf = [0u8; 9];
        buf[0] = marker.into();
        buf[1..=payload.len()].copy_from_slice(payload);
        self.sink.append(&buf[..=payload.len()])?;
        Ok(())
    }

    /// Encode nil.
    #[inline]
    pub fn pack_nil(&mut self) -> Result<()> {
        self.push(Marker::Nil.into())
    }

    /// Encode a boolean.
    #[inline]
    pub fn pack_bool(&mut self, value: bool) -> Result<()> {
        self.push(if value { Marker::True } else { Marker::False }.into())
    }

    /// Encode an unsigned integer in its smallest wire form.
    ///
    /// Values up to 127 fit the tag byte itself; wider values take the
    /// narrowest of the 8/16/32/64-bit forms.
    pub fn pack_uint(&mut self, value: u64) -> Result<()> {
        if value <= u64::from(POS_FIXINT_MAX) {
            self.push(value as u8)
        } else if value <= u64::from(u8::MAX) {
            self.marker_then(Marker::U8, &[value as u8])
        } else if value <= u64::from(u16::MAX) {
            self.marker_then(Marker::U16, U16::new(value as u16).as_bytes())
        } else if value <= u64::from(u32::MAX) {
            self.marker_then(Marker::U32, U32::new(value as u32).as_bytes())
        } else {
            self.marker_then(Marker::U64, U64::new(value).as_bytes())
        }
    }

    /// Encode a signed integer in its smallest wire form.
    ///
    /// Non-negative values use the unsigned forms; `-32..=-1` fit the tag
    /// byte itself; more negative values take the narrowest signed form.
    pub fn pack_int(&mut self, value: i64) -> Result<()> {
        if value >= 0 {
            self.pack_uint(value as u64)
        } else if value >= i64::from(NEG_FIXINT_MIN) {
            self.push(value as u8)
        } else if value >= i64::from(i8::MIN) {
            self.marker_then(Marker::I8, &[value as u8])
        } else if value >= i64::from(i16::MIN) {
            self.marker_then(Marker::I16, I16::new(value as i16).as_bytes())
        } else if value >= i64::from(i32::MIN) {
            self.marker_then(Marker::I32, I32::new(value as i32).as_bytes())
        } else {
            self.marker_then(Marker::I64, I64::new(value).as_bytes())
        }
    }

    /// Encode a `u8`.
    #[inline]
    pub fn pack_u8(&mut self, value: u8) -> Result<()> {
        self.pack_uint(u64::from(value))
    }

    /// Encode a `u16`.
    #[inline]
    pub fn pack_u16(&mut self, value: u16) -> Result<()> {
        self.pack_uint(u64::from(value))
    }

    /// Encode a `u32`.
    #[inline]
    pub fn pack_u32(&mut self, value: u32) -> Result<()> {
        self.pack_uint(u64::from(value))
    }

    /// Encode a `u64`.
    #[inline]
    pub fn pack_u64(&mut self, value: u64) -> Result<()> {
        self.pack_uint(value)
    }

    /// Encode an `i8`.
    #[inline]
    pub fn pack_i8(&mut self, value: i8) -> Result<()> {
        self.pack_int(i64::from(value))
    }

    /// Encode an `i16`.
    #[inline]
    pub fn pack_i16(&mut self, value: i16) -> Result<()> {
        self.pack_int(i64::from(value))
    }

    /// Encode an `i32`.
    #[inline]
    pub fn pack_i32(&mut self, value: i32) -> Result<()> {
        self.pack_int(i64::from(value))
    }

    /// Encode an `i64`.
    #[inline]
    pub fn pack_i64(&mut self, value: i64) -> Result<()> {
        self.pack_int(value)
    }

    /// Encode a 32-bit float.
    #[inline]
    pub fn pack_f32(&mut self, value: f32) -> Result<()> {
        self.marker_then(Marker::F32, F32::new(value).as_bytes())
    }

    /// Encode a 64-bit float.
    #[inline]
    pub fn pack_f64(&mut self, value: f64) -> Result<()> {
        self.marker_then(Marker::F64, F64::new(value).as_bytes())
    }

    /// Encode an array header for `len` elements.
    ///
    /// The caller must follow with exactly `len` encoded values. Fails with
    /// [`EncodeError::RangeExceeded`], writing nothing, if `len` does not
    /// fit the widest header form.
    pub fn pack_array(&mut self, len: usize) -> Result<()> {
        if len < 16 {
            self.push(FIXARRAY_BASE | len as u8)
        } else if len <= usize::from(u16::MAX) {
            self.marker_then(Marker::Array16, U16::new(len as u16).as_bytes())
        } else if len <= MAX_HEADER_LEN {
            self.marker_then(Marker::Array32, U32::new(len as u32).as_bytes())
        } else {
            Err(EncodeError::RangeExceeded {
                len,
                max: MAX_HEADER_LEN,
            })
        }
    }

    /// Encode a map header for `len` key/value pairs.
    ///
    /// The caller must follow with exactly `2 * len` encoded values,
    /// alternating keys and values. Fails with
    /// [`EncodeError::RangeExceeded`], writing nothing, if `len` does not
    /// fit the widest header form.
    pub fn pack_map(&mut self, len: usize) -> Result<()> {
        if len < 16 {
            self.push(FIXMAP_BASE | len as u8)
        } else if len <= usize::from(u16::MAX) {
            self.marker_then(Marker::Map16, U16::new(len as u16).as_bytes())
        } else if len <= MAX_HEADER_LEN {
            self.marker_then(Marker::Map32, U32::new(len as u32).as_bytes())
        } else {
            Err(EncodeError::RangeExceeded {
                len,
                max: MAX_HEADER_LEN,
            })
        }
    }

    /// Encode a string: length-prefixed UTF-8 bytes, no terminator.
    pub fn pack_str(&mut self, value: &str) -> Result<()> {
        let len = value.len();
        if len < 32 {
            self.push(FIXSTR_BASE | len as u8)?;
        } else if len <= usize::from(u8::MAX) {
            self.marker_then(Marker::Str8, &[len as u8])?;
        } else if len <= usize::from(u16::MAX) {
            self.marker_then(Marker::Str16, U16::new(len as u16).as_bytes())?;
        } else if len <= MAX_HEADER_LEN {
            self.marker_then(Marker::Str32, U32::new(len as u32).as_bytes())?;
        } else {
            return Err(EncodeError::RangeExceeded {
                len,
                max: MAX_HEADER_LEN,
            });
        }
        self.sink.append(value.as_bytes())?;
        Ok(())
    }

    /// Encode a raw byte block: length-prefixed bytes, verbatim.
    pub fn pack_bin(&mut self, value: &[u8]) -> Result<()> {
        let len = value.len();
        if len <= usize::from(u8::MAX) {
            self.marker_then(Marker::Bin8, &[len as u8])?;
        } else if len <= usize::from(u16::MAX) {
            self.marker_then(Marker::Bin16, U16::new(len as u16).as_bytes())?;
        } else if len <= MAX_HEADER_LEN {
            self.marker_then(Marker::Bin32, U32::new(len as u32).as_bytes())?;
        } else {
            return Err(EncodeError::RangeExceeded {
                len,
                max: MAX_HEADER_LEN,
            });
        }
        self.sink.append(value)?;
        Ok(())
    }
}
