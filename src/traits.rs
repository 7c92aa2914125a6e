//! Self-serializing values.

use crate::erased::ErasedSink;
use crate::error::Result;
use crate::packer::Packer;
use crate::sink::ByteSink;

/// A value that knows how to encode itself.
///
/// Implementations receive a [`Packer`] over an [`ErasedSink`], so one
/// `pack_into` body serves every sink type; the sink-specific code is
/// instantiated once per sink in [`pack`], not once per value type.
pub trait Pack {
    /// Write this value's wire bytes through `packer`.
    fn pack_into(&self, packer: &mut Packer<'_, ErasedSink<'_>>) -> Result<()>;
}

/// Encode a self-serializing value into any sink.
///
/// This is the crate's entry point for whole values: it erases the sink
/// once, builds a packer over it, and lets the value drive the encoding.
///
/// # Examples
///
/// ```
/// let mut buf = Vec::new();
/// wirecast::pack(&mut buf, "hi")?;
/// assert_eq!(buf, [0xa2, b'h', b'i']);
/// # Ok::<(), wirecast::EncodeError>(())
/// ```
pub fn pack<S: ByteSink, T: Pack + ?Sized>(sink: &mut S, value: &T) -> Result<()> {
    let mut erased = ErasedSink::new(sink);
    let mut packer = Packer::new(&mut erased);
    value.pack_into(&mut packer)
}
