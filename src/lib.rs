//! A compact, self-describing binary value encoder writing through
//! composable byte sinks.
//!
//! `wirecast` is the producing half of a MessagePack-family serialization
//! protocol: it maps primitive and compound values (integers, floats,
//! booleans, nil, array/map headers, string and raw byte blocks) to their
//! smallest wire representation and appends the bytes to any caller-owned
//! [`ByteSink`]. Decoding and the value/tree object model live elsewhere.
//!
//! # Encoding into a sink
//!
//! With a concrete sink type, every call is a direct, inlinable forward:
//!
//! ```
//! use wirecast::Packer;
//!
//! let mut buf = Vec::new();
//! let mut packer = Packer::new(&mut buf);
//! packer.pack_map(1)?;
//! packer.pack_str("answer")?;
//! packer.pack_uint(42)?;
//! assert_eq!(buf[0], 0x81);
//! # Ok::<(), wirecast::EncodeError>(())
//! ```
//!
//! # Type-erased encoding
//!
//! [`ErasedSink`] captures any sink behind one function pointer, without
//! owning it and without heap allocation, so one non-generic encoder type
//! can drive sinks chosen at the call site. The [`pack`] facade uses this
//! to let self-serializing values ([`Pack`]) share a single instantiation
//! path per sink type:
//!
//! ```
//! let mut buf = Vec::new();
//! wirecast::pack(&mut buf, &[1u8, 2, 3])?;
//! assert_eq!(buf, [0x93, 0x01, 0x02, 0x03]);
//! # Ok::<(), wirecast::EncodeError>(())
//! ```
//!
//! # Caller responsibilities
//!
//! Compound values are encoded header-first: the caller writes the header,
//! then traverses its own structure writing each element. No depth limit
//! is imposed on nested arrays and maps, so recursion depth is bounded
//! only by the host call stack. Sinks are never shared internally; driving
//! one sink from two encoders at once is a caller error.

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod erased;
mod error;
mod impls;
mod packer;
mod sink;
mod traits;

pub mod marker;

#[cfg(test)]
mod tests;

pub use erased::ErasedSink;
pub use error::{EncodeError, Result, SinkError};
pub use impls::Bin;
pub use packer::Packer;
pub use sink::{ByteSink, CountSink, SliceSink};
pub use traits::{Pack, pack};

#[cfg(feature = "std")]
pub use sink::IoSink;
