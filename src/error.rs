//! Error types for encoding and sink operations.

use core::fmt;

/// Error returned when a [`ByteSink`](crate::ByteSink) refuses appended bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkError {
    /// A fixed-capacity sink ran out of space.
    Full {
        /// Bytes the append needed.
        needed: usize,
        /// Bytes the sink had left.
        available: usize,
    },
    /// The underlying writer failed.
    Write {
        /// Short description of the failure.
        message: &'static str,
    },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full { needed, available } => {
                write!(
                    f,
                    "sink full: needed {needed} bytes, only {available} available"
                )
            }
            Self::Write { message } => write!(f, "sink write failed: {message}"),
        }
    }
}

impl core::error::Error for SinkError {}

/// Errors produced while encoding a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// A count or byte length exceeds the largest representable header.
    ///
    /// Array and map counts and raw block lengths are capped at
    /// [`u32::MAX`] by the 32-bit header forms. Nothing is written to the
    /// sink when this is returned.
    RangeExceeded {
        /// The offending count or length.
        len: usize,
        /// The largest value the widest header form can carry.
        max: usize,
    },
    /// The sink refused the bytes. Propagated verbatim, never retried.
    Sink(SinkError),
}

impl From<SinkError> for EncodeError {
    fn from(e: SinkError) -> Self {
        EncodeError::Sink(e)
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RangeExceeded { len, max } => {
                write!(f, "length {len} exceeds largest header form ({max})")
            }
            Self::Sink(e) => write!(f, "sink error: {e}"),
        }
    }
}

impl core::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Sink(e) => Some(e),
            Self::RangeExceeded { .. } => None,
        }
    }
}

/// The result type for encoding operations.
pub type Result<T> = core::result::Result<T, EncodeError>;
