//! [`Pack`] implementations for core types.

mod alloc;

use crate::erased::ErasedSink;
use crate::error::Result;
use crate::packer::Packer;
use crate::traits::Pack;

// Macro for the integer family
macro_rules! impl_pack_for_int {
    (uint: $($uty:ty),+; int: $($ity:ty),+) => {
        $(
            impl Pack for $uty {
                #[inline]
                fn pack_into(&self, packer: &mut Packer<'_, ErasedSink<'_>>) -> Result<()> {
                    packer.pack_uint(u64::from(*self))
                }
            }
        )+
        $(
            impl Pack for $ity {
                #[inline]
                fn pack_into(&self, packer: &mut Packer<'_, ErasedSink<'_>>) -> Result<()> {
                    packer.pack_int(i64::from(*self))
                }
            }
        )+
    };
}

impl_pack_for_int!(uint: u8, u16, u32, u64; int: i8, i16, i32, i64);

impl Pack for bool {
    #[inline]
    fn pack_into(&self, packer: &mut Packer<'_, ErasedSink<'_>>) -> Result<()> {
        packer.pack_bool(*self)
    }
}

// Nil
impl Pack for () {
    #[inline]
    fn pack_into(&self, packer: &mut Packer<'_, ErasedSink<'_>>) -> Result<()> {
        packer.pack_nil()
    }
}

impl Pack for f32 {
    #[inline]
    fn pack_into(&self, packer: &mut Packer<'_, ErasedSink<'_>>) -> Result<()> {
        packer.pack_f32(*self)
    }
}

impl Pack for f64 {
    #[inline]
    fn pack_into(&self, packer: &mut Packer<'_, ErasedSink<'_>>) -> Result<()> {
        packer.pack_f64(*self)
    }
}

impl Pack for str {
    #[inline]
    fn pack_into(&self, packer: &mut Packer<'_, ErasedSink<'_>>) -> Result<()> {
        packer.pack_str(self)
    }
}

/// A raw byte block.
///
/// `[u8]` values encode as arrays of integers like any other slice; wrap
/// them in `Bin` to get the length-prefixed raw form instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bin<'a>(pub &'a [u8]);

impl Pack for Bin<'_> {
    #[inline]
    fn pack_into(&self, packer: &mut Packer<'_, ErasedSink<'_>>) -> Result<()> {
        packer.pack_bin(self.0)
    }
}

/// `None` encodes as nil, `Some` as the inner value.
impl<T: Pack> Pack for Option<T> {
    fn pack_into(&self, packer: &mut Packer<'_, ErasedSink<'_>>) -> Result<()> {
        match self {
            Some(value) => value.pack_into(packer),
            None => packer.pack_nil(),
        }
    }
}

/// Array header followed by the elements.
impl<T: Pack> Pack for [T] {
    fn pack_into(&self, packer: &mut Packer<'_, ErasedSink<'_>>) -> Result<()> {
        packer.pack_array(self.len())?;
        for item in self {
            item.pack_into(packer)?;
        }
        Ok(())
    }
}

impl<T: Pack, const N: usize> Pack for [T; N] {
    #[inline]
    fn pack_into(&self, packer: &mut Packer<'_, ErasedSink<'_>>) -> Result<()> {
        self.as_slice().pack_into(packer)
    }
}

impl<T: Pack + ?Sized> Pack for &T {
    #[inline]
    fn pack_into(&self, packer: &mut Packer<'_, ErasedSink<'_>>) -> Result<()> {
        (**self).pack_into(packer)
    }
}
