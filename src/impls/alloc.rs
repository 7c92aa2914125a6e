use alloc::{collections::BTreeMap, string::String, vec::Vec};

use crate::erased::ErasedSink;
use crate::error::Result;
use crate::packer::Packer;
use crate::traits::Pack;

impl<T: Pack> Pack for Vec<T> {
    #[inline]
    fn pack_into(&self, packer: &mut Packer<'_, ErasedSink<'_>>) -> Result<()> {
        self.as_slice().pack_into(packer)
    }
}

impl Pack for String {
    #[inline]
    fn pack_into(&self, packer: &mut Packer<'_, ErasedSink<'_>>) -> Result<()> {
        packer.pack_str(self)
    }
}

/// Map header followed by alternating keys and values.
impl<K: Pack, V: Pack> Pack for BTreeMap<K, V> {
    fn pack_into(&self, packer: &mut Packer<'_, ErasedSink<'_>>) -> Result<()> {
        packer.pack_map(self.len())?;
        for (key, value) in self {
            key.pack_into(packer)?;
            value.pack_into(packer)?;
        }
        Ok(())
    }
}
