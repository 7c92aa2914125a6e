//! Type-erased sink handles.

use core::marker::PhantomData;

use crate::error::SinkError;
use crate::sink::ByteSink;

/// A non-owning, type-erased handle to any [`ByteSink`].
///
/// `ErasedSink` captures a raw pointer to a concrete sink plus a single
/// function pointer monomorphized for that sink's `append` at construction
/// time. Every later append is exactly one indirect call: no vtable
/// lookup, no heap allocation, no way back to the concrete type.
///
/// Because it implements [`ByteSink`] itself, a `Packer<ErasedSink>` is a
/// single non-generic encoder type that can drive any sink chosen at the
/// call site. This is what lets heterogeneous value types share one
/// instantiation path per sink type (see [`pack`](crate::pack)) instead of
/// one per value-type/sink-type pair.
///
/// The borrow of the underlying sink is held for the wrapper's whole
/// lifetime, so the sink outliving the wrapper is enforced by the compiler
/// rather than documented.
pub struct ErasedSink<'a> {
    sink: *mut (),
    append: unsafe fn(*mut (), &[u8]) -> Result<(), SinkError>,
    _borrow: PhantomData<&'a mut ()>,
}

impl<'a> ErasedSink<'a> {
    /// Erase a concrete sink behind a function-pointer trampoline.
    pub fn new<S: ByteSink>(sink: &'a mut S) -> Self {
        Self {
            sink: core::ptr::from_mut(sink).cast(),
            append: append_trampoline::<S>,
            _borrow: PhantomData,
        }
    }
}

unsafe fn append_trampoline<S: ByteSink>(
    sink: *mut (),
    bytes: &[u8],
) -> Result<(), SinkError> {
    // SAFETY: `sink` came from the `&'a mut S` given to `ErasedSink::new`,
    // which is still borrowed for the lifetime of the wrapper calling us.
    unsafe { (*sink.cast::<S>()).append(bytes) }
}

impl ByteSink for ErasedSink<'_> {
    #[inline]
    fn append(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        // SAFETY: `self.append` was monomorphized for the exact type behind
        // `self.sink` in `ErasedSink::new`; the pair is never torn apart.
        unsafe { (self.append)(self.sink, bytes) }
    }
}
