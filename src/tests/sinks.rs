extern crate std;

use std::vec::Vec;

use crate::{ByteSink, CountSink, SinkError, SliceSink};

/// Append through the trait, as the encoder does. `Vec` has an inherent
/// `append` that shadows the trait method on direct calls.
fn append_all<S: ByteSink>(sink: &mut S, chunks: &[&[u8]]) {
    for chunk in chunks {
        sink.append(chunk).unwrap();
    }
}

#[test]
fn vec_sink_grows() {
    let mut buf: Vec<u8> = Vec::new();
    append_all(&mut buf, &[&[1, 2], &[3]]);
    assert_eq!(buf, [1, 2, 3]);
}

#[test]
fn slice_sink_fills_exactly() {
    let mut backing = [0u8; 4];
    let mut sink = SliceSink::new(&mut backing);
    sink.append(&[0xaa, 0xbb]).unwrap();
    assert_eq!(sink.position(), 2);
    assert_eq!(sink.remaining(), 2);
    sink.append(&[0xcc, 0xdd]).unwrap();
    assert_eq!(sink.written(), [0xaa, 0xbb, 0xcc, 0xdd]);
    assert_eq!(sink.remaining(), 0);
}

#[test]
fn slice_sink_rejects_overflow_without_partial_write() {
    let mut backing = [0u8; 3];
    let mut sink = SliceSink::new(&mut backing);
    sink.append(&[1, 2]).unwrap();

    let err = sink.append(&[3, 4]).unwrap_err();
    assert_eq!(
        err,
        SinkError::Full {
            needed: 2,
            available: 1
        }
    );
    // The failed append left nothing behind.
    assert_eq!(sink.written(), [1, 2]);

    // Smaller appends still fit afterwards.
    sink.append(&[5]).unwrap();
    assert_eq!(sink.written(), [1, 2, 5]);
}

#[test]
fn count_sink_tallies_without_storing() {
    let mut sink = CountSink::new();
    sink.append(&[0; 10]).unwrap();
    sink.append(&[0; 7]).unwrap();
    assert_eq!(sink.count(), 17);
}

#[test]
fn mut_reference_forwards() {
    let mut buf: Vec<u8> = Vec::new();
    append_all(&mut &mut buf, &[&[9]]);
    assert_eq!(buf, [9]);
}

#[cfg(feature = "std")]
mod io {
    use std::vec::Vec;

    use crate::{ByteSink, IoSink, SinkError};

    #[test]
    fn io_sink_writes_through() {
        let mut sink = IoSink::new(Vec::new());
        sink.append(&[1, 2, 3]).unwrap();
        assert_eq!(sink.into_writer(), [1, 2, 3]);
    }

    struct BrokenWriter;

    impl std::io::Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn io_sink_surfaces_and_retains_errors() {
        let mut sink = IoSink::new(BrokenWriter);
        let err = sink.append(&[1]).unwrap_err();
        assert!(matches!(err, SinkError::Write { .. }));

        // Peeking does not clear the stored error.
        assert_eq!(
            sink.last_error().unwrap().kind(),
            std::io::ErrorKind::BrokenPipe
        );
        assert_eq!(
            sink.last_error().unwrap().kind(),
            std::io::ErrorKind::BrokenPipe
        );

        let io_err = sink.take_error().unwrap();
        assert_eq!(io_err.kind(), std::io::ErrorKind::BrokenPipe);
        assert!(sink.last_error().is_none());
        assert!(sink.take_error().is_none());
    }
}
