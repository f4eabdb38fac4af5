extern crate std;

use std::vec::Vec;

use crate::{
    ByteConsumer, ByteProducer, CircularByteBuffer, CollectSink, DropSink, FnSink, Sink, transfer,
};

#[test]
fn drain_into_collect_sink() {
    let mut fifo = CircularByteBuffer::with_capacity(8).unwrap();
    assert_eq!(fifo.write(b"abc"), 0);

    let mut sink = CollectSink::new();
    assert_eq!(fifo.drain_into(&mut sink), 3);
    assert_eq!(sink.bytes(), b"abc");
    assert!(fifo.is_empty());

    assert_eq!(fifo.drain_into(&mut sink), 0);
    assert_eq!(sink.into_bytes(), b"abc");
}

#[test]
fn drain_into_fn_sink_flushes_once() {
    struct Counting {
        sent: Vec<u8>,
        flushes: usize,
    }

    impl Sink for Counting {
        fn send(&mut self, byte: u8) {
            self.sent.push(byte);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    let mut fifo = CircularByteBuffer::with_capacity(4).unwrap();
    assert_eq!(fifo.write(&[1, 2]), 0);

    let mut counting = Counting {
        sent: Vec::new(),
        flushes: 0,
    };
    fifo.drain_into(&mut counting);
    assert_eq!(counting.sent, [1u8, 2]);
    assert_eq!(counting.flushes, 1);

    let mut total = 0u32;
    assert_eq!(fifo.write(&[5, 6]), 0);
    fifo.drain_into(&mut FnSink(|b: u8| total += u32::from(b)));
    assert_eq!(total, 11);
}

#[test]
fn drain_into_drop_sink_empties() {
    let mut fifo = CircularByteBuffer::with_capacity(4).unwrap();
    assert_eq!(fifo.write(&[1, 2, 3]), 0);
    assert_eq!(fifo.drain_into(&mut DropSink), 3);
    assert!(fifo.is_empty());
}

#[test]
fn transfer_stops_at_destination_room() {
    let mut src = CircularByteBuffer::with_capacity(16).unwrap();
    let mut dst = CircularByteBuffer::with_capacity(5).unwrap();
    assert_eq!(src.write(b"0123456789"), 0);

    let mut scratch = [0u8; 3];
    assert_eq!(transfer(&mut src, &mut dst, &mut scratch), 4);
    assert!(ByteProducer::is_full(&dst));
    assert_eq!(src.len(), 6);

    let mut out = [0u8; 4];
    assert_eq!(dst.read(&mut out), 0);
    assert_eq!(&out, b"0123");
    assert_eq!(src.pop(), Some(b'4'));
}

#[test]
fn transfer_stops_when_source_runs_dry() {
    let mut src = CircularByteBuffer::with_capacity(4).unwrap();
    let mut dst = CircularByteBuffer::with_capacity(16).unwrap();
    assert_eq!(src.write(b"xyz"), 0);

    let mut scratch = [0u8; 2];
    assert_eq!(transfer(&mut src, &mut dst, &mut scratch), 3);
    assert!(ByteConsumer::is_empty(&src));
    assert_eq!(dst.len(), 3);
}

#[test]
fn transfer_with_deinitialized_ends_moves_nothing() {
    let mut src = CircularByteBuffer::with_capacity(4).unwrap();
    let mut dst = CircularByteBuffer::new();
    assert_eq!(src.write(b"ab"), 0);

    let mut scratch = [0u8; 4];
    assert_eq!(transfer(&mut src, &mut dst, &mut scratch), 0);
    assert_eq!(src.len(), 2);
    assert_eq!(transfer(&mut dst, &mut src, &mut scratch), 0);
}

#[test]
fn drain_into_sends_one_slice_per_contiguous_run() {
    #[derive(Default)]
    struct Runs(Vec<Vec<u8>>);

    impl Sink for Runs {
        fn send(&mut self, byte: u8) {
            self.0.push(std::vec![byte]);
        }

        fn send_slice(&mut self, bytes: &[u8]) {
            self.0.push(bytes.to_vec());
        }
    }

    let mut fifo = CircularByteBuffer::with_capacity(4).unwrap();
    assert_eq!(fifo.write(&[1, 2, 3]), 0);
    let mut out = [0u8; 2];
    assert_eq!(fifo.read(&mut out), 0);
    // 3 sits in the last slot, 4 and 5 wrap to the front
    assert_eq!(fifo.write(&[4, 5]), 0);
    assert_eq!(fifo.as_slices(), (&[3u8, 4][..], &[5u8][..]));

    let mut runs = Runs::default();
    assert_eq!(fifo.drain_into(&mut runs), 3);
    assert_eq!(runs.0, [std::vec![3u8, 4], std::vec![5u8]]);
    assert!(fifo.is_empty());
    assert_eq!(fifo.as_slices(), (&[][..], &[][..]));
}

#[test]
fn drain_into_unwrapped_sends_a_single_slice() {
    let mut fifo = CircularByteBuffer::with_capacity(8).unwrap();
    assert_eq!(fifo.write(b"abcd"), 0);
    assert_eq!(fifo.pop(), Some(b'a'));
    assert_eq!(fifo.as_slices(), (&b"bcd"[..], &[][..]));

    let mut calls = 0;
    struct Calls<'a>(&'a mut usize);
    impl Sink for Calls<'_> {
        fn send(&mut self, _byte: u8) {}

        fn send_slice(&mut self, _bytes: &[u8]) {
            *self.0 += 1;
        }
    }

    assert_eq!(fifo.drain_into(&mut Calls(&mut calls)), 3);
    assert_eq!(calls, 1);
}
