//! Property tests for the bounded-rewind contract `ByteSource` promises.

use proptest::prelude::*;

use pytok_util::{ByteSource, SliceSource, MARK_CAPACITY};

proptest! {
    /// Reading the whole slice through `read()` reproduces it byte for
    /// byte, regardless of content.
    #[test]
    fn read_reproduces_the_slice(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut source = SliceSource::new(&data);
        let mut out = Vec::new();
        while let Some(b) = source.read().unwrap() {
            out.push(b);
        }
        prop_assert_eq!(out, data);
    }

    /// `mark` then `reset` after reading up to `MARK_CAPACITY` bytes always
    /// restores the exact byte that would have been read at the mark.
    #[test]
    fn reset_within_capacity_restores_position(
        data in proptest::collection::vec(any::<u8>(), MARK_CAPACITY + 1..64),
        advance in 0..=MARK_CAPACITY,
    ) {
        let mut source = SliceSource::new(&data);
        source.mark();
        let expected_next = data.first().copied();
        for _ in 0..advance {
            source.read().unwrap();
        }
        source.reset().unwrap();
        prop_assert_eq!(source.read().unwrap(), expected_next);
    }

    /// Reading more than `MARK_CAPACITY` bytes past a mark makes `reset`
    /// fail rather than silently rewinding to the wrong place.
    #[test]
    fn reset_past_capacity_is_rejected(
        data in proptest::collection::vec(any::<u8>(), MARK_CAPACITY + 2..64),
    ) {
        let mut source = SliceSource::new(&data);
        source.mark();
        for _ in 0..(MARK_CAPACITY + 1) {
            source.read().unwrap();
        }
        prop_assert!(source.reset().is_err());
    }
}
