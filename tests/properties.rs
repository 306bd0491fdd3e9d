use packed_bitarray::{BitArrayError, PackedBitArray, Word};
use proptest::prelude::*;

// -----------------------------------------------------------------------------
// Helper Functions
// -----------------------------------------------------------------------------

/// Random bit pattern; its length becomes the capacity.
fn pattern() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..300)
}

fn build<W: Word>(bits: &[bool]) -> PackedBitArray<W> {
    bits.iter().copied().collect()
}

// -----------------------------------------------------------------------------
// Construction and Rendering
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_new_is_all_zero(capacity in 0usize..2000) {
        let bits = PackedBitArray::<u32>::new(capacity);

        prop_assert_eq!(bits.as_words().len(), capacity.div_ceil(32));
        prop_assert!(bits.iter().all(|b| !b));
        prop_assert_eq!(bits.render(), "0".repeat(capacity));
    }
}

proptest! {
    #[test]
    fn prop_render_matches_pattern(values in pattern()) {
        let bits = build::<u32>(&values);
        let expected: String = values.iter().map(|b| if *b { '1' } else { '0' }).collect();

        prop_assert_eq!(bits.render().len(), values.len());
        prop_assert_eq!(&bits.render(), &expected);

        let parsed: PackedBitArray<u32> = expected.parse().unwrap();
        prop_assert_eq!(parsed, bits);
    }
}

// -----------------------------------------------------------------------------
// Per-bit Operations
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_set_get_leaves_others(
        values in pattern(),
        index in 0usize..300,
        value: bool
    ) {
        if !values.is_empty() {
            let idx = index % values.len();
            let mut bits = build::<u32>(&values);
            bits.set(idx, value).unwrap();

            prop_assert_eq!(bits.get(idx), Ok(value));
            for (i, &expected) in values.iter().enumerate() {
                if i != idx {
                    prop_assert_eq!(bits.get(i), Ok(expected));
                }
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_flip_twice_restores(values in pattern(), index in 0usize..300) {
        if !values.is_empty() {
            let idx = index % values.len();
            let original = build::<u16>(&values);
            let mut bits = original.clone();

            bits.flip(idx).unwrap();
            prop_assert_eq!(bits.get(idx), Ok(!values[idx]));
            bits.flip(idx).unwrap();
            prop_assert_eq!(bits, original);
        }
    }
}

proptest! {
    #[test]
    fn prop_out_of_range_rejected(values in pattern(), offset in 0usize..1000) {
        let mut bits = build::<u32>(&values);
        let before = bits.clone();
        let position = values.len() + offset;
        let expected: Result<bool, BitArrayError> = Err(BitArrayError::OutOfRange { position, capacity: values.len() });

        prop_assert_eq!(bits.get(position), expected);
        prop_assert_eq!(bits.set(position, true), expected.map(|_| ()));
        prop_assert_eq!(bits.reset(position), expected.map(|_| ()));
        prop_assert_eq!(bits.flip(position), expected.map(|_| ()));
        prop_assert_eq!(bits, before);
    }
}

// -----------------------------------------------------------------------------
// Whole-array Operations
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_flip_all_is_complement(values in pattern()) {
        let mut bits = build::<u32>(&values);
        bits.flip_all();

        for (i, &was) in values.iter().enumerate() {
            prop_assert_eq!(bits.get(i), Ok(!was));
        }

        let complement: Vec<bool> = values.iter().map(|b| !b).collect();
        prop_assert_eq!(bits, build::<u32>(&complement));
    }
}

proptest! {
    #[test]
    fn prop_set_all_then_reset_all(values in pattern()) {
        let mut bits = build::<u64>(&values);

        bits.set_all(true);
        prop_assert!(bits.iter().all(|b| b));
        prop_assert_eq!(bits.render(), "1".repeat(values.len()));

        bits.reset_all();
        prop_assert_eq!(bits, PackedBitArray::<u64>::new(values.len()));
    }
}

proptest! {
    #[test]
    fn prop_word_widths_agree(values in pattern(), flips in prop::collection::vec(0usize..300, 0..20)) {
        let mut a = build::<u8>(&values);
        let mut b = build::<u32>(&values);
        let mut c = build::<u64>(&values);

        for position in flips {
            let ra = a.flip(position);
            let rb = b.flip(position);
            let rc = c.flip(position);
            prop_assert_eq!(ra, rb);
            prop_assert_eq!(rb, rc);
        }
        a.flip_all();
        b.flip_all();
        c.flip_all();

        prop_assert_eq!(a.render(), b.render());
        prop_assert_eq!(b.render(), c.render());
    }
}

#[cfg(feature = "std")]
#[test]
fn error_converts_to_boxed_std_error() {
    let bits = PackedBitArray::<u32>::new(4);
    let err: Box<dyn std::error::Error> = bits.get(4).unwrap_err().into();
    assert_eq!(err.to_string(), "Bit position 4 out of range for capacity 4");
}
