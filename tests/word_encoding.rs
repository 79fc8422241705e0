use proptest::prelude::*;
use quickcheck::quickcheck;
use selgrind::{decode_word, decode_word_slice, encode_word, GrindError, WORD_SIZE};

proptest! {
    #[test]
    fn decode_inverts_encode(n in any::<u64>()) {
        prop_assert_eq!(decode_word(&encode_word(n)).unwrap(), n);
    }

    #[test]
    fn leading_bytes_are_zero(n in any::<u64>()) {
        let w = encode_word(n);
        prop_assert_eq!(w.len(), WORD_SIZE);
        prop_assert!(w[..24].iter().all(|&b| b == 0));
        prop_assert_eq!(&w[24..], &n.to_be_bytes()[..]);
    }

    #[test]
    fn dirty_high_bytes_rejected(n in any::<u64>(), pos in 0usize..24, byte in 1u8..=255) {
        let mut w = encode_word(n);
        w[pos] = byte;
        prop_assert!(matches!(decode_word(&w), Err(GrindError::WordOverflow)));
    }
}

quickcheck! {
    fn slice_decode_checks_length(bytes: Vec<u8>) -> bool {
        match decode_word_slice(&bytes) {
            Err(GrindError::WordLength(n)) => n == bytes.len() && n != WORD_SIZE,
            Ok(v) => bytes.len() == WORD_SIZE && encode_word(v)[..] == bytes[..],
            Err(GrindError::WordOverflow) => bytes.len() == WORD_SIZE,
            Err(_) => false,
        }
    }
}

#[test]
fn encoding_is_ordered_like_integers() {
    // big-endian words compare lexicographically in numeric order
    let values = [0u64, 1, 255, 256, 65_535, 1 << 32, u64::MAX];
    for pair in values.windows(2) {
        assert!(encode_word(pair[0]) < encode_word(pair[1]));
    }
}
