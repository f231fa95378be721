use gptable::codec::BinaryCodec;
use gptable::distance::{is_adjacent, levenshtein, levenshtein_str};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case("", "", 0)]
#[case("", "abc", 3)]
#[case("abc", "", 3)]
#[case("kitten", "sitting", 3)]
#[case("flaw", "lawn", 2)]
#[case("00", "01", 1)]
#[case("01", "10", 2)]
#[case("0101", "101", 1)]
fn test_known_distances(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
    assert_eq!(levenshtein_str(a, b), expected);
}

#[test]
fn test_generic_symbols() {
    assert_eq!(levenshtein(&[1, 2, 3], &[1, 3]), 1);
    assert!(is_adjacent(&[true, false], &[true, true]));
    assert!(!is_adjacent(&[true, false], &[true, false]));
}

fn binary_string(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just('0'), Just('1')], 0..max_len)
        .prop_map(|v| v.into_iter().collect())
}

proptest! {
    #[test]
    fn test_symmetric_and_identity(a in binary_string(10), b in binary_string(10)) {
        prop_assert_eq!(levenshtein_str(&a, &b), levenshtein_str(&b, &a));
        prop_assert_eq!(levenshtein_str(&a, &a), 0);
    }

    #[test]
    fn test_triangle_inequality(
        a in binary_string(8),
        b in binary_string(8),
        c in binary_string(8)
    ) {
        let ab = levenshtein_str(&a, &b);
        let bc = levenshtein_str(&b, &c);
        let ac = levenshtein_str(&a, &c);
        prop_assert!(ac <= ab + bc);
    }

    #[test]
    fn test_unit_distance_is_single_bit_flip(bits in 1u32..=8, x in any::<u32>(), y in any::<u32>()) {
        let codec = BinaryCodec::new(bits);
        let mask = (1u32 << bits) - 1;
        let (x, y) = (x & mask, y & mask);

        let a = codec.encode(x).unwrap();
        let b = codec.encode(y).unwrap();
        let one_bit = (x ^ y).count_ones() == 1;

        prop_assert_eq!(levenshtein_str(&a, &b) == 1, one_bit);
    }
}
