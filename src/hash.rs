//! Polynomial rolling hash used to place keys into buckets

use std::num::NonZeroUsize;

/// Multiplier of the rolling hash
const MULTIPLIER: u128 = 31;

/// Hashes `key` into `[0, modulus)`.
///
/// Walks the UTF-16 code units of the key, computing `h = (31 * h + unit) % modulus`
/// at every step so the intermediate value stays below `modulus`. The empty key
/// hashes to 0.
#[must_use]
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
pub fn polynomial_hash(key: &str, modulus: NonZeroUsize) -> usize {
    let modulus = modulus.get() as u128;
    // h < modulus <= usize::MAX, so 31 * h + 0xFFFF fits comfortably in u128
    let hash = key
        .encode_utf16()
        .fold(0_u128, |hash, unit| (MULTIPLIER * hash + u128::from(unit)) % modulus);
    hash as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn modulus(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap_or(NonZeroUsize::MIN)
    }

    #[test]
    fn test_known_values() {
        assert_eq!(polynomial_hash("first", modulus(3)), 0);
        assert_eq!(polynomial_hash("second", modulus(3)), 0);
        assert_eq!(polynomial_hash("Sita", modulus(3)), 2);
        assert_eq!(polynomial_hash("Rama", modulus(3)), 1);
        assert_eq!(polynomial_hash("Sita", modulus(6)), 5);
        assert_eq!(polynomial_hash("Ramaa", modulus(6)), 2);
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(polynomial_hash("", modulus(17)), 0);
    }

    #[test]
    fn test_modulus_one() {
        assert_eq!(polynomial_hash("anything", modulus(1)), 0);
    }

    #[test]
    fn test_single_char_is_code_unit() {
        assert_eq!(polynomial_hash("a", modulus(1000)), 97);
    }

    #[test]
    fn test_huge_modulus_does_not_overflow() {
        let key = "z".repeat(64);
        assert!(polynomial_hash(&key, NonZeroUsize::MAX) < usize::MAX);
    }

    #[test]
    fn test_non_ascii_uses_utf16_units() {
        // U+1F600 is the surrogate pair D83D DE00
        let expected = (31 * 0xD83D + 0xDE00) % 100_000;
        assert_eq!(polynomial_hash("\u{1F600}", modulus(100_000)), expected);
    }

    proptest! {
        #[test]
        fn hash_is_in_range(key in ".*", m in 1_usize..10_000) {
            prop_assert!(polynomial_hash(&key, modulus(m)) < m);
        }

        #[test]
        fn hash_is_deterministic(key in ".*", m in 1_usize..10_000) {
            prop_assert_eq!(polynomial_hash(&key, modulus(m)), polynomial_hash(&key, modulus(m)));
        }
    }
}
