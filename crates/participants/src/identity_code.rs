//! National personal-identity code checksum.
//!
//! An identity code is 11 digits; the 11th is a check digit computed from the
//! first 10 with a weighted sum modulo 11, with a fallback weight vector when
//! the first pass yields 10.

const WEIGHTS_FIRST: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const WEIGHTS_SECOND: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

/// Validate an identity code's length, digits and checksum.
///
/// Pure and total over strings: no input panics, anything that is not exactly
/// 11 ASCII digits is simply invalid. Note this checks only the checksum; the
/// first-digit range (1-6) is a registration-input rule, enforced where the
/// participant is built.
pub fn is_valid(code: &str) -> bool {
    if code.len() != 11 {
        return false;
    }
    let digits: Vec<u32> = match code.chars().map(|c| c.to_digit(10)).collect() {
        Some(d) => d,
        None => return false,
    };

    let mut remainder = weighted_remainder(&digits, &WEIGHTS_FIRST);
    if remainder == 10 {
        remainder = weighted_remainder(&digits, &WEIGHTS_SECOND);
        if remainder == 10 {
            remainder = 0;
        }
    }

    remainder == digits[10]
}

fn weighted_remainder(digits: &[u32], weights: &[u32; 10]) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip(weights.iter())
        .map(|(d, w)| d * w)
        .sum();
    sum % 11
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_valid_code_passes() {
        assert!(is_valid("49001010230"));
    }

    #[test]
    fn mutated_check_digit_fails() {
        // Same ten leading digits as the known-valid code, wrong check digit.
        assert!(!is_valid("49001010231"));
        assert!(!is_valid("49001010239"));
    }

    #[test]
    fn all_zero_code_has_zero_checksum() {
        // Weighted sum of zeros is zero, so the zero check digit matches.
        assert!(is_valid("00000000000"));
    }

    #[test]
    fn leading_zero_codes_are_handled() {
        assert!(!is_valid("04901010230"));
    }

    #[test]
    fn first_pass_remainder_ten_falls_back_to_second_weights() {
        // 2,1,8,4,0,1,1,0,7,0 against [1..9,1] sums to 120, 120 % 11 == 10,
        // so the second weight vector decides: sum 105, 105 % 11 == 6.
        assert!(is_valid("21840110706"));
        assert!(!is_valid("21840110700"));
    }

    #[test]
    fn double_fallback_maps_check_digit_to_zero() {
        // Both weighted passes leave remainder 10; the check digit must be 0.
        assert!(is_valid("68408157410"));
        assert!(!is_valid("68408157411"));
    }

    #[test]
    fn wrong_length_is_invalid() {
        assert!(!is_valid(""));
        assert!(!is_valid("4900101023"));
        assert!(!is_valid("490010102300"));
    }

    #[test]
    fn non_digit_characters_are_invalid() {
        assert!(!is_valid("4900101023a"));
        assert!(!is_valid("49001-10230"));
        assert!(!is_valid("４９００１０１０２３０")); // fullwidth digits are not ASCII digits
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: anything that is not exactly 11 digits is invalid.
            #[test]
            fn non_eleven_digit_strings_are_invalid(s in "\\PC*") {
                let is_eleven_digits = s.len() == 11 && s.chars().all(|c| c.is_ascii_digit());
                if !is_eleven_digits {
                    prop_assert!(!is_valid(&s));
                }
            }

            /// Property: validation is deterministic.
            #[test]
            fn is_valid_is_deterministic(s in "[0-9]{11}") {
                prop_assert_eq!(is_valid(&s), is_valid(&s));
            }

            /// Property: for any 10-digit prefix exactly one check digit validates.
            #[test]
            fn exactly_one_check_digit_validates(prefix in "[0-9]{10}") {
                let valid_count = (0..=9)
                    .filter(|d| is_valid(&format!("{prefix}{d}")))
                    .count();
                prop_assert_eq!(valid_count, 1);
            }
        }
    }
}
