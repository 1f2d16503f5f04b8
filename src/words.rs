//! Indian numbering system words conversion
//!
//! Renders amounts as spoken phrases using crore/lakh/thousand grouping,
//! e.g. 1234567 -> "Twelve Lakh Thirty Four Thousand Five Hundred and
//! Sixty Seven". Used to display a projected corpus alongside the numeric
//! figure; locale digit-grouping stays with the presentation layer.

use crate::error::InputError;

const ONES: [&str; 20] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Render 1..=99 as words, space-separated ("Forty Seven", no hyphen)
fn two_digit_words(n: u64) -> String {
    debug_assert!(n >= 1 && n <= 99);
    if n < 20 {
        ONES[n as usize].to_string()
    } else if n % 10 == 0 {
        TENS[(n / 10) as usize].to_string()
    } else {
        format!("{} {}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])
    }
}

/// Convert a non-negative integer amount to Indian-numbering words.
///
/// Decomposition: crore (10^7), lakh (10^5), thousand (10^3), hundred
/// (10^2), and a 0-99 remainder. Zero-valued groups are omitted entirely.
/// The crore count is rendered recursively, so amounts of 100 crore and
/// above still read correctly. "and" is inserted before the final phrase
/// when it belongs to the hundred or remainder group and a higher group
/// precedes it.
pub fn to_indian_words(amount: u64) -> String {
    if amount == 0 {
        return "Zero".to_string();
    }

    let crore = amount / 10_000_000;
    let lakh = (amount % 10_000_000) / 100_000;
    let thousand = (amount % 100_000) / 1_000;
    let hundred = (amount % 1_000) / 100;
    let remainder = amount % 100;

    // (phrase, belongs to the sub-thousand tail)
    let mut phrases: Vec<(String, bool)> = Vec::new();
    if crore > 0 {
        phrases.push((format!("{} Crore", to_indian_words(crore)), false));
    }
    if lakh > 0 {
        phrases.push((format!("{} Lakh", two_digit_words(lakh)), false));
    }
    if thousand > 0 {
        phrases.push((format!("{} Thousand", two_digit_words(thousand)), false));
    }
    if hundred > 0 {
        phrases.push((format!("{} Hundred", ONES[hundred as usize]), true));
    }
    if remainder > 0 {
        phrases.push((two_digit_words(remainder), true));
    }

    let last_is_tail = phrases.last().map(|(_, tail)| *tail).unwrap_or(false);
    if phrases.len() >= 2 && last_is_tail {
        let (last, _) = phrases.pop().unwrap();
        let head: Vec<&str> = phrases.iter().map(|(p, _)| p.as_str()).collect();
        format!("{} and {}", head.join(" "), last)
    } else {
        phrases
            .into_iter()
            .map(|(p, _)| p)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Convert a fractional amount (e.g. a projected future value) to words.
///
/// Rounds half-up to the nearest whole unit before decomposition; rejects
/// negative or non-finite amounts.
pub fn amount_in_words(amount: f64) -> Result<String, InputError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(InputError::InvalidAmount(amount));
    }
    Ok(to_indian_words(amount.round() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero() {
        assert_eq!(to_indian_words(0), "Zero");
    }

    #[test]
    fn test_single_digits_and_teens() {
        assert_eq!(to_indian_words(7), "Seven");
        assert_eq!(to_indian_words(10), "Ten");
        assert_eq!(to_indian_words(14), "Fourteen");
        assert_eq!(to_indian_words(19), "Nineteen");
    }

    #[test]
    fn test_two_digit_amounts() {
        assert_eq!(to_indian_words(20), "Twenty");
        assert_eq!(to_indian_words(47), "Forty Seven");
        assert_eq!(to_indian_words(99), "Ninety Nine");
    }

    #[test]
    fn test_hundreds_with_and() {
        assert_eq!(to_indian_words(100), "One Hundred");
        assert_eq!(to_indian_words(105), "One Hundred and Five");
        assert_eq!(to_indian_words(567), "Five Hundred and Sixty Seven");
    }

    #[test]
    fn test_ten_lakh_has_single_group() {
        assert_eq!(to_indian_words(1_000_000), "Ten Lakh");
    }

    #[test]
    fn test_zero_groups_omitted() {
        // Thousand group is zero: no "Thousand" label anywhere
        assert_eq!(to_indian_words(1_000_500), "Ten Lakh and Five Hundred");
        assert_eq!(to_indian_words(123_000), "One Lakh Twenty Three Thousand");
    }

    #[test]
    fn test_reference_decomposition() {
        assert_eq!(
            to_indian_words(1_234_567),
            "Twelve Lakh Thirty Four Thousand Five Hundred and Sixty Seven"
        );
    }

    #[test]
    fn test_crore_amounts() {
        assert_eq!(to_indian_words(10_000_000), "One Crore");
        assert_eq!(to_indian_words(250_000_000), "Twenty Five Crore");
        // Crore count above 99 is rendered recursively
        assert_eq!(
            to_indian_words(1_230_000_005),
            "One Hundred and Twenty Three Crore and Five"
        );
    }

    #[test]
    fn test_amount_in_words_rounds_half_up() {
        assert_eq!(amount_in_words(99.5).unwrap(), "One Hundred");
        assert_eq!(amount_in_words(99.49).unwrap(), "Ninety Nine");
        assert_eq!(amount_in_words(0.0).unwrap(), "Zero");
    }

    #[test]
    fn test_amount_in_words_rejects_out_of_domain() {
        assert!(matches!(
            amount_in_words(-1.0),
            Err(InputError::InvalidAmount(_))
        ));
        assert!(matches!(
            amount_in_words(f64::NAN),
            Err(InputError::InvalidAmount(_))
        ));
        assert!(matches!(
            amount_in_words(f64::INFINITY),
            Err(InputError::InvalidAmount(_))
        ));
    }

    /// Parse a words phrase back to its numeric value. Test-only inverse
    /// used by the round-trip property below.
    fn parse_words(phrase: &str) -> u64 {
        let mut total: u64 = 0;
        let mut current: u64 = 0;
        for token in phrase.split_whitespace() {
            match token {
                "and" => {}
                "Hundred" => current *= 100,
                "Thousand" => {
                    total += current * 1_000;
                    current = 0;
                }
                "Lakh" => {
                    total += current * 100_000;
                    current = 0;
                }
                "Crore" => {
                    total = (total + current) * 10_000_000;
                    current = 0;
                }
                word => {
                    let ones = ONES.iter().position(|&w| w == word).map(|v| v as u64);
                    let tens = TENS.iter().position(|&w| w == word).map(|v| v as u64 * 10);
                    current += ones.or(tens).expect("unknown word");
                }
            }
        }
        total + current
    }

    proptest! {
        #[test]
        fn prop_words_round_trip(amount in 0u64..1_000_000_000) {
            prop_assert_eq!(parse_words(&to_indian_words(amount)), amount);
        }

        #[test]
        fn prop_no_empty_output(amount in 0u64..1_000_000_000) {
            let words = to_indian_words(amount);
            prop_assert!(!words.is_empty());
            prop_assert!(!words.starts_with("and"));
            prop_assert!(!words.contains("  "));
        }
    }
}
