//! Luhn (mod 10) checksum.

use crate::DigitString;

/// Weighted Luhn sum of digits supplied rightmost first.
///
/// Position 0 is the rightmost digit. Odd positions are doubled, and a doubled
/// value above 9 has 9 subtracted. The result is the sum modulo 10.
fn luhn_sum<I>(reversed: I) -> u32
where
    I: Iterator<Item = u8>,
{
    reversed.enumerate().fold(0, |sum, (position, digit)| {
        let digit = u32::from(digit);
        let term = if position % 2 == 1 {
            let doubled = digit * 2;
            if doubled > 9 {
                doubled - 9
            } else {
                doubled
            }
        } else {
            digit
        };
        (sum + term) % 10
    })
}

/// Returns `true` when `digits` satisfies the Luhn checksum.
///
/// The empty string sums to 0 and is reported as valid. Length checks belong
/// to the caller.
///
/// ```rust
/// use cardcheck::{checksum_valid, DigitString};
///
/// assert!(checksum_valid(&DigitString::sanitize("4111 1111 1111 1111")));
/// assert!(!checksum_valid(&DigitString::sanitize("4111 1111 1111 1112")));
/// ```
pub fn checksum_valid(digits: &DigitString) -> bool {
    luhn_sum(digits.digits().rev()) % 10 == 0
}

/// Computes the digit that makes `payload` followed by that digit Luhn-valid.
#[allow(clippy::cast_possible_truncation)] // result is always below 10
pub fn luhn_check_digit(payload: &DigitString) -> u8 {
    // The appended digit takes position 0, so the payload starts at position 1.
    let sum = luhn_sum(std::iter::once(0).chain(payload.digits().rev()));
    ((10 - sum % 10) % 10) as u8
}
