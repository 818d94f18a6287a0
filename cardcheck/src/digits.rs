//! The sanitized digit sequence every other component operates on.
//!
//! A [`DigitString`] can only be obtained through [`DigitString::sanitize`] or
//! [`DigitString::parse`], so holding one is proof that the contents are ASCII
//! decimal digits. The raw, unsanitized input never reaches the matcher or the
//! checksum.

use std::fmt;

/// Placeholder printed by `Debug` in place of the digits.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// Errors produced by [`DigitString::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DigitError {
    /// The input contained a character outside `'0'..='9'`.
    #[error("non-digit character {found:?} at position {position}")]
    NonDigit {
        /// Character index (not byte offset) of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },
}

/// A string made only of ASCII decimal digits. May be empty.
///
/// The inner value is private; it cannot be built without sanitizing:
///
/// ```compile_fail
/// let digits = cardcheck::DigitString(String::from("4111 1111"));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    /// Keeps the ASCII decimal digits of `raw` and drops everything else.
    ///
    /// This is total. Separators, letters and non-ASCII digits are discarded.
    ///
    /// ```rust
    /// use cardcheck::DigitString;
    ///
    /// let digits = DigitString::sanitize("4111-1111 1111_1111");
    /// assert_eq!(digits.as_str(), "4111111111111111");
    /// ```
    #[must_use]
    pub fn sanitize(raw: &str) -> Self {
        Self(raw.chars().filter(char::is_ascii_digit).collect())
    }

    /// Accepts `raw` only if it is already made of ASCII decimal digits.
    pub fn parse(raw: &str) -> Result<Self, DigitError> {
        if let Some((position, found)) = raw
            .chars()
            .enumerate()
            .find(|(_, ch)| !ch.is_ascii_digit())
        {
            return Err(DigitError::NonDigit { position, found });
        }
        Ok(Self(raw.to_owned()))
    }

    /// Returns the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when there are no digits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric value of each digit, left to right.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
        self.0.bytes().map(|b| b - b'0')
    }
}

impl fmt::Debug for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitString")
            .field("value", &REDACTED_PLACEHOLDER)
            .field("len", &self.len())
            .finish()
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
