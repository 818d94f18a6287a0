//! Composition of scheme matching, checksum and masking into one result.
//!
//! [`Validator`] borrows a [`SchemeTable`] built once by the caller and pairs it
//! with a [`MaskConfig`]. A [`ValidationResult`] only carries the masked
//! rendering, never the digits themselves.

use std::fmt;

use crate::{checksum_valid, DigitString, MaskConfig, Scheme, SchemeTable};

/// Minimum digit count accepted by [`Validator::validate_raw`] by default.
pub const DEFAULT_MIN_DIGITS: usize = 8;

/// Errors produced by [`Validator::validate_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Sanitized input has fewer digits than the configured minimum.
    #[error("expected at least {min} digits, found {found}")]
    TooShort {
        /// Digits left after sanitizing.
        found: usize,
        /// Configured minimum.
        min: usize,
    },
}

/// Outcome of validating one digit string.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationResult {
    scheme: Scheme,
    checksum_valid: bool,
    masked: String,
}

impl ValidationResult {
    /// Matched scheme, or [`Scheme::Unknown`].
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Whether the digits passed the Luhn check.
    pub fn checksum_valid(&self) -> bool {
        self.checksum_valid
    }

    /// Masked, grouped rendering of the digits.
    pub fn masked(&self) -> &str {
        &self.masked
    }
}

/// Plain-text report, one field per line.
impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scheme: {}", self.scheme)?;
        writeln!(f, "Number: {}", self.masked)?;
        write!(
            f,
            "Checksum: {}",
            if self.checksum_valid { "valid" } else { "invalid" }
        )
    }
}

/// Runs classification, checksum and masking against a borrowed table.
///
/// ```rust
/// use cardcheck::{DigitString, SchemeTable, Validator};
///
/// let table = SchemeTable::builtin();
/// let validator = Validator::new(&table);
/// let result = validator.validate(&DigitString::sanitize("4111 1111 1111 1111"));
///
/// assert_eq!(result.scheme().name(), "Visa");
/// assert!(result.checksum_valid());
/// assert_eq!(result.masked(), "**** **** **** 1111");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Validator<'t> {
    table: &'t SchemeTable,
    mask: MaskConfig,
    min_digits: usize,
}

impl<'t> Validator<'t> {
    /// Uses `table` with the default mask and minimum length.
    #[must_use]
    pub fn new(table: &'t SchemeTable) -> Self {
        Self {
            table,
            mask: MaskConfig::default(),
            min_digits: DEFAULT_MIN_DIGITS,
        }
    }

    /// Uses a specific mask configuration.
    #[must_use]
    pub fn with_mask(mut self, mask: MaskConfig) -> Self {
        self.mask = mask;
        self
    }

    /// Sets the minimum digit count enforced by [`Validator::validate_raw`].
    #[must_use]
    pub fn with_min_digits(mut self, min_digits: usize) -> Self {
        self.min_digits = min_digits;
        self
    }

    /// Validates already-sanitized digits. Total: the empty string is accepted.
    pub fn validate(&self, digits: &DigitString) -> ValidationResult {
        ValidationResult {
            scheme: self.table.classify(digits),
            checksum_valid: checksum_valid(digits),
            masked: self.mask.apply_to(digits),
        }
    }

    /// Sanitizes `raw`, enforces the minimum length, then validates.
    pub fn validate_raw(&self, raw: &str) -> Result<ValidationResult, ValidationError> {
        let digits = DigitString::sanitize(raw);
        if digits.len() < self.min_digits {
            return Err(ValidationError::TooShort {
                found: digits.len(),
                min: self.min_digits,
            });
        }
        Ok(self.validate(&digits))
    }
}
