//! Masked, grouped display form of a digit string.
//!
//! Masking keeps a trailing run of digits visible and replaces the rest. The
//! output is then split into fixed-size groups anchored at the right end, the
//! way card numbers are usually printed.

use crate::DigitString;

/// Number of trailing digits left visible by default.
pub const DEFAULT_KEEP_LAST: usize = 4;

/// Default group width for the rendered output.
pub const DEFAULT_GROUP_SIZE: usize = 4;

/// How to render a digit string for display.
///
/// Use [`MaskConfig::keep_last`] to create instances, or `Default` for
/// "keep 4, mask with `*`, groups of 4".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskConfig {
    /// Number of trailing digits to keep visible.
    keep_last: usize,
    /// Symbol replacing hidden digits.
    mask_char: char,
    /// Group width; 0 disables grouping.
    group_size: usize,
}

impl MaskConfig {
    /// Keeps the last `keep_last` digits visible.
    #[must_use]
    pub fn keep_last(keep_last: usize) -> Self {
        Self {
            keep_last,
            mask_char: '*',
            group_size: DEFAULT_GROUP_SIZE,
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Uses a specific group width. `0` renders the value as a single run.
    #[must_use]
    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    /// Renders `digits`.
    ///
    /// If the value has `keep_last` digits or fewer, every digit is masked and
    /// no grouping is applied.
    #[must_use]
    pub fn apply_to(&self, digits: &DigitString) -> String {
        let value = digits.as_str();
        let total = value.len();
        if total <= self.keep_last {
            return std::iter::repeat_n(self.mask_char, total).collect();
        }

        let hidden = total - self.keep_last;
        let rendered = std::iter::repeat_n(self.mask_char, hidden).chain(value[hidden..].chars());

        if self.group_size == 0 {
            return rendered.collect();
        }

        let mut out = String::with_capacity(total + total / self.group_size);
        for (idx, ch) in rendered.enumerate() {
            // Groups are counted from the right, so only the first may be short.
            if idx > 0 && (total - idx) % self.group_size == 0 {
                out.push(' ');
            }
            out.push(ch);
        }
        out
    }
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self::keep_last(DEFAULT_KEEP_LAST)
    }
}

/// Masks all but the last `keep_last` digits and groups the result by 4.
///
/// ```rust
/// use cardcheck::{mask, DigitString};
///
/// let digits = DigitString::sanitize("4111111111111111");
/// assert_eq!(mask(&digits, 4), "**** **** **** 1111");
/// ```
#[must_use]
pub fn mask(digits: &DigitString, keep_last: usize) -> String {
    MaskConfig::keep_last(keep_last).apply_to(digits)
}
