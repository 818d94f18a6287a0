//! Checksum and redaction over sanitized digits.
//!
//! The two halves share an input type but nothing else:
//!
//! - **`luhn`**: the mod 10 validity bit ([`checksum_valid`])
//! - **`mask`**: the masked, right-anchored grouped rendering ([`mask`], [`MaskConfig`])

mod luhn;
mod mask;

pub use luhn::{checksum_valid, luhn_check_digit};
pub use mask::{mask, MaskConfig, DEFAULT_GROUP_SIZE, DEFAULT_KEEP_LAST};
