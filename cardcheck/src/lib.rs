//! Card number scheme matching, Luhn validation and masked display.
//!
//! This crate separates:
//! - **Scheme matching**: which issuer numbering scheme a digit string follows.
//! - **Checksum & redaction**: whether the Luhn check passes, and how to print
//!   the number without revealing it.
//!
//! Everything operates on [`DigitString`], which can only be built by
//! sanitizing (or strictly parsing) raw input. Scheme tables are explicit
//! values: build one with [`SchemeTable::builtin`] or [`SchemeTable::new`] and
//! pass it by reference.
//!
//! ```rust
//! use cardcheck::{checksum_valid, mask, DigitString, SchemeTable};
//!
//! let table = SchemeTable::builtin();
//! let digits = DigitString::sanitize("4111-1111-1111-1111");
//!
//! assert_eq!(table.classify(&digits).name(), "Visa");
//! assert!(checksum_valid(&digits));
//! assert_eq!(mask(&digits, 4), "**** **** **** 1111");
//! ```
//!
//! What this crate does not do:
//! - perform I/O, prompt for input, or send reports anywhere
//! - enforce minimum lengths in the checksum (`checksum_valid` of the empty
//!   string is `true`; [`Validator::validate_raw`] is where lengths are checked)
//!
//! Features:
//! - `scheme` (default): [`SchemeTable`] and friends, backed by `regex`
//! - `checksum` (default): Luhn and masking
//! - `validate` (default): [`Validator`] and [`ValidationResult`]
//! - `serde`: `Serialize` for results, `Serialize`/`Deserialize` for [`SchemeDefinition`]
//! - `slog`: `slog::Value` impls in [`slog`]

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "checksum")]
mod checksum;
mod digits;
#[cfg(feature = "scheme")]
mod scheme;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "validate")]
mod validate;

// Re-exports
#[cfg(feature = "checksum")]
pub use checksum::{
    checksum_valid, luhn_check_digit, mask, MaskConfig, DEFAULT_GROUP_SIZE, DEFAULT_KEEP_LAST,
};
pub use digits::{DigitError, DigitString, REDACTED_PLACEHOLDER};
#[cfg(feature = "scheme")]
pub use scheme::{
    Scheme, SchemeDefinition, SchemeTable, TableError, BUILTIN_SCHEMES, UNKNOWN_SCHEME,
};
#[cfg(feature = "validate")]
pub use validate::{ValidationError, ValidationResult, Validator, DEFAULT_MIN_DIGITS};
