//! Adapters for emitting validation output through `slog`.
//!
//! This module connects [`ValidationResult`] and [`DigitString`] with `slog`:
//!
//! - `ValidationResult` logs as nested JSON (`scheme`, `checksum_valid`, `masked`)
//!   via `slog`'s nested-value support.
//! - `DigitString` logs as its masked rendering under the default
//!   [`MaskConfig`]; the digits themselves are never emitted.
//!
//! Serialization failures are represented as placeholder strings rather than
//! propagated as errors. This module does not configure `slog`.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{DigitString, MaskConfig, ValidationResult};

/// A `slog::Value` that emits an owned report as structured JSON.
pub struct ReportJson {
    value: JsonValue,
}

impl ReportJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }
}

impl SlogValue for ReportJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts a serializable report into a `slog::Value` that logs it as JSON.
///
/// If converting into `serde_json::Value` fails, the returned value stores a
/// JSON string with the message `"Failed to serialize report"`.
///
/// ## Example
/// ```ignore
/// use cardcheck::slog::IntoReportJson;
///
/// info!(logger, "checked"; "result" => result.to_report_json());
/// ```
pub trait IntoReportJson: Serialize {
    /// Returns a `slog::Value` that serializes `self` as structured JSON.
    fn to_report_json(&self) -> ReportJson {
        let json_value = serde_json::to_value(self)
            .unwrap_or_else(|_| JsonValue::String("Failed to serialize report".to_string()));
        ReportJson::new(json_value)
    }
}

impl IntoReportJson for ValidationResult {}

impl SlogValue for ValidationResult {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        SlogValue::serialize(&self.to_report_json(), record, key, serializer)
    }
}

impl SlogValue for DigitString {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &MaskConfig::default().apply_to(self))
    }
}
