//! Default issuer rules.
//!
//! Patterns are written without anchors; [`super::SchemeTable`] anchors every
//! pattern when it compiles the table. Entries must stay mutually exclusive:
//! no digit string may match two of them.

/// Built-in `(name, pattern)` pairs in priority order.
pub const BUILTIN_SCHEMES: &[(&str, &str)] = &[
    // 13 or 16 digits
    ("Visa", r"4\d{12}(?:\d{3})?"),
    // 16 digits for 51-55 and 2720; 15 digits for 222-229, 23-26, 270 and 271
    (
        "Mastercard",
        r"5[1-5]\d{14}|2(?:2[2-9]\d{12}|[3-6]\d{13}|7[01]\d{12}|720\d{12})",
    ),
    // 15 digits
    ("American Express", r"3[47]\d{13}"),
    // 16 digits
    (
        "Discover",
        r"6011\d{12}|65\d{14}|64[4-9]\d{13}|622(?:12[6-9]|1[3-9]\d|[2-8]\d{2}|9(?:[01]\d|2[0-5]))\d{10}",
    ),
    // 15 digits for 2131/1800, 16 for 35xx
    ("JCB", r"(?:2131|1800|35\d{3})\d{11}"),
    // 14 digits
    ("Diners Club", r"3(?:0[0-5]|[68]\d)\d{11}"),
];
