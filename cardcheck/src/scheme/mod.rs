//! Scheme matching: which numbering scheme does a digit string belong to?
//!
//! - **`table`**: the compiled, ordered [`SchemeTable`] and its `classify` entrypoint
//! - **`builtin`**: the default prefix/length rules for common card issuers
//!
//! Matching is always anchored at both ends. A table is built once and then
//! only read, so it can be shared freely by reference.

mod builtin;
mod table;

use std::{borrow::Cow, fmt};

pub use builtin::BUILTIN_SCHEMES;
pub use table::{SchemeDefinition, SchemeTable, TableError};

/// Name reported for digit strings no scheme matches.
pub const UNKNOWN_SCHEME: &str = "Unknown";

/// Outcome of classifying a digit string.
///
/// `Unknown` is an ordinary result (test numbers, unsupported issuers), not an error.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// The first definition in the table whose pattern matched.
    Known(Cow<'static, str>),
    /// No definition matched.
    Unknown,
}

impl Scheme {
    /// Returns the scheme name, or [`UNKNOWN_SCHEME`].
    pub fn name(&self) -> &str {
        match self {
            Scheme::Known(name) => name,
            Scheme::Unknown => UNKNOWN_SCHEME,
        }
    }

    /// Returns `true` if a definition matched.
    pub fn is_known(&self) -> bool {
        matches!(self, Scheme::Known(_))
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Scheme {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}
