//! Compiled scheme tables.

use std::borrow::Cow;

use regex::{Regex, RegexSet};

use super::{builtin::BUILTIN_SCHEMES, Scheme};
use crate::DigitString;

/// Errors raised while compiling a [`SchemeTable`].
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A definition's pattern is not a valid regular expression.
    #[error("invalid pattern for scheme `{name}`")]
    InvalidPattern {
        /// Name of the offending definition.
        name: String,
        /// Underlying compile error.
        #[source]
        source: regex::Error,
    },
    /// Two definitions share a name.
    #[error("duplicate scheme name `{0}`")]
    DuplicateName(String),
    /// The patterns compiled individually but not as a set (e.g. size limits).
    #[error("failed to compile scheme set")]
    Compile(#[source] regex::Error),
}

/// A named matching rule.
///
/// `pattern` is a regular expression over digits. It is anchored at both ends
/// when the table is compiled, so it always has to match the whole input.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemeDefinition {
    /// Label reported by [`SchemeTable::classify`].
    pub name: Cow<'static, str>,
    /// Unanchored regular expression.
    pub pattern: Cow<'static, str>,
}

impl SchemeDefinition {
    /// Constructs a definition from a name and an unanchored pattern.
    #[must_use]
    pub fn new<N, P>(name: N, pattern: P) -> Self
    where
        N: Into<Cow<'static, str>>,
        P: Into<Cow<'static, str>>,
    {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

/// Ordered, immutable set of scheme definitions.
///
/// All patterns are evaluated in one pass with a `RegexSet`; when more than one
/// matches, the definition declared first wins.
#[derive(Clone, Debug)]
pub struct SchemeTable {
    regex_set: RegexSet,
    /// Scheme names, parallel to `regex_set` patterns.
    names: Vec<Cow<'static, str>>,
}

impl SchemeTable {
    /// Compiles `definitions` in order.
    ///
    /// An empty table is valid and classifies every input as [`Scheme::Unknown`].
    ///
    /// ```rust
    /// use cardcheck::{DigitString, SchemeDefinition, SchemeTable};
    ///
    /// let table = SchemeTable::new([SchemeDefinition::new("Test", r"9\d{11}")])?;
    /// let scheme = table.classify(&DigitString::sanitize("9000 0000 0000"));
    /// assert_eq!(scheme.name(), "Test");
    /// # Ok::<(), cardcheck::TableError>(())
    /// ```
    pub fn new<I>(definitions: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = SchemeDefinition>,
    {
        let definitions = definitions.into_iter();
        let mut names: Vec<Cow<'static, str>> = Vec::with_capacity(definitions.size_hint().0);
        let mut anchored = Vec::with_capacity(definitions.size_hint().0);

        for SchemeDefinition { name, pattern } in definitions {
            if names.iter().any(|existing| *existing == name) {
                return Err(TableError::DuplicateName(name.into_owned()));
            }
            let full = format!(r"\A(?:{pattern})\z");
            // Compile alone first so the error names the definition.
            Regex::new(&full).map_err(|source| TableError::InvalidPattern {
                name: name.to_string(),
                source,
            })?;
            names.push(name);
            anchored.push(full);
        }

        let regex_set = RegexSet::new(&anchored).map_err(TableError::Compile)?;
        Ok(Self { regex_set, names })
    }

    /// The built-in issuer table ([`BUILTIN_SCHEMES`]).
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_SCHEMES
                .iter()
                .map(|&(name, pattern)| SchemeDefinition::new(name, pattern)),
        )
        .expect("built-in scheme patterns compile")
    }

    /// Returns the first scheme whose pattern matches all of `digits`.
    pub fn classify(&self, digits: &DigitString) -> Scheme {
        self.regex_set
            .matches(digits.as_str())
            .iter()
            .next()
            .map_or(Scheme::Unknown, |idx| Scheme::Known(self.names[idx].clone()))
    }

    /// Names of every scheme matching `digits`, in declaration order.
    ///
    /// A well-formed table yields at most one name for any input.
    pub fn matching(&self, digits: &DigitString) -> Vec<&str> {
        self.regex_set
            .matches(digits.as_str())
            .iter()
            .map(|idx| self.names[idx].as_ref())
            .collect()
    }

    /// Scheme names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(AsRef::as_ref)
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the table has no definitions.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for SchemeTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::{SchemeDefinition, SchemeTable, TableError};
    use crate::{DigitString, Scheme};

    fn digits(raw: &str) -> DigitString {
        DigitString::sanitize(raw)
    }

    #[test]
    fn classify_visa_and_unknown() {
        let table = SchemeTable::builtin();
        assert_eq!(table.classify(&digits("4111111111111111")).name(), "Visa");
        assert_eq!(table.classify(&digits("1234")), Scheme::Unknown);
    }

    #[test]
    fn classify_empty_is_unknown() {
        let table = SchemeTable::builtin();
        assert_eq!(table.classify(&DigitString::default()), Scheme::Unknown);
    }

    #[test]
    fn matching_is_anchored_at_both_ends() {
        let table = SchemeTable::builtin();
        // prefix of a Visa number
        assert_eq!(table.classify(&digits("411111111111")), Scheme::Unknown);
        // superstring of a Visa number
        assert_eq!(table.classify(&digits("41111111111111110")), Scheme::Unknown);
        assert_eq!(table.classify(&digits("04111111111111111")), Scheme::Unknown);
    }

    #[test]
    fn custom_patterns_cannot_escape_anchoring() {
        let table = SchemeTable::new([SchemeDefinition::new("Loose", r"1|2")]).unwrap();
        assert_eq!(table.classify(&digits("1")).name(), "Loose");
        assert_eq!(table.classify(&digits("12")), Scheme::Unknown);
        assert_eq!(table.classify(&digits("21")), Scheme::Unknown);
    }

    #[test]
    fn first_declared_wins_on_overlap() {
        let table = SchemeTable::new([
            SchemeDefinition::new("First", r"9\d{3}"),
            SchemeDefinition::new("Second", r"99\d{2}"),
        ])
        .unwrap();
        let input = digits("9912");
        assert_eq!(table.classify(&input).name(), "First");
        assert_eq!(table.matching(&input), vec!["First", "Second"]);
    }

    #[test]
    fn empty_table_classifies_everything_unknown() {
        let table = SchemeTable::new(Vec::<SchemeDefinition>::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.classify(&digits("4111111111111111")), Scheme::Unknown);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = SchemeTable::new([
            SchemeDefinition::new("Visa", r"4\d{15}"),
            SchemeDefinition::new("Visa", r"4\d{12}"),
        ])
        .unwrap_err();
        assert!(matches!(err, TableError::DuplicateName(ref name) if name == "Visa"));
        assert_eq!(err.to_string(), "duplicate scheme name `Visa`");
    }

    #[test]
    fn invalid_pattern_names_the_definition() {
        let err = SchemeTable::new([
            SchemeDefinition::new("Ok", r"1\d+"),
            SchemeDefinition::new("Broken", r"(\d"),
        ])
        .unwrap_err();
        match &err {
            TableError::InvalidPattern { name, .. } => assert_eq!(name, "Broken"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.source().is_some());
    }

    #[test]
    fn names_preserve_declaration_order() {
        let table = SchemeTable::builtin();
        let names: Vec<_> = table.names().collect();
        assert_eq!(
            names,
            vec![
                "Visa",
                "Mastercard",
                "American Express",
                "Discover",
                "JCB",
                "Diners Club"
            ]
        );
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn default_is_builtin() {
        let table = SchemeTable::default();
        assert_eq!(
            table.classify(&digits("378282246310005")).name(),
            "American Express"
        );
    }
}
