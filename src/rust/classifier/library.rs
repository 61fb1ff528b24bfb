use std::collections::HashMap;

use log::debug;

use crate::data_source::{DataSource, DataSourceError};

/// Value in the library that drops a token entirely.
pub const SUPPRESSION_MARKER: &str = "-";

/// Tokens shorter than this are always dropped.
pub const MIN_TOKEN_LEN: usize = 2;

/// Outcome of looking a raw token up in the [`Library`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Canonical {
    Token(String),
    Suppressed,
}

/// Maps raw tokens to canonical forms, or marks them for suppression.
///
/// Tokens without an entry (or with an empty one) pass through unchanged.
#[derive(Debug, Clone, Default)]
pub struct Library {
    entries: HashMap<String, String>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a library from `(raw token, canonical token)` pairs.
    ///
    /// Later pairs override earlier ones for the same raw token.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut library = Self::new();
        for (raw, canonical) in pairs {
            library.insert(raw, canonical);
        }
        library
    }

    pub fn from_source(source: &dyn DataSource) -> Result<Self, DataSourceError> {
        let library = Self::from_pairs(source.load()?);
        debug!("Loaded {} library entries from {}", library.len(), source.name());
        Ok(library)
    }

    pub fn insert(&mut self, raw: impl Into<String>, canonical: impl Into<String>) {
        self.entries.insert(raw.into(), canonical.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a single raw token.
    ///
    /// # Example
    /// ```
    /// use classify::{Canonical, Library};
    ///
    /// let library = Library::from_pairs([("bir", "beer"), ("prost", "-")]);
    /// assert_eq!(library.canonicalize("bir"), Canonical::Token("beer".into()));
    /// assert_eq!(library.canonicalize("prost"), Canonical::Suppressed);
    /// assert_eq!(library.canonicalize("x"), Canonical::Suppressed);
    /// assert_eq!(library.canonicalize("wine"), Canonical::Token("wine".into()));
    /// ```
    pub fn canonicalize(&self, token: &str) -> Canonical {
        let mapped = self.entries.get(token).map(String::as_str);
        if mapped == Some(SUPPRESSION_MARKER) || token.len() < MIN_TOKEN_LEN {
            return Canonical::Suppressed;
        }
        match mapped {
            Some(canonical) if !canonical.is_empty() => Canonical::Token(canonical.to_string()),
            _ => Canonical::Token(token.to_string()),
        }
    }
}
