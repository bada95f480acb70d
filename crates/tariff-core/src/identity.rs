//! # Identity Newtypes
//!
//! Domain-primitive newtypes for the codes that key every tariff lookup.
//! Each code is a distinct type — you cannot pass a [`CountryCode`] where
//! an [`HtsCode`] is expected.
//!
//! ## Validation
//!
//! Both types validate format at construction time and deserialize through
//! the same constructor, so a schedule file cannot smuggle in a malformed
//! code.
//!
//! - HTS: Harmonized Tariff Schedule classification, dot-separated digits
//!   (`8542.31.0000`), 4 to 10 digits in total.
//! - Country: ISO 3166-1 alpha-2, stored upper case.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A Harmonized Tariff Schedule classification code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HtsCode(String);

impl HtsCode {
    /// Create an HTS code, validating the dotted-digit format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidHtsCode`] if any dot-separated
    /// segment is empty or non-numeric, or the digit count is outside 4..=10.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let trimmed = s.trim();
        let segments_ok = trimmed
            .split('.')
            .all(|seg| !seg.is_empty() && seg.chars().all(|c| c.is_ascii_digit()));
        let digit_count = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
        if !segments_ok || !(4..=10).contains(&digit_count) {
            return Err(ValidationError::InvalidHtsCode(s));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Access the code as written (with dots).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The code's digits with separators removed, for prefix matching.
    pub fn digits(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Whether this code falls under `prefix`. Dots are ignored on both
    /// sides, so `8542` covers `8542.31.0000`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        let prefix: String = prefix.chars().filter(|c| c.is_ascii_digit()).collect();
        !prefix.is_empty() && self.digits().starts_with(&prefix)
    }
}

impl std::fmt::Display for HtsCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for HtsCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for HtsCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HtsCode> for String {
    fn from(code: HtsCode) -> Self {
        code.0
    }
}

/// An ISO 3166-1 alpha-2 country code, e.g. `TW` or `US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code, normalising to upper case.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCountryCode`] unless the value is
    /// exactly two ASCII letters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let trimmed = s.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCountryCode(s));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Access the upper-case code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// United States, the default destination.
    pub fn us() -> Self {
        Self("US".to_string())
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}
