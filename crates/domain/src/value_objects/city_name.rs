//! City name value object
//!
//! A free-text city query as typed by the user, trimmed and guaranteed
//! non-empty.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::CityName;
//!
//! let city = CityName::parse("  São Paulo ").expect("valid city");
//! assert_eq!(city.as_str(), "São Paulo");
//!
//! assert!(CityName::parse("   ").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Validated city name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CityName(String);

impl CityName {
    /// Parse raw user input into a city name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCityName` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyCityName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the city name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for CityName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl<'de> Deserialize<'de> for CityName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        let city = CityName::parse("  Lisboa\n").unwrap();
        assert_eq!(city.as_str(), "Lisboa");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(CityName::parse(""), Err(DomainError::EmptyCityName));
        assert_eq!(CityName::parse(" \t "), Err(DomainError::EmptyCityName));
    }

    #[test]
    fn long_names_are_passed_through() {
        let long = "Llanfairpwllgwyngyllgogerychwyrndrobwllllantysiliogogogoch ".repeat(3);
        let city = CityName::parse(&long).unwrap();
        assert_eq!(city.as_str(), long.trim());
    }

    #[test]
    fn display_matches_inner() {
        let city = CityName::parse("Recife").unwrap();
        assert_eq!(city.to_string(), "Recife");
    }

    #[test]
    fn deserialization_validates() {
        let city: CityName = serde_json::from_str("\" Porto \"").unwrap();
        assert_eq!(city.as_str(), "Porto");

        let result: Result<CityName, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
