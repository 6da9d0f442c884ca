//! Condition label value object
//!
//! The provider's primary weather group ("Clear", "Rain", "Snow", ...).
//! The vocabulary is defined by the provider, so any string is accepted and
//! kept verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary condition label reported by the weather provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionLabel(String);

impl ConditionLabel {
    pub const CLEAR: &'static str = "Clear";
    pub const CLOUDS: &'static str = "Clouds";
    pub const RAIN: &'static str = "Rain";
    pub const DRIZZLE: &'static str = "Drizzle";
    pub const SNOW: &'static str = "Snow";
    pub const THUNDERSTORM: &'static str = "Thunderstorm";
    pub const MIST: &'static str = "Mist";
    pub const FOG: &'static str = "Fog";

    /// Create a label from the provider's string
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get the label as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConditionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConditionLabel {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ConditionLabel {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_provider_text_verbatim() {
        let label = ConditionLabel::new("Smoke");
        assert_eq!(label.as_str(), "Smoke");
        assert_eq!(label.to_string(), "Smoke");
    }

    #[test]
    fn equality_is_case_sensitive() {
        assert_ne!(ConditionLabel::from("rain"), ConditionLabel::from("Rain"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&ConditionLabel::from("Clouds")).unwrap();
        assert_eq!(json, "\"Clouds\"");
    }
}
