//! Confidence level selector

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// How wide the confidence band around a forecast should be.
///
/// The margin fraction each level maps to is configuration, not part of
/// the level itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfidenceLevel {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(ConfidenceLevel::Low),
            "medium" => Ok(ConfidenceLevel::Medium),
            "high" => Ok(ConfidenceLevel::High),
            other => Err(ForecastError::InvalidInput(format!(
                "unknown confidence level '{}', expected low, medium or high",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("low".parse::<ConfidenceLevel>().unwrap(), ConfidenceLevel::Low);
        assert_eq!(" Medium ".parse::<ConfidenceLevel>().unwrap(), ConfidenceLevel::Medium);
        assert_eq!("HIGH".parse::<ConfidenceLevel>().unwrap(), ConfidenceLevel::High);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "extreme".parse::<ConfidenceLevel>().unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("extreme"));
    }

    #[test]
    fn test_display_round_trips() {
        for level in [ConfidenceLevel::Low, ConfidenceLevel::Medium, ConfidenceLevel::High] {
            assert_eq!(level.to_string().parse::<ConfidenceLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(ConfidenceLevel::default(), ConfidenceLevel::Medium);
    }
}
