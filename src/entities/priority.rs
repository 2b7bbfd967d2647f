use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of a list or item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Priority {
    /// Convert from database string representation
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a stored value, falling back to the default for rows written by older clients.
    #[must_use]
    pub fn from_stored(s: &str) -> Self {
        Self::from_str(s).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Priority::from_str("low"), Some(Priority::Low));
        assert_eq!(Priority::from_str("HIGH"), Some(Priority::High));
        assert_eq!(Priority::from_str("urgent"), None);
    }

    #[test]
    fn test_from_stored_falls_back_to_medium() {
        assert_eq!(Priority::from_stored("high"), Priority::High);
        assert_eq!(Priority::from_stored(""), Priority::Medium);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Priority::High).unwrap_or_default();
        assert_eq!(json, "\"high\"");
        let parsed: Result<Priority, _> = serde_json::from_str("\"critical\"");
        assert!(parsed.is_err());
    }
}
