use serde::{Deserialize, Serialize};
use std::fmt;

/// Sampling interval for historical price data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    /// Daily observations
    Daily,
    /// Weekly observations
    Weekly,
    /// Monthly observations
    Monthly,
}

impl Interval {
    /// Convert to the chart API format ("1d", "1wk", "1mo")
    pub fn to_provider_format(&self) -> &'static str {
        match self {
            Interval::Daily => "1d",
            Interval::Weekly => "1wk",
            Interval::Monthly => "1mo",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "1d" | "daily" => Ok(Interval::Daily),
            "1wk" | "weekly" => Ok(Interval::Weekly),
            "1mo" | "monthly" => Ok(Interval::Monthly),
            _ => Err(format!(
                "Invalid interval: {}. Valid options: daily, weekly, monthly",
                s
            )),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_provider_format())
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::Daily
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Interval::from_str("daily").unwrap(), Interval::Daily);
        assert_eq!(Interval::from_str("1wk").unwrap(), Interval::Weekly);
        assert_eq!(Interval::from_str("MONTHLY").unwrap(), Interval::Monthly);
        assert!(Interval::from_str("hourly").is_err());
    }

    #[test]
    fn test_provider_format() {
        assert_eq!(Interval::Daily.to_provider_format(), "1d");
        assert_eq!(Interval::Weekly.to_provider_format(), "1wk");
        assert_eq!(Interval::Monthly.to_provider_format(), "1mo");
    }
}
