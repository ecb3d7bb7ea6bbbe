use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way trend signal from comparing the short and long moving averages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    /// Short MA above long MA
    Bullish,
    /// Short MA below long MA
    Bearish,
    /// Both MAs equal
    Stable,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Bullish => "BULLISH",
            Trend::Bearish => "BEARISH",
            Trend::Stable => "STABLE",
        }
    }

    /// Fixed advisory text bound to the signal
    pub fn advisory(&self) -> &'static str {
        match self {
            Trend::Bullish => "Accumulate or hold positions.",
            Trend::Bearish => "Avoid new entries and hold liquidity.",
            Trend::Stable => "Await confirmation before trading.",
        }
    }

    /// Narrative template for the report, naming the symbol
    pub fn narrative(&self, symbol: &str) -> String {
        match self {
            Trend::Bullish => format!(
                "{} shows a bullish trend. Consider holding or extending positions while controlling risk.",
                symbol
            ),
            Trend::Bearish => format!(
                "{} shows a bearish trend. Caution is advised; wait for recovery signals.",
                symbol
            ),
            Trend::Stable => format!(
                "{} is holding stable. Wait for clearer market direction.",
                symbol
            ),
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Snapshot judgment over the final moving average values.
///
/// This is a point-in-time signal, not a time series: it reads only the last
/// observation and carries no history of prior verdicts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendVerdict {
    pub trend: Trend,
    pub advisory: String,
    pub narrative: String,
}

impl TrendVerdict {
    pub fn new(trend: Trend, symbol: &str) -> Self {
        Self {
            trend,
            advisory: trend.advisory().to_string(),
            narrative: trend.narrative(symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Trend::Bullish.label(), "BULLISH");
        assert_eq!(Trend::Bearish.label(), "BEARISH");
        assert_eq!(Trend::Stable.label(), "STABLE");
    }

    #[test]
    fn test_narrative_names_symbol() {
        let verdict = TrendVerdict::new(Trend::Bullish, "AAPL");
        assert!(verdict.narrative.contains("AAPL"));
        assert_eq!(verdict.advisory, "Accumulate or hold positions.");
    }
}
