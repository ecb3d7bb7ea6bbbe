//! Trend classification from the final moving average values.

use crate::models::{IndicatorSet, Trend, TrendVerdict};

/// Classify the trend from the last short and long MA values.
///
/// Deliberately a bare threshold rule: no hysteresis, no smoothing, no
/// memory of prior verdicts.
pub fn classify(ma_short_last: f64, ma_long_last: f64) -> Trend {
    if ma_short_last > ma_long_last {
        Trend::Bullish
    } else if ma_short_last < ma_long_last {
        Trend::Bearish
    } else {
        Trend::Stable
    }
}

/// Build the verdict for a symbol from its indicator set.
///
/// Reads only the final MA values; an empty set classifies as stable.
pub fn build_verdict(symbol: &str, indicators: &IndicatorSet) -> TrendVerdict {
    let ma_short_last = indicators.ma_short.last().copied().unwrap_or(0.0);
    let ma_long_last = indicators.ma_long.last().copied().unwrap_or(0.0);

    TrendVerdict::new(classify(ma_short_last, ma_long_last), symbol)
}
