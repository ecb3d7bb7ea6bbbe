use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ComparisonResult, IndicatorParams, IndicatorSet, Interval, PriceSeries, TrendVerdict};

/// Everything one analysis run produces, ready for the presentation layer.
///
/// Request-scoped: built from scratch per run, never cached across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub series: PriceSeries,
    pub interval: Interval,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub params: IndicatorParams,
    pub indicators: IndicatorSet,
    pub verdict: TrendVerdict,

    /// Present only when a comparison symbol was requested and overlapped
    pub comparison: Option<ComparisonResult>,
}

impl Analysis {
    pub fn symbol(&self) -> &str {
        &self.series.symbol
    }

    pub fn last_price(&self) -> f64 {
        self.series.last_close().unwrap_or(0.0)
    }

    pub fn last_volatility(&self) -> f64 {
        self.indicators.last_volatility().unwrap_or(0.0)
    }

    pub fn mean_return(&self) -> f64 {
        self.indicators.mean_return()
    }
}
