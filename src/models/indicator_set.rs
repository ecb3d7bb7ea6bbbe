use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LONG_WINDOW, DEFAULT_SHORT_WINDOW, DEFAULT_VOLATILITY_WINDOW};
use crate::error::{Error, Result};

/// Window sizes for the indicator engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorParams {
    /// Rolling window for the volatility estimate
    pub volatility_window: usize,

    /// Short moving average window
    pub short_window: usize,

    /// Long moving average window
    pub long_window: usize,
}

impl IndicatorParams {
    pub fn new(volatility_window: usize, short_window: usize, long_window: usize) -> Result<Self> {
        if volatility_window == 0 || short_window == 0 || long_window == 0 {
            return Err(Error::InvalidInput(
                "Indicator windows must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            volatility_window,
            short_window,
            long_window,
        })
    }
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            volatility_window: DEFAULT_VOLATILITY_WINDOW,
            short_window: DEFAULT_SHORT_WINDOW,
            long_window: DEFAULT_LONG_WINDOW,
        }
    }
}

/// Derived indicator sequences, aligned index-for-index with the source
/// price series.
///
/// All four vectors have exactly the source series length. `returns[0]` is 0
/// (no prior observation) and `volatility[i]` is 0 until a full window of
/// returns is available ending at `i`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSet {
    /// Period-over-period simple returns
    pub returns: Vec<f64>,

    /// Rolling standard deviation of returns, scaled by sqrt(window)
    pub volatility: Vec<f64>,

    /// Short moving average, leading positions backfilled
    pub ma_short: Vec<f64>,

    /// Long moving average, leading positions backfilled
    pub ma_long: Vec<f64>,
}

impl IndicatorSet {
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// Mean of the return sequence (0 for an empty set)
    pub fn mean_return(&self) -> f64 {
        if self.returns.is_empty() {
            0.0
        } else {
            self.returns.iter().sum::<f64>() / self.returns.len() as f64
        }
    }

    pub fn last_volatility(&self) -> Option<f64> {
        self.volatility.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_reject_zero_window() {
        assert!(IndicatorParams::new(0, 10, 30).is_err());
        assert!(IndicatorParams::new(20, 10, 30).is_ok());
    }

    #[test]
    fn test_default_params() {
        let params = IndicatorParams::default();
        assert_eq!(params.volatility_window, 20);
        assert_eq!(params.short_window, 10);
        assert_eq!(params.long_window, 30);
    }

    #[test]
    fn test_mean_return() {
        let set = IndicatorSet {
            returns: vec![0.0, 0.02, 0.04],
            volatility: vec![0.0, 0.0, 0.0],
            ma_short: vec![1.0, 1.0, 1.0],
            ma_long: vec![1.0, 1.0, 1.0],
        };
        assert!((set.mean_return() - 0.02).abs() < 1e-12);
    }
}
