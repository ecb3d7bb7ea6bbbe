//! Rolling-window arithmetic over a price series: simple returns, rolling
//! volatility, and backfilled moving averages.

use crate::models::{IndicatorParams, IndicatorSet, PriceSeries};

/// Period-over-period simple returns.
///
/// `returns[0]` is 0 (no prior observation); for i >= 1 the return is
/// `(p[i] - p[i-1]) / p[i-1]`. A zero previous price yields 0 rather than
/// a division by zero.
pub fn simple_returns(closes: &[f64]) -> Vec<f64> {
    let mut returns = vec![0.0; closes.len()];

    for i in 1..closes.len() {
        let prev = closes[i - 1];
        if prev != 0.0 {
            returns[i] = (closes[i] - prev) / prev;
        }
    }

    returns
}

/// Rolling volatility: sample standard deviation of the trailing `window`
/// returns ending at each index, scaled by `sqrt(window)`.
///
/// Positions with fewer than `window` returns available are 0. The
/// `sqrt(window)` scaling matches the reference convention; keep it as-is so
/// numeric outputs stay reproducible.
pub fn rolling_volatility(returns: &[f64], window: usize) -> Vec<f64> {
    let mut volatility = vec![0.0; returns.len()];

    // Sample std needs at least two observations
    if window < 2 || returns.len() < window {
        return volatility;
    }

    let scale = (window as f64).sqrt();
    for i in (window - 1)..returns.len() {
        let slice = &returns[i + 1 - window..=i];
        let mean = slice.iter().sum::<f64>() / window as f64;
        let var = slice.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (window as f64 - 1.0);
        volatility[i] = var.sqrt() * scale;
    }

    volatility
}

/// Simple moving average with the leading positions backfilled.
///
/// From index `window - 1` onward each value is the mean of the full
/// trailing window; earlier positions take the value at `window - 1`. When
/// the series is shorter than the window, every position degrades to the
/// mean of all available samples instead of staying undefined.
pub fn moving_average_backfilled(closes: &[f64], window: usize) -> Vec<f64> {
    let n = closes.len();
    if n == 0 || window == 0 {
        return vec![0.0; n];
    }

    if n < window {
        // No window ever fills: available-sample mean everywhere
        let mean = closes.iter().sum::<f64>() / n as f64;
        return vec![mean; n];
    }

    let mut ma = vec![0.0; n];
    for i in (window - 1)..n {
        let sum: f64 = closes[i + 1 - window..=i].iter().sum();
        ma[i] = sum / window as f64;
    }

    // Backfill the leading positions with the first fully-windowed value
    let first_full = ma[window - 1];
    for slot in ma.iter_mut().take(window - 1) {
        *slot = first_full;
    }

    ma
}

/// Derive the full indicator set for a price series.
///
/// All four output sequences have exactly the series length and share its
/// date alignment.
pub fn compute_indicators(series: &PriceSeries, params: &IndicatorParams) -> IndicatorSet {
    let closes = series.closes();
    let returns = simple_returns(&closes);
    let volatility = rolling_volatility(&returns, params.volatility_window);
    let ma_short = moving_average_backfilled(&closes, params.short_window);
    let ma_long = moving_average_backfilled(&closes, params.long_window);

    IndicatorSet {
        returns,
        volatility,
        ma_short,
        ma_long,
    }
}
