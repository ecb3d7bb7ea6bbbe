//! Analysis defaults and HTTP settings.

/// Rolling window for the volatility estimate (in observations)
pub const DEFAULT_VOLATILITY_WINDOW: usize = 20;

/// Short moving average window
pub const DEFAULT_SHORT_WINDOW: usize = 10;

/// Long moving average window
pub const DEFAULT_LONG_WINDOW: usize = 30;

/// Base value both series are rebased to for relative comparison
pub const REBASE_BASE: f64 = 100.0;

/// HTTP request timeout in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// User-Agent sent to the chart API (it rejects non-browser agents)
pub const HTTP_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
