mod analysis;
mod comparison;
mod indicator_set;
mod interval;
mod price_series;
mod verdict;

pub use analysis::Analysis;
pub use comparison::ComparisonResult;
pub use indicator_set::{IndicatorParams, IndicatorSet};
pub use interval::Interval;
pub use price_series::{PricePoint, PriceSeries};
pub use verdict::{Trend, TrendVerdict};
