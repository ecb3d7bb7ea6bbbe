use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single (date, closing price) observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date
    pub date: NaiveDate,

    /// Adjusted closing price
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// An ordered run of price observations for one symbol.
///
/// Dates are ascending and unique; missing observations are simply absent.
/// The series is built once per fetch and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Ticker symbol the series belongs to
    pub symbol: String,

    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from raw observations.
    ///
    /// Sorts by date and drops duplicate dates, keeping the last
    /// observation for each date.
    pub fn from_points(symbol: impl Into<String>, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        points.dedup_by(|next, prev| {
            if next.date == prev.date {
                prev.close = next.close;
                true
            } else {
                false
            }
        });
        Self {
            symbol: symbol.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Closing prices in date order
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Observation dates in ascending order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|p| p.close)
    }

    /// Closing price on a given date, if observed
    pub fn close_on(&self, date: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|i| self.points[i].close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_from_points_sorts_ascending() {
        let series = PriceSeries::from_points(
            "AAPL",
            vec![
                PricePoint::new(d("2024-01-03"), 12.0),
                PricePoint::new(d("2024-01-01"), 10.0),
                PricePoint::new(d("2024-01-02"), 11.0),
            ],
        );
        assert_eq!(series.closes(), vec![10.0, 11.0, 12.0]);
        assert_eq!(series.first_date(), Some(d("2024-01-01")));
        assert_eq!(series.last_date(), Some(d("2024-01-03")));
    }

    #[test]
    fn test_from_points_dedups_dates_last_wins() {
        let series = PriceSeries::from_points(
            "AAPL",
            vec![
                PricePoint::new(d("2024-01-01"), 10.0),
                PricePoint::new(d("2024-01-01"), 10.5),
                PricePoint::new(d("2024-01-02"), 11.0),
            ],
        );
        assert_eq!(series.len(), 2);
        assert_eq!(series.close_on(d("2024-01-01")), Some(10.5));
    }

    #[test]
    fn test_close_on_missing_date() {
        let series =
            PriceSeries::from_points("AAPL", vec![PricePoint::new(d("2024-01-01"), 10.0)]);
        assert_eq!(series.close_on(d("2024-01-02")), None);
    }
}
