//! CSV export of the computed analysis table, plus the reader used to load
//! an exported table back.

use chrono::NaiveDate;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{IndicatorSet, PricePoint, PriceSeries};

const CSV_HEADER: [&str; 6] = ["date", "close", "return", "volatility", "ma_short", "ma_long"];

/// Write the full analysis table, one row per observation.
///
/// Floats are written with `{}` (shortest round-trip representation) so an
/// exported table parses back to the exact values.
pub fn write_csv<W: Write>(
    writer: W,
    series: &PriceSeries,
    indicators: &IndicatorSet,
) -> Result<()> {
    if series.len() != indicators.len() {
        return Err(Error::InvalidInput(format!(
            "Series has {} rows but indicator set has {}",
            series.len(),
            indicators.len()
        )));
    }

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for (i, point) in series.points().iter().enumerate() {
        wtr.write_record(&[
            point.date.format("%Y-%m-%d").to_string(),
            format!("{}", point.close),
            format!("{}", indicators.returns[i]),
            format!("{}", indicators.volatility[i]),
            format!("{}", indicators.ma_short[i]),
            format!("{}", indicators.ma_long[i]),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the analysis table to a file path
pub fn write_csv_file(path: &Path, series: &PriceSeries, indicators: &IndicatorSet) -> Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| Error::Io(format!("Failed to create {}: {}", path.display(), e)))?;
    write_csv(file, series, indicators)
}

/// Read the (date, close) pairs back from an exported table
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<PricePoint>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut points = Vec::new();

    for record in rdr.records() {
        let record = record?;
        let date_str = record
            .get(0)
            .ok_or_else(|| Error::Parse("Missing date column".to_string()))?;
        let close_str = record
            .get(1)
            .ok_or_else(|| Error::Parse("Missing close column".to_string()))?;

        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|e| Error::Parse(format!("Bad date '{}': {}", date_str, e)))?;
        let close: f64 = close_str
            .parse()
            .map_err(|e| Error::Parse(format!("Bad close '{}': {}", close_str, e)))?;

        points.push(PricePoint::new(date, close));
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute_indicators;
    use crate::models::IndicatorParams;

    fn sample_series() -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let closes = [100.0, 101.5, 99.25, 103.875, 102.0];
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| PricePoint::new(start + chrono::Days::new(i as u64), c))
            .collect();
        PriceSeries::from_points("TEST", points)
    }

    #[test]
    fn test_round_trip_preserves_date_close_pairs() {
        let series = sample_series();
        let params = IndicatorParams::new(3, 2, 4).unwrap();
        let indicators = compute_indicators(&series, &params);

        let mut buf = Vec::new();
        write_csv(&mut buf, &series, &indicators).unwrap();
        let parsed = read_csv(buf.as_slice()).unwrap();

        assert_eq!(parsed.len(), series.len());
        for (parsed, original) in parsed.iter().zip(series.points()) {
            assert_eq!(parsed.date, original.date);
            assert!((parsed.close - original.close).abs() < 1e-9);
        }
    }

    #[test]
    fn test_header_and_row_count() {
        let series = sample_series();
        let indicators = compute_indicators(&series, &IndicatorParams::default());

        let mut buf = Vec::new();
        write_csv(&mut buf, &series, &indicators).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "date,close,return,volatility,ma_short,ma_long");
        assert_eq!(lines.len(), 1 + series.len());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let series = sample_series();
        let indicators = IndicatorSet {
            returns: vec![0.0],
            volatility: vec![0.0],
            ma_short: vec![0.0],
            ma_long: vec![0.0],
        };

        let mut buf = Vec::new();
        assert!(write_csv(&mut buf, &series, &indicators).is_err());
    }
}
