//! Relative performance of two series over their common dates.

use crate::constants::REBASE_BASE;
use crate::error::{Error, Result};
use crate::models::{ComparisonResult, PriceSeries};

/// Align two series on their common dates, rebase both to 100 at the first
/// shared date, and pick the stronger performer from the final rebased
/// values.
///
/// Fails with `InsufficientOverlap` when the two series share no dates. A
/// tie on the final values is folded into the comparison symbol's favor;
/// the asymmetry is documented in DESIGN.md.
pub fn compare(primary: &PriceSeries, comparison: &PriceSeries) -> Result<ComparisonResult> {
    let mut dates = Vec::new();
    let mut raw_primary = Vec::new();
    let mut raw_comparison = Vec::new();

    // Primary dates are ascending, so the intersection stays ascending
    for point in primary.points() {
        if let Some(close) = comparison.close_on(point.date) {
            dates.push(point.date);
            raw_primary.push(point.close);
            raw_comparison.push(close);
        }
    }

    if dates.is_empty() {
        return Err(Error::InsufficientOverlap(
            primary.symbol.clone(),
            comparison.symbol.clone(),
        ));
    }

    let base_primary = raw_primary[0];
    let base_comparison = raw_comparison[0];
    let norm_primary: Vec<f64> = raw_primary
        .iter()
        .map(|p| p / base_primary * REBASE_BASE)
        .collect();
    let norm_comparison: Vec<f64> = raw_comparison
        .iter()
        .map(|p| p / base_comparison * REBASE_BASE)
        .collect();

    let final_primary = *norm_primary.last().unwrap_or(&REBASE_BASE);
    let final_comparison = *norm_comparison.last().unwrap_or(&REBASE_BASE);

    let (winner, narrative) = if final_primary > final_comparison {
        (
            primary.symbol.clone(),
            format!(
                "Over the period, {} outperformed {}, indicating superior relative strength. It could remain the preferred position.",
                primary.symbol, comparison.symbol
            ),
        )
    } else {
        (
            comparison.symbol.clone(),
            format!(
                "Over the period, {} outperformed {}, showing higher relative returns. It could be considered the stronger alternative.",
                comparison.symbol, primary.symbol
            ),
        )
    };

    Ok(ComparisonResult {
        comparison_symbol: comparison.symbol.clone(),
        dates,
        norm_primary,
        norm_comparison,
        winner,
        narrative,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PricePoint;
    use chrono::NaiveDate;

    const TOL: f64 = 1e-9;

    fn series(symbol: &str, start_day: u32, closes: &[f64]) -> PriceSeries {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let date = NaiveDate::from_ymd_opt(2024, 1, start_day + i as u32).unwrap();
                PricePoint::new(date, c)
            })
            .collect();
        PriceSeries::from_points(symbol, points)
    }

    #[test]
    fn test_rebase_to_common_base() {
        // Proportional series rebase onto the same path
        let a = series("A", 1, &[100.0, 110.0, 121.0]);
        let b = series("B", 1, &[50.0, 55.0, 60.5]);
        let result = compare(&a, &b).unwrap();

        assert_eq!(result.dates.len(), 3);
        for (na, nb) in result.norm_primary.iter().zip(&result.norm_comparison) {
            assert!((na - nb).abs() < TOL);
        }
        assert!((result.norm_primary[0] - 100.0).abs() < TOL);
        assert!((result.norm_primary[2] - 121.0).abs() < TOL);
    }

    #[test]
    fn test_primary_outperforms() {
        let a = series("A", 1, &[100.0, 120.0]);
        let b = series("B", 1, &[100.0, 110.0]);
        let result = compare(&a, &b).unwrap();

        assert_eq!(result.winner, "A");
        assert_eq!(result.comparison_symbol, "B");
        assert!(result.narrative.starts_with("Over the period, A outperformed B"));
    }

    #[test]
    fn test_tie_folds_into_comparison_symbol() {
        let a = series("A", 1, &[100.0, 110.0, 121.0]);
        let b = series("B", 1, &[50.0, 55.0, 60.5]);
        let result = compare(&a, &b).unwrap();

        assert_eq!(result.winner, "B");
    }

    #[test]
    fn test_partial_overlap_intersects_dates() {
        // A covers Jan 1-4, B covers Jan 3-6: common dates are Jan 3-4
        let a = series("A", 1, &[100.0, 101.0, 102.0, 104.0]);
        let b = series("B", 3, &[50.0, 51.0, 52.0, 53.0]);
        let result = compare(&a, &b).unwrap();

        assert_eq!(result.dates.len(), 2);
        assert!((result.norm_primary[0] - 100.0).abs() < TOL);
        assert!((result.norm_comparison[0] - 100.0).abs() < TOL);
        // A: 102 -> 104 is +1.96%, B: 50 -> 51 is +2%
        assert_eq!(result.winner, "B");
    }

    #[test]
    fn test_disjoint_dates_fail_with_insufficient_overlap() {
        let a = series("A", 1, &[100.0, 101.0]);
        let b = series("B", 20, &[50.0, 51.0]);

        match compare(&a, &b) {
            Err(Error::InsufficientOverlap(pa, pb)) => {
                assert_eq!(pa, "A");
                assert_eq!(pb, "B");
            }
            other => panic!("expected InsufficientOverlap, got {:?}", other),
        }
    }
}
