//! Markdown report assembly from a completed analysis.

use std::path::Path;

use crate::error::{Error, Result};
use crate::models::Analysis;

const DISCLAIMER: &str =
    "This analysis is for educational purposes and is not professional investment advice.";

/// Render the full report: header, verdict, summary metrics, conclusion,
/// and the comparison section when present.
pub fn render_report(analysis: &Analysis) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Financial Analysis Report - {}\n\n",
        analysis.symbol()
    ));
    out.push_str(&format!(
        "Period: {} to {} ({})\n\n",
        analysis.start, analysis.end, analysis.interval
    ));

    out.push_str(&format!("Trend: {}\n", analysis.verdict.trend.label()));
    out.push_str(&format!("Suggested action: {}\n\n", analysis.verdict.advisory));

    out.push_str("## Summary\n\n");
    out.push_str(&format!("- Last price: ${:.2}\n", analysis.last_price()));
    out.push_str(&format!(
        "- Volatility ({} periods): {:.2}%\n",
        analysis.params.volatility_window,
        analysis.last_volatility() * 100.0
    ));
    out.push_str(&format!(
        "- Mean return: {:.2}%\n\n",
        analysis.mean_return() * 100.0
    ));

    out.push_str("## Conclusion and recommendations\n\n");
    out.push_str(&analysis.verdict.narrative);
    out.push('\n');

    if let Some(comparison) = &analysis.comparison {
        out.push_str("\n## Comparison\n\n");
        out.push_str(&format!(
            "- {} final index: {:.2} (base 100)\n",
            analysis.symbol(),
            comparison.final_primary().unwrap_or(0.0)
        ));
        if let Some(final_comparison) = comparison.final_comparison() {
            out.push_str(&format!(
                "- {} final index: {:.2} (base 100)\n",
                comparison.comparison_symbol, final_comparison
            ));
        }
        out.push_str(&format!("- Stronger performer: {}\n\n", comparison.winner));
        out.push_str(&comparison.narrative);
        out.push('\n');
    }

    out.push_str(&format!("\n---\n{}\n", DISCLAIMER));
    out
}

/// Write the rendered report next to the CSV export
pub fn write_report_file(path: &Path, analysis: &Analysis) -> Result<()> {
    std::fs::write(path, render_report(analysis))
        .map_err(|e| Error::Io(format!("Failed to write {}: {}", path.display(), e)))
}
