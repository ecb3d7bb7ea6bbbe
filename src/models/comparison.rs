use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of rebasing two series to a common base and comparing their
/// final values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Symbol of the comparison series
    pub comparison_symbol: String,

    /// Dates both series were observed on, ascending
    pub dates: Vec<NaiveDate>,

    /// Primary series rebased to 100 at the first common date
    pub norm_primary: Vec<f64>,

    /// Comparison series rebased to 100 at the first common date
    pub norm_comparison: Vec<f64>,

    /// Symbol designated as the stronger performer
    pub winner: String,

    /// Narrative naming both symbols, ready for the report
    pub narrative: String,
}

impl ComparisonResult {
    pub fn final_primary(&self) -> Option<f64> {
        self.norm_primary.last().copied()
    }

    pub fn final_comparison(&self) -> Option<f64> {
        self.norm_comparison.last().copied()
    }
}
