use chrono::{Days, NaiveDate, Utc};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::analysis::{build_verdict, compare, compute_indicators};
use crate::error::{Error, Result};
use crate::models::{Analysis, IndicatorParams, Interval, PriceSeries};
use crate::services::{csv_export, report, YahooClient};

/// Inputs for one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub symbol: String,
    pub compare_symbol: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub interval: Interval,
    pub params: IndicatorParams,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    symbol: String,
    compare_symbol: Option<String>,
    start: Option<String>,
    end: Option<String>,
    interval: String,
    output_dir: PathBuf,
    volatility_window: usize,
    short_window: usize,
    long_window: usize,
) {
    let request = match build_request(
        symbol,
        compare_symbol,
        start,
        end,
        &interval,
        volatility_window,
        short_window,
        long_window,
    ) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "🔍 Analyzing {} ({} to {}, {})",
        request.symbol, request.start, request.end, request.interval
    );

    let analysis = match fetch_and_analyze(&request) {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    print_summary(&analysis);

    if let Err(e) = write_outputs(&output_dir, &analysis) {
        eprintln!("❌ Failed to write outputs: {}", e);
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn build_request(
    symbol: String,
    compare_symbol: Option<String>,
    start: Option<String>,
    end: Option<String>,
    interval: &str,
    volatility_window: usize,
    short_window: usize,
    long_window: usize,
) -> Result<AnalysisRequest> {
    let symbol = validate_symbol(&symbol)?;

    let compare_symbol = match compare_symbol.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
        Some(s) => Some(validate_symbol(&s)?),
        None => None,
    };
    if compare_symbol.as_deref() == Some(symbol.as_str()) {
        return Err(Error::InvalidInput(
            "Comparison symbol must differ from the primary symbol".to_string(),
        ));
    }

    let interval = Interval::from_str(interval).map_err(Error::InvalidInput)?;

    let today = Utc::now().date_naive();
    let end = match end {
        Some(s) => parse_date(&s)?,
        None => today,
    };
    let start = match start {
        Some(s) => parse_date(&s)?,
        None => end.checked_sub_days(Days::new(365)).unwrap_or(end),
    };
    if start >= end {
        return Err(Error::InvalidInput(format!(
            "Start date {} must be before end date {}",
            start, end
        )));
    }

    let params = IndicatorParams::new(volatility_window, short_window, long_window)?;

    Ok(AnalysisRequest {
        symbol,
        compare_symbol,
        start,
        end,
        interval,
        params,
    })
}

/// Normalize and validate a ticker symbol.
///
/// Symbols feed directly into output filenames, so anything beyond the
/// provider's symbol alphabet (letters, digits, '.', '-', '^', '=') is
/// rejected; in particular path separators cannot reach the filesystem.
fn validate_symbol(raw: &str) -> Result<String> {
    let symbol = raw.trim().to_uppercase();

    if symbol.is_empty() {
        return Err(Error::InvalidInput("Symbol must not be empty".to_string()));
    }
    if !symbol
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '='))
    {
        return Err(Error::InvalidInput(format!(
            "Invalid symbol '{}': only letters, digits, '.', '-', '^' and '=' are allowed",
            symbol
        )));
    }

    Ok(symbol)
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| Error::InvalidInput(format!("Bad date '{}': {} (expected YYYY-MM-DD)", s, e)))
}

/// Fetch both series and run the pure analysis stage
fn fetch_and_analyze(request: &AnalysisRequest) -> Result<Analysis> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Config(format!("Failed to create runtime: {}", e)))?;

    runtime.block_on(async {
        let client = YahooClient::new()?;

        let primary = client
            .fetch_history(&request.symbol, request.start, request.end, request.interval)
            .await?;

        // A failed fetch of either leg aborts the whole run with no
        // partial output; the non-fatal comparison cases (empty series,
        // no overlap) are decided in analyze_series
        let comparison = match &request.compare_symbol {
            Some(symbol) => Some(
                client
                    .fetch_history(symbol, request.start, request.end, request.interval)
                    .await,
            ),
            None => None,
        };

        analyze_series(primary, comparison, request)
    })
}

/// Pure analysis stage: no I/O, fully driven by the fetch outcomes.
///
/// An empty primary series aborts with `NoDataFound` before any indicator
/// computation. A failed comparison fetch is propagated and aborts the run;
/// only an empty or non-overlapping comparison series drops the comparison
/// section without failing.
pub fn analyze_series(
    primary: PriceSeries,
    comparison: Option<Result<PriceSeries>>,
    request: &AnalysisRequest,
) -> Result<Analysis> {
    if primary.is_empty() {
        return Err(Error::NoDataFound(primary.symbol));
    }

    let indicators = compute_indicators(&primary, &request.params);
    let verdict = build_verdict(&primary.symbol, &indicators);

    let comparison = match comparison {
        Some(Err(e)) => return Err(e),
        Some(Ok(series)) if series.is_empty() => {
            warn!("No data for comparison symbol '{}', skipping", series.symbol);
            None
        }
        Some(Ok(series)) => match compare(&primary, &series) {
            Ok(result) => Some(result),
            Err(Error::InsufficientOverlap(a, b)) => {
                warn!("Series '{}' and '{}' share no dates, skipping comparison", a, b);
                None
            }
            Err(e) => return Err(e),
        },
        None => None,
    };

    Ok(Analysis {
        start: request.start,
        end: request.end,
        series: primary,
        interval: request.interval,
        params: request.params,
        indicators,
        verdict,
        comparison,
    })
}

fn print_summary(analysis: &Analysis) {
    println!("\n📊 Trend: {}", analysis.verdict.trend.label());
    println!("💡 Suggested action: {}", analysis.verdict.advisory);
    println!("\n   Last price:   ${:.2}", analysis.last_price());
    println!(
        "   Volatility:   {:.2}% ({} periods)",
        analysis.last_volatility() * 100.0,
        analysis.params.volatility_window
    );
    println!("   Mean return:  {:.2}%", analysis.mean_return() * 100.0);

    if let Some(comparison) = &analysis.comparison {
        println!("\n⚖️  Stronger performer: {}", comparison.winner);
        println!("   {}", comparison.narrative);
    }

    println!("\n📝 {}", analysis.verdict.narrative);
}

fn write_outputs(output_dir: &Path, analysis: &Analysis) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .map_err(|e| Error::Io(format!("Failed to create {}: {}", output_dir.display(), e)))?;

    let csv_path = output_dir.join(format!("{}_analysis.csv", analysis.symbol()));
    csv_export::write_csv_file(&csv_path, &analysis.series, &analysis.indicators)?;
    println!("\n💾 Wrote {}", csv_path.display());

    let report_path = output_dir.join(format!("{}_report.md", analysis.symbol()));
    report::write_report_file(&report_path, analysis)?;
    println!("📄 Wrote {}", report_path.display());

    Ok(())
}
