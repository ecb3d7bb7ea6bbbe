use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;
use crate::constants::{DEFAULT_LONG_WINDOW, DEFAULT_SHORT_WINDOW, DEFAULT_VOLATILITY_WINDOW};

#[derive(Parser)]
#[command(name = "assetscope")]
#[command(about = "Historical price analysis: indicators, trend signal, comparison, CSV and report export", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch history for a symbol, compute indicators, and emit the report
    Analyze {
        /// Primary symbol (e.g. AAPL, BTC-USD, TSLA)
        symbol: String,

        /// Optional second symbol to compare against
        #[arg(short, long)]
        compare: Option<String>,

        /// Start date (YYYY-MM-DD, default: one year before the end date)
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD, default: today)
        #[arg(long)]
        end: Option<String>,

        /// Sampling interval: daily, weekly, or monthly
        #[arg(short, long, default_value = "daily")]
        interval: String,

        /// Directory for the CSV export and report
        #[arg(short, long, default_value = "reports")]
        output_dir: PathBuf,

        /// Rolling window for the volatility estimate
        #[arg(long, default_value_t = DEFAULT_VOLATILITY_WINDOW)]
        volatility_window: usize,

        /// Short moving average window
        #[arg(long, default_value_t = DEFAULT_SHORT_WINDOW)]
        short_window: usize,

        /// Long moving average window
        #[arg(long, default_value_t = DEFAULT_LONG_WINDOW)]
        long_window: usize,
    },
}

pub fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            symbol,
            compare,
            start,
            end,
            interval,
            output_dir,
            volatility_window,
            short_window,
            long_window,
        } => {
            commands::analyze::run(
                symbol,
                compare,
                start,
                end,
                interval,
                output_dir,
                volatility_window,
                short_window,
                long_window,
            );
        }
    }
}
