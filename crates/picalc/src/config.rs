//! Application configuration from CLI flags and environment.

use clap::Parser;

/// PiCalc-rs — High-performance Leibniz-series π approximator.
#[derive(Parser, Debug)]
#[command(name = "picalc", version, about)]
pub struct AppConfig {
    /// Number of series iterations to sum.
    #[arg(short = 'n', long, default_value = "200000000", env = "PICALC_TERMS")]
    pub terms: u64,

    /// Engine to use: threaded, reference, or all.
    #[arg(long, default_value = "threaded")]
    pub engine: String,

    /// Denominator slope of the series terms.
    #[arg(long, default_value = "4.0")]
    pub p1: f64,

    /// Denominator offset of the series terms.
    #[arg(long, default_value = "1.0")]
    pub p2: f64,

    /// Chunk size for work distribution (0 = default).
    #[arg(long, default_value = "0")]
    pub chunk_size: u64,

    /// Worker thread count (0 = detected hardware parallelism).
    #[arg(short, long, default_value = "0")]
    pub threads: usize,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the value).
    #[arg(short, long)]
    pub quiet: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
