//! CLI result presenter.

use std::time::Duration;

use picalc_orchestration::interfaces::{ComputationResult, ResultPresenter};

use crate::output::{format_duration, format_number, format_result, format_seconds};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn present_result(
        &self,
        engine: &str,
        terms: u64,
        value: f64,
        duration: Duration,
        details: bool,
    ) {
        if self.quiet {
            println!("{}", format_result(value));
            return;
        }

        if self.verbose {
            println!("Engine: {engine}");
            println!("Terms: {}", format_number(terms));
        }

        println!("Result: {}", format_result(value));
        println!("Execution Time: {} seconds", format_seconds(duration));

        if details {
            let secs = duration.as_secs_f64();
            if secs > 0.0 {
                let rate = (terms as f64 / secs) as u64;
                println!("Throughput: {} terms/s", format_number(rate));
            }
        }
    }

    fn present_comparison(&self, results: &[ComputationResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() { "ERROR" } else { "OK" };
            println!(
                "  {:<20} {:>10} [{}]",
                result.engine,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
