//! Orchestration interfaces.

use std::time::Duration;

use picalc_core::engine::PiError;

/// Result of a single engine run.
#[derive(Debug, Clone)]
pub struct ComputationResult {
    /// Engine name.
    pub engine: String,
    /// The computed value or a structured error.
    pub outcome: Result<f64, PiError>,
    /// Computation duration.
    pub duration: Duration,
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a computation result.
    fn present_result(
        &self,
        engine: &str,
        terms: u64,
        value: f64,
        duration: Duration,
        details: bool,
    );

    /// Present a comparison across engines.
    fn present_comparison(&self, results: &[ComputationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}
