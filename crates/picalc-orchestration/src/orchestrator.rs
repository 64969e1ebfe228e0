//! Core orchestration: engine execution and result comparison.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use picalc_core::engine::{Engine, PiError};
use picalc_core::observer::ProgressObserver;
use picalc_core::observers::NoOpObserver;
use picalc_core::options::Options;
use picalc_core::series::Series;

use crate::interfaces::ComputationResult;

/// Execute a summation with all given engines.
pub fn execute_computations(
    engines: &[Arc<dyn Engine>],
    terms: u64,
    series: &Series,
    opts: &Options,
) -> Vec<ComputationResult> {
    execute_computations_with_observer(engines, terms, series, opts, &NoOpObserver::new())
}

/// Execute a summation with all given engines and a progress observer.
pub fn execute_computations_with_observer(
    engines: &[Arc<dyn Engine>],
    terms: u64,
    series: &Series,
    opts: &Options,
    observer: &dyn ProgressObserver,
) -> Vec<ComputationResult> {
    debug!(engines = engines.len(), terms, "dispatching computations");

    if engines.len() == 1 {
        // Single engine: run directly
        let engine = &engines[0];
        let start = Instant::now();
        let outcome = engine.compute(observer, 0, terms, series, opts);
        return vec![ComputationResult {
            engine: engine.name().to_string(),
            outcome,
            duration: start.elapsed(),
        }];
    }

    // Multiple engines: run in parallel using rayon
    use rayon::iter::{IntoParallelIterator, ParallelIterator};

    engines
        .iter()
        .enumerate()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(i, engine)| {
            let start = Instant::now();
            let outcome = engine.compute(observer, i, terms, series, opts);
            ComputationResult {
                engine: engine.name().to_string(),
                outcome,
                duration: start.elapsed(),
            }
        })
        .collect()
}

/// Check that all successful results agree within `tolerance`.
///
/// Results are floats reduced in configuration-dependent order, so the
/// comparison is tolerance-based rather than exact.
pub fn analyze_comparison_results(
    results: &[ComputationResult],
    tolerance: f64,
) -> Result<(), PiError> {
    let valid: Vec<f64> = results
        .iter()
        .filter_map(|r| r.outcome.as_ref().ok().copied())
        .collect();

    if valid.is_empty() {
        return Err(PiError::Computation("no valid results".into()));
    }

    let first = valid[0];
    for &value in &valid[1..] {
        if (value - first).abs() > tolerance {
            return Err(PiError::Mismatch);
        }
    }

    Ok(())
}
