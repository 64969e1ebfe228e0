//! Single-threaded reference engine.
//!
//! Sums the whole iteration space with the scalar kernel on the calling
//! thread. Exists as a numeric oracle for the threaded engine; the two are
//! required to agree only within floating-point reassociation tolerance.

use crate::engine::{Engine, PiError};
use crate::kernel;
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::progress::ProgressUpdate;
use crate::series::Series;

const ENGINE_NAME: &str = "Reference";

/// Sequential single-accumulator engine.
///
/// # Example
/// ```
/// use picalc_core::engine::Engine;
/// use picalc_core::observers::NoOpObserver;
/// use picalc_core::options::Options;
/// use picalc_core::reference::ReferenceEngine;
/// use picalc_core::series::Series;
///
/// let engine = ReferenceEngine::new();
/// let observer = NoOpObserver::new();
/// let result = engine
///     .compute(&observer, 0, 1000, &Series::leibniz(), &Options::default())
///     .unwrap();
/// assert!((result - 3.142092403684).abs() < 1e-9);
/// ```
pub struct ReferenceEngine;

impl ReferenceEngine {
    /// Create a new `ReferenceEngine`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReferenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for ReferenceEngine {
    fn compute(
        &self,
        observer: &dyn ProgressObserver,
        engine_index: usize,
        terms: u64,
        series: &Series,
        _opts: &Options,
    ) -> Result<f64, PiError> {
        series.validate(terms)?;

        let sum = kernel::sum_range_scalar(series, 1, terms.saturating_add(1));
        let total = (series.initial_term + sum) * series.multiplier;

        if !total.is_finite() {
            return Err(PiError::NonFinite(format!("final result is {total}")));
        }

        observer.on_progress(&ProgressUpdate::done(engine_index, ENGINE_NAME));
        Ok(total)
    }

    fn name(&self) -> &str {
        ENGINE_NAME
    }
}
