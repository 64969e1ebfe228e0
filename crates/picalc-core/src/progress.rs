//! Progress tracking types.

/// Progress update sent from engines to observers.
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// Engine index (for multi-engine runs).
    pub engine_index: usize,
    /// Name of the engine producing this update.
    pub engine: &'static str,
    /// Current progress as a fraction in [0.0, 1.0].
    pub progress: f64,
    /// Highest iteration index dispensed so far.
    pub current_term: u64,
    /// Total number of iterations.
    pub total_terms: u64,
    /// Whether this is the final update.
    pub done: bool,
}

impl ProgressUpdate {
    /// Create a new progress update.
    #[must_use]
    pub fn new(
        engine_index: usize,
        engine: &'static str,
        progress: f64,
        current: u64,
        total: u64,
    ) -> Self {
        Self {
            engine_index,
            engine,
            progress,
            current_term: current,
            total_terms: total,
            done: false,
        }
    }

    /// Create a completion update.
    #[must_use]
    pub fn done(engine_index: usize, engine: &'static str) -> Self {
        Self {
            engine_index,
            engine,
            progress: 1.0,
            current_term: 0,
            total_terms: 0,
            done: true,
        }
    }
}
