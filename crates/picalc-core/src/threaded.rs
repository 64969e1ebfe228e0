//! Dynamically balanced multi-threaded summation engine.
//!
//! Spawns one scoped OS thread per configured worker. Workers pull chunks
//! from a shared lock-free dispenser, so faster cores simply claim more
//! chunks — no static partitioning. Chunk contributions stay
//! thread-private until the join barrier, then are reduced in chunk-index
//! order: the fold order is independent of which worker claimed which
//! chunk, so a fixed configuration produces a bit-identical result on
//! every run regardless of thread scheduling.

use tracing::debug;

use crate::dispenser::ChunkDispenser;
use crate::engine::{Engine, PiError};
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::progress::ProgressUpdate;
use crate::series::Series;
use crate::worker;

const ENGINE_NAME: &str = "Threaded";

/// Multi-threaded engine with dynamic chunk-based load balancing.
///
/// # Example
/// ```
/// use picalc_core::engine::Engine;
/// use picalc_core::observers::NoOpObserver;
/// use picalc_core::options::Options;
/// use picalc_core::series::Series;
/// use picalc_core::threaded::ThreadedEngine;
///
/// let engine = ThreadedEngine::new();
/// let observer = NoOpObserver::new();
/// let opts = Options { chunk_size: 100, threads: 4, ..Options::default() };
/// let result = engine
///     .compute(&observer, 0, 1000, &Series::leibniz(), &opts)
///     .unwrap();
/// assert!((result - 3.142092403684).abs() < 1e-9);
/// ```
pub struct ThreadedEngine;

impl ThreadedEngine {
    /// Create a new `ThreadedEngine`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThreadedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for ThreadedEngine {
    #[allow(clippy::cast_possible_truncation)]
    fn compute(
        &self,
        observer: &dyn ProgressObserver,
        engine_index: usize,
        terms: u64,
        series: &Series,
        opts: &Options,
    ) -> Result<f64, PiError> {
        series.validate(terms)?;
        if opts.threads == 0 {
            return Err(PiError::Config("thread count must be positive".into()));
        }
        if opts.chunk_size == 0 {
            return Err(PiError::Config("chunk size must be positive".into()));
        }

        debug!(
            terms,
            threads = opts.threads,
            chunk_size = opts.chunk_size,
            "starting threaded summation"
        );

        let dispenser = ChunkDispenser::new(terms, opts.chunk_size);

        // The scope is the join barrier: no contribution is read before
        // every worker has terminated.
        let partials: Vec<Result<Vec<worker::ChunkSum>, PiError>> =
            std::thread::scope(|scope| {
                let handles: Vec<_> = (0..opts.threads)
                    .map(|_| {
                        scope.spawn(|| {
                            worker::run_worker(
                                &dispenser,
                                series,
                                observer,
                                engine_index,
                                ENGINE_NAME,
                            )
                        })
                    })
                    .collect();

                handles
                    .into_iter()
                    .map(|handle| match handle.join() {
                        Ok(partial) => partial,
                        Err(_) => Err(PiError::Worker(
                            "worker thread panicked before publishing its partial sum"
                                .into(),
                        )),
                    })
                    .collect()
            });

        // Scatter the contributions into dispense order. Coverage
        // guarantees every slot is written exactly once.
        let mut contributions = vec![0.0f64; dispenser.total_chunks() as usize];
        for partial in partials {
            for chunk_sum in partial? {
                contributions[chunk_sum.chunk_index as usize] = chunk_sum.value;
            }
        }

        // Reduce in chunk-index order: independent of claim scheduling.
        let mut total = series.initial_term;
        for value in contributions {
            total += value;
        }
        total *= series.multiplier;

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
