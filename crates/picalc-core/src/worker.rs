//! Worker loop: claim chunks, run the kernel, accumulate privately.
//!
//! Each worker owns its claimed chunks' contributions for its whole
//! lifetime; they are published to the caller only through the thread
//! join. The only shared state a worker touches is the dispenser's atomic
//! cursor.
//!
//! Contributions are recorded per chunk rather than folded into one
//! running total: a chunk's sum depends only on its range, never on which
//! worker computed it or in what order, so the reduction can re-fold them
//! in chunk order and produce a bit-identical result on every run of the
//! same configuration.

use crate::dispenser::ChunkDispenser;
use crate::engine::PiError;
use crate::kernel;
use crate::observer::ProgressObserver;
use crate::progress::ProgressUpdate;
use crate::series::Series;

/// One chunk's summed contribution, tagged with the chunk's ordinal.
#[derive(Debug, Clone, Copy)]
pub struct ChunkSum {
    /// Ordinal of the chunk in dispense order.
    pub chunk_index: u64,
    /// Sum of the series terms over the chunk's range.
    pub value: f64,
}

/// Claim chunks until the dispenser is exhausted, summing each claimed
/// range with the unrolled kernel.
///
/// Every chunk contribution is checked for finiteness before it is
/// recorded, so a NaN or infinity surfaces as an error instead of
/// silently poisoning the sum.
#[allow(clippy::cast_precision_loss)]
pub fn run_worker(
    dispenser: &ChunkDispenser,
    series: &Series,
    observer: &dyn ProgressObserver,
    engine_index: usize,
    engine_name: &'static str,
) -> Result<Vec<ChunkSum>, PiError> {
    let frozen = observer.freeze();
    let total_terms = dispenser.limit();

    let mut sums = Vec::new();
    while let Some(chunk) = dispenser.claim() {
        let value = kernel::sum_range(series, chunk.start, chunk.end);
        if !value.is_finite() {
            return Err(PiError::NonFinite(format!(
                "partial sum over [{}, {}) is {value}",
                chunk.start, chunk.end
            )));
        }
        sums.push(ChunkSum {
            chunk_index: chunk.index,
            value,
        });

        // The dispensed cursor position doubles as a global progress signal.
        let progress = (chunk.end - 1) as f64 / total_terms as f64;
        if frozen.should_report(progress) {
            frozen.update(progress);
            observer.on_progress(&ProgressUpdate::new(
                engine_index,
                engine_name,
                progress,
                chunk.end - 1,
                total_terms,
            ));
        }
    }
    Ok(sums)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::NoOpObserver;

    #[test]
    fn single_worker_consumes_everything() {
        let dispenser = ChunkDispenser::new(1000, 64);
        let series = Series::leibniz();
        let observer = NoOpObserver::new();

        let sums = run_worker(&dispenser, &series, &observer, 0, "test").unwrap();
        assert_eq!(sums.len() as u64, dispenser.total_chunks());

        let total: f64 = sums.iter().map(|s| s.value).sum();
        let expected = kernel::sum_range_scalar(&series, 1, 1001);
        assert!((total - expected).abs() < 1e-12);
        assert!(dispenser.claim().is_none());
    }

    #[test]
    fn worker_on_exhausted_dispenser_returns_nothing() {
        let dispenser = ChunkDispenser::new(10, 100);
        let series = Series::leibniz();
        let observer = NoOpObserver::new();

        let _ = run_worker(&dispenser, &series, &observer, 0, "test").unwrap();
        let second = run_worker(&dispenser, &series, &observer, 0, "test").unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn chunk_sums_carry_their_ordinals() {
        let dispenser = ChunkDispenser::new(100, 10);
        let series = Series::leibniz();
        let observer = NoOpObserver::new();

        let sums = run_worker(&dispenser, &series, &observer, 0, "test").unwrap();
        let ordinals: Vec<u64> = sums.iter().map(|s| s.chunk_index).collect();
        let expected: Vec<u64> = (0..10).collect();
        assert_eq!(ordinals, expected);
    }

    #[test]
    fn non_finite_contribution_is_an_error() {
        // A subnormal slope with zero offset makes both denominators equal,
        // so the two reciprocals cancel to inf - inf = NaN.
        let dispenser = ChunkDispenser::new(10, 10);
        let series = Series::with_params(1e-320, 0.0);
        let observer = NoOpObserver::new();

        let result = run_worker(&dispenser, &series, &observer, 0, "test");
        assert!(matches!(result, Err(PiError::NonFinite(_))));
    }

    #[test]
    fn worker_reports_progress() {
        use crate::observers::ChannelObserver;

        let (tx, rx) = crossbeam_channel::unbounded();
        let observer = ChannelObserver::new(tx);
        let dispenser = ChunkDispenser::new(1000, 10);
        let series = Series::leibniz();

        run_worker(&dispenser, &series, &observer, 0, "test").unwrap();
        // 100 chunks at 1% each: the throttle lets most updates through.
        assert!(rx.try_iter().count() > 10);
    }
}
