//! Property-based tests at the engine-selection level.

use std::sync::Arc;

use proptest::prelude::*;

use picalc_core::engine::Engine;
use picalc_core::observers::NoOpObserver;
use picalc_core::options::Options;
use picalc_core::registry::{DefaultFactory, EngineFactory};
use picalc_core::series::Series;

fn compute(engine_name: &str, terms: u64, threads: usize, chunk_size: u64) -> f64 {
    let factory = DefaultFactory::new();
    let engine: Arc<dyn Engine> = factory.get(engine_name).unwrap();
    let opts = Options {
        chunk_size,
        threads,
        ..Options::default()
    }
    .normalize();
    engine
        .compute(&NoOpObserver::new(), 0, terms, &Series::leibniz(), &opts)
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Threaded and reference engines agree for random configurations.
    #[test]
    fn threaded_equals_reference(
        terms in 1u64..20_000,
        threads in 1usize..8,
        chunk_size in 1u64..2000,
    ) {
        let threaded = compute("threaded", terms, threads, chunk_size);
        let reference = compute("reference", terms, 1, chunk_size);
        prop_assert!(
            (threaded - reference).abs() < 1e-9,
            "terms={} threads={} chunk={}: {} vs {}",
            terms, threads, chunk_size, threaded, reference
        );
    }

    /// A fixed configuration is bit-for-bit reproducible.
    #[test]
    fn fixed_configuration_reproduces(
        terms in 1u64..10_000,
        threads in 1usize..6,
        chunk_size in 1u64..500,
    ) {
        let first = compute("threaded", terms, threads, chunk_size);
        let second = compute("threaded", terms, threads, chunk_size);
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    /// More terms never move the result away from π by more than the
    /// series' own error bound allows at the coarser count.
    #[test]
    fn error_shrinks_with_more_terms(terms in 10u64..5000) {
        let pi = std::f64::consts::PI;
        let coarse = compute("reference", terms, 1, 1000);
        let fine = compute("reference", terms * 10, 1, 1000);
        prop_assert!((fine - pi).abs() <= (coarse - pi).abs());
    }
}
