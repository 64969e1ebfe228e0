//! Golden file integration tests.
//!
//! Reads tests/testdata/leibniz_golden.json and verifies both engines
//! reproduce known partial-sum values across thread and chunk
//! configurations.

use serde::Deserialize;

use picalc_core::engine::{Engine, PiError};
use picalc_core::observers::NoOpObserver;
use picalc_core::options::Options;
use picalc_core::reference::ReferenceEngine;
use picalc_core::series::Series;
use picalc_core::threaded::ThreadedEngine;

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    terms: u64,
    result: f64,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/leibniz_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn compute_reference(terms: u64) -> f64 {
    ReferenceEngine::new()
        .compute(
            &NoOpObserver::new(),
            0,
            terms,
            &Series::leibniz(),
            &Options::default(),
        )
        .unwrap()
}

fn compute_threaded(terms: u64, threads: usize, chunk_size: u64) -> f64 {
    let opts = Options {
        chunk_size,
        threads,
        ..Options::default()
    };
    ThreadedEngine::new()
        .compute(&NoOpObserver::new(), 0, terms, &Series::leibniz(), &opts)
        .unwrap()
}

// ---------------------------------------------------------------------------
// Golden: reference engine matches the recorded values
// ---------------------------------------------------------------------------

#[test]
fn golden_reference() {
    let data = load_golden_data();
    for entry in &data.values {
        let result = compute_reference(entry.terms);
        assert!(
            (result - entry.result).abs() < 1e-12,
            "Reference mismatch at terms={}: {} vs {}",
            entry.terms,
            result,
            entry.result,
        );
    }
}

// ---------------------------------------------------------------------------
// Golden: threaded engine across configurations
// ---------------------------------------------------------------------------

#[test]
fn golden_threaded_single_thread() {
    let data = load_golden_data();
    for entry in &data.values {
        let result = compute_threaded(entry.terms, 1, entry.terms);
        assert!(
            (result - entry.result).abs() < 1e-9,
            "Threaded (1 thread) mismatch at terms={}: {} vs {}",
            entry.terms,
            result,
            entry.result,
        );
    }
}

#[test]
fn golden_threaded_multi_thread() {
    let data = load_golden_data();
    for entry in &data.values {
        for (threads, chunk_size) in [(2, 64), (4, 100), (8, 1000)] {
            let result = compute_threaded(entry.terms, threads, chunk_size);
            assert!(
                (result - entry.result).abs() < 1e-9,
                "Threaded ({threads} threads, chunk {chunk_size}) mismatch at terms={}: {} vs {}",
                entry.terms,
                result,
                entry.result,
            );
        }
    }
}

#[test]
fn golden_scenario_four_threads_chunk_100() {
    // The documented sample configuration: 1000 terms, 4 threads,
    // chunk size 100 agrees with the single-thread value within 1e-9.
    let single = compute_threaded(1000, 1, 1000);
    let multi = compute_threaded(1000, 4, 100);
    assert!((single - multi).abs() < 1e-9);
    assert!((multi - 3.142_092_403_683_527_4).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Edge cases: boundary values
// ---------------------------------------------------------------------------

#[test]
fn edge_case_single_term() {
    // (1 - 1/3 + 1/5) * 4
    let expected = (1.0 - 1.0 / 3.0 + 1.0 / 5.0) * 4.0;
    assert!((compute_reference(1) - expected).abs() < 1e-12);
    assert!((compute_threaded(1, 4, 100) - expected).abs() < 1e-12);
}

#[test]
fn edge_case_zero_terms_rejected() {
    let engines: Vec<Box<dyn Engine>> = vec![
        Box::new(ThreadedEngine::new()),
        Box::new(ReferenceEngine::new()),
    ];
    for engine in &engines {
        let result = engine.compute(
            &NoOpObserver::new(),
            0,
            0,
            &Series::leibniz(),
            &Options::default().normalize(),
        );
        assert!(
            matches!(result, Err(PiError::Config(_))),
            "{} accepted zero terms",
            engine.name(),
        );
    }
}

// ---------------------------------------------------------------------------
// Cross-engine agreement
// ---------------------------------------------------------------------------

#[test]
fn engines_agree_across_sizes() {
    for terms in [1, 2, 7, 100, 999, 1000, 1001, 10_000] {
        let reference = compute_reference(terms);
        let threaded = compute_threaded(terms, 4, 128);
        assert!(
            (reference - threaded).abs() < 1e-9,
            "engines disagree at terms={terms}: {reference} vs {threaded}"
        );
    }
}
