//! Application entry point and dispatch.

use anyhow::Result;

use picalc_cli::output::write_to_file;
use picalc_cli::presenter::CLIResultPresenter;
use picalc_core::constants::COMPARE_TOLERANCE;
use picalc_core::options::Options;
use picalc_core::registry::DefaultFactory;
use picalc_core::series::Series;
use picalc_orchestration::engine_selection::get_engines_to_run;
use picalc_orchestration::interfaces::ResultPresenter;
use picalc_orchestration::orchestrator::{
    analyze_comparison_results, execute_computations,
};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        picalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = Options {
        chunk_size: config.chunk_size,
        threads: config.threads,
        verbose: config.verbose,
        details: config.details,
    }
    .normalize();

    let series = Series::with_params(config.p1, config.p2);

    // Fail fast on invalid configuration before any worker is spawned
    series.validate(config.terms)?;

    let factory = DefaultFactory::new();
    let engines = get_engines_to_run(&config.engine, &factory)?;

    let results = execute_computations(&engines, config.terms, &series, &opts);

    // Cross-check engines when more than one ran
    if results.len() > 1 {
        if let Err(e) = analyze_comparison_results(&results, COMPARE_TOLERANCE) {
            eprintln!("Warning: {e}");
        }
    }

    // Present results
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    let mut first_error = None;
    for result in &results {
        match &result.outcome {
            Ok(value) => presenter.present_result(
                &result.engine,
                config.terms,
                *value,
                result.duration,
                config.details,
            ),
            Err(error) => {
                if first_error.is_none() {
                    first_error = Some(error.clone());
                }
            }
        }
    }

    // Present comparison if multiple
    if results.len() > 1 {
        presenter.present_comparison(&results);
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        if let Some(value) = results.iter().find_map(|r| r.outcome.as_ref().ok()) {
            write_to_file(path, *value)?;
        }
    }

    // Any engine failure invalidates the run
    if let Some(error) = first_error {
        return Err(error.into());
    }

    Ok(())
}
