//! PiCalc-rs — High-performance Leibniz-series π approximator.

use picalc_core::constants::exit_codes;
use picalc_core::engine::PiError;
use picalc_lib::{app, config, errors};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        eprintln!("Error: {err:#}");
        let code = err
            .downcast_ref::<PiError>()
            .map_or(exit_codes::ERROR_GENERIC, errors::exit_code);
        std::process::exit(code);
    }
}
