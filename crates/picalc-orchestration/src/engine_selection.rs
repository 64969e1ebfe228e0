//! Engine selection logic.

use std::sync::Arc;

use picalc_core::engine::{Engine, PiError};
use picalc_core::registry::EngineFactory;

/// Get engines to run based on the selection string.
pub fn get_engines_to_run(
    selection: &str,
    factory: &dyn EngineFactory,
) -> Result<Vec<Arc<dyn Engine>>, PiError> {
    match selection {
        "all" => {
            let names = factory.available();
            let mut engines = Vec::new();
            for name in names {
                engines.push(factory.get(name)?);
            }
            Ok(engines)
        }
        name => {
            let engine = factory.get(name)?;
            Ok(vec![engine])
        }
    }
}
