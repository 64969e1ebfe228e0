//! Engine factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::engine::{Engine, PiError};
use crate::reference::ReferenceEngine;
use crate::threaded::ThreadedEngine;

/// Factory trait for creating engines.
pub trait EngineFactory: Send + Sync {
    /// Get or create an engine by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Engine>, PiError>;

    /// List all available engine names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Engine>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_engine(name: &str) -> Result<Arc<dyn Engine>, PiError> {
        match name {
            "threaded" => Ok(Arc::new(ThreadedEngine::new())),
            "reference" | "ref" => Ok(Arc::new(ReferenceEngine::new())),
            _ => Err(PiError::Config(format!("unknown engine: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Engine>, PiError> {
        // Check cache first
        if let Some(engine) = self.cache.read().get(name) {
            return Ok(Arc::clone(engine));
        }

        // Create and cache
        let engine = Self::create_engine(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&engine));
        Ok(engine)
    }

    fn available(&self) -> Vec<&str> {
        vec!["threaded", "reference"]
    }
}
