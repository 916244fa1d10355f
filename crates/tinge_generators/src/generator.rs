//! Generator trait and registry

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tinge_core::Theme;

use crate::error::{GeneratorError, Result};

/// A theme generation backend: free-text prompt in, ordered list of fully
/// specified themes out. Asynchronous and fallible so a real generative
/// backend can slot in without touching the selection state.
#[async_trait]
pub trait ThemeGenerator: Send + Sync {
    /// Stable identifier used for registry lookup and configuration.
    fn generator_id(&self) -> &str;

    /// Produce an ordered batch of candidate themes for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<Vec<Theme>>;
}

/// Registry of generator implementations, keyed by generator ID.
#[derive(Default, Clone)]
pub struct GeneratorRegistry {
    generators: HashMap<String, Arc<dyn ThemeGenerator>>,
}

impl GeneratorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator under the given ID. Returns `self` for chaining.
    pub fn register<G: ThemeGenerator + 'static>(
        mut self,
        id: impl Into<String>,
        generator: G,
    ) -> Self {
        self.generators.insert(id.into(), Arc::new(generator));
        self
    }

    /// Look up a generator by ID.
    pub fn get_generator(&self, id: &str) -> Result<Arc<dyn ThemeGenerator>> {
        self.generators
            .get(id)
            .cloned()
            .ok_or_else(|| GeneratorError::GeneratorNotFound(id.to_string()))
    }

    /// List all registered generator IDs.
    pub fn list_generators(&self) -> Vec<String> {
        self.generators.keys().cloned().collect()
    }
}
