//! Studio configuration

use std::time::Duration;

/// Default prompt hint shown in the prompt form.
pub const DEFAULT_PROMPT: &str = "Give me a sleek dark mode palette for a fintech dashboard.";

/// Studio configuration
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Generator ID to look up in the registry
    pub generator: String,
    /// Override for the generator's simulated latency (None = generator default)
    pub latency: Option<Duration>,
    /// Prompt pre-filled in the prompt form
    pub default_prompt: String,
}

impl StudioConfig {
    pub fn new() -> Self {
        Self {
            generator: "canned".to_string(),
            latency: None,
            default_prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn with_default_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.default_prompt = prompt.into();
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(generator) = std::env::var("TINGE_GENERATOR") {
            if !generator.trim().is_empty() {
                config.generator = generator;
            }
        }

        if let Ok(latency) = std::env::var("TINGE_LATENCY_MS") {
            if let Ok(ms) = latency.parse::<u64>() {
                config.latency = Some(Duration::from_millis(ms));
            }
        }

        if let Ok(prompt) = std::env::var("TINGE_PROMPT") {
            if !prompt.trim().is_empty() {
                config.default_prompt = prompt;
            }
        }

        config
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = StudioConfig::new();
        assert_eq!(config.generator, "canned");
        assert_eq!(config.latency, None);
        assert_eq!(config.default_prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn builder_overrides() {
        let config = StudioConfig::new()
            .with_generator("real-backend")
            .with_latency(Duration::from_millis(10))
            .with_default_prompt("neon arcade");

        assert_eq!(config.generator, "real-backend");
        assert_eq!(config.latency, Some(Duration::from_millis(10)));
        assert_eq!(config.default_prompt, "neon arcade");
    }
}
