//! Canned generator: the stand-in for a real generative backend.
//!
//! Suspends for a fixed simulated latency, then resolves with a constant
//! ordered catalog of three themes. Prompt content is accepted but never
//! inspected; there is no network call and no randomness. An injectable
//! fault keeps the callers' error paths honest even though the happy path
//! cannot fail on its own.

use std::time::Duration;

use async_trait::async_trait;
use tinge_core::{Rgb, Theme, ThemeColors, Typography};
use tracing::debug;

use crate::error::{GeneratorError, Result};
use crate::generator::ThemeGenerator;

/// Simulated backend latency when none is configured.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Registry ID the canned generator registers under by default.
pub const CANNED_GENERATOR_ID: &str = "canned";

/// Mocked theme generator with configurable latency and an optional
/// injected fault.
pub struct CannedGenerator {
    latency: Duration,
    fault: Option<String>,
}

impl CannedGenerator {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            fault: None,
        }
    }

    /// Override the simulated latency (e.g. zero for one-shot CLI tests).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Fail every generation with the given message, after the usual delay.
    /// The real backend this stub stands in for can fail; callers must keep
    /// handling that.
    pub fn with_fault(mut self, message: impl Into<String>) -> Self {
        self.fault = Some(message.into());
        self
    }
}

impl Default for CannedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ThemeGenerator for CannedGenerator {
    fn generator_id(&self) -> &str {
        CANNED_GENERATOR_ID
    }

    async fn generate(&self, prompt: &str) -> Result<Vec<Theme>> {
        if prompt.trim().is_empty() {
            return Err(GeneratorError::EmptyPrompt);
        }
        debug!(latency_ms = self.latency.as_millis() as u64, "generating themes");
        tokio::time::sleep(self.latency).await;
        if let Some(message) = &self.fault {
            return Err(GeneratorError::Failed(message.clone()));
        }
        Ok(catalog())
    }
}

/// The fixed ordered catalog every successful generation returns.
pub fn catalog() -> Vec<Theme> {
    vec![
        Theme {
            name: "Midnight Finance".to_string(),
            colors: ThemeColors {
                background: Rgb(0x12, 0x12, 0x12),
                foreground: Rgb(0xf5, 0xf5, 0xf5),
                primary: Rgb(0x38, 0xbd, 0xf8),
                secondary: Rgb(0x1e, 0x29, 0x3b),
                accent: Rgb(0x81, 0x8c, 0xf8),
                muted: Rgb(0x33, 0x41, 0x55),
                card: Rgb(0x1e, 0x1e, 0x1e),
                border: Rgb(0x2a, 0x2a, 0x2a),
            },
            typography: Typography::new("Poppins", "Inter"),
        },
        Theme {
            name: "Deep Ocean".to_string(),
            colors: ThemeColors {
                background: Rgb(0x0f, 0x17, 0x29),
                foreground: Rgb(0xe2, 0xe8, 0xf0),
                primary: Rgb(0x06, 0xb6, 0xd4),
                secondary: Rgb(0x33, 0x41, 0x55),
                accent: Rgb(0x3b, 0x82, 0xf6),
                muted: Rgb(0x1e, 0x29, 0x3b),
                card: Rgb(0x16, 0x20, 0x32),
                border: Rgb(0x1e, 0x29, 0x3b),
            },
            typography: Typography::new("Poppins", "Inter"),
        },
        Theme {
            name: "Corporate Night".to_string(),
            colors: ThemeColors {
                background: Rgb(0x09, 0x09, 0x0b),
                foreground: Rgb(0xfa, 0xfa, 0xfa),
                primary: Rgb(0x22, 0xc5, 0x5e),
                secondary: Rgb(0x27, 0x27, 0x2a),
                accent: Rgb(0xa8, 0x55, 0xf7),
                muted: Rgb(0x27, 0x27, 0x2a),
                card: Rgb(0x18, 0x18, 0x1b),
                border: Rgb(0x27, 0x27, 0x2a),
            },
            typography: Typography::new("Poppins", "Inter"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_three_distinct_named_themes() {
        let themes = catalog();
        assert_eq!(themes.len(), 3);
        assert_eq!(themes[0].name, "Midnight Finance");
        assert_eq!(themes[1].name, "Deep Ocean");
        assert_eq!(themes[2].name, "Corporate Night");
        for theme in &themes {
            assert!(theme.validate().is_ok());
        }
    }

    #[test]
    fn catalog_shares_typography() {
        for theme in catalog() {
            assert_eq!(theme.typography, Typography::new("Poppins", "Inter"));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn generate_resolves_with_catalog_after_delay() {
        let generator = CannedGenerator::new();
        let themes = generator.generate("sleek dark fintech").await.unwrap();
        assert_eq!(themes, catalog());
    }

    #[tokio::test(start_paused = true)]
    async fn generate_ignores_prompt_content() {
        let generator = CannedGenerator::new().with_latency(Duration::ZERO);
        let a = generator.generate("pastel bakery").await.unwrap();
        let b = generator.generate("brutalist terminal").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn empty_prompt_fails_before_the_delay() {
        // No paused clock needed: the error must come back immediately.
        let generator = CannedGenerator::new();
        let err = generator.generate("   ").await.unwrap_err();
        assert!(matches!(err, GeneratorError::EmptyPrompt));
    }

    #[tokio::test(start_paused = true)]
    async fn injected_fault_fails_after_the_delay() {
        let generator = CannedGenerator::new().with_fault("backend unreachable");
        let err = generator.generate("anything").await.unwrap_err();
        assert!(matches!(err, GeneratorError::Failed(ref m) if m == "backend unreachable"));
    }

    #[tokio::test(start_paused = true)]
    async fn latency_is_respected_on_virtual_time() {
        let start = tokio::time::Instant::now();
        let generator = CannedGenerator::new();
        generator.generate("x").await.unwrap();
        assert!(start.elapsed() >= DEFAULT_LATENCY);
    }
}
