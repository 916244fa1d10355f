//! Command dispatch.

pub mod catalog;
pub mod contrast;
pub mod generate;
pub mod tui;

use anyhow::Result;
use tinge_generators::{CannedGenerator, GeneratorRegistry, CANNED_GENERATOR_ID};
use tinge_studio::StudioConfig;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Tui {
            generator,
            latency_ms,
        } => tui::handle(generator, latency_ms).await,
        Command::Generate {
            prompt,
            generator,
            latency_ms,
            fault,
        } => generate::handle(prompt, generator, latency_ms, fault).await,
        Command::Contrast { color } => contrast::handle(&color),
        Command::Catalog => catalog::handle(),
    }
}

/// Build the generator registry: every known backend, configured from
/// [StudioConfig]. Currently the canned stub; real backends register here.
pub fn build_registry(config: &StudioConfig) -> GeneratorRegistry {
    let mut canned = CannedGenerator::new();
    if let Some(latency) = config.latency {
        canned = canned.with_latency(latency);
    }
    GeneratorRegistry::new().register(CANNED_GENERATOR_ID, canned)
}
