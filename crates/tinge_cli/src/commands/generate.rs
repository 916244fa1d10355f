//! `tinge generate` — one-shot generation, printed as tables or JSON.

use std::time::Duration;

use anyhow::Result;
use tinge_core::Theme;
use tinge_generators::{CannedGenerator, GeneratorRegistry, CANNED_GENERATOR_ID};
use tinge_studio::StudioConfig;

use crate::output;

pub async fn handle(
    prompt: Option<String>,
    generator: Option<String>,
    latency_ms: Option<u64>,
    fault: Option<String>,
) -> Result<()> {
    let mut config = StudioConfig::from_env();
    if let Some(g) = generator {
        config = config.with_generator(g);
    }
    if let Some(ms) = latency_ms {
        config = config.with_latency(Duration::from_millis(ms));
    }
    let prompt = prompt.unwrap_or_else(|| config.default_prompt.clone());

    // Built here rather than via build_registry so --fault can reach the stub.
    let mut canned = CannedGenerator::new();
    if let Some(latency) = config.latency {
        canned = canned.with_latency(latency);
    }
    if let Some(message) = fault {
        canned = canned.with_fault(message);
    }
    let registry = GeneratorRegistry::new().register(CANNED_GENERATOR_ID, canned);
    let generator = registry.get_generator(&config.generator)?;

    let spinner = output::spinner("Generating themes…");
    match generator.generate(&prompt).await {
        Ok(themes) => {
            output::spinner_success(&spinner, &format!("{} themes generated", themes.len()));
            if output::is_json() {
                output::data("themes", &themes);
            } else {
                for theme in &themes {
                    print_theme(theme);
                }
            }
            Ok(())
        }
        Err(e) => {
            output::spinner_error(&spinner, &e.to_string());
            Err(e.into())
        }
    }
}

/// Print one theme: slot table with the readable text color per slot.
pub fn print_theme(theme: &Theme) {
    output::header(&theme.name);
    let mut table = output::table();
    output::table_header(&mut table, &["Slot", "Color", "Text on", "Role"]);
    for (label, description, color) in theme.colors.slots() {
        output::table_row(
            &mut table,
            &[label, &color.to_hex(), &color.contrast().to_hex(), description],
        );
    }
    println!("{table}");
    output::kv(
        "Typography",
        &format!(
            "{} · {}",
            theme.typography.heading_font, theme.typography.body_font
        ),
    );
    println!();
}
