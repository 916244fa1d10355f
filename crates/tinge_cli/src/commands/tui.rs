//! `tinge tui` — run the interactive studio TUI.
//!
//! The TUI never touches the studio directly: a driver task owns the
//! [Studio], applies [StudioCommand]s sequentially, and publishes
//! [StudioEvent]s back. Generations run on a separate task so a cancel or
//! a newer submission can make an in-flight result stale mid-delay.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tinge_core::{StudioCommand, StudioEvent};
use tinge_generators::ThemeGenerator;
use tinge_observability::{init, LogSink, ObservabilityConfig};
use tinge_studio::{Studio, StudioConfig, StudioError};
use tinge_tui::run_tui;
use tokio::sync::mpsc;

use crate::commands::build_registry;
use crate::output;

async fn run_driver_loop(
    mut studio: Studio,
    generator: Arc<dyn ThemeGenerator>,
    event_tx: mpsc::Sender<StudioEvent>,
    mut command_rx: mpsc::Receiver<StudioCommand>,
) {
    let (result_tx, mut result_rx) = mpsc::channel(8);
    loop {
        tokio::select! {
            cmd = command_rx.recv() => {
                let cmd = match cmd {
                    Some(c) => c,
                    None => break,
                };
                match cmd {
                    StudioCommand::Submit { prompt } => {
                        match studio.begin_generation(&prompt) {
                            Ok(ticket) => {
                                let generator = Arc::clone(&generator);
                                let result_tx = result_tx.clone();
                                tokio::spawn(async move {
                                    let result = generator.generate(&prompt).await;
                                    let _ = result_tx.send((ticket, result)).await;
                                });
                            }
                            Err(StudioError::Busy) => {
                                let _ = event_tx
                                    .try_send(StudioEvent::status("A generation is already in flight"));
                            }
                            Err(e) => {
                                let _ = event_tx.try_send(StudioEvent::status(e.to_string()));
                            }
                        }
                    }
                    StudioCommand::Select { index } => {
                        if let Err(e) = studio.select_candidate(index) {
                            let _ = event_tx.try_send(StudioEvent::status(e.to_string()));
                        }
                    }
                    StudioCommand::Cancel => studio.cancel_generation(),
                }
            }
            result = result_rx.recv() => {
                if let Some((ticket, result)) = result {
                    // Failure is already published as an event; stale results are dropped.
                    let _ = studio.complete_generation(ticket, result);
                }
            }
        }
    }
}

pub async fn handle(generator: Option<String>, latency_ms: Option<u64>) -> Result<()> {
    // Channel for runtime logs → TUI logs screen (Ctrl+D)
    let (log_tx, log_rx) = mpsc::channel::<String>(512);
    let log_sink: LogSink = Arc::new(move |line| {
        let _ = log_tx.try_send(line);
    });

    // Init tracing without console; the TUI owns the terminal.
    let obs_config = ObservabilityConfig::from_env()
        .with_console(false)
        .with_log_sink(log_sink);
    if let Err(e) = init(obs_config) {
        output::warning(&format!("Observability init failed (continuing): {}", e));
    }

    let mut config = StudioConfig::from_env();
    if let Some(g) = generator {
        config = config.with_generator(g);
    }
    if let Some(ms) = latency_ms {
        config = config.with_latency(Duration::from_millis(ms));
    }

    let generator = build_registry(&config).get_generator(&config.generator)?;

    let (event_tx, event_rx) = mpsc::channel(256);
    let (command_tx, command_rx) = mpsc::channel::<StudioCommand>(64);
    let studio = Studio::new(Arc::clone(&generator), event_tx.clone());

    tokio::spawn(run_driver_loop(studio, generator, event_tx, command_rx));

    run_tui(event_rx, command_tx, Some(log_rx))?;
    Ok(())
}
