//! The studio: session-scoped selection state for generated themes.
//!
//! Owns the three observable fields — active theme, candidate batch,
//! in-flight flag — and is the only writer of them. A single driver task
//! owns the `Studio` and applies UI commands sequentially; the in-flight
//! flag additionally rejects re-entrant submissions, and a sequence number
//! makes a superseded generation's result stale so it can never overwrite
//! fresher state.
//!
//! Every mutation publishes a [StudioEvent]; subscribers re-read the state
//! they care about from the events.

use std::sync::Arc;

use tinge_core::{StudioEvent, Theme};
use tinge_generators::ThemeGenerator;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::error::{Result, StudioError};

/// Handle for an in-flight generation. Produced by
/// [Studio::begin_generation]; stale once the studio moves on (cancel or a
/// newer request).
#[derive(Debug)]
pub struct GenerationTicket {
    seq: u64,
}

/// Session-scoped theme selection state.
pub struct Studio {
    /// The theme currently rendered by all preview surfaces.
    active: Theme,
    /// Most recently generated batch; kept until the next generation.
    candidates: Vec<Theme>,
    /// True strictly between the start of a submission and its resolution.
    generating: bool,
    /// Bumped on every begin/cancel; a completion with an older value is stale.
    seq: u64,
    /// Generation backend (swappable; see tinge_generators).
    generator: Arc<dyn ThemeGenerator>,
    /// Event channel for publishing state changes.
    event_tx: mpsc::Sender<StudioEvent>,
}

impl Studio {
    /// New studio with the default theme active, no candidates, idle.
    pub fn new(generator: Arc<dyn ThemeGenerator>, event_tx: mpsc::Sender<StudioEvent>) -> Self {
        Self {
            active: Theme::dark_fintech(),
            candidates: Vec::new(),
            generating: false,
            seq: 0,
            generator,
            event_tx,
        }
    }

    pub fn active_theme(&self) -> &Theme {
        &self.active
    }

    pub fn candidates(&self) -> &[Theme] {
        &self.candidates
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Submit a prompt and wait for the batch: begin, generate, complete.
    ///
    /// Rejected with [StudioError::Busy] while a previous submission is in
    /// flight (the policy is reject, never queue). On failure the active
    /// theme and candidates keep their last-known-good values.
    pub async fn submit_prompt(&mut self, prompt: &str) -> Result<()> {
        let ticket = self.begin_generation(prompt)?;
        let generator = Arc::clone(&self.generator);
        let result = generator.generate(prompt).await;
        self.complete_generation(ticket, result)
    }

    /// Mark a generation as started: sets the in-flight flag and publishes
    /// [StudioEvent::GenerationStarted]. The caller drives the generator and
    /// hands the outcome to [Studio::complete_generation].
    pub fn begin_generation(&mut self, prompt: &str) -> Result<GenerationTicket> {
        if self.generating {
            return Err(StudioError::Busy);
        }
        self.generating = true;
        self.seq += 1;
        self.publish(StudioEvent::generation_started(prompt));
        Ok(GenerationTicket { seq: self.seq })
    }

    /// Apply a generation outcome. A stale ticket (superseded by cancel or a
    /// newer request) is dropped without touching any state — last request
    /// wins. On success the batch replaces the previous one and its first
    /// theme becomes active.
    pub fn complete_generation(
        &mut self,
        ticket: GenerationTicket,
        result: tinge_generators::Result<Vec<Theme>>,
    ) -> Result<()> {
        if ticket.seq != self.seq {
            warn!(stale_seq = ticket.seq, current_seq = self.seq, "dropping stale generation result");
            return Ok(());
        }
        self.generating = false;
        let themes = match result {
            Ok(themes) => themes,
            Err(e) => {
                self.publish(StudioEvent::generation_failed(e.to_string()));
                return Err(e.into());
            }
        };
        let Some(first) = themes.first() else {
            self.publish(StudioEvent::generation_failed(StudioError::EmptyBatch.to_string()));
            return Err(StudioError::EmptyBatch);
        };
        info!(count = themes.len(), active = %first.name, "themes generated");
        self.active = first.clone();
        self.candidates = themes.clone();
        self.publish(StudioEvent::themes_generated(themes));
        Ok(())
    }

    /// Abandon the in-flight generation, if any. The pending result becomes
    /// stale; a new submission may start immediately.
    pub fn cancel_generation(&mut self) {
        if !self.generating {
            return;
        }
        self.generating = false;
        self.seq += 1;
        self.publish(StudioEvent::generation_cancelled());
    }

    /// Make `candidates[index]` the active theme. The batch itself is
    /// unchanged; selecting is repeatable.
    pub fn select_candidate(&mut self, index: usize) -> Result<&Theme> {
        let len = self.candidates.len();
        let theme = self
            .candidates
            .get(index)
            .ok_or(StudioError::NoSuchCandidate { index, len })?;
        self.active = theme.clone();
        self.publish(StudioEvent::theme_selected(self.active.clone()));
        Ok(&self.active)
    }

    /// Best-effort publish: a full or closed channel drops the event rather
    /// than blocking state mutation.
    fn publish(&self, event: StudioEvent) {
        let _ = self.event_tx.try_send(event);
    }
}
