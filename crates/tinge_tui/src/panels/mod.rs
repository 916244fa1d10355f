//! Studio panels, each self-contained: build styled [ratatui::text::Line]s
//! from a [tinge_core::Theme] and render them into a region.
//!
//! - **[candidates]** — Generated theme cards with mini swatch strips.
//! - **[palette]** — The eight color slot rows with contrast-aware swatches.
//! - **[typography]** — Heading and body font families.
//! - **[preview]** — Mock finance dashboard rendered in the active theme.

pub mod candidates;
pub mod palette;
pub mod preview;
pub mod typography;
