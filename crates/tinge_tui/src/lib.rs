//! tinge-tui — terminal front end for tinge.studio.
//!
//! Chrome styling in [styles] (derived from the active theme); layout in
//! [layouts]; panels in [panels]; state and view in [state] and [view].
//! Run with [run_tui].

pub mod events;
pub mod layouts;
pub mod panels;
pub mod run;
pub mod state;
pub mod styles;
pub mod view;

pub use run::run_tui;
pub use state::{Screen, StudioViewState};
pub use view::draw as draw_view;
