//! Presentation layer for step-by-step bisection.
//!
//! The solver produces a complete trace up front; this crate replays it.
//!
//! - [`Settings`] — the user's inputs, loadable from TOML
//! - [`Session`] — runs solves and keeps the last successful trace
//! - [`TraceViewer`] — a cursor over one trace, with forward/backward navigation
//! - [`Command`] — commands understood by the interactive stepper
//! - [`render`] — plain-text formatting of steps, tables, and results

mod command;
mod session;
mod settings;
mod viewer;

pub mod render;

pub use command::{Command, CommandError};
pub use session::{Session, SessionError};
pub use settings::{Overrides, Settings, SettingsError};
pub use viewer::TraceViewer;
