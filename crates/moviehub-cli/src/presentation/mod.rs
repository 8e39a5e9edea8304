//! # Presentation Layer
//!
//! CLI output follows a strict one-way flow:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(json)==> serde_json
//!                                                                 ==(plain)==> [ View ]
//! ```
//!
//! Rules kept from the pattern:
//! - ViewModels carry raw data, not formatted strings; `--format json`
//!   always dumps the complete view model.
//! - Views own layout, styling and truncation; they implement
//!   `fmt::Display` over a borrowed view model.
//! - Presenters are pure conversions from domain types to view models and
//!   never touch formatters.
//! - Color is decided once by the renderer (TTY check) and passed into
//!   views, so piped output stays escape-free.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::ConsoleRenderer;
