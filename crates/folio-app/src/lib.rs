//! View dispatch for Folio.
//!
//! Wires the router to the store and auth service: each route handler reads
//! through those capabilities and produces a structured [`View`]. Rendering
//! the views (DOM, terminal, anything) is the embedder's concern; the demo
//! binary in this crate prints them as plain text.

pub mod app;
pub mod error;
pub mod views;

pub use app::App;
pub use error::{Error, Result};
pub use views::{Outcome, View};
