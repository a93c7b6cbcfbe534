//! Fragment router for Folio.
//!
//! Maps location fragments (`#/u/alice`) to registered handlers with named
//! path captures. Patterns compile once at registration into a sequence of
//! literal/capture segment matchers; dispatch tests them in registration
//! order and the first structural match wins.

pub mod pattern;
pub mod router;

pub use pattern::{Pattern, Segment};
pub use router::{Dispatcher, RouteContext, Router};
