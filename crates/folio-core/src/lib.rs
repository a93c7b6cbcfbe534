//! Core types and trait definitions for the Folio portfolio engine.
//!
//! This crate is deliberately free of storage and I/O dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod message;
pub mod project;
pub mod session;
pub mod slug;
pub mod store;
pub mod user;

pub use message::Message;
pub use project::{Project, ProjectDraft, Visibility, GALLERY_LIMIT};
pub use session::Session;
pub use store::Store;
pub use user::User;
