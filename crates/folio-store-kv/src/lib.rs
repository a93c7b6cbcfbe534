//! Key-value backend for the Folio store.
//!
//! Persists each collection as a JSON blob under a well-known key, through a
//! small mapping abstraction ([`KvBackend`]) with in-memory and on-disk
//! implementations. This mirrors the browser-storage model the engine grew
//! out of: whole-collection reads and writes, last write wins.

mod backend;
mod keys;
mod store;

pub mod error;

pub use backend::{DirBackend, KvBackend, MemoryBackend};
pub use error::{Error, Result};
pub use store::KvStore;

#[cfg(test)]
mod tests;
