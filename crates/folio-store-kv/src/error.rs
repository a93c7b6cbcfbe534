//! Error type for `folio-store-kv`.
//!
//! Only *writes* surface errors. Read-side failures (missing key, corrupt
//! JSON, unreadable file) degrade to the empty collection by contract — see
//! [`folio_core::Store`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("backend write error: {0}")]
  Io(#[from] std::io::Error),

  #[error("json encode error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
