//! Error type for `folio-auth`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
  /// Registration with an email that exactly matches an existing user's.
  #[error("email already registered")]
  DuplicateEmail,

  /// Login failure. Deliberately identical for "no such user" and "wrong
  /// password" so callers cannot tell which part was wrong.
  #[error("invalid credentials")]
  InvalidCredentials,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl AuthError {
  /// Wrap a store-level failure.
  pub fn store<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = AuthError> = std::result::Result<T, E>;
