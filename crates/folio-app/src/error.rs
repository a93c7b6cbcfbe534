//! Error type for `folio-app`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("auth error: {0}")]
  Auth(#[from] folio_auth::AuthError),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// An action that needs a signed-in user was attempted without one.
  #[error("not signed in")]
  NotSignedIn,
}

impl Error {
  /// Wrap a store-level failure.
  pub fn store<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
