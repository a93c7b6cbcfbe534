//! User — a registered account.
//!
//! Users are created on registration and never deleted. The credential is
//! stored only as a one-way digest; the raw secret never reaches the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slug::slugify;

/// A registered account.
///
/// `email` is the unique lookup key (exact-match, case-sensitive — no
/// normalisation). `slug` is the public-profile key; it is derived from the
/// display name (or the email when no name was given) and is *not*
/// guaranteed unique across collisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub id:              Uuid,
  pub email:           String,
  pub name:            Option<String>,
  /// Hex-encoded one-way digest of the password. Callers that surface a
  /// `User` must not expose this field.
  pub password_digest: String,
  pub slug:            String,
  pub created_at:      DateTime<Utc>,
}

impl User {
  /// The string shown wherever the user is attributed: the display name if
  /// present, otherwise the email.
  pub fn display_name(&self) -> &str {
    self.name.as_deref().unwrap_or(&self.email)
  }

  /// Derive the public-profile slug for a (name, email) pair.
  ///
  /// The name wins when present and non-empty; collisions are possible and
  /// deliberately left unresolved.
  pub fn derive_slug(name: Option<&str>, email: &str) -> String {
    match name {
      Some(n) if !n.trim().is_empty() => slugify(n),
      _ => slugify(email),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn slug_prefers_name_over_email() {
    assert_eq!(User::derive_slug(Some("Ada Lovelace"), "ada@x.com"), "ada-lovelace");
  }

  #[test]
  fn slug_falls_back_to_email_when_name_empty() {
    assert_eq!(User::derive_slug(Some("   "), "ada@x.com"), "adaxcom");
    assert_eq!(User::derive_slug(None, "ada@x.com"), "adaxcom");
  }
}
