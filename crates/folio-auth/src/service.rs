//! [`AuthService`] — registration, login, and session resolution.

use chrono::Utc;
use uuid::Uuid;

use folio_core::{Session, Store, User};

use crate::{
  Result,
  digest::password_digest,
  error::AuthError,
};

/// Identity issuance and session lifecycle over any [`Store`].
///
/// Cloning is as cheap as cloning the store handle.
#[derive(Clone)]
pub struct AuthService<S> {
  store: S,
}

impl<S: Store> AuthService<S> {
  pub fn new(store: S) -> Self {
    Self { store }
  }

  /// Register a new account and sign it in.
  ///
  /// Fails with [`AuthError::DuplicateEmail`] when an existing user's email
  /// matches exactly (case-sensitive, no normalisation); the users
  /// collection is left untouched in that case. On success the new user is
  /// appended and a session bound to it replaces any existing one.
  ///
  /// The returned [`User`] includes the credential digest; callers must not
  /// expose it.
  pub fn register(&self, email: &str, password: &str, name: &str) -> Result<User> {
    let mut users = self.store.users().map_err(AuthError::store)?;

    if users.iter().any(|u| u.email == email) {
      return Err(AuthError::DuplicateEmail);
    }

    let name = (!name.trim().is_empty()).then(|| name.to_owned());
    let user = User {
      id:              Uuid::new_v4(),
      email:           email.to_owned(),
      slug:            User::derive_slug(name.as_deref(), email),
      name,
      password_digest: password_digest(password),
      created_at:      Utc::now(),
    };

    users.push(user.clone());
    self.store.save_users(&users).map_err(AuthError::store)?;
    self
      .store
      .set_session(&Session::new(user.id))
      .map_err(AuthError::store)?;

    tracing::info!(user_id = %user.id, slug = %user.slug, "registered user");
    Ok(user)
  }

  /// Sign in with email and password.
  ///
  /// Fails with [`AuthError::InvalidCredentials`] whether the email is
  /// unknown or the password digest mismatches; the session is unchanged on
  /// failure.
  pub fn login(&self, email: &str, password: &str) -> Result<User> {
    let users = self.store.users().map_err(AuthError::store)?;
    let user = users
      .into_iter()
      .find(|u| u.email == email)
      .ok_or(AuthError::InvalidCredentials)?;

    if password_digest(password) != user.password_digest {
      return Err(AuthError::InvalidCredentials);
    }

    self
      .store
      .set_session(&Session::new(user.id))
      .map_err(AuthError::store)?;

    tracing::info!(user_id = %user.id, "signed in");
    Ok(user)
  }

  /// Clear the session. Idempotent; signing out while signed out is fine.
  pub fn logout(&self) -> Result<()> {
    self.store.clear_session().map_err(AuthError::store)?;
    tracing::debug!("signed out");
    Ok(())
  }

  /// Resolve the session against the users collection.
  ///
  /// Absent when there is no session *or* when the referenced user no
  /// longer exists (a dangling session behaves as signed-out).
  pub fn current_user(&self) -> Result<Option<User>> {
    let Some(session) = self.store.session().map_err(AuthError::store)? else {
      return Ok(None);
    };
    let users = self.store.users().map_err(AuthError::store)?;
    Ok(users.into_iter().find(|u| u.id == session.user_id))
  }
}

#[cfg(test)]
mod tests {
  use folio_core::Store;
  use folio_store_kv::{KvStore, MemoryBackend};

  use super::*;

  fn service() -> AuthService<KvStore<MemoryBackend>> {
    AuthService::new(KvStore::new(MemoryBackend::new()))
  }

  #[test]
  fn register_then_current_user() {
    let auth = service();
    let user = auth.register("a@x.com", "secret1", "A").unwrap();

    assert_eq!(user.email, "a@x.com");
    assert_ne!(user.password_digest, "secret1");

    let current = auth.current_user().unwrap().unwrap();
    assert_eq!(current.id, user.id);
    assert_eq!(current.email, "a@x.com");
  }

  #[test]
  fn register_duplicate_email_leaves_users_untouched() {
    let auth = service();
    auth.register("a@x.com", "one", "First").unwrap();

    let err = auth.register("a@x.com", "two", "Second").unwrap_err();
    assert!(matches!(err, AuthError::DuplicateEmail));

    let users = auth.store.users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name.as_deref(), Some("First"));
  }

  #[test]
  fn email_match_is_case_sensitive() {
    let auth = service();
    auth.register("a@x.com", "one", "").unwrap();
    // A different casing registers as a distinct account.
    auth.register("A@x.com", "two", "").unwrap();
    assert_eq!(auth.store.users().unwrap().len(), 2);
  }

  #[test]
  fn login_success_and_failure() {
    let auth = service();
    auth.register("a@x.com", "secret1", "A").unwrap();
    auth.logout().unwrap();

    let user = auth.login("a@x.com", "secret1").unwrap();
    assert_eq!(user.email, "a@x.com");

    assert!(matches!(
      auth.login("a@x.com", "wrong").unwrap_err(),
      AuthError::InvalidCredentials
    ));
    assert!(matches!(
      auth.login("nobody@x.com", "secret1").unwrap_err(),
      AuthError::InvalidCredentials
    ));
  }

  #[test]
  fn failed_login_leaves_session_unchanged() {
    let auth = service();
    let user = auth.register("a@x.com", "secret1", "A").unwrap();

    auth.login("a@x.com", "wrong").unwrap_err();
    let current = auth.current_user().unwrap().unwrap();
    assert_eq!(current.id, user.id);

    auth.logout().unwrap();
    auth.login("a@x.com", "wrong").unwrap_err();
    assert!(auth.current_user().unwrap().is_none());
  }

  #[test]
  fn logout_is_idempotent() {
    let auth = service();
    auth.register("a@x.com", "secret1", "A").unwrap();
    auth.logout().unwrap();
    auth.logout().unwrap();
    assert!(auth.current_user().unwrap().is_none());
  }

  #[test]
  fn dangling_session_resolves_to_none() {
    let auth = service();
    auth.register("a@x.com", "secret1", "A").unwrap();

    // Wipe the users collection while the session still points at the user.
    auth.store.save_users(&[]).unwrap();
    assert!(auth.current_user().unwrap().is_none());
    // The session record itself is left in place.
    assert!(auth.store.session().unwrap().is_some());
  }

  #[test]
  fn empty_name_stored_as_none_and_slug_from_email() {
    let auth = service();
    let user = auth.register("ada@x.com", "pw", "  ").unwrap();
    assert!(user.name.is_none());
    assert_eq!(user.slug, "adaxcom");
  }
}
