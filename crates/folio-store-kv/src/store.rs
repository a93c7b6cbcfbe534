//! [`KvStore`] — the key-value implementation of [`Store`].

use serde::{Serialize, de::DeserializeOwned};

use folio_core::{Message, Project, Session, Store, User};

use crate::{Result, backend::KvBackend, keys};

/// A Folio store persisting each collection as one JSON blob in a
/// [`KvBackend`].
///
/// Cloning is as cheap as cloning the backend (reference-counted for the
/// provided implementations).
#[derive(Clone)]
pub struct KvStore<B> {
  backend: B,
}

impl<B: KvBackend> KvStore<B> {
  pub fn new(backend: B) -> Self {
    Self { backend }
  }

  /// Read and decode the value under `key`.
  ///
  /// An absent key is `None`. Corrupt JSON is logged and also reported as
  /// `None` — by contract the caller treats that as the empty collection,
  /// and the next save repairs the key.
  fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
    let raw = self.backend.get_item(key)?;
    match serde_json::from_str(&raw) {
      Ok(value) => Some(value),
      Err(e) => {
        tracing::error!(key, error = %e, "storage decode error, treating as empty");
        None
      }
    }
  }

  fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    self.backend.set_item(key, &raw)?;
    Ok(())
  }
}

impl<B: KvBackend> Store for KvStore<B> {
  type Error = crate::Error;

  fn users(&self) -> Result<Vec<User>> {
    Ok(self.read(keys::USERS).unwrap_or_default())
  }

  fn save_users(&self, users: &[User]) -> Result<()> {
    self.write(keys::USERS, &users)
  }

  fn projects(&self) -> Result<Vec<Project>> {
    Ok(self.read(keys::PROJECTS).unwrap_or_default())
  }

  fn save_projects(&self, projects: &[Project]) -> Result<()> {
    self.write(keys::PROJECTS, &projects)
  }

  fn messages(&self) -> Result<Vec<Message>> {
    Ok(self.read(keys::MESSAGES).unwrap_or_default())
  }

  fn save_messages(&self, messages: &[Message]) -> Result<()> {
    self.write(keys::MESSAGES, &messages)
  }

  fn session(&self) -> Result<Option<Session>> {
    Ok(self.read(keys::SESSION))
  }

  fn set_session(&self, session: &Session) -> Result<()> {
    self.write(keys::SESSION, session)
  }

  fn clear_session(&self) -> Result<()> {
    self.backend.remove_item(keys::SESSION)?;
    Ok(())
  }
}
