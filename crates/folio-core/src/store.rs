//! The `Store` trait — the persistence capability interface.
//!
//! The trait is implemented by storage backends (e.g. `folio-store-kv`).
//! Higher layers (`folio-auth`, `folio-app`) depend on this abstraction, not
//! on any concrete backend, so a remote adapter can be swapped in at startup
//! without touching them.

use crate::{Message, Project, Session, User};

/// Abstraction over a Folio persistence backend: four logical collections
/// (users, projects, messages, session) read and written whole.
///
/// Semantics every implementation must honour:
///
/// - `save_*` overwrites the entire collection in one write; there is no
///   partial-write recovery.
/// - Every write is visible to any subsequent read in the same scope. No
///   locking, versioning, or transactions exist — interleaved
///   read-modify-write sequences against the same collection can lose
///   updates (last write wins).
/// - A read that finds corrupt data degrades to the empty collection (or an
///   absent session) rather than erroring; callers cannot distinguish
///   "empty" from "was corrupted".
pub trait Store {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Users ─────────────────────────────────────────────────────────────

  fn users(&self) -> Result<Vec<User>, Self::Error>;
  fn save_users(&self, users: &[User]) -> Result<(), Self::Error>;

  // ── Projects ──────────────────────────────────────────────────────────

  fn projects(&self) -> Result<Vec<Project>, Self::Error>;
  fn save_projects(&self, projects: &[Project]) -> Result<(), Self::Error>;

  // ── Messages ──────────────────────────────────────────────────────────

  fn messages(&self) -> Result<Vec<Message>, Self::Error>;
  fn save_messages(&self, messages: &[Message]) -> Result<(), Self::Error>;

  // ── Session ───────────────────────────────────────────────────────────

  fn session(&self) -> Result<Option<Session>, Self::Error>;
  fn set_session(&self, session: &Session) -> Result<(), Self::Error>;
  /// Idempotent: clearing an absent session is not an error.
  fn clear_session(&self) -> Result<(), Self::Error>;
}
