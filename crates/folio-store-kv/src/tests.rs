//! Integration tests for `KvStore` against the in-memory backend.

use chrono::Utc;
use uuid::Uuid;

use folio_core::{Message, Project, Session, Store, User, Visibility};

use crate::{DirBackend, KvBackend, KvStore, MemoryBackend, keys};

fn store() -> KvStore<MemoryBackend> {
  KvStore::new(MemoryBackend::new())
}

fn user(email: &str) -> User {
  User {
    id:              Uuid::new_v4(),
    email:           email.to_owned(),
    name:            None,
    password_digest: "digest".to_owned(),
    slug:            folio_core::slug::slugify(email),
    created_at:      Utc::now(),
  }
}

fn project(owner_id: Uuid, title: &str) -> Project {
  Project {
    id: Uuid::new_v4(),
    owner_id,
    title: title.to_owned(),
    short: "short".to_owned(),
    long: None,
    url: None,
    tags: vec!["rust".to_owned()],
    visibility: Visibility::Public,
    cover: None,
    gallery: vec![],
    slug: folio_core::slug::slugify(title),
    created_at: Utc::now(),
  }
}

// ─── Round trips ─────────────────────────────────────────────────────────────

#[test]
fn empty_store_reads_empty_collections() {
  let s = store();
  assert!(s.users().unwrap().is_empty());
  assert!(s.projects().unwrap().is_empty());
  assert!(s.messages().unwrap().is_empty());
  assert!(s.session().unwrap().is_none());
}

#[test]
fn users_round_trip() {
  let s = store();
  let users = vec![user("a@x.com"), user("b@x.com")];
  s.save_users(&users).unwrap();

  let read = s.users().unwrap();
  assert_eq!(read.len(), 2);
  assert_eq!(read[0].email, "a@x.com");
  assert_eq!(read[1].email, "b@x.com");
  assert_eq!(read[0].id, users[0].id);
}

#[test]
fn projects_round_trip_preserves_order_and_fields() {
  let s = store();
  let owner = Uuid::new_v4();
  let mut p = project(owner, "Night Sky");
  p.gallery = vec!["data:image/png;base64,AAAA".to_owned()];
  p.cover = Some("data:image/png;base64,BBBB".to_owned());
  s.save_projects(&[p.clone(), project(owner, "Second")]).unwrap();

  let read = s.projects().unwrap();
  assert_eq!(read.len(), 2);
  assert_eq!(read[0].id, p.id);
  assert_eq!(read[0].slug, "night-sky");
  assert_eq!(read[0].gallery, p.gallery);
  assert_eq!(read[0].cover, p.cover);
  assert_eq!(read[1].title, "Second");
}

#[test]
fn save_empty_overwrites() {
  let s = store();
  s.save_projects(&[project(Uuid::new_v4(), "T")]).unwrap();
  s.save_projects(&[]).unwrap();
  assert!(s.projects().unwrap().is_empty());
}

#[test]
fn messages_append_pattern() {
  let s = store();
  let mut msgs = s.messages().unwrap();
  msgs.push(Message::new("A".into(), "a@x.com".into(), "hi".into()));
  s.save_messages(&msgs).unwrap();

  let mut msgs = s.messages().unwrap();
  msgs.push(Message::new("B".into(), "b@x.com".into(), "yo".into()));
  s.save_messages(&msgs).unwrap();

  let read = s.messages().unwrap();
  assert_eq!(read.len(), 2);
  assert_eq!(read[0].name, "A");
  assert_eq!(read[1].name, "B");
}

// ─── Session ─────────────────────────────────────────────────────────────────

#[test]
fn session_set_get_clear() {
  let s = store();
  let id = Uuid::new_v4();

  s.set_session(&Session::new(id)).unwrap();
  assert_eq!(s.session().unwrap(), Some(Session::new(id)));

  s.clear_session().unwrap();
  assert!(s.session().unwrap().is_none());

  // Idempotent.
  s.clear_session().unwrap();
  assert!(s.session().unwrap().is_none());
}

#[test]
fn session_overwritten_by_later_set() {
  let s = store();
  let first = Uuid::new_v4();
  let second = Uuid::new_v4();
  s.set_session(&Session::new(first)).unwrap();
  s.set_session(&Session::new(second)).unwrap();
  assert_eq!(s.session().unwrap(), Some(Session::new(second)));
}

// ─── Corruption ──────────────────────────────────────────────────────────────

#[test]
fn corrupt_collection_degrades_to_empty() {
  let backend = MemoryBackend::new();
  backend.set_item(keys::USERS, "{not json").unwrap();

  let s = KvStore::new(backend);
  assert!(s.users().unwrap().is_empty());
}

#[test]
fn corrupt_session_degrades_to_none() {
  let backend = MemoryBackend::new();
  backend.set_item(keys::SESSION, "42").unwrap();

  let s = KvStore::new(backend);
  assert!(s.session().unwrap().is_none());
}

#[test]
fn save_repairs_corrupt_key() {
  let backend = MemoryBackend::new();
  backend.set_item(keys::USERS, "]]]").unwrap();

  let s = KvStore::new(backend);
  s.save_users(&[user("a@x.com")]).unwrap();
  assert_eq!(s.users().unwrap().len(), 1);
}

#[test]
fn wrong_shape_degrades_to_empty() {
  // Valid JSON, wrong type for the collection.
  let backend = MemoryBackend::new();
  backend.set_item(keys::PROJECTS, r#"{"oops": true}"#).unwrap();

  let s = KvStore::new(backend);
  assert!(s.projects().unwrap().is_empty());
}

// ─── On-disk backend ─────────────────────────────────────────────────────────

#[test]
fn dir_backend_round_trip() {
  let dir = std::env::temp_dir().join(format!("folio-test-{}", Uuid::new_v4()));
  let backend = DirBackend::open(&dir).unwrap();

  let s = KvStore::new(backend);
  s.save_users(&[user("disk@x.com")]).unwrap();
  s.set_session(&Session::new(Uuid::new_v4())).unwrap();

  // A second store over the same directory sees the writes.
  let s2 = KvStore::new(DirBackend::open(&dir).unwrap());
  assert_eq!(s2.users().unwrap().len(), 1);
  assert!(s2.session().unwrap().is_some());

  s2.clear_session().unwrap();
  assert!(s.session().unwrap().is_none());

  std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn dir_backend_missing_key_is_absent() {
  let dir = std::env::temp_dir().join(format!("folio-test-{}", Uuid::new_v4()));
  let backend = DirBackend::open(&dir).unwrap();
  assert!(backend.get_item("folio_users").is_none());
  std::fs::remove_dir_all(&dir).ok();
}
