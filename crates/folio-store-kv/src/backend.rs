//! The key-value mapping abstraction and its two local implementations.

use std::{
  collections::HashMap,
  io,
  path::{Path, PathBuf},
  sync::{Arc, Mutex},
};

/// A string-keyed mapping of string values — the storage primitive the
/// [`KvStore`](crate::KvStore) is built on.
///
/// Read failures are a backend-internal concern: `get_item` reports anything
/// it cannot read as absent (logging as appropriate). Writes surface their
/// errors so callers see quota/permission problems.
pub trait KvBackend {
  fn get_item(&self, key: &str) -> Option<String>;
  fn set_item(&self, key: &str, value: &str) -> io::Result<()>;
  /// Removing an absent key is not an error.
  fn remove_item(&self, key: &str) -> io::Result<()>;
}

// ─── In-memory ───────────────────────────────────────────────────────────────

/// A process-local backend — used for tests and as the throwaway default.
///
/// Cloning is cheap; clones share the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryBackend {
  map: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
  pub fn new() -> Self {
    Self::default()
  }

  fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
    self.map.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }
}

impl KvBackend for MemoryBackend {
  fn get_item(&self, key: &str) -> Option<String> {
    self.lock().get(key).cloned()
  }

  fn set_item(&self, key: &str, value: &str) -> io::Result<()> {
    self.lock().insert(key.to_owned(), value.to_owned());
    Ok(())
  }

  fn remove_item(&self, key: &str) -> io::Result<()> {
    self.lock().remove(key);
    Ok(())
  }
}

// ─── On-disk ─────────────────────────────────────────────────────────────────

/// A durable backend storing one file per key under a directory.
#[derive(Clone)]
pub struct DirBackend {
  dir: PathBuf,
}

impl DirBackend {
  /// Open (or create) a backend rooted at `dir`.
  pub fn open(dir: impl AsRef<Path>) -> io::Result<Self> {
    let dir = dir.as_ref().to_path_buf();
    std::fs::create_dir_all(&dir)?;
    Ok(Self { dir })
  }

  fn path_for(&self, key: &str) -> PathBuf {
    self.dir.join(format!("{key}.json"))
  }
}

impl KvBackend for DirBackend {
  fn get_item(&self, key: &str) -> Option<String> {
    match std::fs::read_to_string(self.path_for(key)) {
      Ok(raw) => Some(raw),
      Err(e) if e.kind() == io::ErrorKind::NotFound => None,
      Err(e) => {
        tracing::error!(key, error = %e, "storage read error");
        None
      }
    }
  }

  fn set_item(&self, key: &str, value: &str) -> io::Result<()> {
    std::fs::write(self.path_for(key), value)
  }

  fn remove_item(&self, key: &str) -> io::Result<()> {
    match std::fs::remove_file(self.path_for(key)) {
      Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
      _ => Ok(()),
    }
  }
}
