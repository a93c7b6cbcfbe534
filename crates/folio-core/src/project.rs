//! Project — a portfolio entry owned by a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::slug::slugify;

/// Maximum number of gallery images per project. Enforced at draft-build
/// time by the caller, not by the store.
pub const GALLERY_LIMIT: usize = 6;

/// Who may view a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
  Public,
  Private,
}

#[derive(Debug, Error)]
#[error("unknown visibility: {0:?} (expected \"public\" or \"private\")")]
pub struct ParseVisibilityError(String);

impl std::str::FromStr for Visibility {
  type Err = ParseVisibilityError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "public" => Ok(Self::Public),
      "private" => Ok(Self::Private),
      other => Err(ParseVisibilityError(other.to_owned())),
    }
  }
}

/// A portfolio entry.
///
/// `owner_id` must reference an existing [`User`](crate::User) at creation
/// time; it is not re-validated afterwards. `slug` is derived from the title
/// and is not guaranteed unique. Images (`cover`, `gallery`) are stored as
/// encoded binary-as-text blobs (data URLs); the store treats them as opaque
/// strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
  pub id:         Uuid,
  pub owner_id:   Uuid,
  pub title:      String,
  /// One-line description shown in listings.
  pub short:      String,
  /// Optional long-form description shown on the detail view.
  pub long:       Option<String>,
  pub url:        Option<String>,
  pub tags:       Vec<String>,
  pub visibility: Visibility,
  pub cover:      Option<String>,
  /// Ordered gallery images, at most [`GALLERY_LIMIT`].
  pub gallery:    Vec<String>,
  pub slug:       String,
  pub created_at: DateTime<Utc>,
}

/// Input to project creation — everything the owner supplies on the form.
///
/// The id, slug, and timestamp are assigned when the draft is built into a
/// [`Project`]. The same draft shape doubles as the prefill payload for the
/// "edit" affordance, which deliberately creates a *new* project rather than
/// mutating the original.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
  pub title:      String,
  pub short:      String,
  pub long:       Option<String>,
  pub url:        Option<String>,
  pub tags:       Vec<String>,
  pub visibility: Option<Visibility>,
  pub cover:      Option<String>,
  pub gallery:    Vec<String>,
}

impl ProjectDraft {
  /// Split a comma-separated tag string into trimmed, non-empty tags.
  pub fn parse_tags(raw: &str) -> Vec<String> {
    raw
      .split(',')
      .map(str::trim)
      .filter(|t| !t.is_empty())
      .map(str::to_owned)
      .collect()
  }

  /// Build a persistable [`Project`] owned by `owner_id`.
  ///
  /// Assigns a fresh id and timestamp, clamps the gallery to
  /// [`GALLERY_LIMIT`], and derives the slug from the title. A purely
  /// symbolic title (e.g. `"???"`) slugifies to nothing; rather than store
  /// an empty slug, the fallback is the id, so every project stays
  /// addressable by slug. Missing visibility defaults to public, matching
  /// the form's default selection.
  pub fn build(self, owner_id: Uuid) -> Project {
    let id = Uuid::new_v4();
    let slug = match slugify(&self.title) {
      s if s.is_empty() => id.to_string(),
      s => s,
    };

    let mut gallery = self.gallery;
    gallery.truncate(GALLERY_LIMIT);

    Project {
      id,
      owner_id,
      title: self.title,
      short: self.short,
      long: self.long,
      url: self.url,
      tags: self.tags,
      visibility: self.visibility.unwrap_or(Visibility::Public),
      cover: self.cover,
      gallery,
      slug,
      created_at: Utc::now(),
    }
  }
}

impl From<&Project> for ProjectDraft {
  /// Prefill a draft from an existing project — the "edit" affordance.
  /// Submitting the draft produces a duplicate with a fresh id.
  fn from(p: &Project) -> Self {
    Self {
      title:      p.title.clone(),
      short:      p.short.clone(),
      long:       p.long.clone(),
      url:        p.url.clone(),
      tags:       p.tags.clone(),
      visibility: Some(p.visibility),
      cover:      p.cover.clone(),
      gallery:    p.gallery.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn build_clamps_gallery() {
    let draft = ProjectDraft {
      title: "T".into(),
      gallery: (0..8).map(|i| format!("img-{i}")).collect(),
      ..Default::default()
    };
    let project = draft.build(Uuid::new_v4());
    assert_eq!(project.gallery.len(), GALLERY_LIMIT);
    assert_eq!(project.gallery[0], "img-0");
  }

  #[test]
  fn build_slug_falls_back_to_id() {
    let draft = ProjectDraft { title: "???".into(), ..Default::default() };
    let project = draft.build(Uuid::new_v4());
    assert_eq!(project.slug, project.id.to_string());
  }

  #[test]
  fn prefill_then_build_duplicates() {
    let owner = Uuid::new_v4();
    let original = ProjectDraft {
      title: "Night Sky".into(),
      short: "glow".into(),
      ..Default::default()
    }
    .build(owner);

    let copy = ProjectDraft::from(&original).build(owner);
    assert_ne!(copy.id, original.id);
    assert_eq!(copy.title, original.title);
    assert_eq!(copy.slug, original.slug);
  }

  #[test]
  fn parse_tags_trims_and_drops_empties() {
    assert_eq!(
      ProjectDraft::parse_tags(" rust, wasm ,, ui "),
      vec!["rust", "wasm", "ui"]
    );
  }

  #[test]
  fn visibility_from_str() {
    assert_eq!("public".parse::<Visibility>().unwrap(), Visibility::Public);
    assert_eq!("private".parse::<Visibility>().unwrap(), Visibility::Private);
    assert!("friends".parse::<Visibility>().is_err());
  }
}
