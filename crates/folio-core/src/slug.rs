//! Slug derivation.
//!
//! A slug is the URL-safe, lowercase, hyphenated form of a display string,
//! used as a human-readable lookup key. Derivation is deterministic and
//! performs no uniqueness enforcement; two inputs can collide.

/// Derive a slug from arbitrary display text.
///
/// Lowercases, drops every character outside `[a-z0-9]`, whitespace, and
/// `-`, collapses separator runs into single hyphens, and trims hyphens at
/// both ends. May return an empty string (e.g. for purely symbolic input);
/// callers decide the fallback.
pub fn slugify(text: &str) -> String {
  let lowered = text.to_lowercase();
  let mut slug = String::with_capacity(lowered.len());
  let mut separator_pending = false;

  for c in lowered.trim().chars() {
    if c.is_ascii_lowercase() || c.is_ascii_digit() {
      if separator_pending && !slug.is_empty() {
        slug.push('-');
      }
      separator_pending = false;
      slug.push(c);
    } else if c.is_whitespace() || c == '-' {
      separator_pending = true;
    }
    // Any other character is dropped without registering a separator.
  }

  slug
}
