//! Route patterns, compiled once at registration time.
//!
//! A pattern is a slash-delimited template. A segment beginning with `:` is
//! a named capture matching exactly one non-empty path segment (a capture
//! never crosses `/`); every other segment must match literally.

use percent_encoding::percent_decode_str;

/// One compiled segment matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
  Literal(String),
  Capture(String),
}

/// Split a path or template into its segments.
///
/// Only the single leading `/` is elided: `/` yields no segments, while a
/// trailing slash or an empty interior segment is kept and will fail to
/// match. There is no trailing-slash normalisation beyond the root case.
fn split_segments(s: &str) -> Vec<&str> {
  let rest = s.strip_prefix('/').unwrap_or(s);
  if rest.is_empty() {
    Vec::new()
  } else {
    rest.split('/').collect()
  }
}

/// A compiled route pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
  source:   String,
  segments: Vec<Segment>,
}

impl Pattern {
  /// Compile `source` into its segment matchers.
  ///
  /// A bare `:` is treated as a literal, not an anonymous capture.
  pub fn compile(source: &str) -> Self {
    let segments = split_segments(source)
      .into_iter()
      .map(|s| match s.strip_prefix(':') {
        Some(name) if !name.is_empty() => Segment::Capture(name.to_owned()),
        _ => Segment::Literal(s.to_owned()),
      })
      .collect();

    Self { source: source.to_owned(), segments }
  }

  /// The template text this pattern was compiled from.
  pub fn source(&self) -> &str {
    &self.source
  }

  /// Match `path` end-to-end — no prefix matches.
  ///
  /// Returns the captured `(name, value)` pairs in segment order, with
  /// values percent-decoded (invalid UTF-8 sequences decoded lossily).
  pub fn matches(&self, path: &str) -> Option<Vec<(String, String)>> {
    let parts = split_segments(path);
    if parts.len() != self.segments.len() {
      return None;
    }

    let mut params = Vec::new();
    for (segment, part) in self.segments.iter().zip(&parts) {
      match segment {
        Segment::Literal(lit) if lit == part => {}
        Segment::Literal(_) => return None,
        // A capture consumes one non-empty segment.
        Segment::Capture(_) if part.is_empty() => return None,
        Segment::Capture(name) => {
          let value = percent_decode_str(part).decode_utf8_lossy().into_owned();
          params.push((name.clone(), value));
        }
      }
    }

    Some(params)
  }
}
