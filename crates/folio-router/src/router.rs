//! Registration and dispatch.

use std::collections::HashMap;

use crate::pattern::Pattern;

/// What a matched handler receives: the normalised path and the named
/// captures, percent-decoded.
#[derive(Debug, Clone)]
pub struct RouteContext {
  pub path:   String,
  pub params: HashMap<String, String>,
}

type Handler<T> = Box<dyn Fn(RouteContext) -> T>;

/// A fragment router under construction: routes are registered, then
/// [`start`](Router::start) seals it into a [`Dispatcher`].
pub struct Router<T> {
  routes: Vec<(Pattern, Handler<T>)>,
}

impl<T> Default for Router<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Router<T> {
  pub fn new() -> Self {
    Self { routes: Vec::new() }
  }

  /// Register `handler` for `pattern`. The pattern is compiled here, once.
  ///
  /// Registration order defines matching order: the first structural match
  /// wins, and patterns are *not* sorted by specificity. A general pattern
  /// registered earlier (e.g. `/p/:id`) will shadow a more specific one
  /// registered later (e.g. `/p/special`). That hazard is part of the
  /// contract, not corrected here.
  pub fn register(&mut self, pattern: &str, handler: impl Fn(RouteContext) -> T + 'static) {
    self.routes.push((Pattern::compile(pattern), Box::new(handler)));
  }

  /// Seal the route table, supplying the fallback for unmatched paths.
  pub fn start(self, not_found: impl Fn(RouteContext) -> T + 'static) -> Dispatcher<T> {
    Dispatcher { routes: self.routes, not_found: Box::new(not_found) }
  }
}

/// A sealed router. Each [`dispatch`](Dispatcher::dispatch) call is
/// independent — no navigation history is kept beyond what the caller
/// passes in.
pub struct Dispatcher<T> {
  routes:    Vec<(Pattern, Handler<T>)>,
  not_found: Handler<T>,
}

impl<T> Dispatcher<T> {
  /// Dispatch one fragment-change event.
  ///
  /// The fragment is normalised to a path (a single leading `#` stripped,
  /// empty → `/`), tested against every registered pattern in registration
  /// order, and the first match invoked with its captures. Unmatched paths
  /// go to the not-found handler with empty params.
  ///
  /// Dispatch is synchronous; a handler that itself navigates re-enters
  /// this method. Bounding redirect chains is the caller's job.
  pub fn dispatch(&self, fragment: &str) -> T {
    let path = normalize_fragment(fragment);

    for (pattern, handler) in &self.routes {
      if let Some(pairs) = pattern.matches(&path) {
        tracing::debug!(%path, pattern = pattern.source(), "route matched");
        return handler(RouteContext {
          path,
          params: pairs.into_iter().collect(),
        });
      }
    }

    tracing::debug!(%path, "no route matched");
    (self.not_found)(RouteContext { path, params: HashMap::new() })
  }
}

/// Normalise a location fragment to a path: strip one leading `#`; an empty
/// or absent fragment is the root path.
fn normalize_fragment(fragment: &str) -> String {
  let path = fragment.strip_prefix('#').unwrap_or(fragment);
  if path.is_empty() {
    "/".to_owned()
  } else {
    path.to_owned()
  }
}
