//! [`App`] — routes wired to store and auth, plus the form actions.

use uuid::Uuid;

use folio_auth::AuthService;
use folio_core::{Message, Project, ProjectDraft, Store, Visibility};
use folio_router::{Dispatcher, Router};

use crate::{
  error::{Error, Result},
  views::{Outcome, View},
};

/// Redirect chains longer than this are cut off with
/// [`View::RedirectLoop`]. A handler that always redirects (e.g. dashboard
/// and login bouncing each other on inconsistent auth state) must not hang
/// navigation.
const MAX_REDIRECTS: usize = 8;

/// The assembled application: one store, the auth service over it, and the
/// sealed route table.
///
/// All dispatch is synchronous and single-threaded; handlers read and write
/// the store directly, so two interleaved actions against the same
/// collection follow last-write-wins, as the store contract states.
pub struct App<S> {
  store:      S,
  auth:       AuthService<S>,
  dispatcher: Dispatcher<Result<Outcome>>,
}

impl<S: Store + Clone + 'static> App<S> {
  pub fn new(store: S) -> Self {
    let auth = AuthService::new(store.clone());
    let dispatcher = build_router(store.clone(), auth.clone());
    Self { store, auth, dispatcher }
  }

  /// The auth service, for login/register/logout form submissions.
  pub fn auth(&self) -> &AuthService<S> {
    &self.auth
  }

  /// Navigate to a fragment and resolve the resulting view, following
  /// handler redirects up to the loop bound.
  pub fn navigate(&self, fragment: &str) -> Result<View> {
    follow_redirects(&self.dispatcher, fragment)
  }

  // ── Form actions ──────────────────────────────────────────────────────

  /// Append a contact-form submission to the message log.
  pub fn submit_contact(&self, name: &str, email: &str, body: &str) -> Result<Message> {
    let message = Message::new(name.to_owned(), email.to_owned(), body.to_owned());
    let mut messages = self.store.messages().map_err(Error::store)?;
    messages.push(message.clone());
    self.store.save_messages(&messages).map_err(Error::store)?;
    tracing::info!(message_id = %message.id, "contact message saved");
    Ok(message)
  }

  /// Create a project owned by the signed-in user.
  ///
  /// The draft is clamped and slugged by [`ProjectDraft::build`]; the owner
  /// reference is validated here, at creation time only.
  pub fn create_project(&self, draft: ProjectDraft) -> Result<Project> {
    let user = self.auth.current_user()?.ok_or(Error::NotSignedIn)?;
    let project = draft.build(user.id);

    let mut projects = self.store.projects().map_err(Error::store)?;
    projects.push(project.clone());
    self.store.save_projects(&projects).map_err(Error::store)?;

    tracing::info!(project_id = %project.id, owner_id = %user.id, "project created");
    Ok(project)
  }

  /// Delete a project by id.
  ///
  /// Ownership is only ever checked by the views that decide whether to
  /// offer the affordance; the action itself matches the source design and
  /// deletes by id alone. Deleting an unknown id is a no-op.
  pub fn delete_project(&self, id: Uuid) -> Result<()> {
    let mut projects = self.store.projects().map_err(Error::store)?;
    projects.retain(|p| p.id != id);
    self.store.save_projects(&projects).map_err(Error::store)?;
    tracing::info!(project_id = %id, "project deleted");
    Ok(())
  }

  /// Prefill a creation draft from an existing project — the "edit"
  /// affordance. Submitting the draft creates a *new* project; nothing is
  /// mutated in place.
  pub fn edit_prefill(&self, id: Uuid) -> Result<Option<ProjectDraft>> {
    let projects = self.store.projects().map_err(Error::store)?;
    Ok(projects.iter().find(|p| p.id == id).map(ProjectDraft::from))
  }
}

// ─── Routes ──────────────────────────────────────────────────────────────────

/// Register the route table in its canonical order and seal it.
///
/// Order matters: the first structural match wins, so reordering these can
/// change which handler a path reaches.
fn build_router<S: Store + Clone + 'static>(
  store: S,
  auth: AuthService<S>,
) -> Dispatcher<Result<Outcome>> {
  let mut router = Router::new();

  router.register("/", |_| Ok(View::Home.into()));
  router.register("/about", |_| Ok(View::About.into()));
  router.register("/contact", |_| Ok(View::Contact.into()));
  router.register("/login", |_| Ok(View::Login.into()));
  router.register("/register", |_| Ok(View::Register.into()));

  {
    let store = store.clone();
    let auth = auth.clone();
    router.register("/dashboard", move |_| {
      let Some(user) = auth.current_user()? else {
        return Ok(Outcome::Redirect("/login".to_owned()));
      };
      let projects = store
        .projects()
        .map_err(Error::store)?
        .into_iter()
        .filter(|p| p.owner_id == user.id)
        .collect();
      Ok(View::Dashboard { user, projects }.into())
    });
  }

  {
    let store = store.clone();
    router.register("/p/:projectId", move |ctx| {
      let Some(id) = ctx
        .params
        .get("projectId")
        .and_then(|raw| raw.parse::<Uuid>().ok())
      else {
        // A malformed id can't reference anything; same page as unknown.
        return Ok(View::ProjectNotFound.into());
      };

      let projects = store.projects().map_err(Error::store)?;
      let Some(project) = projects.into_iter().find(|p| p.id == id) else {
        return Ok(View::ProjectNotFound.into());
      };

      if project.visibility != Visibility::Public {
        let viewer = auth.current_user()?;
        if viewer.map(|u| u.id) != Some(project.owner_id) {
          return Ok(View::PrivateProject.into());
        }
      }

      let owner = store
        .users()
        .map_err(Error::store)?
        .into_iter()
        .find(|u| u.id == project.owner_id);
      Ok(View::ProjectDetail { project, owner }.into())
    });
  }

  router.register("/u/:userSlug", move |ctx| {
    let slug = ctx.params.get("userSlug").map(String::as_str).unwrap_or("");

    // Slugs are not unique; the first registered user with this slug wins
    // and any later one is shadowed.
    let Some(user) = store
      .users()
      .map_err(Error::store)?
      .into_iter()
      .find(|u| u.slug == slug)
    else {
      return Ok(View::ProfileNotFound.into());
    };

    let projects = store
      .projects()
      .map_err(Error::store)?
      .into_iter()
      .filter(|p| p.owner_id == user.id && p.visibility == Visibility::Public)
      .collect();
    Ok(View::Profile { user, projects }.into())
  });

  router.start(|ctx| Ok(View::NotFound { path: ctx.path }.into()))
}

/// Resolve a fragment to a view, re-dispatching on redirects up to
/// [`MAX_REDIRECTS`].
fn follow_redirects(dispatcher: &Dispatcher<Result<Outcome>>, fragment: &str) -> Result<View> {
  let mut target = fragment.to_owned();
  for _ in 0..MAX_REDIRECTS {
    match dispatcher.dispatch(&target)? {
      Outcome::View(view) => return Ok(view),
      Outcome::Redirect(next) => {
        tracing::debug!(from = %target, to = %next, "handler redirect");
        target = next;
      }
    }
  }
  tracing::warn!(path = %target, "redirect loop cut off");
  Ok(View::RedirectLoop { path: target })
}
