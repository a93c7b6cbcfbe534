//! The structured output of route dispatch.

use folio_core::{Project, User};

/// What a route handler produced. Rendering is out of scope here; each
/// variant carries exactly the data its page needs.
#[derive(Debug, Clone)]
pub enum View {
  Home,
  About,
  /// The contact form. Submission goes through
  /// [`App::submit_contact`](crate::App::submit_contact).
  Contact,
  Login,
  Register,
  /// The signed-in user's dashboard: profile link plus their own projects,
  /// all visibilities.
  Dashboard { user: User, projects: Vec<Project> },
  /// A project detail page. `owner` is `None` when the owning user no
  /// longer exists; renderers show an "unknown" attribution.
  ProjectDetail {
    project: Project,
    owner:   Option<User>,
  },
  /// No project with the requested id.
  ProjectNotFound,
  /// The project exists but is private and the viewer is not its owner.
  PrivateProject,
  /// A public profile: the user and their public projects only.
  Profile { user: User, projects: Vec<Project> },
  /// No user with the requested slug.
  ProfileNotFound,
  /// The router's fallback — no pattern matched `path`.
  NotFound { path: String },
  /// Redirect chain exceeded the bound; `path` is where it was cut off.
  RedirectLoop { path: String },
}

/// A handler either yields a view or asks for navigation elsewhere.
#[derive(Debug, Clone)]
pub enum Outcome {
  View(View),
  Redirect(String),
}

impl From<View> for Outcome {
  fn from(view: View) -> Self {
    Self::View(view)
  }
}
