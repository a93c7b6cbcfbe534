//! Well-known storage keys, one per logical collection.

pub const USERS: &str = "folio_users";
pub const PROJECTS: &str = "folio_projects";
pub const MESSAGES: &str = "folio_messages";
pub const SESSION: &str = "folio_session";
