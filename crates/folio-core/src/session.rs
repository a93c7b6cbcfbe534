//! Session — the single ambient record of who is signed in.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The active session. At most one exists store-wide: it is overwritten on
/// login/register and removed on logout. `user_id` may dangle (reference a
/// user that no longer exists); resolution treats that as signed-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
  pub user_id: Uuid,
}

impl Session {
  pub fn new(user_id: Uuid) -> Self {
    Self { user_id }
  }
}
