//! Message — a contact-form submission.
//!
//! Messages are an append-only log; no view reads them back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
  pub id:         Uuid,
  pub name:       String,
  pub email:      String,
  pub body:       String,
  pub created_at: DateTime<Utc>,
}

impl Message {
  /// Build a message with a fresh id and the current timestamp.
  pub fn new(name: String, email: String, body: String) -> Self {
    Self {
      id: Uuid::new_v4(),
      name,
      email,
      body,
      created_at: Utc::now(),
    }
  }
}
