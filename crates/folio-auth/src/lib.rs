//! Credential-based identity and session lifecycle for Folio.
//!
//! [`AuthService`] layers on any [`folio_core::Store`]; it owns no state of
//! its own beyond the store handle.

pub mod digest;
pub mod error;
pub mod service;

pub use error::{AuthError, Result};
pub use service::AuthService;
