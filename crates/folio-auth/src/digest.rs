//! Credential digest.
//!
//! A deterministic SHA-256 over the raw password, hex-encoded. Comparison
//! happens digest-to-digest; the raw secret is never stored.

use sha2::{Digest as _, Sha256};

/// Compute the stored form of a password.
pub fn password_digest(password: &str) -> String {
  let mut hasher = Sha256::new();
  hasher.update(password.as_bytes());
  hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deterministic() {
    assert_eq!(password_digest("secret1"), password_digest("secret1"));
  }

  #[test]
  fn never_the_raw_password() {
    let d = password_digest("secret1");
    assert_ne!(d, "secret1");
    assert_eq!(d.len(), 64);
  }

  #[test]
  fn known_vector() {
    // SHA-256("abc"), hex.
    assert_eq!(
      password_digest("abc"),
      "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
  }
}
