//! Template fingerprint value object
//!
//! A SHA-256 digest over a template's literal fragments and interpolated
//! values. Every part is length-prefixed, so `["ab", "c"]` and `["a", "bc"]`
//! never share a fingerprint.
//!
//! Only [`DedentCache`](crate::domain::services::DedentCache) uses it, as its
//! key.

use std::fmt;

use sha2::{Digest, Sha256};

/// Structural fingerprint of a template instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Prefix used when displayed
    pub const PREFIX: &'static str = "sha256:";

    /// Fingerprint the literal fragments and values of a template
    pub fn of_template(fragments: &[&str], values: &[&str]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update((fragments.len() as u64).to_le_bytes());
        for fragment in fragments {
            hasher.update((fragment.len() as u64).to_le_bytes());
            hasher.update(fragment.as_bytes());
        }
        hasher.update((values.len() as u64).to_le_bytes());
        for value in values {
            hasher.update((value.len() as u64).to_le_bytes());
            hasher.update(value.as_bytes());
        }
        Self(hasher.finalize().into())
    }

    /// Hex digest without prefix
    pub fn hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.hex())
    }
}
