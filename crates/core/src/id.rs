//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Longest identifier accepted from a client.
pub const MAX_ID_LEN: usize = 64;

/// Identifier of a user.
///
/// Opaque on the wire: the store mints UUIDv7 text for new users, but any
/// non-empty, whitespace-free string is a valid lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Parse a client-supplied identifier.
    pub fn parse(s: impl Into<String>) -> DomainResult<Self> {
        let id = Self(s.into());
        id.validate()?;
        Ok(id)
    }

    /// Check the shape of an identifier that arrived through deserialization.
    pub fn validate(&self) -> DomainResult<()> {
        if self.0.is_empty() {
            return Err(DomainError::invalid_id("UserId: must not be empty"));
        }
        if self.0.chars().count() > MAX_ID_LEN {
            return Err(DomainError::invalid_id(format!(
                "UserId: longer than {MAX_ID_LEN} characters"
            )));
        }
        if self.0.chars().any(char::is_whitespace) {
            return Err(DomainError::invalid_id("UserId: must not contain whitespace"));
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}
