//! Validated repository name type.

use super::EnvironmentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a repository name.
const MAX_NAME_LENGTH: usize = 100;

/// Validated, lowercase repository identifier.
///
/// Repository names are the unique human-readable identifiers backends are
/// registered under (e.g. `native`, `git_main`, `vault-eu`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Creates a validated repository name.
    ///
    /// The input is trimmed and lowercased. Only characters in `[a-z0-9_-]`
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentDomainError::EmptyRepositoryName`] when the value
    /// is empty after trimming,
    /// [`EnvironmentDomainError::InvalidRepositoryName`] when it contains
    /// characters outside `[a-z0-9_-]`, or
    /// [`EnvironmentDomainError::RepositoryNameTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, EnvironmentDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(EnvironmentDomainError::EmptyRepositoryName);
        }

        if normalized.len() > MAX_NAME_LENGTH {
            return Err(EnvironmentDomainError::RepositoryNameTooLong(raw));
        }

        let is_valid = normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');

        if !is_valid {
            return Err(EnvironmentDomainError::InvalidRepositoryName(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the repository name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RepositoryName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
