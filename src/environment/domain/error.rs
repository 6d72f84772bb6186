//! Error types for environment domain validation.

use thiserror::Error;

/// Errors returned while constructing environment domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvironmentDomainError {
    /// The repository name is empty after trimming.
    #[error("repository name must not be empty")]
    EmptyRepositoryName,

    /// The repository name contains characters outside `[a-z0-9_-]`.
    #[error(
        "repository name '{0}' contains invalid characters (only lowercase alphanumeric, underscores and hyphens allowed)"
    )]
    InvalidRepositoryName(String),

    /// The repository name exceeds the 100-character limit.
    #[error("repository name exceeds 100 character limit: {0}")]
    RepositoryNameTooLong(String),

    /// The queried application name is empty after trimming.
    #[error("application name must not be empty")]
    EmptyApplicationName,
}
