//! Registry port for environment repository discovery.

use crate::environment::domain::RepositoryName;
use crate::environment::ports::repository::EnvironmentRepository;
use std::sync::Arc;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Discovery contract over registered environment repository backends.
///
/// Lookups are local, in-memory operations: implementations must not block
/// on I/O, and listing order must be stable for a given registry state.
pub trait RepositoryRegistry: Send + Sync {
    /// Returns the names of all registered repositories in registration
    /// order.
    #[must_use]
    fn repository_names(&self) -> Vec<RepositoryName>;

    /// Fetches the repository registered under the given name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when no repository is registered
    /// under the name.
    fn fetch(&self, name: &RepositoryName) -> RegistryResult<Arc<dyn EnvironmentRepository>>;
}

/// Errors returned by repository registry implementations.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// No repository is registered under the requested name.
    #[error("repository not found: {0}")]
    NotFound(RepositoryName),

    /// A repository with the same name is already registered.
    #[error("duplicate repository name: {0}")]
    DuplicateRepositoryName(RepositoryName),

    /// Registry-infrastructure failure.
    #[error("registry access failed: {0}")]
    Internal(Arc<dyn std::error::Error + Send + Sync>),
}

impl RegistryError {
    /// Wraps a registry-infrastructure error.
    #[must_use]
    pub fn internal(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal(Arc::new(err))
    }
}
