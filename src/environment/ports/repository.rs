//! Repository capability contracts for environment queries.
//!
//! [`EnvironmentRepository`] is the base capability every backend satisfies.
//! The optional capabilities — reporting a search-path basis, or being an
//! aggregation of other repositories — are declared statically through the
//! `as_*` accessors rather than discovered by downcasting: an implementation
//! that supports a capability overrides the accessor to return itself.

use crate::environment::domain::{Environment, EnvironmentQuery, SearchLocations};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository query operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Base capability: answer configuration queries.
///
/// Implementations must be safe for concurrent use; a resolved handle is
/// shared across request handlers and health checks.
#[async_trait]
pub trait EnvironmentRepository: Send + Sync {
    /// Answers the configuration query for an application/profiles/label
    /// triple.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when the backend holds no
    /// configuration for the queried application, or
    /// [`RepositoryError::Backend`] when the backing source fails.
    async fn find(&self, query: &EnvironmentQuery) -> RepositoryResult<Environment>;

    /// Returns the search-path view of this repository, when it can report
    /// the location basis of its answers.
    #[must_use]
    fn as_search_path_locator(&self) -> Option<&dyn SearchPathLocator> {
        None
    }

    /// Returns the composite view of this repository, when it is itself an
    /// aggregation of child repositories.
    #[must_use]
    fn as_composite(&self) -> Option<&dyn CompositeRepository> {
        None
    }
}

/// Capability of reporting the location basis behind configuration answers.
pub trait SearchPathLocator: Send + Sync {
    /// Returns the locations this repository would consult for the query,
    /// in consultation order.
    #[must_use]
    fn locations(&self, query: &EnvironmentQuery) -> SearchLocations;
}

/// Capability of being an aggregation of child repositories.
pub trait CompositeRepository: Send + Sync {
    /// Returns the child repositories in aggregation order.
    ///
    /// The order is the discovery order the aggregation was built with and
    /// determines merge precedence for conflicting configuration values.
    #[must_use]
    fn children(&self) -> &[Arc<dyn EnvironmentRepository>];
}

/// Errors returned by environment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The backend holds no configuration for the queried application.
    #[error("no configuration found for application '{0}'")]
    NotFound(String),

    /// The backing source failed to produce an answer.
    #[error("backend query failed: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Creates a not-found error for the queried application.
    #[must_use]
    pub fn not_found(application: impl Into<String>) -> Self {
        Self::NotFound(application.into())
    }

    /// Wraps a backend failure.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
