//! Repository resolution policies for bootstrap and health checking.
//!
//! Both resolvers read the registry at call time, collect candidates in
//! listing order, and return either a sole candidate unwrapped or a fresh
//! [`CompositeEnvironmentRepository`] over the candidates in discovery
//! order. They hold no state between calls, so concurrent resolutions are
//! independent; an unchanged registry yields behaviourally equivalent
//! results on every call.

use crate::environment::adapters::composite::CompositeEnvironmentRepository;
use crate::environment::ports::{EnvironmentRepository, RegistryError, RepositoryRegistry};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Result type for repository resolution.
pub type RepositoryResolveResult<T> = Result<T, RepositoryResolveError>;

/// Errors returned while resolving the serving repository.
#[derive(Debug, Clone, Error)]
pub enum RepositoryResolveError {
    /// The registry failed to produce an instance for a listed name.
    #[error("repository resolution failed: {0}")]
    Registry(#[from] RegistryError),
}

/// Resolver used during process bootstrap, before the full application
/// context is available.
///
/// Only backends declaring the search-path capability qualify: bootstrap
/// needs to know the location basis of every answer it serves, so backends
/// that cannot report one are discarded.
#[derive(Clone)]
pub struct BootstrapRepositoryResolver<R: RepositoryRegistry> {
    registry: Arc<R>,
}

impl<R: RepositoryRegistry> BootstrapRepositoryResolver<R> {
    /// Creates a resolver bound to the given registry.
    #[must_use]
    pub const fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    /// Retrieves the repository handle serving bootstrap queries.
    ///
    /// Candidates are fetched in registry listing order and filtered to
    /// those declaring the search-path capability. A sole qualifying
    /// candidate is returned unwrapped; zero or several candidates are
    /// wrapped in a fresh composite preserving discovery order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryResolveError::Registry`] when the registry fails
    /// to produce an instance for a listed name. The failure is surfaced
    /// unchanged and never retried.
    pub fn retrieve_repository(&self) -> RepositoryResolveResult<Arc<dyn EnvironmentRepository>> {
        let mut candidates: Vec<Arc<dyn EnvironmentRepository>> = Vec::new();

        for name in self.registry.repository_names() {
            let repository = self.registry.fetch(&name)?;
            if repository.as_search_path_locator().is_some() {
                candidates.push(repository);
            } else {
                debug!(repository = %name, "skipping backend without search-path support");
            }
        }

        debug!(
            candidates = candidates.len(),
            "resolved bootstrap repository"
        );
        Ok(single_or_composite(candidates))
    }
}

/// Resolver used by the health-check subsystem.
///
/// Considers every registered backend, but prefers reusing a pre-assembled
/// composite when the registry exposes one: the health indicator must query
/// the exact topology traffic is served through, not a re-derived
/// aggregation of it.
#[derive(Clone)]
pub struct HealthCheckRepositoryResolver<R: RepositoryRegistry> {
    registry: Arc<R>,
}

impl<R: RepositoryRegistry> HealthCheckRepositoryResolver<R> {
    /// Creates a resolver bound to the given registry.
    #[must_use]
    pub const fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    /// Retrieves the repository handle the health check should query.
    ///
    /// Candidates are fetched in registry listing order. The first backend
    /// declaring the composite capability is returned outright, discarding
    /// any candidates collected so far; names listed after it are never
    /// fetched. When no composite is registered, a sole candidate is
    /// returned unwrapped and several candidates are wrapped in a fresh
    /// composite preserving discovery order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryResolveError::Registry`] when the registry fails
    /// to produce an instance for a listed name. The failure is surfaced
    /// unchanged and never retried.
    pub fn retrieve_repository(&self) -> RepositoryResolveResult<Arc<dyn EnvironmentRepository>> {
        let mut candidates: Vec<Arc<dyn EnvironmentRepository>> = Vec::new();

        for name in self.registry.repository_names() {
            let repository = self.registry.fetch(&name)?;
            if repository.as_composite().is_some() {
                debug!(repository = %name, "reusing registered composite repository");
                return Ok(repository);
            }
            candidates.push(repository);
        }

        debug!(
            candidates = candidates.len(),
            "assembled health-check repository"
        );
        Ok(single_or_composite(candidates))
    }
}

/// Returns the sole candidate unwrapped, or wraps the list in a composite.
fn single_or_composite(
    mut candidates: Vec<Arc<dyn EnvironmentRepository>>,
) -> Arc<dyn EnvironmentRepository> {
    if candidates.len() == 1 {
        candidates.remove(0)
    } else {
        Arc::new(CompositeEnvironmentRepository::new(candidates))
    }
}
