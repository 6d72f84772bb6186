//! In-memory repository registry for tests and embedded deployments.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::environment::domain::RepositoryName;
use crate::environment::ports::{
    EnvironmentRepository, RegistryError, RegistryResult, RepositoryRegistry,
};

/// Thread-safe in-memory repository registry.
///
/// Listing order is registration order, which makes the registry's view of
/// "discovery order" deterministic for a given sequence of registrations.
#[derive(Clone, Default)]
pub struct InMemoryRepositoryRegistry {
    state: Arc<RwLock<RegistryState>>,
}

#[derive(Default)]
struct RegistryState {
    order: Vec<RepositoryName>,
    repositories: HashMap<RepositoryName, Arc<dyn EnvironmentRepository>>,
}

impl InMemoryRepositoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a repository under the given name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateRepositoryName`] when the name is
    /// already registered.
    pub fn register(
        &self,
        name: RepositoryName,
        repository: Arc<dyn EnvironmentRepository>,
    ) -> RegistryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| RegistryError::internal(std::io::Error::other(err.to_string())))?;

        if state.repositories.contains_key(&name) {
            return Err(RegistryError::DuplicateRepositoryName(name));
        }

        state.order.push(name.clone());
        state.repositories.insert(name, repository);
        Ok(())
    }
}

impl RepositoryRegistry for InMemoryRepositoryRegistry {
    fn repository_names(&self) -> Vec<RepositoryName> {
        self.state
            .read()
            .map_or_else(|_| Vec::new(), |state| state.order.clone())
    }

    fn fetch(&self, name: &RepositoryName) -> RegistryResult<Arc<dyn EnvironmentRepository>> {
        let state = self
            .state
            .read()
            .map_err(|err| RegistryError::internal(std::io::Error::other(err.to_string())))?;

        state
            .repositories
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.clone()))
    }
}
