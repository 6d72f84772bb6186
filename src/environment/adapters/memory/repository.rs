//! Seedable in-memory environment repository.

use std::collections::HashMap;

use crate::environment::domain::{Environment, EnvironmentQuery, SearchLocations};
use crate::environment::ports::{
    EnvironmentRepository, RepositoryError, RepositoryResult, SearchPathLocator,
};
use async_trait::async_trait;

/// In-memory environment repository seeded with canned answers.
///
/// Answers are keyed by application name; profiles and label are echoed
/// back but do not narrow the lookup. The repository declares the
/// search-path capability and reports the location URIs it was seeded with.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnvironmentRepository {
    environments: HashMap<String, Environment>,
    locations: Vec<String>,
}

impl InMemoryEnvironmentRepository {
    /// Creates a repository with no seeded answers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an environment, keyed by its application name.
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environments
            .insert(environment.name().to_owned(), environment);
        self
    }

    /// Seeds the location URIs the repository reports as its basis.
    #[must_use]
    pub fn with_locations(mut self, locations: impl IntoIterator<Item = String>) -> Self {
        self.locations = locations.into_iter().collect();
        self
    }
}

#[async_trait]
impl EnvironmentRepository for InMemoryEnvironmentRepository {
    async fn find(&self, query: &EnvironmentQuery) -> RepositoryResult<Environment> {
        self.environments
            .get(query.application())
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(query.application()))
    }

    fn as_search_path_locator(&self) -> Option<&dyn SearchPathLocator> {
        Some(self)
    }
}

impl SearchPathLocator for InMemoryEnvironmentRepository {
    fn locations(&self, _query: &EnvironmentQuery) -> SearchLocations {
        SearchLocations::new(self.locations.iter().cloned())
    }
}
