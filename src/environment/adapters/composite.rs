//! Ordered fan-out aggregation over child environment repositories.

use crate::environment::domain::{Environment, EnvironmentQuery, SearchLocations};
use crate::environment::ports::{
    CompositeRepository, EnvironmentRepository, RepositoryResult, SearchPathLocator,
};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Environment repository aggregating an ordered list of child repositories.
///
/// Children are shared handles; they stay registered (and directly usable)
/// elsewhere. The child sequence is the discovery order the aggregation was
/// built with, and every fan-out operation preserves it: `find` appends each
/// child's property sources in child order, and the search-path view
/// concatenates child locations in the same order.
pub struct CompositeEnvironmentRepository {
    children: Vec<Arc<dyn EnvironmentRepository>>,
}

impl CompositeEnvironmentRepository {
    /// Creates a composite over the given children, preserving their order.
    ///
    /// An empty child list is valid: the composite then answers every query
    /// with an environment containing no property sources.
    #[must_use]
    pub const fn new(children: Vec<Arc<dyn EnvironmentRepository>>) -> Self {
        Self { children }
    }

    /// Returns whether the composite has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }
}

impl fmt::Debug for CompositeEnvironmentRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeEnvironmentRepository")
            .field("children", &self.children.len())
            .finish()
    }
}

#[async_trait]
impl EnvironmentRepository for CompositeEnvironmentRepository {
    async fn find(&self, query: &EnvironmentQuery) -> RepositoryResult<Environment> {
        let mut environment = Environment::for_query(query);
        for child in &self.children {
            let answer = child.find(query).await?;
            environment.add_all(answer.into_property_sources());
        }
        Ok(environment)
    }

    fn as_search_path_locator(&self) -> Option<&dyn SearchPathLocator> {
        Some(self)
    }

    fn as_composite(&self) -> Option<&dyn CompositeRepository> {
        Some(self)
    }
}

impl CompositeRepository for CompositeEnvironmentRepository {
    fn children(&self) -> &[Arc<dyn EnvironmentRepository>] {
        &self.children
    }
}

impl SearchPathLocator for CompositeEnvironmentRepository {
    fn locations(&self, query: &EnvironmentQuery) -> SearchLocations {
        let mut aggregated = Vec::new();
        for child in &self.children {
            if let Some(locator) = child.as_search_path_locator() {
                aggregated.extend(locator.locations(query).into_locations());
            }
        }
        SearchLocations::new(aggregated)
    }
}
