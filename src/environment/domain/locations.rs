//! Search-path location report value object.

use serde::{Deserialize, Serialize};

/// The location basis a search-path-aware repository consulted for an
/// answer: an ordered list of location URIs plus an optional version marker
/// of the backing source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLocations {
    locations: Vec<String>,
    version: Option<String>,
}

impl SearchLocations {
    /// Creates a location report from an ordered list of location URIs.
    #[must_use]
    pub fn new(locations: impl IntoIterator<Item = String>) -> Self {
        Self {
            locations: locations.into_iter().collect(),
            version: None,
        }
    }

    /// Sets the version marker of the backing source.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Returns the location URIs in consultation order.
    #[must_use]
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Returns the version marker, if any.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns whether the report names no locations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Consumes the report, yielding the location URIs in order.
    #[must_use]
    pub fn into_locations(self) -> Vec<String> {
        self.locations
    }
}
