//! Configuration answer and property source value objects.

use super::EnvironmentQuery;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A named, ordered map of flattened configuration properties.
///
/// Property sources are the unit of aggregation: a composite repository
/// concatenates the property sources of its children without merging their
/// contents, and the resulting sequence order is the precedence contract
/// consumers rely on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySource {
    name: String,
    source: BTreeMap<String, Value>,
}

impl PropertySource {
    /// Creates a property source from a name and a property map.
    #[must_use]
    pub fn new(name: impl Into<String>, source: BTreeMap<String, Value>) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    /// Returns the property source name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the property map.
    #[must_use]
    pub const fn source(&self) -> &BTreeMap<String, Value> {
        &self.source
    }
}

/// A configuration answer for an application/profiles/label triple.
///
/// Property sources are held in the order they were added; that order must
/// not be disturbed because it encodes override precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    name: String,
    profiles: Vec<String>,
    label: Option<String>,
    version: Option<String>,
    state: Option<String>,
    property_sources: Vec<PropertySource>,
}

impl Environment {
    /// Creates an environment with no property sources.
    #[must_use]
    pub fn new(name: impl Into<String>, profiles: impl IntoIterator<Item = String>) -> Self {
        Self {
            name: name.into(),
            profiles: profiles.into_iter().collect(),
            label: None,
            version: None,
            state: None,
            property_sources: Vec::new(),
        }
    }

    /// Creates an empty environment echoing a query's application, profiles
    /// and label.
    #[must_use]
    pub fn for_query(query: &EnvironmentQuery) -> Self {
        let mut environment = Self::new(query.application(), query.profiles().to_vec());
        environment.label = query.label().map(str::to_owned);
        environment
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the version marker of the backing source.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the backend state marker.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Appends a property source, preserving insertion order.
    pub fn add(&mut self, source: PropertySource) {
        self.property_sources.push(source);
    }

    /// Appends property sources in the given order.
    pub fn add_all(&mut self, sources: impl IntoIterator<Item = PropertySource>) {
        self.property_sources.extend(sources);
    }

    /// Returns the application name this answer is for.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the profiles this answer covers.
    #[must_use]
    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    /// Returns the source label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the version marker, if any.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns the backend state marker, if any.
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Returns the property sources in precedence order.
    #[must_use]
    pub fn property_sources(&self) -> &[PropertySource] {
        &self.property_sources
    }

    /// Consumes the environment, yielding its property sources in order.
    #[must_use]
    pub fn into_property_sources(self) -> Vec<PropertySource> {
        self.property_sources
    }
}
