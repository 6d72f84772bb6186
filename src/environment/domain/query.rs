//! Configuration query value object.

use super::EnvironmentDomainError;
use serde::{Deserialize, Serialize};

/// Profile assumed when a query names none.
const DEFAULT_PROFILE: &str = "default";

/// The application/profiles/label triple a repository is asked about.
///
/// Every repository query carries the same triple: which application the
/// configuration is for, which profiles are active, and optionally which
/// label (branch, tag, snapshot) of the backing source to consult.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentQuery {
    application: String,
    profiles: Vec<String>,
    label: Option<String>,
}

impl EnvironmentQuery {
    /// Creates a query for the given application with the `default` profile
    /// and no label.
    ///
    /// The application name is trimmed before storage.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentDomainError::EmptyApplicationName`] when the
    /// application name is empty after trimming.
    pub fn new(application: impl Into<String>) -> Result<Self, EnvironmentDomainError> {
        let raw = application.into();
        let trimmed = raw.trim().to_owned();

        if trimmed.is_empty() {
            return Err(EnvironmentDomainError::EmptyApplicationName);
        }

        Ok(Self {
            application: trimmed,
            profiles: vec![DEFAULT_PROFILE.to_owned()],
            label: None,
        })
    }

    /// Replaces the active profiles.
    ///
    /// Blank entries are discarded. When no usable profile remains the
    /// `default` profile is kept.
    #[must_use]
    pub fn with_profiles(mut self, profiles: impl IntoIterator<Item = String>) -> Self {
        let cleaned: Vec<String> = profiles
            .into_iter()
            .map(|profile| profile.trim().to_owned())
            .filter(|profile| !profile.is_empty())
            .collect();

        if !cleaned.is_empty() {
            self.profiles = cleaned;
        }
        self
    }

    /// Sets the source label (branch, tag, or snapshot identifier).
    ///
    /// A blank label is treated as absent.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let trimmed = label.into().trim().to_owned();
        if !trimmed.is_empty() {
            self.label = Some(trimmed);
        }
        self
    }

    /// Returns the queried application name.
    #[must_use]
    pub fn application(&self) -> &str {
        &self.application
    }

    /// Returns the active profiles.
    #[must_use]
    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    /// Returns the source label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
