//! Port contracts for environment repository discovery and querying.
//!
//! Ports define infrastructure-agnostic interfaces: the repository
//! capability traits implementations declare support for, and the registry
//! contract resolution services discover backends through.

pub mod registry;
pub mod repository;

pub use registry::{RegistryError, RegistryResult, RepositoryRegistry};
pub use repository::{
    CompositeRepository, EnvironmentRepository, RepositoryError, RepositoryResult,
    SearchPathLocator,
};
