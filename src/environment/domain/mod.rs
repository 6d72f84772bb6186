//! Domain model for environment repository resolution.
//!
//! The environment domain models configuration queries, configuration
//! answers with ordered property sources, search-path location reports, and
//! validated repository identifiers. All infrastructure concerns are kept
//! outside the domain boundary.

mod environment;
mod error;
mod locations;
mod name;
mod query;

pub use environment::{Environment, PropertySource};
pub use error::EnvironmentDomainError;
pub use locations::SearchLocations;
pub use name::RepositoryName;
pub use query::EnvironmentQuery;
