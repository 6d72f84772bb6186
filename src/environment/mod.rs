//! Environment repository resolution and composition.
//!
//! Given a registry of named environment repository backends, this module
//! selects, orders, and (when needed) merges them into a single logical
//! repository the rest of the platform queries through one uniform
//! interface. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Resolution services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
