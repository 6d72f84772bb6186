//! Herald: centralised configuration serving platform.
//!
//! This crate provides the environment-resolution core: discovering named
//! environment repository backends from a registry, filtering them by
//! declared capability, and composing them into the single logical
//! repository the rest of the platform (request handlers, health checks,
//! bootstrap) queries through one uniform interface.
//!
//! # Architecture
//!
//! Herald follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (composite, in-memory)
//!
//! # Modules
//!
//! - [`environment`]: Repository discovery, capability filtering, and
//!   composite assembly

pub mod environment;
