//! Adapter implementations of the environment repository ports.

pub mod composite;
pub mod memory;

pub use composite::CompositeEnvironmentRepository;
