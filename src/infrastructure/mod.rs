//! Infrastructure layer: host implementations, I/O and DI container
//!
//! This layer implements the boundary traits and wires up services.

pub mod di;
pub mod error;
pub mod host;
pub mod traits;

pub use error::{InfraError, InfraResult};
