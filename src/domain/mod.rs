//! Domain layer: the domain forest and tri-state selection queries
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod catalog;
pub mod entities;
pub mod error;
pub mod selection;

pub use arena::{DomainForest, DomainNode, ForestIterator};
pub use builder::DomainTreeBuilder;
pub use catalog::DomainCatalog;
pub use entities::*;
pub use error::{DomainError, DomainResult};
