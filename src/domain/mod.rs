//! Domain layer: hierarchy entities and construction logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod error;
pub mod hierarchy;
pub mod render;

pub use builder::{HierarchyBuilder, Relation};
pub use error::{DomainError, DomainResult};
pub use hierarchy::{Hierarchy, Node};
pub use render::{render, to_termtree, INDENT_WIDTH};
