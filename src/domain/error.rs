//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the hierarchy rules.
/// Every one of them is terminal: the build stops at the first failure.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("malformed relation statement at line {line}: {statement:?} (expected \"<child> <parent>\")")]
    MalformedStatement { line: usize, statement: String },

    #[error("parent and child cannot be the same: {0:?}")]
    SelfRelation(String),

    #[error("cannot add parent {parent:?} to node {child:?}: node {child:?} already has a descendant named {parent:?}")]
    DescendantConflict { child: String, parent: String },

    #[error("cannot add child {child:?} to node {parent:?}: node {parent:?} already has an ancestor named {child:?}")]
    AncestorConflict { parent: String, child: String },

    #[error("cannot repeat the same relation: {child:?} {parent:?}")]
    DuplicateRelation { child: String, parent: String },

    #[error("internal hierarchy operation failed: {0}")]
    Internal(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
