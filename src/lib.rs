//! reltree builds a single rooted hierarchy from an ordered list of relation
//! statements, one `<child> <parent>` pair per line. Nodes are uniquely
//! identified by name, may have multiple parents and multiple children, and
//! the structure stays free of cycles and duplicate declarations. Parentless
//! nodes attach to an implicit root; the result renders as a deterministic,
//! indented depth-first listing.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

use domain::DomainResult;
pub use domain::{render, Hierarchy, HierarchyBuilder};

/// Builds a hierarchy from statement lines.
pub fn build_hierarchy<I, S>(statements: I) -> DomainResult<Hierarchy>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    HierarchyBuilder::new().build(statements)
}

/// Builds and renders in one step.
pub fn render_statements<I, S>(statements: I) -> DomainResult<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(render(&build_hierarchy(statements)?))
}
