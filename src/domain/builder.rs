//! Builds a hierarchy from an ordered sequence of relation statements.

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::hierarchy::Hierarchy;

/// One parsed relation statement: `<child> <parent>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub child: String,
    pub parent: String,
}

impl Relation {
    /// Parses a statement line into exactly two whitespace-separated tokens.
    /// Any other token count is a format error carrying the 1-based line
    /// number and the offending text.
    pub fn parse(statement: &str, line: usize) -> DomainResult<Self> {
        let (child, parent) = statement
            .split_whitespace()
            .collect_tuple()
            .ok_or_else(|| DomainError::MalformedStatement {
                line,
                statement: statement.to_string(),
            })?;

        Ok(Self {
            child: child.to_string(),
            parent: parent.to_string(),
        })
    }
}

/// Drives resolution and linkage over the input sequence, in input order,
/// stopping at the first failure.
#[derive(Debug)]
pub struct HierarchyBuilder;

impl Default for HierarchyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "debug", skip_all)]
    pub fn build<I, S>(&mut self, statements: I) -> DomainResult<Hierarchy>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hierarchy = Hierarchy::new();
        for (i, statement) in statements.into_iter().enumerate() {
            let relation = Relation::parse(statement.as_ref(), i + 1)?;
            self.apply(&mut hierarchy, &relation)?;
        }
        Ok(hierarchy)
    }

    /// Resolves both names against the hierarchy built so far, creating a
    /// fresh node for each unseen name, then links them.
    fn apply(&mut self, hierarchy: &mut Hierarchy, relation: &Relation) -> DomainResult<()> {
        debug!("applying relation: {} -> {}", relation.child, relation.parent);

        let (child, parent) = hierarchy.resolve_pair(&relation.child, &relation.parent);
        let child = child.unwrap_or_else(|| hierarchy.insert_detached(&relation.child));
        let parent = if relation.parent == relation.child {
            // one arena slot per name, even for a doomed self-relation
            parent.unwrap_or(child)
        } else {
            parent.unwrap_or_else(|| hierarchy.insert_detached(&relation.parent))
        };

        hierarchy.link(child, parent)
    }
}
