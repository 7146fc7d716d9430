//! Arena-backed hierarchy of uniquely named nodes.
//!
//! The arena owns every node; parent and child edges are plain indices, so
//! dropping the hierarchy drops the whole reachable set at once. The root is
//! a sentinel node with an empty name that holds every node without a
//! declared parent as a direct child.

use std::collections::HashSet;

use generational_arena::{Arena, Index};
use itertools::Itertools;
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};

/// One node in the hierarchy.
#[derive(Debug)]
pub struct Node {
    /// Unique name across the whole hierarchy. Empty for the root sentinel.
    pub name: String,
    /// Back-references to parent nodes, in attachment order
    pub parents: Vec<Index>,
    /// Child nodes in first-insertion order; render order depends on it
    pub children: Vec<Index>,
}

impl Node {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parents: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-based hierarchy with name-keyed node resolution and validated
/// parent/child linkage.
#[derive(Debug)]
pub struct Hierarchy {
    arena: Arena<Node>,
    root: Index,
}

impl Default for Hierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl Hierarchy {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(Node::named(""));
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn node(&self, idx: Index) -> Option<&Node> {
        self.arena.get(idx)
    }

    fn get(&self, idx: Index) -> DomainResult<&Node> {
        self.arena
            .get(idx)
            .ok_or_else(|| DomainError::Internal(format!("stale node index: {idx:?}")))
    }

    fn get_mut(&mut self, idx: Index) -> DomainResult<&mut Node> {
        self.arena
            .get_mut(idx)
            .ok_or_else(|| DomainError::Internal(format!("stale node index: {idx:?}")))
    }

    /// Number of nodes, excluding the root sentinel.
    pub fn node_count(&self) -> usize {
        self.arena.len().saturating_sub(1)
    }

    /// Number of direct children of the root sentinel.
    pub fn top_level_count(&self) -> usize {
        self.node(self.root).map(|n| n.children.len()).unwrap_or(0)
    }

    /// Inserts a fresh, detached node. The caller is expected to `link` it;
    /// only `link` makes a node reachable from the root.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_detached(&mut self, name: &str) -> Index {
        self.arena.insert(Node::named(name))
    }

    /// Looks up both names of a relation statement in one depth-first pass
    /// over the hierarchy, children edges only. Matching is by name equality,
    /// independent of position; the root sentinel is never compared. The
    /// search stops as soon as both names have been matched.
    ///
    /// `None` means the name has not been seen before and a fresh node must
    /// be created for it.
    #[instrument(level = "trace", skip(self))]
    pub fn resolve_pair(
        &self,
        child_name: &str,
        parent_name: &str,
    ) -> (Option<Index>, Option<Index>) {
        let mut child = None;
        let mut parent = None;
        let mut visited: HashSet<Index> = HashSet::new();
        let mut stack: Vec<Index> = self
            .node(self.root)
            .map(|root| root.children.iter().rev().copied().collect())
            .unwrap_or_default();

        while let Some(idx) = stack.pop() {
            if !visited.insert(idx) {
                continue;
            }
            if let Some(node) = self.node(idx) {
                if child.is_none() && node.name == child_name {
                    child = Some(idx);
                }
                if parent.is_none() && node.name == parent_name {
                    parent = Some(idx);
                }
                if child.is_some() && parent.is_some() {
                    break;
                }
                for &c in node.children.iter().rev() {
                    stack.push(c);
                }
            }
        }

        (child, parent)
    }

    /// Establishes the child -> parent relationship, or fails.
    ///
    /// Validation order:
    /// 1. self-relation
    /// 2. parent already in child's descendant subtree (would close a cycle)
    /// 3. attach parent to `child.parents`
    /// 4. detach child from its provisional root attachment
    /// 5. duplicate (child, parent) edge
    /// 6. child already in parent's ancestor chain (symmetric cycle)
    /// 7. append child to `parent.children`
    /// 8. promote a parentless parent under the root
    ///
    /// On failure the hierarchy is left in whatever partial state existed
    /// when the violation was detected; all failures are terminal.
    #[instrument(level = "debug", skip(self))]
    pub fn link(&mut self, child: Index, parent: Index) -> DomainResult<()> {
        let child_name = self.get(child)?.name.clone();
        let parent_name = self.get(parent)?.name.clone();

        if child == parent || child_name == parent_name {
            return Err(DomainError::SelfRelation(child_name));
        }

        if self.subtree_contains(child, &parent_name)? {
            return Err(DomainError::DescendantConflict {
                child: child_name,
                parent: parent_name,
            });
        }

        self.get_mut(child)?.parents.push(parent);

        let root = self.root;
        if self.get(root)?.children.contains(&child) {
            self.get_mut(child)?.parents.retain(|&p| p != root);
            self.get_mut(root)?.children.retain(|&c| c != child);
        }

        if self.get(parent)?.children.contains(&child) {
            return Err(DomainError::DuplicateRelation {
                child: child_name,
                parent: parent_name,
            });
        }

        if self.ancestors_contain(parent, &child_name)? {
            return Err(DomainError::AncestorConflict {
                parent: parent_name,
                child: child_name,
            });
        }

        self.get_mut(parent)?.children.push(child);

        if self.get(parent)?.parents.is_empty() {
            self.get_mut(root)?.children.push(parent);
            self.get_mut(parent)?.parents.push(root);
        }

        Ok(())
    }

    /// Depth-first search of `start`'s descendant subtree, excluding `start`
    /// itself, for a node with the given name. The visited guard keeps
    /// multi-parent diamonds from being rescanned.
    fn subtree_contains(&self, start: Index, name: &str) -> DomainResult<bool> {
        let mut visited: HashSet<Index> = HashSet::new();
        let mut stack: Vec<Index> = self.get(start)?.children.clone();

        while let Some(idx) = stack.pop() {
            if !visited.insert(idx) {
                continue;
            }
            let node = self.get(idx)?;
            if node.name == name {
                return Ok(true);
            }
            stack.extend(node.children.iter().copied());
        }
        Ok(false)
    }

    /// Upward counterpart of `subtree_contains`: searches `start`'s ancestor
    /// chain, excluding `start` itself. The root sentinel sits on every chain
    /// but its empty name never matches.
    fn ancestors_contain(&self, start: Index, name: &str) -> DomainResult<bool> {
        let mut visited: HashSet<Index> = HashSet::new();
        let mut stack: Vec<Index> = self.get(start)?.parents.clone();

        while let Some(idx) = stack.pop() {
            if !visited.insert(idx) {
                continue;
            }
            let node = self.get(idx)?;
            if node.name == name {
                return Ok(true);
            }
            stack.extend(node.parents.iter().copied());
        }
        Ok(false)
    }

    /// Pre-order iterator over `(index, depth)` starting at the root's
    /// children (depth 0), left to right. A multi-parent node is yielded
    /// once per parent edge that reaches it.
    pub fn iter(&self) -> DepthFirstIter<'_> {
        DepthFirstIter::new(self)
    }

    /// Longest chain of nodes below the root sentinel.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.iter().map(|(_, depth)| depth + 1).max().unwrap_or(0)
    }

    /// Unique names of nodes without children, in first-encounter order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_names(&self) -> Vec<String> {
        self.iter()
            .filter_map(|(idx, _)| self.node(idx))
            .filter(|node| node.is_leaf())
            .map(|node| node.name.clone())
            .unique()
            .collect()
    }
}

pub struct DepthFirstIter<'a> {
    hierarchy: &'a Hierarchy,
    stack: Vec<(Index, usize)>,
}

impl<'a> DepthFirstIter<'a> {
    fn new(hierarchy: &'a Hierarchy) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = hierarchy.node(hierarchy.root()) {
            // Push children in reverse order for left-to-right traversal
            for &child in root.children.iter().rev() {
                stack.push((child, 0));
            }
        }
        Self { hierarchy, stack }
    }
}

impl Iterator for DepthFirstIter<'_> {
    type Item = (Index, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, depth) = self.stack.pop()?;
        if let Some(node) = self.hierarchy.node(idx) {
            for &child in node.children.iter().rev() {
                self.stack.push((child, depth + 1));
            }
        }
        Some((idx, depth))
    }
}
