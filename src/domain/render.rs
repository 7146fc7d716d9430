//! Deterministic textual views of a hierarchy.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::hierarchy::Hierarchy;

/// Spaces added per hierarchy level in the indented view.
pub const INDENT_WIDTH: usize = 4;

/// Renders the hierarchy as an indented listing: depth-first pre-order over
/// the root's children in insertion order, one name per line at
/// `INDENT_WIDTH * depth` spaces, `\n` line endings. A multi-parent node
/// appears once under each parent that reaches it. Read-only and repeatable.
#[instrument(level = "debug", skip(hierarchy))]
pub fn render(hierarchy: &Hierarchy) -> String {
    let mut out = String::new();
    for (idx, depth) in hierarchy.iter() {
        if let Some(node) = hierarchy.node(idx) {
            out.push_str(&" ".repeat(depth * INDENT_WIDTH));
            out.push_str(&node.name);
            out.push('\n');
        }
    }
    out
}

/// Converts the hierarchy into one `termtree` diagram per top-level node,
/// for terminal display.
pub fn to_termtree(hierarchy: &Hierarchy) -> Vec<Tree<String>> {
    hierarchy
        .node(hierarchy.root())
        .map(|root| {
            root.children
                .iter()
                .map(|&child| subtree(hierarchy, child))
                .collect()
        })
        .unwrap_or_default()
}

fn subtree(hierarchy: &Hierarchy, idx: Index) -> Tree<String> {
    match hierarchy.node(idx) {
        Some(node) => {
            let leaves: Vec<_> = node
                .children
                .iter()
                .map(|&child| subtree(hierarchy, child))
                .collect();
            Tree::new(node.name.clone()).with_leaves(leaves)
        }
        None => Tree::new(String::new()),
    }
}
