//! Tests for the arena-backed Hierarchy

use reltree::domain::{DomainError, Hierarchy, HierarchyBuilder};

#[ctor::ctor]
fn init() {
    reltree::util::testing::init_test_setup();
}

#[test]
fn given_fresh_hierarchy_when_inspecting_then_only_root_exists() {
    let hierarchy = Hierarchy::new();
    assert_eq!(hierarchy.node_count(), 0);
    assert_eq!(hierarchy.top_level_count(), 0);
    assert_eq!(hierarchy.depth(), 0);
    assert!(hierarchy.leaf_names().is_empty());
}

#[test]
fn given_linked_pair_when_inspecting_then_parent_surfaces_at_top_level() {
    let mut hierarchy = Hierarchy::new();
    let child = hierarchy.insert_detached("Adam");
    let parent = hierarchy.insert_detached("Ivan");
    hierarchy.link(child, parent).unwrap();

    assert_eq!(hierarchy.node_count(), 2);
    assert_eq!(hierarchy.top_level_count(), 1);
    assert_eq!(hierarchy.depth(), 2);
    assert_eq!(hierarchy.leaf_names(), vec!["Adam".to_string()]);
}

#[test]
fn given_same_index_when_linking_then_self_relation_error() {
    let mut hierarchy = Hierarchy::new();
    let ivan = hierarchy.insert_detached("Ivan");
    assert!(matches!(
        hierarchy.link(ivan, ivan),
        Err(DomainError::SelfRelation(_))
    ));
}

#[test]
fn given_existing_edge_when_linking_again_then_duplicate_error() {
    let mut hierarchy = Hierarchy::new();
    let child = hierarchy.insert_detached("Adam");
    let parent = hierarchy.insert_detached("Ivan");
    hierarchy.link(child, parent).unwrap();

    assert!(matches!(
        hierarchy.link(child, parent),
        Err(DomainError::DuplicateRelation { .. })
    ));
}

#[test]
fn given_built_hierarchy_when_resolving_then_same_node_each_time() {
    let hierarchy = HierarchyBuilder::new()
        .build(["Adam Ivan", "Darko Bruno"])
        .unwrap();

    let (adam_a, ivan_a) = hierarchy.resolve_pair("Adam", "Ivan");
    let (adam_b, ivan_b) = hierarchy.resolve_pair("Adam", "Ivan");
    assert_eq!(adam_a, adam_b);
    assert_eq!(ivan_a, ivan_b);

    let (unknown, _) = hierarchy.resolve_pair("Rajko", "Ivan");
    assert!(unknown.is_none());
}

#[test]
fn given_diamond_when_iterating_then_shared_node_visited_per_parent_edge() {
    // Darko sits under both Bruno and Adam
    let hierarchy = HierarchyBuilder::new()
        .build(["Darko Bruno", "Darko Adam"])
        .unwrap();

    let names: Vec<String> = hierarchy
        .iter()
        .filter_map(|(idx, _)| hierarchy.node(idx))
        .map(|node| node.name.clone())
        .collect();
    assert_eq!(names, vec!["Bruno", "Darko", "Adam", "Darko"]);

    // but the leaf listing de-duplicates
    assert_eq!(hierarchy.leaf_names(), vec!["Darko".to_string()]);
}

#[test]
fn given_reparenting_when_linking_then_acyclicity_is_preserved() {
    let hierarchy = HierarchyBuilder::new()
        .build(["Adam Ivan", "Darko Bruno", "Bruno Adam"])
        .unwrap();

    // no node may appear in its own descendant subtree
    for (idx, _) in hierarchy.iter() {
        let name = hierarchy.node(idx).unwrap().name.clone();
        let mut below = hierarchy
            .node(idx)
            .unwrap()
            .children
            .clone();
        let mut seen = std::collections::HashSet::new();
        while let Some(c) = below.pop() {
            if !seen.insert(c) {
                continue;
            }
            let node = hierarchy.node(c).unwrap();
            assert_ne!(node.name, name, "cycle through {:?}", name);
            below.extend(node.children.iter().copied());
        }
    }
}
