//! Tests for HierarchyBuilder

use rstest::rstest;

use reltree::domain::{render, DomainError, HierarchyBuilder};

#[ctor::ctor]
fn init() {
    reltree::util::testing::init_test_setup();
}

fn build_render(statements: &[&str]) -> String {
    let hierarchy = HierarchyBuilder::new().build(statements).unwrap();
    render(&hierarchy)
}

// ============================================================
// Successful builds
// ============================================================

#[test]
fn given_single_relation_when_building_then_parent_holds_child() {
    assert_eq!(build_render(&["Adam Ivan"]), "Ivan\n    Adam\n");
}

#[test]
fn given_independent_relations_when_building_then_subtrees_keep_input_order() {
    assert_eq!(
        build_render(&["Adam Ivan", "Darko Bruno", "Stjepan Rajko"]),
        "Ivan\n    Adam\nBruno\n    Darko\nRajko\n    Stjepan\n"
    );
}

#[test]
fn given_later_parent_when_building_then_node_leaves_top_level() {
    assert_eq!(
        build_render(&["Adam Ivan", "Darko Bruno", "Bruno Adam"]),
        "Ivan\n    Adam\n        Bruno\n            Darko\n"
    );
}

#[test]
fn given_two_parents_when_building_then_child_renders_under_each() {
    assert_eq!(
        build_render(&["Darko Bruno", "Darko Adam"]),
        "Bruno\n    Darko\nAdam\n    Darko\n"
    );
}

#[test]
fn given_deep_chain_when_building_then_every_level_indents_further() {
    assert_eq!(
        build_render(&["c b", "d c", "b a"]),
        "a\n    b\n        c\n            d\n"
    );
}

#[test]
fn given_no_statements_when_building_then_hierarchy_is_empty() {
    let hierarchy = HierarchyBuilder::new().build::<_, &str>([]).unwrap();
    assert_eq!(hierarchy.node_count(), 0);
    assert_eq!(render(&hierarchy), "");
}

// ============================================================
// Invariants
// ============================================================

#[test]
fn given_successful_build_then_every_node_has_a_parent() {
    let hierarchy = HierarchyBuilder::new()
        .build(["Adam Ivan", "Darko Bruno", "Bruno Adam"])
        .unwrap();

    for (idx, _) in hierarchy.iter() {
        let node = hierarchy.node(idx).unwrap();
        assert!(
            !node.parents.is_empty(),
            "node {:?} has no parent",
            node.name
        );
    }
}

#[test]
fn given_repeated_name_when_building_then_node_is_reused_not_recreated() {
    let hierarchy = HierarchyBuilder::new()
        .build(["Adam Ivan", "Bruno Adam", "Darko Adam"])
        .unwrap();
    // Ivan, Adam, Bruno, Darko
    assert_eq!(hierarchy.node_count(), 4);
}

// ============================================================
// Failures
// ============================================================

#[rstest]
#[case::cycle(&["Adam Ivan", "Ivan Adam"])]
#[case::long_cycle(&["b a", "c b", "a c"])]
#[case::duplicate(&["Adam Ivan", "Adam Ivan"])]
#[case::self_relation(&["Ivan Ivan"])]
#[case::one_token(&["Adam"])]
#[case::three_tokens(&["Adam Ivan Darko"])]
#[case::blank_line(&["Adam Ivan", ""])]
fn given_invalid_statements_when_building_then_errors(#[case] statements: &[&str]) {
    assert!(HierarchyBuilder::new().build(statements).is_err());
}

#[test]
fn given_reversed_relation_when_building_then_reports_descendant_conflict() {
    let err = HierarchyBuilder::new()
        .build(["Adam Ivan", "Ivan Adam"])
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::DescendantConflict { ref child, ref parent }
            if child == "Ivan" && parent == "Adam"
    ));
}

#[test]
fn given_repeated_relation_when_building_then_reports_duplicate() {
    let err = HierarchyBuilder::new()
        .build(["Adam Ivan", "Adam Ivan"])
        .unwrap_err();
    assert!(matches!(err, DomainError::DuplicateRelation { .. }));
}

#[test]
fn given_malformed_statement_when_building_then_error_names_the_line() {
    let err = HierarchyBuilder::new()
        .build(["Adam Ivan", "Darko Bruno Rajko"])
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::MalformedStatement { line: 2, .. }
    ));
}

#[test]
fn given_failure_when_building_then_later_statements_are_not_applied() {
    // the third statement would be fine on its own, but the build already died
    let err = HierarchyBuilder::new()
        .build(["Adam Ivan", "Ivan Ivan", "Darko Bruno"])
        .unwrap_err();
    assert!(matches!(err, DomainError::SelfRelation(_)));
}
