//! Tri-state evaluation and toggle propagation.

use std::sync::Arc;

use rstest::rstest;

use homemon::application::services::DomainSelectionController;
use homemon::application::{AttrValue, NativeConfig};
use homemon::domain::{CheckState, DomainCatalog, DomainId, DomainSpec, Selection};
use homemon::infrastructure::host::MemoryConfigHost;
use homemon::infrastructure::traits::ConfigHost;

/// `root {a, b}` plus `c {d {e}}`, no defaults.
fn catalog() -> Arc<DomainCatalog> {
    Arc::new(
        DomainCatalog::new(
            &[
                DomainSpec::branch("root", vec![DomainSpec::leaf("a"), DomainSpec::leaf("b")]),
                DomainSpec::branch(
                    "c",
                    vec![DomainSpec::branch("d", vec![DomainSpec::leaf("e")])],
                ),
            ],
            &[],
        )
        .expect("catalog"),
    )
}

fn host_with(ids: &[&str]) -> MemoryConfigHost {
    MemoryConfigHost::new(NativeConfig {
        enabled_domains: Some(AttrValue::list(ids.iter().copied())),
        ..Default::default()
    })
}

fn enabled(host: &MemoryConfigHost) -> Vec<String> {
    host.native()
        .enabled_domains
        .as_ref()
        .and_then(AttrValue::as_string_list)
        .expect("enabled domains written as list")
}

fn state(controller: &DomainSelectionController, host: &MemoryConfigHost, id: &str) -> CheckState {
    let forest = controller.catalog().forest();
    forest.check_state(forest.index_of(id).unwrap(), &controller.current_selection(host))
}

#[test]
fn given_every_subset_when_evaluating_then_full_iff_subtree_selected_and_states_exclusive() {
    let catalog = catalog();
    let forest = catalog.forest();
    let all = forest.all_domain_ids().to_vec();

    for mask in 0u32..(1 << all.len()) {
        let selection: Selection = all
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, id)| id.clone())
            .collect();

        for (idx, node) in forest.iter() {
            let subtree_selected = forest
                .collect_node_ids(idx)
                .iter()
                .all(|id| selection.contains(id));
            let full = forest.is_node_fully_selected(idx, &selection);
            let partial = forest.is_node_partially_selected(idx, &selection);

            assert_eq!(full, subtree_selected, "node {} mask {:b}", node.id, mask);
            assert!(!(full && partial), "node {} mask {:b}", node.id, mask);
            if node.is_leaf() {
                assert!(!partial);
            }
        }
    }
}

#[test]
fn given_two_leaf_root_when_toggling_sequence_then_matches_documented_scenario() {
    let controller = DomainSelectionController::new(catalog());
    let mut host = host_with(&[]);

    controller.toggle(&mut host, "a", true).unwrap();
    assert_eq!(enabled(&host), vec!["root", "a"]);
    assert_eq!(state(&controller, &host, "root"), CheckState::Indeterminate);

    controller.toggle(&mut host, "b", true).unwrap();
    assert_eq!(enabled(&host), vec!["root", "a", "b"]);
    assert_eq!(state(&controller, &host, "root"), CheckState::Checked);

    controller.toggle(&mut host, "a", false).unwrap();
    assert_eq!(enabled(&host), vec!["root", "b"]);
    assert_eq!(state(&controller, &host, "root"), CheckState::Indeterminate);

    controller.toggle(&mut host, "b", false).unwrap();
    assert!(enabled(&host).is_empty());
    assert_eq!(state(&controller, &host, "root"), CheckState::Unchecked);
}

#[rstest]
#[case::from_empty(&[], "e")]
#[case::sibling_present(&["root", "a"], "b")]
#[case::other_tree_present(&["root", "a", "b"], "e")]
fn given_selection_when_leaf_selected_then_deselected_then_restored(
    #[case] start: &[&str],
    #[case] leaf: &str,
) {
    let controller = DomainSelectionController::new(catalog());
    let mut host = host_with(start);
    let before = controller.current_selection(&host);

    controller.toggle(&mut host, leaf, true).unwrap();
    controller.toggle(&mut host, leaf, false).unwrap();

    assert_eq!(controller.current_selection(&host), before);
}

#[test]
fn given_deep_leaf_when_selected_then_whole_ancestor_chain_checked() {
    let controller = DomainSelectionController::new(catalog());
    let mut host = host_with(&[]);

    controller.toggle(&mut host, "e", true).unwrap();

    assert_eq!(enabled(&host), vec!["c", "d", "e"]);
    assert_eq!(state(&controller, &host, "c"), CheckState::Checked);
    assert_eq!(state(&controller, &host, "root"), CheckState::Unchecked);
}

#[test]
fn given_root_when_selected_then_entire_subtree_and_nothing_else() {
    let controller = DomainSelectionController::new(catalog());
    let mut host = host_with(&[]);

    controller.toggle(&mut host, "c", true).unwrap();

    assert_eq!(enabled(&host), vec!["c", "d", "e"]);
}

#[test]
fn given_middle_node_deselected_with_selected_sibling_subtree_then_root_indeterminate() {
    let catalog = Arc::new(
        DomainCatalog::new(
            &[DomainSpec::branch(
                "r",
                vec![
                    DomainSpec::branch("m1", vec![DomainSpec::leaf("x"), DomainSpec::leaf("y")]),
                    DomainSpec::branch("m2", vec![DomainSpec::leaf("z")]),
                ],
            )],
            &[],
        )
        .unwrap(),
    );
    let controller = DomainSelectionController::new(catalog);
    let mut host = host_with(&[]);

    controller.toggle(&mut host, "r", true).unwrap();
    controller.toggle(&mut host, "m1", false).unwrap();

    assert_eq!(enabled(&host), vec!["r", "m2", "z"]);
    assert_eq!(state(&controller, &host, "r"), CheckState::Indeterminate);
    assert_eq!(state(&controller, &host, "m2"), CheckState::Checked);
    assert_eq!(state(&controller, &host, "m1"), CheckState::Unchecked);
}

#[test]
fn given_nested_pruning_when_last_leaf_deselected_then_every_ancestor_removed() {
    let controller = DomainSelectionController::new(catalog());
    let mut host = host_with(&["c", "d", "e", "root", "b"]);

    controller.toggle(&mut host, "e", false).unwrap();

    assert_eq!(enabled(&host), vec!["root", "b"]);
}

#[test]
fn given_ancestor_stored_without_descendants_when_deselecting_child_then_ancestor_pruned() {
    let controller = DomainSelectionController::new(catalog());
    let mut host = host_with(&["root"]);

    controller.toggle(&mut host, "a", false).unwrap();

    assert!(enabled(&host).is_empty());
}

#[test]
fn given_selection_with_ancestor_ids_when_exporting_then_ancestors_kept_in_output() {
    let controller = DomainSelectionController::new(catalog());
    let mut host = host_with(&[]);

    controller.toggle(&mut host, "d", true).unwrap();

    let exported: Vec<DomainId> = controller.export(&host);
    assert_eq!(exported, vec![DomainId::from("c"), DomainId::from("d"), DomainId::from("e")]);
}
