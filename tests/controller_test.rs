//! Tests for DomainSelectionController: reading persisted state, bulk writes,
//! expansion and visible rows.

use std::sync::Arc;

use homemon::application::services::DomainSelectionController;
use homemon::application::{AttrValue, ConfigAttribute, NativeConfig};
use homemon::domain::{CheckState, DomainCatalog, DomainId};
use homemon::infrastructure::host::MemoryConfigHost;
use homemon::infrastructure::traits::ConfigHost;
use homemon::util::testing::init_test_setup;

fn controller() -> DomainSelectionController {
    init_test_setup();
    DomainSelectionController::new(Arc::new(DomainCatalog::builtin().expect("builtin catalog")))
}

fn host(enabled: Option<AttrValue>) -> MemoryConfigHost {
    MemoryConfigHost::new(NativeConfig {
        enabled_domains: enabled,
        ..Default::default()
    })
}

fn written(host: &MemoryConfigHost) -> Vec<String> {
    host.native()
        .enabled_domains
        .as_ref()
        .and_then(AttrValue::as_string_list)
        .expect("list written")
}

// ============================================================
// Reading persisted selection
// ============================================================

#[test]
fn given_no_enabled_domains_when_reading_then_defaults() {
    let controller = controller();
    let selection = controller.current_selection(&host(None));
    assert_eq!(selection, controller.catalog().default_selection());
}

#[test]
fn given_non_list_value_when_reading_then_defaults() {
    let controller = controller();
    for malformed in [
        AttrValue::Text("docker".into()),
        AttrValue::Flag(true),
        AttrValue::Number(3),
    ] {
        let selection = controller.current_selection(&host(Some(malformed)));
        assert_eq!(selection, controller.catalog().default_selection());
    }
}

#[test]
fn given_empty_list_when_reading_then_empty_not_defaults() {
    let controller = controller();
    let selection = controller.current_selection(&host(Some(AttrValue::list(Vec::<String>::new()))));
    assert!(selection.is_empty());
}

#[test]
fn given_obsolete_ids_when_reading_then_silently_dropped() {
    let controller = controller();
    let selection = controller.current_selection(&host(Some(AttrValue::list([
        "vms",
        "plugins",
        "docker.images",
    ]))));
    assert_eq!(selection.len(), 1);
    assert!(selection.contains("vms"));
}

#[test]
fn given_obsolete_ids_when_toggling_then_written_value_drops_them() {
    let controller = controller();
    let mut host = host(Some(AttrValue::list(["plugins", "vms"])));

    controller.toggle(&mut host, "ups", true).unwrap();

    assert_eq!(written(&host), vec!["vms", "ups"]);
}

#[test]
fn given_malformed_value_when_toggling_then_starts_from_defaults() {
    let controller = controller();
    let mut host = host(Some(AttrValue::Text("garbage".into())));

    controller.toggle(&mut host, "ups", true).unwrap();

    let mut expected: Vec<String> = controller
        .catalog()
        .default_enabled()
        .iter()
        .map(DomainId::to_string)
        .collect();
    expected.push("ups".to_string());
    let forest = controller.catalog().forest();
    expected.sort_by_key(|id| forest.tree_position(id));
    assert_eq!(written(&host), expected);
}

// ============================================================
// Bulk writes
// ============================================================

#[test]
fn given_any_state_when_enable_all_then_every_id_in_tree_order() {
    let controller = controller();
    let mut host = host(None);

    controller.enable_all(&mut host);

    let all: Vec<String> = controller
        .catalog()
        .forest()
        .all_domain_ids()
        .iter()
        .map(DomainId::to_string)
        .collect();
    assert_eq!(written(&host), all);
}

#[test]
fn given_selection_when_disable_all_then_empty_list_written() {
    let controller = controller();
    let mut host = host(None);

    controller.disable_all(&mut host);

    assert!(written(&host).is_empty());
    assert_eq!(host.writes(), &[ConfigAttribute::EnabledDomains]);
}

#[test]
fn given_custom_selection_when_reset_then_defaults_written() {
    let controller = controller();
    let mut host = host(Some(AttrValue::list(["ups"])));

    controller.reset_to_defaults(&mut host);

    let defaults: Vec<String> = controller
        .catalog()
        .default_enabled()
        .iter()
        .map(DomainId::to_string)
        .collect();
    assert_eq!(written(&host), defaults);
}

// ============================================================
// Expansion
// ============================================================

#[test]
fn given_fresh_controller_when_listing_rows_then_everything_visible() {
    let controller = controller();
    let rows = controller.visible_rows(&controller.current_selection(&host(None)));
    assert_eq!(rows.len(), controller.catalog().forest().len());
    assert!(rows.iter().filter(|row| row.has_children).all(|row| row.expanded));
}

#[test]
fn given_collapsed_branch_when_listing_rows_then_children_hidden() {
    let mut controller = controller();
    controller.toggle_domain_expansion(&DomainId::from("storage"));

    let rows = controller.visible_rows(&controller.current_selection(&host(None)));
    let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();

    assert!(ids.contains(&"storage"));
    assert!(!ids.iter().any(|id| id.starts_with("storage.")));
    assert!(ids.contains(&"docker.containers"));
}

#[test]
fn given_expansion_toggled_twice_then_restored_and_selection_untouched() {
    let mut controller = controller();
    let mut host = host(None);
    let before = controller.current_selection(&host);

    controller.toggle_domain_expansion(&DomainId::from("docker"));
    assert!(!controller.is_expanded("docker"));
    controller.toggle_domain_expansion(&DomainId::from("docker"));
    assert!(controller.is_expanded("docker"));

    assert_eq!(controller.current_selection(&host), before);
    assert!(host.writes().is_empty());

    // A write still works after expansion changes
    controller.toggle(&mut host, "docker", false).unwrap();
    assert_eq!(host.writes().len(), 1);
}

#[test]
fn given_collapse_all_when_listing_rows_then_only_roots() {
    let mut controller = controller();
    controller.collapse_all();

    let rows = controller.visible_rows(&controller.current_selection(&host(None)));
    assert_eq!(rows.len(), controller.catalog().forest().roots().len());
    assert!(rows.iter().all(|row| row.depth == 0));

    controller.expand_all();
    let rows = controller.visible_rows(&controller.current_selection(&host(None)));
    assert_eq!(rows.len(), controller.catalog().forest().len());
}

#[test]
fn given_defaults_when_listing_rows_then_states_reflect_selection() {
    let controller = controller();
    let rows = controller.visible_rows(&controller.current_selection(&host(None)));
    let state_of = |id: &str| rows.iter().find(|row| row.id.as_str() == id).unwrap().state;

    // server.network is not a default, so server is only partial
    assert_eq!(state_of("server"), CheckState::Indeterminate);
    assert_eq!(state_of("server.info"), CheckState::Checked);
    assert_eq!(state_of("vms"), CheckState::Checked);
    assert_eq!(state_of("ups"), CheckState::Unchecked);
}
