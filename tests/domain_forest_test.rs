//! Tests for the domain forest: construction, lookups and canonical ordering.

use rstest::{fixture, rstest};

use homemon::domain::{DomainCatalog, DomainForest, DomainId, DomainSpec, DomainTreeBuilder};

#[fixture]
fn forest() -> DomainForest {
    DomainTreeBuilder::new()
        .build(&[
            DomainSpec::branch(
                "storage",
                vec![
                    DomainSpec::branch(
                        "storage.array",
                        vec![DomainSpec::leaf("storage.array.parity")],
                    ),
                    DomainSpec::leaf("storage.disks"),
                ],
            ),
            DomainSpec::leaf("vms"),
        ])
        .expect("build forest")
}

fn ids(ids: &[&str]) -> Vec<DomainId> {
    ids.iter().map(|id| DomainId::from(*id)).collect()
}

#[rstest]
fn given_forest_when_listing_all_ids_then_preorder(forest: DomainForest) {
    assert_eq!(
        forest.all_domain_ids(),
        ids(&[
            "storage",
            "storage.array",
            "storage.array.parity",
            "storage.disks",
            "vms"
        ])
        .as_slice()
    );
}

#[rstest]
fn given_inner_node_when_collecting_ids_then_self_first_then_descendants(forest: DomainForest) {
    let idx = forest.index_of("storage").unwrap();
    assert_eq!(
        forest.collect_node_ids(idx),
        ids(&["storage", "storage.array", "storage.array.parity", "storage.disks"])
    );

    let leaf = forest.index_of("vms").unwrap();
    assert_eq!(forest.collect_node_ids(leaf), ids(&["vms"]));
}

#[rstest]
#[case("storage.array.parity", &["storage.array", "storage"])]
#[case("storage.disks", &["storage"])]
#[case("storage", &[])]
#[case("unknown", &[])]
fn given_id_when_getting_ancestors_then_nearest_first(
    forest: DomainForest,
    #[case] id: &str,
    #[case] expected: &[&str],
) {
    assert_eq!(forest.ancestors(id), ids(expected));
}

#[rstest]
fn given_unknown_id_when_looking_up_then_absent_not_error(forest: DomainForest) {
    assert!(forest.node_by_id("docker").is_none());
    assert!(!forest.contains("docker"));
    assert_eq!(forest.tree_position("docker"), usize::MAX);
}

#[rstest]
fn given_duplicates_and_unknowns_when_sorting_then_unique_tree_order_unknown_last(
    forest: DomainForest,
) {
    let sorted = forest.sort_by_tree_order(ids(&[
        "vms",
        "legacy.b",
        "storage.disks",
        "storage",
        "vms",
        "legacy.a",
        "storage.disks",
    ]));

    assert_eq!(
        sorted,
        ids(&["storage", "storage.disks", "vms", "legacy.b", "legacy.a"])
    );
}

#[rstest]
fn given_forest_when_querying_shape_then_depth_and_branches_match(forest: DomainForest) {
    assert_eq!(forest.depth(), 3);
    assert_eq!(forest.len(), 5);
    assert_eq!(forest.branch_ids(), ids(&["storage", "storage.array"]));
    let parity = forest.index_of("storage.array.parity").unwrap();
    assert_eq!(forest.node_depth(parity), 2);
}

#[test]
fn given_builtin_catalog_when_built_then_every_default_resolves() {
    let catalog = DomainCatalog::builtin().expect("builtin catalog");
    let forest = catalog.forest();

    assert_eq!(forest.roots().len(), 6);
    for id in catalog.default_enabled() {
        assert!(forest.contains(id.as_str()), "default {} unknown", id);
    }
    assert_eq!(
        forest.all_domain_ids().len(),
        forest.iter().count(),
        "pre-order covers every node"
    );
}

#[test]
fn given_catalog_described_in_toml_when_building_then_matches_declaration() {
    #[derive(serde::Deserialize)]
    struct CatalogFile {
        domains: Vec<DomainSpec>,
    }

    let file: CatalogFile = toml::from_str(
        r#"
[[domains]]
id = "docker"
label = "custom.docker"

[[domains.children]]
id = "docker.containers"

[[domains]]
id = "ups"
"#,
    )
    .expect("parse catalog");

    let catalog = DomainCatalog::new(&file.domains, &["ups"]).expect("catalog");
    let forest = catalog.forest();
    assert_eq!(forest.node_by_id("docker").unwrap().label, "custom.docker");
    assert_eq!(
        forest.ancestors("docker.containers"),
        ids(&["docker"])
    );
    assert_eq!(catalog.default_enabled(), ids(&["ups"]).as_slice());
}
