//! Domain catalog: the forest plus its default selection.

use crate::domain::arena::DomainForest;
use crate::domain::builder::DomainTreeBuilder;
use crate::domain::entities::{DomainId, DomainSpec, Selection};
use crate::domain::error::{DomainError, DomainResult};

/// Domains polled when the host has no enabled-domains value yet.
const BUILTIN_DEFAULTS: &[&str] = &[
    "server",
    "server.info",
    "server.metrics",
    "storage",
    "storage.array",
    "storage.disks",
    "docker",
    "docker.containers",
    "vms",
];

/// Immutable domain forest with its fallback selection.
#[derive(Debug)]
pub struct DomainCatalog {
    forest: DomainForest,
    defaults: Vec<DomainId>,
}

impl DomainCatalog {
    /// Build a catalog; every default id must name a node of `specs`.
    pub fn new(specs: &[DomainSpec], defaults: &[&str]) -> DomainResult<Self> {
        let forest = DomainTreeBuilder::new().build(specs)?;
        if let Some(unknown) = defaults.iter().find(|id| !forest.contains(id)) {
            return Err(DomainError::UnknownDefault(unknown.to_string()));
        }
        let defaults = forest.sort_by_tree_order(defaults.iter().map(|id| DomainId::from(*id)));
        Ok(Self { forest, defaults })
    }

    /// Resource classes of a home server.
    pub fn builtin() -> DomainResult<Self> {
        Self::new(&builtin_specs(), BUILTIN_DEFAULTS)
    }

    pub fn forest(&self) -> &DomainForest {
        &self.forest
    }

    /// Default selection in tree order.
    pub fn default_enabled(&self) -> &[DomainId] {
        &self.defaults
    }

    pub fn default_selection(&self) -> Selection {
        self.defaults.iter().cloned().collect()
    }
}

fn builtin_specs() -> Vec<DomainSpec> {
    vec![
        DomainSpec::branch(
            "server",
            vec![
                DomainSpec::leaf("server.info").described(),
                DomainSpec::leaf("server.metrics").described(),
                DomainSpec::leaf("server.network"),
            ],
        )
        .described(),
        DomainSpec::branch(
            "storage",
            vec![
                DomainSpec::leaf("storage.array").described(),
                DomainSpec::leaf("storage.disks").described(),
                DomainSpec::leaf("storage.parity").described(),
                DomainSpec::leaf("storage.shares"),
            ],
        )
        .described(),
        DomainSpec::branch(
            "docker",
            vec![
                DomainSpec::leaf("docker.containers"),
                DomainSpec::leaf("docker.networks"),
            ],
        )
        .described(),
        DomainSpec::leaf("vms").described(),
        DomainSpec::leaf("ups").described(),
        DomainSpec::leaf("notifications"),
    ]
}
