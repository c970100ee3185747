//! Tree builder turning nested domain descriptions into an arena forest.

use std::collections::HashSet;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::DomainForest;
use crate::domain::entities::{DomainId, DomainSpec};
use crate::domain::error::{DomainError, DomainResult};

/// Constructs a `DomainForest` from `DomainSpec` roots.
///
/// Rejects empty and duplicate ids so that every id of the finished forest
/// resolves to exactly one node.
#[derive(Debug, Default)]
pub struct DomainTreeBuilder {
    seen: HashSet<String>,
}

impl DomainTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a forest whose roots are `specs`, in order.
    #[instrument(level = "debug", skip(self, specs), fields(roots = specs.len()))]
    pub fn build(&mut self, specs: &[DomainSpec]) -> DomainResult<DomainForest> {
        // Reset state for a fresh build
        self.seen.clear();

        let mut forest = DomainForest::new();
        for spec in specs {
            self.insert_spec(&mut forest, spec, None)?;
        }
        forest.reindex();
        debug!(
            "built domain forest: {} nodes, depth {}",
            forest.len(),
            forest.depth()
        );
        Ok(forest)
    }

    fn insert_spec(
        &mut self,
        forest: &mut DomainForest,
        spec: &DomainSpec,
        parent: Option<Index>,
    ) -> DomainResult<()> {
        let id = spec.id.trim();
        if id.is_empty() {
            return Err(DomainError::EmptyId {
                parent: parent
                    .and_then(|idx| forest.get_node(idx))
                    .map(|node| node.id.to_string()),
            });
        }
        if !self.seen.insert(id.to_string()) {
            return Err(DomainError::DuplicateId(id.to_string()));
        }

        let id = DomainId::new(id);
        let label = spec.label.clone().unwrap_or_else(|| id.label_key());
        let idx = forest.insert_node(id, label, spec.description.clone(), parent);

        for child in &spec.children {
            self.insert_spec(forest, child, Some(idx))?;
        }
        Ok(())
    }
}
