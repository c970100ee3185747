//! Domain selection controller
//!
//! Derives tri-state checkbox states from the host's enabled-domains value and
//! writes toggles back through the host's write accessor. The selection itself
//! is never stored here; only the expansion state is.

use std::collections::HashSet;
use std::sync::Arc;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::application::native_config::{AttrValue, ConfigAttribute};
use crate::domain::{CheckState, DomainCatalog, DomainError, DomainId, DomainResult, Selection};
use crate::infrastructure::traits::ConfigHost;

/// One visible row of the domain tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRow {
    pub id: DomainId,
    /// Localization key of the label
    pub label: String,
    /// Localization key of the description
    pub description: Option<String>,
    /// Roots are at depth 0
    pub depth: usize,
    pub state: CheckState,
    pub has_children: bool,
    pub expanded: bool,
}

/// Controller for the hierarchical domain checkbox tree.
pub struct DomainSelectionController {
    catalog: Arc<DomainCatalog>,
    expanded: HashSet<DomainId>,
}

impl DomainSelectionController {
    /// Create a controller with every node that has children expanded.
    pub fn new(catalog: Arc<DomainCatalog>) -> Self {
        let expanded = catalog.forest().branch_ids().into_iter().collect();
        Self { catalog, expanded }
    }

    pub fn catalog(&self) -> &DomainCatalog {
        &self.catalog
    }

    /// Sanitize a persisted enabled-domains value.
    ///
    /// Lists keep their known ids only; absent or non-list values fall back to
    /// the catalog's default selection.
    pub fn read_selection(&self, raw: Option<&AttrValue>) -> Selection {
        let forest = self.catalog.forest();
        match raw.and_then(AttrValue::as_string_list) {
            Some(ids) => ids
                .into_iter()
                .filter(|id| {
                    let known = forest.contains(id);
                    if !known {
                        debug!("dropping unknown domain id: {}", id);
                    }
                    known
                })
                .map(DomainId::from)
                .collect(),
            None => {
                debug!("enabled domains absent or malformed, using defaults");
                self.catalog.default_selection()
            }
        }
    }

    /// Selection currently held by the host, sanitized.
    pub fn current_selection(&self, host: &dyn ConfigHost) -> Selection {
        self.read_selection(host.native().enabled_domains.as_ref())
    }

    /// Select or deselect the node at `idx` with full propagation.
    ///
    /// Selecting adds the subtree and every ancestor. Deselecting removes the
    /// subtree, then drops each ancestor with no selected id left below it.
    #[instrument(level = "debug", skip(self, host))]
    pub fn handle_domain_toggle(&self, host: &mut dyn ConfigHost, idx: Index, should_select: bool) {
        let forest = self.catalog.forest();
        let Some(node) = forest.get_node(idx) else {
            return;
        };
        let mut selection = self.current_selection(host);
        let subtree = forest.collect_node_ids(idx);
        let ancestors = forest.ancestors(node.id.as_str());

        if should_select {
            selection.extend(subtree);
            selection.extend(ancestors);
        } else {
            for id in &subtree {
                selection.remove(id);
            }
            // Nearest first, so a pruned parent no longer keeps the grandparent alive
            for ancestor in ancestors {
                let Some(ancestor_idx) = forest.index_of(ancestor.as_str()) else {
                    continue;
                };
                let still_covered = forest
                    .collect_node_ids(ancestor_idx)
                    .iter()
                    .skip(1)
                    .any(|id| selection.contains(id));
                if !still_covered {
                    selection.remove(&ancestor);
                }
            }
        }

        debug!(
            "{} {} -> {} enabled",
            if should_select { "select" } else { "deselect" },
            node.id,
            selection.len()
        );
        self.write_selection(host, selection);
    }

    /// Toggle by id; unknown ids are an error here since they come from the user.
    pub fn toggle(
        &self,
        host: &mut dyn ConfigHost,
        id: &str,
        should_select: bool,
    ) -> DomainResult<()> {
        let idx = self
            .catalog
            .forest()
            .index_of(id)
            .ok_or_else(|| DomainError::UnknownDomain(id.to_string()))?;
        self.handle_domain_toggle(host, idx, should_select);
        Ok(())
    }

    pub fn enable_all(&self, host: &mut dyn ConfigHost) {
        let all = self.catalog.forest().all_domain_ids().iter().cloned().collect();
        self.write_selection(host, all);
    }

    pub fn disable_all(&self, host: &mut dyn ConfigHost) {
        self.write_selection(host, Selection::new());
    }

    pub fn reset_to_defaults(&self, host: &mut dyn ConfigHost) {
        self.write_selection(host, self.catalog.default_selection());
    }

    /// Enabled ids of the host in canonical tree order.
    pub fn export(&self, host: &dyn ConfigHost) -> Vec<DomainId> {
        self.catalog
            .forest()
            .sort_by_tree_order(self.current_selection(host))
    }

    fn write_selection(&self, host: &mut dyn ConfigHost, selection: Selection) {
        let ordered = self.catalog.forest().sort_by_tree_order(selection);
        host.set(
            ConfigAttribute::EnabledDomains,
            AttrValue::list(ordered.iter().map(DomainId::to_string)),
        );
    }

    /// Flip the expansion of `id`. Ancestors and descendants are untouched.
    pub fn toggle_domain_expansion(&mut self, id: &DomainId) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn expand_all(&mut self) {
        self.expanded = self.catalog.forest().branch_ids().into_iter().collect();
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Rows in pre-order, skipping everything below a collapsed node.
    pub fn visible_rows(&self, selection: &Selection) -> Vec<DomainRow> {
        let mut rows = Vec::new();
        for &root in self.catalog.forest().roots() {
            self.collect_rows(root, 0, selection, &mut rows);
        }
        rows
    }

    fn collect_rows(&self, idx: Index, depth: usize, selection: &Selection, rows: &mut Vec<DomainRow>) {
        let forest = self.catalog.forest();
        let Some(node) = forest.get_node(idx) else {
            return;
        };
        let expanded = self.expanded.contains(&node.id);
        rows.push(DomainRow {
            id: node.id.clone(),
            label: node.label.clone(),
            description: node.description.clone(),
            depth,
            state: forest.check_state(idx, selection),
            has_children: !node.is_leaf(),
            expanded,
        });
        if expanded {
            for &child in &node.children {
                self.collect_rows(child, depth + 1, selection, rows);
            }
        }
    }
}
