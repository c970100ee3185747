//! Tri-state evaluation of domain nodes against a selection.
//!
//! Evaluated by walking the live forest on every call; the forest is shallow,
//! so nothing is cached.

use generational_arena::Index;

use crate::domain::arena::DomainForest;
use crate::domain::entities::{CheckState, Selection};

impl DomainForest {
    /// True iff the node is selected and every child is fully selected.
    ///
    /// Unknown indices are never selected.
    pub fn is_node_fully_selected(&self, idx: Index, selection: &Selection) -> bool {
        let Some(node) = self.get_node(idx) else {
            return false;
        };
        selection.contains(&node.id)
            && node
                .children
                .iter()
                .all(|&child| self.is_node_fully_selected(child, selection))
    }

    /// True iff the node or any node below it is selected.
    pub fn node_has_selected_descendant(&self, idx: Index, selection: &Selection) -> bool {
        let Some(node) = self.get_node(idx) else {
            return false;
        };
        selection.contains(&node.id)
            || node
                .children
                .iter()
                .any(|&child| self.node_has_selected_descendant(child, selection))
    }

    /// True iff the node has children, something at or below it is selected,
    /// and it is not fully selected. Leaves are never partial.
    pub fn is_node_partially_selected(&self, idx: Index, selection: &Selection) -> bool {
        let Some(node) = self.get_node(idx) else {
            return false;
        };
        !node.is_leaf()
            && self.node_has_selected_descendant(idx, selection)
            && !self.is_node_fully_selected(idx, selection)
    }

    /// Exactly one of checked, indeterminate, unchecked.
    pub fn check_state(&self, idx: Index, selection: &Selection) -> CheckState {
        if self.is_node_fully_selected(idx, selection) {
            CheckState::Checked
        } else if self.is_node_partially_selected(idx, selection) {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::DomainTreeBuilder;
    use crate::domain::entities::{DomainId, DomainSpec};

    fn forest() -> DomainForest {
        DomainTreeBuilder::new()
            .build(&[DomainSpec::branch(
                "root",
                vec![DomainSpec::leaf("a"), DomainSpec::leaf("b")],
            )])
            .unwrap()
    }

    fn selection(ids: &[&str]) -> Selection {
        ids.iter().map(|id| DomainId::from(*id)).collect()
    }

    #[test]
    fn given_leaf_when_selected_then_checked_never_partial() {
        let forest = forest();
        let a = forest.index_of("a").unwrap();
        let sel = selection(&["a"]);
        assert_eq!(forest.check_state(a, &sel), CheckState::Checked);
        assert!(!forest.is_node_partially_selected(a, &sel));
    }

    #[test]
    fn given_child_selected_without_parent_id_when_evaluating_then_parent_partial() {
        let forest = forest();
        let root = forest.index_of("root").unwrap();
        let sel = selection(&["a", "b"]);
        // Parent id itself is missing, so it cannot be fully selected
        assert_eq!(forest.check_state(root, &sel), CheckState::Indeterminate);
    }

    #[test]
    fn given_parent_id_only_when_evaluating_then_parent_partial() {
        let forest = forest();
        let root = forest.index_of("root").unwrap();
        let sel = selection(&["root"]);
        assert_eq!(forest.check_state(root, &sel), CheckState::Indeterminate);
    }

    #[test]
    fn given_empty_selection_when_evaluating_then_unchecked() {
        let forest = forest();
        let root = forest.index_of("root").unwrap();
        assert_eq!(
            forest.check_state(root, &Selection::new()),
            CheckState::Unchecked
        );
    }
}
