use std::collections::HashMap;
use std::fmt;

use generational_arena::{Arena, Index};
use itertools::Itertools;
use tracing::instrument;

use crate::domain::entities::DomainId;

/// Node of the domain forest.
#[derive(Debug, Clone)]
pub struct DomainNode {
    pub id: DomainId,
    /// Localization key of the label
    pub label: String,
    /// Localization key of the description, if any
    pub description: Option<String>,
    /// Index of parent node in the arena, None for root nodes
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in declaration order
    pub children: Vec<Index>,
}

impl DomainNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Display for DomainNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Arena-based forest of domains.
///
/// Nodes reference each other by arena index only. The id lookup and the
/// pre-order position table are rebuilt by `reindex` once construction is done,
/// after which the forest is treated as immutable.
#[derive(Debug, Default)]
pub struct DomainForest {
    arena: Arena<DomainNode>,
    roots: Vec<Index>,
    by_id: HashMap<DomainId, Index>,
    order: Vec<DomainId>,
    position: HashMap<DomainId, usize>,
}

impl DomainForest {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(level = "trace", skip(self))]
    pub(crate) fn insert_node(
        &mut self,
        id: DomainId,
        label: String,
        description: Option<String>,
        parent: Option<Index>,
    ) -> Index {
        let node = DomainNode {
            id: id.clone(),
            label,
            description,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.roots.push(node_idx);
        }
        self.by_id.insert(id, node_idx);

        node_idx
    }

    /// Recompute the pre-order id sequence and position table.
    #[instrument(level = "debug", skip(self))]
    pub(crate) fn reindex(&mut self) {
        let order: Vec<DomainId> = self.iter().map(|(_, node)| node.id.clone()).collect();
        self.position = order
            .iter()
            .enumerate()
            .map(|(pos, id)| (id.clone(), pos))
            .collect();
        self.order = order;
    }

    pub fn get_node(&self, idx: Index) -> Option<&DomainNode> {
        self.arena.get(idx)
    }

    /// Root indices in declaration order.
    pub fn roots(&self) -> &[Index] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Arena index of `id`; `None` marks an unknown or obsolete id.
    pub fn index_of(&self, id: &str) -> Option<Index> {
        self.by_id.get(id).copied()
    }

    pub fn node_by_id(&self, id: &str) -> Option<&DomainNode> {
        self.index_of(id).and_then(|idx| self.get_node(idx))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Every id of the forest in pre-order.
    pub fn all_domain_ids(&self) -> &[DomainId] {
        &self.order
    }

    /// Pre-order position of `id`; unknown ids map to `usize::MAX`.
    pub fn tree_position(&self, id: &str) -> usize {
        self.position.get(id).copied().unwrap_or(usize::MAX)
    }

    /// The node's own id followed by all descendant ids, pre-order.
    #[instrument(level = "trace", skip(self))]
    pub fn collect_node_ids(&self, idx: Index) -> Vec<DomainId> {
        self.iter_subtree(idx)
            .map(|(_, node)| node.id.clone())
            .collect()
    }

    /// Ancestor ids of `id`, nearest parent first, root last.
    ///
    /// Unknown ids have no ancestors.
    #[instrument(level = "trace", skip(self))]
    pub fn ancestors(&self, id: &str) -> Vec<DomainId> {
        let mut ancestors = Vec::new();
        let mut current = self.node_by_id(id).and_then(|node| node.parent);
        while let Some(parent_idx) = current {
            match self.get_node(parent_idx) {
                Some(parent) => {
                    ancestors.push(parent.id.clone());
                    current = parent.parent;
                }
                None => break,
            }
        }
        ancestors
    }

    /// Number of ancestors of the node (roots are at depth 0).
    pub fn node_depth(&self, idx: Index) -> usize {
        let mut depth = 0;
        let mut current = self.get_node(idx).and_then(|node| node.parent);
        while let Some(parent_idx) = current {
            depth += 1;
            current = self.get_node(parent_idx).and_then(|node| node.parent);
        }
        depth
    }

    /// Number of levels of the deepest tree in the forest.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.roots
            .iter()
            .map(|&root| self.calculate_depth(root))
            .max()
            .unwrap_or(0)
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Ids of all nodes that have children, pre-order.
    pub fn branch_ids(&self) -> Vec<DomainId> {
        self.iter()
            .filter(|(_, node)| !node.is_leaf())
            .map(|(_, node)| node.id.clone())
            .collect()
    }

    /// Deduplicate `ids` and order them by pre-order position.
    ///
    /// Unknown ids sort last, keeping their relative input order.
    #[instrument(level = "debug", skip(self, ids))]
    pub fn sort_by_tree_order<I>(&self, ids: I) -> Vec<DomainId>
    where
        I: IntoIterator<Item = DomainId>,
    {
        let mut sorted: Vec<DomainId> = ids.into_iter().unique().collect();
        sorted.sort_by_key(|id| self.tree_position(id.as_str()));
        sorted
    }

    /// Pre-order traversal of the whole forest, roots in declaration order.
    pub fn iter(&self) -> ForestIterator<'_> {
        ForestIterator::new(self, self.roots.clone())
    }

    /// Pre-order traversal of the subtree rooted at `idx`.
    pub fn iter_subtree(&self, idx: Index) -> ForestIterator<'_> {
        ForestIterator::new(self, vec![idx])
    }
}

pub struct ForestIterator<'a> {
    forest: &'a DomainForest,
    stack: Vec<Index>,
}

impl<'a> ForestIterator<'a> {
    fn new(forest: &'a DomainForest, mut starts: Vec<Index>) -> Self {
        // Stack pops from the back, so the first start must end up last
        starts.reverse();
        Self {
            forest,
            stack: starts,
        }
    }
}

impl<'a> Iterator for ForestIterator<'a> {
    type Item = (Index, &'a DomainNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.forest.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
