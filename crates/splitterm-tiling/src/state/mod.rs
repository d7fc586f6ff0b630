//! The layout forest: one tree per workspace tab.

mod dispatch;
mod persist;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tree::LayoutNode;

/// Well-known key of the tab that always exists.
pub const PERMANENT_TAB: &str = "0";

/// Every tab's layout tree, keyed by tab id.
///
/// Node ids are unique across all trees, so lookups search the whole forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutState {
    layouts: BTreeMap<String, LayoutNode>,
}

/// Where a node lives: its tab and child-index path from the tab's root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeLocation {
    pub tab: String,
    pub path: Vec<usize>,
}

impl LayoutState {
    /// A forest with no tabs at all.
    pub fn empty() -> Self {
        Self {
            layouts: BTreeMap::new(),
        }
    }

    pub fn layout(&self, tab_id: &str) -> Option<&LayoutNode> {
        self.layouts.get(tab_id)
    }

    pub fn tab_ids(&self) -> Vec<String> {
        self.layouts.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// First node with `id` across all tabs.
    pub fn find_by_id(&self, id: &str) -> Option<&LayoutNode> {
        self.layouts.values().find_map(|tree| tree.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut LayoutNode> {
        self.layouts
            .values_mut()
            .find_map(|tree| tree.find_by_id_mut(id))
    }

    /// The tab whose tree contains `id`.
    pub fn tab_of(&self, id: &str) -> Option<&str> {
        self.layouts
            .iter()
            .find(|(_, tree)| tree.find_by_id(id).is_some())
            .map(|(tab, _)| tab.as_str())
    }

    /// Leaf ids of one tab, in pre-order.
    pub fn leaf_ids(&self, tab_id: &str) -> Vec<String> {
        self.layouts
            .get(tab_id)
            .map(LayoutNode::leaf_ids)
            .unwrap_or_default()
    }

    /// Every leaf id in the forest.
    pub fn all_leaf_ids(&self) -> Vec<String> {
        self.layouts.values().flat_map(LayoutNode::leaf_ids).collect()
    }

    /// `true` when every split in every tab has children summing to 100.
    pub fn sizes_balanced(&self) -> bool {
        self.layouts.values().all(LayoutNode::sizes_balanced)
    }

    pub(crate) fn locate(&self, id: &str) -> Option<NodeLocation> {
        self.layouts.iter().find_map(|(tab, tree)| {
            tree.path_to(id).map(|path| NodeLocation {
                tab: tab.clone(),
                path,
            })
        })
    }

    pub(crate) fn node_at(&self, loc: &NodeLocation) -> Option<&LayoutNode> {
        self.layouts.get(&loc.tab)?.node_at_path(&loc.path)
    }

    pub(crate) fn node_at_mut(&mut self, loc: &NodeLocation) -> Option<&mut LayoutNode> {
        self.layouts.get_mut(&loc.tab)?.node_at_path_mut(&loc.path)
    }

    pub(crate) fn tree_mut(&mut self, tab_id: &str) -> Option<&mut LayoutNode> {
        self.layouts.get_mut(tab_id)
    }

    pub(crate) fn insert_tree(&mut self, tab_id: &str, tree: LayoutNode) -> Option<LayoutNode> {
        self.layouts.insert(tab_id.to_string(), tree)
    }

    pub(crate) fn remove_tree(&mut self, tab_id: &str) -> Option<LayoutNode> {
        self.layouts.remove(tab_id)
    }
}

impl Default for LayoutState {
    /// The permanent tab with a default layout.
    fn default() -> Self {
        let mut layouts = BTreeMap::new();
        layouts.insert(PERMANENT_TAB.to_string(), LayoutNode::default_layout());
        Self { layouts }
    }
}
