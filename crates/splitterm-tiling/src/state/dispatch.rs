//! Command dispatch: apply a `LayoutCommand` and forward session effects.

use tracing::{debug, info};

use crate::commands::{LayoutCommand, SwapTarget};
use crate::sink::SessionSink;
use crate::tree::{Direction, LayoutNode, LeafIdentity};

use super::{LayoutState, NodeLocation};

impl LayoutState {
    /// Apply one command. Returns `true` when the forest changed.
    ///
    /// Session effects (kills, swaps) are sent to `sink` after the tree has
    /// been updated.
    pub fn apply(&mut self, command: LayoutCommand, sink: &mut dyn SessionSink) -> bool {
        match command {
            LayoutCommand::MakeSplit {
                split_id,
                child_index,
                direction,
                before,
            } => self.make_split(&split_id, child_index, direction, before),
            LayoutCommand::CloseSplit {
                split_id,
                child_index,
            } => self.close_split(&split_id, child_index, sink),
            LayoutCommand::SwapWith { split_id, target } => self.swap_with(&split_id, &target, sink),
            LayoutCommand::UpdateSplitSizes { split_id, sizes } => {
                self.update_split_sizes(&split_id, &sizes)
            }
            LayoutCommand::NewLayout { tab_id } => self.new_layout(&tab_id, sink),
            LayoutCommand::RemoveLayout { tab_id } => self.remove_layout(&tab_id, sink),
            LayoutCommand::SetPrefs { split_id, prefs } => self
                .find_tree_mut(&split_id)
                .is_some_and(|tree| tree.set_prefs(&split_id, &prefs)),
            LayoutCommand::SetSearch { split_id, search } => self
                .find_tree_mut(&split_id)
                .is_some_and(|tree| tree.set_search(&split_id, &search)),
            LayoutCommand::SetSearchWrap { split_id, wrap } => self
                .find_tree_mut(&split_id)
                .is_some_and(|tree| tree.set_search_wrap(&split_id, wrap)),
        }
    }

    pub fn make_split(
        &mut self,
        split_id: &str,
        child_index: usize,
        direction: Direction,
        before: bool,
    ) -> bool {
        let Some(tree) = self.find_tree_mut(split_id) else {
            debug!(split = split_id, "make_split: unknown id");
            return false;
        };
        tree.make_split(split_id, child_index, direction, before)
    }

    /// Close a child slot and kill its session.
    ///
    /// When the removed child is itself a split, every leaf beneath it is
    /// killed as well.
    pub fn close_split(
        &mut self,
        split_id: &str,
        child_index: usize,
        sink: &mut dyn SessionSink,
    ) -> bool {
        let Some(tree) = self.find_tree_mut(split_id) else {
            debug!(split = split_id, "close_split: unknown id");
            return false;
        };
        let Some(removed) = tree.close_split(split_id, child_index) else {
            return false;
        };

        sink.kill(removed.id());
        if !removed.is_leaf() {
            for id in removed.leaf_ids() {
                sink.kill(&id);
            }
        }
        true
    }

    /// Exchange id, prefs and search between leaf `split_id` and the leaf in
    /// `target`'s slot, then swap their sessions. Sizes and positions stay.
    pub fn swap_with(
        &mut self,
        split_id: &str,
        target: &SwapTarget,
        sink: &mut dyn SessionSink,
    ) -> bool {
        let Some(p_loc) = self.locate(split_id) else {
            debug!(split = split_id, "swap_with: unknown id");
            return false;
        };
        let Some(mut q_loc) = self.locate(&target.parent_id) else {
            debug!(parent = %target.parent_id, "swap_with: unknown target parent");
            return false;
        };
        q_loc.path.push(target.child_index);

        let Some((p, q)) = self.leaf_pair(&p_loc, &q_loc) else {
            return false;
        };
        if p.id == q.id {
            debug!(split = split_id, "swap_with: target is the same leaf");
            return false;
        }

        let (p_id, q_id) = (p.id.clone(), q.id.clone());
        if let Some(node) = self.node_at_mut(&p_loc) {
            node.set_leaf_identity(q);
        }
        if let Some(node) = self.node_at_mut(&q_loc) {
            node.set_leaf_identity(p);
        }
        info!(a = %p_id, b = %q_id, "swapped panes");
        sink.swap(&p_id, &q_id);
        true
    }

    pub fn update_split_sizes(&mut self, split_id: &str, sizes: &[f64]) -> bool {
        self.find_tree_mut(split_id)
            .is_some_and(|tree| tree.update_split_sizes(split_id, sizes))
    }

    /// Install a default layout under `tab_id`, killing any tree it replaces.
    pub fn new_layout(&mut self, tab_id: &str, sink: &mut dyn SessionSink) -> bool {
        if let Some(old) = self.insert_tree(tab_id, LayoutNode::default_layout()) {
            kill_leaves(&old, sink);
        }
        info!(tab = tab_id, "new layout");
        true
    }

    /// Kill every leaf of `tab_id`'s tree, then drop the tree.
    pub fn remove_layout(&mut self, tab_id: &str, sink: &mut dyn SessionSink) -> bool {
        let Some(tree) = self.layouts.get(tab_id) else {
            debug!(tab = tab_id, "remove_layout: unknown tab");
            return false;
        };
        kill_leaves(tree, sink);
        self.remove_tree(tab_id);
        info!(tab = tab_id, "removed layout");
        true
    }

    fn find_tree_mut(&mut self, id: &str) -> Option<&mut LayoutNode> {
        let tab = self.tab_of(id)?.to_string();
        self.tree_mut(&tab)
    }

    fn leaf_pair(
        &self,
        p_loc: &NodeLocation,
        q_loc: &NodeLocation,
    ) -> Option<(LeafIdentity, LeafIdentity)> {
        let p = self.node_at(p_loc)?.leaf_identity()?;
        let q = self.node_at(q_loc)?.leaf_identity()?;
        Some((p, q))
    }
}

fn kill_leaves(tree: &LayoutNode, sink: &mut dyn SessionSink) {
    for id in tree.leaf_ids() {
        sink.kill(&id);
    }
}
