//! Structural mutations on a single layout tree: split, close, resize, prefs.

use splitterm_common::new_id;
use tracing::debug;

use super::{Direction, LayoutNode, LayoutPrefs, LayoutSearch};

/// Give every child the same share of 100.
pub(crate) fn redistribute(children: &mut [LayoutNode]) {
    if children.is_empty() {
        return;
    }
    let share = 100.0 / children.len() as f64;
    for child in children.iter_mut() {
        child.set_size(share);
    }
}

impl LayoutNode {
    /// Split the `ix`-th child of split `split_id`.
    ///
    /// Along the split's own axis a fresh leaf is inserted next to the child
    /// and all siblings are resized evenly. Across it, the child is wrapped in
    /// a new split (fresh id) holding a fresh leaf and the original child,
    /// 50/50; the original keeps its id so a live session stays addressable.
    /// Returns `false` when nothing changed.
    pub fn make_split(
        &mut self,
        split_id: &str,
        ix: usize,
        direction: Direction,
        before: bool,
    ) -> bool {
        let Some(target) = self.find_by_id_mut(split_id) else {
            debug!(split = split_id, "make_split: no such split");
            return false;
        };
        let LayoutNode::Split {
            direction: axis,
            children,
            ..
        } = target
        else {
            debug!(split = split_id, "make_split: target is a leaf");
            return false;
        };
        if *axis == direction {
            // An emptied root accepts a first pane at index 0.
            let at = if before || children.is_empty() { ix } else { ix + 1 };
            if at > children.len() {
                debug!(split = split_id, ix, "make_split: child index out of range");
                return false;
            }
            children.insert(at, LayoutNode::leaf(new_id(), 0.0));
            redistribute(children);
        } else {
            if ix >= children.len() {
                debug!(split = split_id, ix, "make_split: child index out of range");
                return false;
            }
            let slot = &mut children[ix];
            let size = slot.size();
            let mut original = std::mem::replace(slot, LayoutNode::leaf(String::new(), 0.0));
            original.set_size(50.0);
            let fresh = LayoutNode::leaf(new_id(), 50.0);
            let pair = if before {
                vec![fresh, original]
            } else {
                vec![original, fresh]
            };
            *slot = LayoutNode::Split {
                id: new_id(),
                direction,
                size,
                root: false,
                children: pair,
            };
        }
        true
    }

    /// Remove the `ix`-th child of split `split_id` and return it.
    ///
    /// Survivors are resized evenly. A non-root split left with one child
    /// collapses into that child, keeping its own size and position. The
    /// root split never collapses.
    pub fn close_split(&mut self, split_id: &str, ix: usize) -> Option<LayoutNode> {
        let target = self.find_by_id_mut(split_id)?;
        let LayoutNode::Split { children, root, .. } = target else {
            debug!(split = split_id, "close_split: target is a leaf");
            return None;
        };
        if ix >= children.len() {
            debug!(split = split_id, ix, "close_split: child index out of range");
            return None;
        }

        let removed = children.remove(ix);
        let collapse = !*root && children.len() == 1;
        if !collapse {
            redistribute(children);
        } else {
            collapse_into_only_child(target);
        }
        Some(removed)
    }

    /// Assign `sizes[i]` to child `i` of split `split_id`.
    ///
    /// Children past the end of `sizes` keep their size, extra sizes are
    /// ignored, and no renormalization happens.
    pub fn update_split_sizes(&mut self, split_id: &str, sizes: &[f64]) -> bool {
        let Some(LayoutNode::Split { children, .. }) = self.find_by_id_mut(split_id) else {
            return false;
        };
        for (child, size) in children.iter_mut().zip(sizes) {
            child.set_size(*size);
        }
        true
    }

    pub fn set_prefs(&mut self, id: &str, update: &LayoutPrefs) -> bool {
        match self.find_by_id_mut(id) {
            Some(LayoutNode::Leaf { prefs, .. }) => {
                prefs.merge(update);
                true
            }
            _ => false,
        }
    }

    pub fn set_search(&mut self, id: &str, update: &LayoutSearch) -> bool {
        match self.find_by_id_mut(id) {
            Some(LayoutNode::Leaf { search, .. }) => {
                search.merge(update);
                true
            }
            _ => false,
        }
    }

    pub fn set_search_wrap(&mut self, id: &str, wrap: bool) -> bool {
        match self.find_by_id_mut(id) {
            Some(LayoutNode::Leaf { search, .. }) => {
                search.wrap = Some(wrap);
                true
            }
            _ => false,
        }
    }
}

/// Replace a single-child split by that child. A leaf child brings its id,
/// prefs and search; a split child brings its whole subtree.
fn collapse_into_only_child(node: &mut LayoutNode) {
    let placeholder = LayoutNode::leaf(String::new(), 0.0);
    match std::mem::replace(node, placeholder) {
        LayoutNode::Split {
            size, mut children, ..
        } if children.len() == 1 => {
            let mut survivor = children.remove(0);
            survivor.set_size(size);
            *node = survivor;
        }
        other => *node = other,
    }
}
