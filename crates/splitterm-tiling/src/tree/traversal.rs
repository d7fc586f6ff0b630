//! Lookup and traversal over a layout tree.

use super::LayoutNode;

impl LayoutNode {
    /// Depth-first search for `id`, including this node.
    pub fn find_by_id(&self, id: &str) -> Option<&LayoutNode> {
        if self.id() == id {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut LayoutNode> {
        if self.id() == id {
            return Some(self);
        }
        match self {
            LayoutNode::Split { children, .. } => {
                children.iter_mut().find_map(|c| c.find_by_id_mut(id))
            }
            LayoutNode::Leaf { .. } => None,
        }
    }

    /// Pre-order visit of every descendant (not `self`).
    pub fn visit(&self, visitor: &mut impl FnMut(&LayoutNode)) {
        for child in self.children() {
            visitor(child);
            child.visit(visitor);
        }
    }

    /// Leaf ids in pre-order; includes `self` when it is a leaf.
    pub fn leaf_ids(&self) -> Vec<String> {
        if self.is_leaf() {
            return vec![self.id().to_string()];
        }
        let mut ids = Vec::new();
        self.visit(&mut |node| {
            if node.is_leaf() {
                ids.push(node.id().to_string());
            }
        });
        ids
    }

    /// Child-index path from this node to `id`.
    pub fn path_to(&self, id: &str) -> Option<Vec<usize>> {
        if self.id() == id {
            return Some(Vec::new());
        }
        self.children().iter().enumerate().find_map(|(ix, child)| {
            child.path_to(id).map(|mut rest| {
                rest.insert(0, ix);
                rest
            })
        })
    }

    pub fn node_at_path(&self, path: &[usize]) -> Option<&LayoutNode> {
        match path.split_first() {
            None => Some(self),
            Some((&ix, rest)) => self.children().get(ix)?.node_at_path(rest),
        }
    }

    pub fn node_at_path_mut(&mut self, path: &[usize]) -> Option<&mut LayoutNode> {
        match path.split_first() {
            None => Some(self),
            Some((&ix, rest)) => match self {
                LayoutNode::Split { children, .. } => children.get_mut(ix)?.node_at_path_mut(rest),
                LayoutNode::Leaf { .. } => None,
            },
        }
    }

    /// The `(parent id, child index)` slot holding `id`.
    pub fn find_parent(&self, id: &str) -> Option<(String, usize)> {
        let children = self.children();
        if let Some(ix) = children.iter().position(|c| c.id() == id) {
            return Some((self.id().to_string(), ix));
        }
        children.iter().find_map(|c| c.find_parent(id))
    }
}
