//! Core types for the layout tree: Direction, LayoutNode, per-leaf prefs and search.

use serde::{Deserialize, Serialize};
use splitterm_common::new_id;

/// Tolerance used when checking that sibling sizes sum to 100.
pub const SIZE_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// User customization carried by a leaf across split/collapse/swap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutPrefs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl LayoutPrefs {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay every field set in `other`, keeping the rest.
    pub fn merge(&mut self, other: &LayoutPrefs) {
        if other.badge.is_some() {
            self.badge.clone_from(&other.badge);
        }
        if other.directory.is_some() {
            self.directory.clone_from(&other.directory);
        }
        if other.startup.is_some() {
            self.startup.clone_from(&other.startup);
        }
        if other.title.is_some() {
            self.title.clone_from(&other.title);
        }
    }
}

/// Live search state of a leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSearch {
    #[serde(rename = "str", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
}

impl LayoutSearch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn merge(&mut self, other: &LayoutSearch) {
        if other.text.is_some() {
            self.text.clone_from(&other.text);
        }
        if other.wrap.is_some() {
            self.wrap = other.wrap;
        }
    }

    /// The search string, if one is set and non-empty.
    pub fn needle(&self) -> Option<&str> {
        self.text.as_deref().filter(|s| !s.is_empty())
    }
}

/// The id, prefs and search that move together when two leaves swap.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafIdentity {
    pub id: String,
    pub prefs: LayoutPrefs,
    pub search: LayoutSearch,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// A node of a tab's layout tree.
///
/// `size` is the percentage of the parent split's extent along its
/// direction. Leaf ids are also session ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutNode {
    Leaf {
        id: String,
        size: f64,
        #[serde(default, skip_serializing_if = "LayoutPrefs::is_empty")]
        prefs: LayoutPrefs,
        #[serde(default, skip_serializing_if = "LayoutSearch::is_empty")]
        search: LayoutSearch,
    },
    Split {
        id: String,
        direction: Direction,
        size: f64,
        #[serde(default, skip_serializing_if = "is_false")]
        root: bool,
        children: Vec<LayoutNode>,
    },
}

impl LayoutNode {
    /// A fresh leaf with no prefs or search.
    pub fn leaf(id: impl Into<String>, size: f64) -> Self {
        LayoutNode::Leaf {
            id: id.into(),
            size,
            prefs: LayoutPrefs::default(),
            search: LayoutSearch::default(),
        }
    }

    /// A new tab's tree: a vertical root split holding one full-size leaf.
    pub fn default_layout() -> Self {
        LayoutNode::Split {
            id: new_id(),
            direction: Direction::Vertical,
            size: 100.0,
            root: true,
            children: vec![LayoutNode::leaf(new_id(), 100.0)],
        }
    }

    pub fn id(&self) -> &str {
        match self {
            LayoutNode::Leaf { id, .. } | LayoutNode::Split { id, .. } => id,
        }
    }

    pub fn size(&self) -> f64 {
        match self {
            LayoutNode::Leaf { size, .. } | LayoutNode::Split { size, .. } => *size,
        }
    }

    pub fn set_size(&mut self, value: f64) {
        match self {
            LayoutNode::Leaf { size, .. } | LayoutNode::Split { size, .. } => *size = value,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, LayoutNode::Leaf { .. })
    }

    pub fn is_root(&self) -> bool {
        matches!(self, LayoutNode::Split { root: true, .. })
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            LayoutNode::Split { direction, .. } => Some(*direction),
            LayoutNode::Leaf { .. } => None,
        }
    }

    pub fn children(&self) -> &[LayoutNode] {
        match self {
            LayoutNode::Split { children, .. } => children,
            LayoutNode::Leaf { .. } => &[],
        }
    }

    pub fn prefs(&self) -> Option<&LayoutPrefs> {
        match self {
            LayoutNode::Leaf { prefs, .. } => Some(prefs),
            LayoutNode::Split { .. } => None,
        }
    }

    pub fn search(&self) -> Option<&LayoutSearch> {
        match self {
            LayoutNode::Leaf { search, .. } => Some(search),
            LayoutNode::Split { .. } => None,
        }
    }

    pub fn leaf_identity(&self) -> Option<LeafIdentity> {
        match self {
            LayoutNode::Leaf {
                id, prefs, search, ..
            } => Some(LeafIdentity {
                id: id.clone(),
                prefs: prefs.clone(),
                search: search.clone(),
            }),
            LayoutNode::Split { .. } => None,
        }
    }

    /// Replace a leaf's id, prefs and search; size and position stay.
    pub fn set_leaf_identity(&mut self, identity: LeafIdentity) {
        if let LayoutNode::Leaf {
            id, prefs, search, ..
        } = self
        {
            *id = identity.id;
            *prefs = identity.prefs;
            *search = identity.search;
        }
    }

    /// Check that every split's children sum to 100 within tolerance.
    pub fn sizes_balanced(&self) -> bool {
        match self {
            LayoutNode::Leaf { .. } => true,
            LayoutNode::Split { children, .. } => {
                if children.is_empty() {
                    return true;
                }
                let total: f64 = children.iter().map(LayoutNode::size).sum();
                (total - 100.0).abs() <= SIZE_TOLERANCE
                    && children.iter().all(LayoutNode::sizes_balanced)
            }
        }
    }
}
