use serde::{Deserialize, Serialize};

use crate::tree::{Direction, LayoutPrefs, LayoutSearch};

/// A specific child slot: the `child_index`-th child of split `parent_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapTarget {
    pub parent_id: String,
    pub child_index: usize,
}

/// Structured layout commands issued by the surrounding UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum LayoutCommand {
    MakeSplit {
        split_id: String,
        child_index: usize,
        direction: Direction,
        before: bool,
    },
    CloseSplit {
        split_id: String,
        child_index: usize,
    },
    SwapWith {
        split_id: String,
        target: SwapTarget,
    },
    UpdateSplitSizes {
        split_id: String,
        sizes: Vec<f64>,
    },
    NewLayout {
        tab_id: String,
    },
    RemoveLayout {
        tab_id: String,
    },
    SetPrefs {
        split_id: String,
        prefs: LayoutPrefs,
    },
    SetSearch {
        split_id: String,
        search: LayoutSearch,
    },
    SetSearchWrap {
        split_id: String,
        wrap: bool,
    },
}
