//! Tests for forest-level commands and persistence.

use super::*;
use crate::commands::{LayoutCommand, SwapTarget};
use crate::sink::{NullSink, RecordingSink};
use crate::tree::{Direction, LayoutPrefs, LayoutSearch};

fn root_id(state: &LayoutState, tab: &str) -> String {
    state.layout(tab).unwrap().id().to_string()
}

fn split_root(state: &mut LayoutState, tab: &str) -> String {
    let root = root_id(state, tab);
    assert!(state.make_split(&root, 0, Direction::Vertical, false));
    root
}

#[test]
fn default_state_has_permanent_tab() {
    let state = LayoutState::default();
    assert_eq!(state.tab_ids(), vec![PERMANENT_TAB.to_string()]);
    let tree = state.layout(PERMANENT_TAB).unwrap();
    assert!(tree.is_root());
    assert_eq!(tree.children().len(), 1);
}

#[test]
fn scenario_split_then_close_on_root() {
    let mut state = LayoutState::default();
    let root = split_root(&mut state, PERMANENT_TAB);
    let tree = state.layout(PERMANENT_TAB).unwrap();
    assert_eq!(tree.children().len(), 2);
    assert!(tree.children().iter().all(|c| c.is_leaf() && c.size() == 50.0));

    let closed = tree.children()[1].id().to_string();
    let mut sink = RecordingSink::default();
    assert!(state.close_split(&root, 1, &mut sink));
    assert_eq!(sink.killed, vec![closed]);

    let tree = state.layout(PERMANENT_TAB).unwrap();
    assert!(tree.is_root());
    assert_eq!(tree.children().len(), 1);
    assert_eq!(tree.children()[0].size(), 100.0);
}

#[test]
fn closing_a_split_child_kills_every_leaf_beneath_it() {
    let mut state = LayoutState::default();
    let root = split_root(&mut state, PERMANENT_TAB);
    let second = state.layout(PERMANENT_TAB).unwrap().children()[1]
        .id()
        .to_string();
    assert!(state.make_split(&root, 1, Direction::Horizontal, false));

    let wrapper = state.layout(PERMANENT_TAB).unwrap().children()[1].clone();
    let leaves = wrapper.leaf_ids();
    assert!(leaves.contains(&second));

    let mut sink = RecordingSink::default();
    assert!(state.close_split(&root, 1, &mut sink));
    assert_eq!(sink.killed[0], wrapper.id());
    for leaf in leaves {
        assert!(sink.killed.contains(&leaf));
    }
}

#[test]
fn lookups_span_every_tab() {
    let mut state = LayoutState::default();
    state.new_layout("tab-2", &mut NullSink);
    let leaf = state.leaf_ids("tab-2")[0].clone();

    assert_eq!(state.tab_of(&leaf), Some("tab-2"));
    assert!(state.find_by_id(&leaf).is_some());
    assert!(state.find_by_id("missing").is_none());
    assert_eq!(state.all_leaf_ids().len(), 2);
}

#[test]
fn commands_on_unknown_ids_are_noops() {
    let mut state = LayoutState::default();
    let before = state.clone();
    let mut sink = RecordingSink::default();

    assert!(!state.apply(
        LayoutCommand::CloseSplit {
            split_id: "nope".into(),
            child_index: 0
        },
        &mut sink
    ));
    assert!(!state.apply(
        LayoutCommand::MakeSplit {
            split_id: "nope".into(),
            child_index: 0,
            direction: Direction::Vertical,
            before: false,
        },
        &mut sink
    ));
    assert!(!state.apply(
        LayoutCommand::RemoveLayout {
            tab_id: "nope".into()
        },
        &mut sink
    ));
    assert_eq!(state, before);
    assert_eq!(sink, RecordingSink::default());
}

#[test]
fn swap_with_same_leaf_leaves_tree_unchanged() {
    let mut state = LayoutState::default();
    let root = root_id(&state, PERMANENT_TAB);
    let leaf = state.leaf_ids(PERMANENT_TAB)[0].clone();
    let before = serde_json::to_string(&state).unwrap();

    let mut sink = RecordingSink::default();
    let target = SwapTarget {
        parent_id: root,
        child_index: 0,
    };
    assert!(!state.swap_with(&leaf, &target, &mut sink));
    assert_eq!(serde_json::to_string(&state).unwrap(), before);
    assert!(sink.swapped.is_empty());
}

#[test]
fn swap_with_exchanges_identity_not_geometry() {
    let mut state = LayoutState::default();
    let root = split_root(&mut state, PERMANENT_TAB);
    assert!(state.update_split_sizes(&root, &[30.0, 70.0]));
    let ids = state.leaf_ids(PERMANENT_TAB);
    let (a, b) = (ids[0].clone(), ids[1].clone());
    state.apply(
        LayoutCommand::SetPrefs {
            split_id: a.clone(),
            prefs: LayoutPrefs {
                badge: Some("A".into()),
                ..Default::default()
            },
        },
        &mut NullSink,
    );
    state.apply(
        LayoutCommand::SetSearch {
            split_id: b.clone(),
            search: LayoutSearch {
                text: Some("todo".into()),
                wrap: None,
            },
        },
        &mut NullSink,
    );

    let mut sink = RecordingSink::default();
    let changed = state.apply(
        LayoutCommand::SwapWith {
            split_id: a.clone(),
            target: SwapTarget {
                parent_id: root.clone(),
                child_index: 1,
            },
        },
        &mut sink,
    );
    assert!(changed);
    assert_eq!(sink.swapped, vec![(a.clone(), b.clone())]);

    let tree = state.layout(PERMANENT_TAB).unwrap();
    let (first, second) = (&tree.children()[0], &tree.children()[1]);
    assert_eq!(first.id(), b);
    assert_eq!(first.size(), 30.0);
    assert_eq!(first.search().unwrap().needle(), Some("todo"));
    assert!(first.prefs().unwrap().is_empty());
    assert_eq!(second.id(), a);
    assert_eq!(second.size(), 70.0);
    assert_eq!(second.prefs().unwrap().badge.as_deref(), Some("A"));
}

#[test]
fn swap_with_works_across_tabs() {
    let mut state = LayoutState::default();
    state.new_layout("tab-2", &mut NullSink);
    let a = state.leaf_ids(PERMANENT_TAB)[0].clone();
    let b = state.leaf_ids("tab-2")[0].clone();
    let target = SwapTarget {
        parent_id: root_id(&state, "tab-2"),
        child_index: 0,
    };

    let mut sink = RecordingSink::default();
    assert!(state.swap_with(&a, &target, &mut sink));
    assert_eq!(state.leaf_ids(PERMANENT_TAB), vec![b.clone()]);
    assert_eq!(state.leaf_ids("tab-2"), vec![a.clone()]);
    assert_eq!(sink.swapped, vec![(a, b)]);
}

#[test]
fn swap_with_bad_target_is_noop() {
    let mut state = LayoutState::default();
    let root = root_id(&state, PERMANENT_TAB);
    let leaf = state.leaf_ids(PERMANENT_TAB)[0].clone();
    let before = state.clone();
    let mut sink = RecordingSink::default();

    let out_of_range = SwapTarget {
        parent_id: root.clone(),
        child_index: 9,
    };
    assert!(!state.swap_with(&leaf, &out_of_range, &mut sink));
    let split_as_source = SwapTarget {
        parent_id: root.clone(),
        child_index: 0,
    };
    assert!(!state.swap_with(&root, &split_as_source, &mut sink));
    assert_eq!(state, before);
    assert!(sink.swapped.is_empty());
}

#[test]
fn remove_layout_kills_all_leaves_then_drops_tree() {
    let mut state = LayoutState::default();
    state.new_layout("tab-2", &mut NullSink);
    let root = split_root(&mut state, "tab-2");
    state.make_split(&root, 0, Direction::Horizontal, true);
    let leaves = state.leaf_ids("tab-2");
    assert_eq!(leaves.len(), 3);

    let mut sink = RecordingSink::default();
    assert!(state.apply(
        LayoutCommand::RemoveLayout {
            tab_id: "tab-2".into()
        },
        &mut sink
    ));
    assert_eq!(sink.killed, leaves);
    assert!(state.layout("tab-2").is_none());
    assert_eq!(state.len(), 1);
}

#[test]
fn new_layout_over_existing_tab_kills_replaced_leaves() {
    let mut state = LayoutState::default();
    let old = state.leaf_ids(PERMANENT_TAB);
    let mut sink = RecordingSink::default();
    assert!(state.new_layout(PERMANENT_TAB, &mut sink));
    assert_eq!(sink.killed, old);
    assert_ne!(state.leaf_ids(PERMANENT_TAB), old);
}

#[test]
fn set_search_wrap_command() {
    let mut state = LayoutState::default();
    let leaf = state.leaf_ids(PERMANENT_TAB)[0].clone();
    assert!(state.apply(
        LayoutCommand::SetSearchWrap {
            split_id: leaf.clone(),
            wrap: true
        },
        &mut NullSink
    ));
    let search = state.find_by_id(&leaf).unwrap().search().unwrap();
    assert_eq!(search.wrap, Some(true));
}

#[test]
fn commands_deserialize_from_tagged_json() {
    let json = r#"{"command":"swap_with","split_id":"a","target":{"parent_id":"r","child_index":1}}"#;
    let cmd: LayoutCommand = serde_json::from_str(json).unwrap();
    assert_eq!(
        cmd,
        LayoutCommand::SwapWith {
            split_id: "a".into(),
            target: SwapTarget {
                parent_id: "r".into(),
                child_index: 1
            }
        }
    );
}

#[test]
fn persist_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("layouts.json");

    let mut state = LayoutState::default();
    split_root(&mut state, PERMANENT_TAB);
    state.new_layout("tab-2", &mut NullSink);
    state.save_to_path(&path).unwrap();

    let restored = LayoutState::load_from_path(&path).unwrap();
    assert_eq!(restored, state);
}

#[test]
fn load_missing_store_gives_default() {
    let dir = tempfile::tempdir().unwrap();
    let state = LayoutState::load_from_path(&dir.path().join("none.json")).unwrap();
    assert_eq!(state.tab_ids(), vec![PERMANENT_TAB.to_string()]);
}

#[test]
fn load_corrupt_store_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layouts.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = LayoutState::load_from_path(&path).unwrap_err();
    assert!(matches!(err, splitterm_common::LayoutError::Parse(_)));
}
