//! Workspace: the layout forest joined to the live sessions it describes.
//!
//! Layout commands are applied to the forest first; the kills and swaps they
//! imply reach the session manager through [`SessionBridge`]. Search changes
//! rebuild the affected session's highlight filter.

mod bridge;


use std::time::{Duration, Instant};

use splitterm_common::SurfaceId;
use splitterm_config::SplittermConfig;
use splitterm_session::{ConnectOptions, DataFilter, SearchHighlighter, SessionManager, ViewOptions};
use splitterm_tiling::{LayoutCommand, LayoutNode, LayoutPrefs, LayoutSearch, LayoutState};
use tracing::{debug, info};

pub use bridge::SessionBridge;

pub struct Workspace {
    layouts: LayoutState,
    sessions: SessionManager,
    config: SplittermConfig,
}

impl Workspace {
    pub fn new(layouts: LayoutState, sessions: SessionManager, config: SplittermConfig) -> Self {
        Self {
            layouts,
            sessions,
            config,
        }
    }

    pub fn layouts(&self) -> &LayoutState {
        &self.layouts
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    pub fn sessions_mut(&mut self) -> &mut SessionManager {
        &mut self.sessions
    }

    /// Kill every session and hand back the forest.
    pub fn into_layouts(mut self) -> LayoutState {
        self.sessions.kill_all();
        self.layouts
    }

    /// Apply a layout command and carry its effects over to the sessions.
    pub fn apply(&mut self, command: LayoutCommand) -> bool {
        let search_target = match &command {
            LayoutCommand::SetSearch { split_id, .. } => Some(split_id.clone()),
            _ => None,
        };
        let changed = self
            .layouts
            .apply(command, &mut SessionBridge::new(&mut self.sessions));
        if changed {
            if let Some(id) = search_target {
                self.refresh_filter(&id);
            }
        }
        changed
    }

    /// Connect a session for every leaf of `tab`, each on its own surface.
    /// Returns the leaf ids in pre-order.
    pub fn connect_tab(&mut self, tab: &str) -> Vec<String> {
        let leaves = self.layouts.leaf_ids(tab);
        for (ix, id) in leaves.iter().enumerate() {
            let Some(node) = self.layouts.find_by_id(id) else {
                continue;
            };
            let options = self.connect_options(node.prefs());
            let filter = self.filter_for(node.search());
            let surface = SurfaceId::new(format!("{tab}/{ix}"));
            self.sessions.connect(id, &options, &surface, filter, None);
        }
        info!(tab, panes = leaves.len(), "tab connected");
        leaves
    }

    /// Detach every session of `tab` from its surface.
    pub fn disconnect_tab(&mut self, tab: &str) {
        for id in self.layouts.leaf_ids(tab) {
            self.sessions.disconnect(&id);
        }
    }

    /// Step the leaf's search forward or back. A wrap sets the leaf's wrap
    /// flag; any other move clears it.
    pub fn find(&mut self, id: &str, forward: bool) -> Option<bool> {
        let needle = self
            .layouts
            .find_by_id(id)?
            .search()?
            .needle()?
            .to_string();
        let wrapped = if forward {
            self.sessions.find_next(id, &needle)
        } else {
            self.sessions.find_previous(id, &needle)
        };
        self.layouts.apply(
            LayoutCommand::SetSearchWrap {
                split_id: id.to_string(),
                wrap: wrapped,
            },
            &mut SessionBridge::new(&mut self.sessions),
        );
        Some(wrapped)
    }

    /// Deliver queued output and due resizes for as long as `duration`,
    /// polling every `tick`.
    pub async fn pump_for(&mut self, duration: Duration, tick: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        let mut interval = tokio::time::interval(tick);
        loop {
            interval.tick().await;
            let active = self.sessions.pump();
            if !active.is_empty() {
                debug!(?active, "pumped output");
            }
            self.sessions.flush_resizes(Instant::now());
            if tokio::time::Instant::now() >= deadline {
                break;
            }
        }
    }

    fn connect_options(&self, prefs: Option<&LayoutPrefs>) -> ConnectOptions {
        let terminal = &self.config.terminal;
        ConnectOptions {
            view: ViewOptions {
                grid: terminal.grid(),
                scrollback_lines: terminal.scrollback_lines as usize,
                cell_metrics: terminal.cell_metrics(),
            },
            directory: prefs.and_then(|p| p.directory.clone()),
            startup: prefs.and_then(|p| p.startup.clone()),
        }
    }

    fn filter_for(&self, search: Option<&LayoutSearch>) -> Option<DataFilter> {
        let needle = search?.needle()?;
        let session = &self.config.session;
        SearchHighlighter::new(needle, &session.highlight_prefix, &session.highlight_suffix)
            .map(SearchHighlighter::into_filter)
    }

    fn refresh_filter(&mut self, id: &str) {
        let filter = self
            .layouts
            .find_by_id(id)
            .and_then(|node| self.filter_for(node.search()));
        self.sessions.set_filter(id, filter);
    }
}

/// Indented outline of a layout tree, one node per line.
pub fn render_tree(node: &LayoutNode) -> String {
    let mut out = String::new();
    render_into(node, 0, &mut out);
    out
}

fn render_into(node: &LayoutNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        LayoutNode::Leaf { id, size, prefs, .. } => {
            let label = prefs
                .title
                .as_deref()
                .or(prefs.badge.as_deref())
                .map(|t| format!(" \"{t}\""))
                .unwrap_or_default();
            out.push_str(&format!("{indent}leaf {id} {size:.1}%{label}\n"));
        }
        LayoutNode::Split {
            id,
            direction,
            size,
            root,
            children,
        } => {
            let root = if *root { " root" } else { "" };
            out.push_str(&format!("{indent}split {id} {direction:?} {size:.1}%{root}\n"));
            for child in children {
                render_into(child, depth + 1, out);
            }
        }
    }
}
