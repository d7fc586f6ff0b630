//! SessionManager: the registry of live process/view pairs.
//!
//! Every operation is synchronous. Output produced by handles is queued by
//! the listeners `connect` wires and delivered on the next [`pump`]. Unknown
//! ids and missing handles turn operations into no-ops; handle failures are
//! logged and swallowed.
//!
//! [`pump`]: SessionManager::pump

mod connect;
mod io;
mod lifecycle;
mod search;
mod types;


use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use splitterm_common::{GridSize, SurfaceId};
use splitterm_config::SplittermConfig;

use crate::coalescer::ResizeCoalescer;
use crate::handle::{SessionBackend, ViewHandle};

use types::{Chunk, Session};

// =============================================================================
// SETTINGS
// =============================================================================

/// Geometry and timing the manager applies to every session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManagerSettings {
    /// Pane padding removed from each side before pixel conversion.
    pub padding_px: f64,
    /// Rows reserved below the grid after pixel conversion.
    pub footer_rows: u16,
    /// Quiet interval of the resize coalescer.
    pub resize_quiet: Duration,
}

impl ManagerSettings {
    pub fn from_config(config: &SplittermConfig) -> Self {
        Self {
            padding_px: config.terminal.padding_px,
            footer_rows: config.terminal.footer_rows,
            resize_quiet: Duration::from_millis(config.session.resize_quiet_ms),
        }
    }
}

impl Default for ManagerSettings {
    fn default() -> Self {
        Self::from_config(&SplittermConfig::default())
    }
}

// =============================================================================
// SESSION MANAGER
// =============================================================================

pub struct SessionManager {
    backend: Box<dyn SessionBackend>,
    settings: ManagerSettings,
    sessions: HashMap<String, Session>,
    coalescer: ResizeCoalescer,
    tx: mpsc::Sender<Chunk>,
    rx: mpsc::Receiver<Chunk>,
    generations: u64,
}

impl SessionManager {
    pub fn new(backend: Box<dyn SessionBackend>, settings: ManagerSettings) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            backend,
            coalescer: ResizeCoalescer::new(settings.resize_quiet),
            settings,
            sessions: HashMap::new(),
            tx,
            rx,
            generations: 0,
        }
    }

    pub fn settings(&self) -> &ManagerSettings {
        &self.settings
    }

    /// `true` when `id` has a process or a view.
    pub fn contains(&self, id: &str) -> bool {
        self.sessions.get(id).is_some_and(Session::is_live)
    }

    /// Ids of live sessions, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .sessions
            .iter()
            .filter(|(_, s)| s.is_live())
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.sessions.values().filter(|s| s.is_live()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_process(&self, id: &str) -> bool {
        self.sessions.get(id).is_some_and(|s| s.process.is_some())
    }

    pub fn pid(&self, id: &str) -> Option<u32> {
        self.sessions.get(id)?.process.as_ref()?.pid()
    }

    pub fn view(&self, id: &str) -> Option<&dyn ViewHandle> {
        self.sessions.get(id)?.view.as_deref()
    }

    pub fn is_attached(&self, id: &str) -> bool {
        self.sessions.get(id).is_some_and(Session::is_attached)
    }

    pub fn surface(&self, id: &str) -> Option<&SurfaceId> {
        self.view(id)?.surface()
    }

    /// Last grid applied to the session.
    pub fn grid(&self, id: &str) -> Option<GridSize> {
        self.sessions.get(id).map(|s| s.grid)
    }

    /// Last known scroll offset.
    pub fn scroll_y(&self, id: &str) -> Option<usize> {
        self.sessions.get(id).map(|s| s.scroll_y)
    }

    /// Get-or-create: an unknown id gets an empty placeholder.
    fn entry(&mut self, id: &str, grid: GridSize) -> &mut Session {
        let generations = &mut self.generations;
        self.sessions.entry(id.to_string()).or_insert_with(|| {
            *generations += 1;
            Session::new(*generations, grid)
        })
    }
}

impl Drop for SessionManager {
    fn drop(&mut self) {
        self.kill_all();
    }
}

/// Expand a leading `~` or `$HOME` in a working-directory override.
pub(crate) fn expand_home(dir: &str) -> PathBuf {
    let rest = ["~", "$HOME"].iter().find_map(|prefix| {
        let rest = dir.strip_prefix(prefix)?;
        (rest.is_empty() || rest.starts_with('/')).then_some(rest)
    });
    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) => match rest.trim_start_matches('/') {
            "" => home,
            rest => home.join(rest),
        },
        _ => PathBuf::from(dir),
    }
}
