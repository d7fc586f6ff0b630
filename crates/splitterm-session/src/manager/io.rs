//! Byte I/O, output pumping and small per-session view operations.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::handle::DataFilter;

use super::types::Flow;
use super::SessionManager;

impl SessionManager {
    /// Inject `text` into the process's input.
    pub fn write(&mut self, id: &str, text: &str) {
        self.write_bytes(id, text.as_bytes());
    }

    pub fn writeln(&mut self, id: &str, text: &str) {
        self.write_bytes(id, format!("{text}\n").as_bytes());
    }

    pub fn write_bytes(&mut self, id: &str, data: &[u8]) {
        let Some(process) = self.sessions.get_mut(id).and_then(|s| s.process.as_mut()) else {
            debug!(session = %id, "write: no process");
            return;
        };
        if let Err(e) = process.write(data) {
            warn!(session = %id, "write failed: {e}");
        }
    }

    /// Keyboard input delivered to the view, as a UI would.
    pub fn send_keys(&mut self, id: &str, data: &[u8]) {
        if let Some(view) = self.sessions.get_mut(id).and_then(|s| s.view.as_mut()) {
            view.type_input(data);
        }
    }

    /// Interrupt every immediate child of the session's process. The shell
    /// itself is not signalled. Returns how many children were signalled.
    pub fn ctrl_c(&mut self, id: &str) -> usize {
        let Some(process) = self.sessions.get_mut(id).and_then(|s| s.process.as_mut()) else {
            debug!(session = %id, "ctrl_c: no process");
            return 0;
        };
        let mut signalled = 0;
        for pid in process.child_pids() {
            match process.interrupt(pid) {
                Ok(()) => signalled += 1,
                Err(e) => warn!(session = %id, pid, "interrupt failed: {e}"),
            }
        }
        if signalled > 0 {
            info!(session = %id, count = signalled, "ctrl_c");
        }
        signalled
    }

    /// Deliver everything the wired listeners queued since the last call.
    ///
    /// Process output passes through the session's data filter on its way to
    /// the view; keystrokes reach the process unmodified. Chunks for killed
    /// sessions are dropped. Returns the ids whose views received output.
    pub fn pump(&mut self) -> Vec<String> {
        let mut active = BTreeSet::new();
        while let Ok(chunk) = self.rx.try_recv() {
            let Some(session) = self.sessions.get_mut(&chunk.id) else {
                continue;
            };
            if session.generation != chunk.generation {
                continue;
            }
            match chunk.flow {
                Flow::ToView => {
                    let Some(view) = session.view.as_mut() else {
                        continue;
                    };
                    match session.filter.as_mut() {
                        Some(filter) => view.write(&filter(chunk.data.as_slice())),
                        None => view.write(&chunk.data),
                    }
                    active.insert(chunk.id);
                }
                Flow::ToProcess => {
                    if let Some(process) = session.process.as_mut() {
                        if let Err(e) = process.write(&chunk.data) {
                            warn!(session = %chunk.id, "input write failed: {e}");
                        }
                    }
                }
            }
        }
        active.into_iter().collect()
    }

    /// Replace the data filter applied to process output. `None` removes it.
    pub fn set_filter(&mut self, id: &str, filter: Option<DataFilter>) {
        if let Some(session) = self.sessions.get_mut(id) {
            session.filter = filter;
        }
    }

    pub fn clear(&mut self, id: &str) {
        if let Some(view) = self.sessions.get_mut(id).and_then(|s| s.view.as_mut()) {
            view.clear();
        }
    }

    pub fn focus(&mut self, id: &str) {
        if let Some(view) = self.sessions.get_mut(id).and_then(|s| s.view.as_mut()) {
            view.focus();
        }
    }

    /// Record the view's scroll offset.
    pub fn scroll_pos(&mut self, id: &str, y: usize) {
        if let Some(session) = self.sessions.get_mut(id) {
            session.scroll_y = y;
        }
    }
}
