//! Capability interfaces the session manager is written against.
//!
//! A [`ProcessHandle`] is the interactive shell side of a session, a
//! [`ViewHandle`] the terminal display side. Both deliver outgoing bytes to
//! a single registered [`DataListener`]; registering `None` unregisters it.

use std::path::PathBuf;

use splitterm_common::{CellMetrics, GridSize, SessionError, SurfaceId};

/// Receives bytes produced by a handle. May be called from a reader thread.
pub type DataListener = Box<dyn FnMut(&[u8]) + Send>;

/// Transforms bytes on their way from the process to the view.
pub type DataFilter = Box<dyn FnMut(&[u8]) -> Vec<u8> + Send>;

/// UI event bindings of the pane a view is shown in.
#[derive(Default)]
pub struct UiCallbacks {
    pub on_focus: Option<Box<dyn FnMut() + Send>>,
    pub on_blur: Option<Box<dyn FnMut() + Send>>,
    pub on_key: Option<Box<dyn FnMut(&str) + Send>>,
    pub on_scroll: Option<Box<dyn FnMut(usize) + Send>>,
}

impl UiCallbacks {
    pub fn is_empty(&self) -> bool {
        self.on_focus.is_none()
            && self.on_blur.is_none()
            && self.on_key.is_none()
            && self.on_scroll.is_none()
    }
}

impl std::fmt::Debug for UiCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiCallbacks")
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("on_key", &self.on_key.is_some())
            .field("on_scroll", &self.on_scroll.is_some())
            .finish()
    }
}

/// Position of a search hit in a view's scrollback: line index from the
/// oldest retained line, byte column within that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchMatch {
    pub line: usize,
    pub column: usize,
}

/// Display options used when a view is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOptions {
    pub grid: GridSize,
    pub scrollback_lines: usize,
    pub cell_metrics: CellMetrics,
}

/// Everything `connect` needs to create a missing view or process.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectOptions {
    pub view: ViewOptions,
    /// Working-directory override; a leading `~` or `$HOME` is expanded.
    pub directory: Option<String>,
    /// Command written once, with a trailing newline, to a fresh process.
    pub startup: Option<String>,
}

/// Options handed to a backend when a process is spawned.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnOptions {
    pub directory: Option<PathBuf>,
    pub grid: GridSize,
}

/// An interactive backend process.
pub trait ProcessHandle: Send {
    fn pid(&self) -> Option<u32>;
    fn write(&mut self, data: &[u8]) -> Result<(), SessionError>;
    fn resize(&mut self, grid: GridSize) -> Result<(), SessionError>;
    fn on_data(&mut self, listener: Option<DataListener>);
    /// Pids of the process's immediate children.
    fn child_pids(&self) -> Vec<u32>;
    /// Deliver an interrupt signal to `pid`.
    fn interrupt(&mut self, pid: u32) -> Result<(), SessionError>;
    fn terminate(&mut self);
}

/// A terminal display surface with its own bounded scrollback.
pub trait ViewHandle: Send {
    /// Append displayed output.
    fn write(&mut self, data: &[u8]);
    /// Keyboard input from the UI; handed to the input listener.
    fn type_input(&mut self, data: &[u8]);
    fn resize(&mut self, grid: GridSize) -> Result<(), SessionError>;
    fn grid(&self) -> GridSize;
    fn cell_metrics(&self) -> CellMetrics;
    /// Listener for bytes typed into the view.
    fn on_data(&mut self, listener: Option<DataListener>);
    fn set_callbacks(&mut self, callbacks: UiCallbacks);
    fn take_callbacks(&mut self) -> UiCallbacks;
    fn attach(&mut self, surface: &SurfaceId) -> Result<(), SessionError>;
    fn detach(&mut self);
    fn surface(&self) -> Option<&SurfaceId>;
    fn destroy(&mut self);
    fn focus(&mut self);
    fn clear(&mut self);
    fn find_next(&mut self, needle: &str) -> Option<SearchMatch>;
    fn find_previous(&mut self, needle: &str) -> Option<SearchMatch>;
    /// Position of the last search hit, if any.
    fn search_cursor(&self) -> Option<SearchMatch>;
    fn selection(&self) -> Option<String>;

    fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    /// The newest `n` lines of scrollback, oldest first.
    fn tail(&self, n: usize) -> Vec<String>;
}

/// Creates the handles of a new session.
pub trait SessionBackend: Send {
    fn spawn_process(
        &mut self,
        id: &str,
        options: &SpawnOptions,
    ) -> Result<Box<dyn ProcessHandle>, SessionError>;

    fn create_view(
        &mut self,
        id: &str,
        options: &ViewOptions,
    ) -> Result<Box<dyn ViewHandle>, SessionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_matches_order_by_line_then_column() {
        let a = SearchMatch { line: 1, column: 9 };
        let b = SearchMatch { line: 2, column: 0 };
        let c = SearchMatch { line: 2, column: 4 };
        assert!(a < b && b < c);
    }

    #[test]
    fn ui_callbacks_default_is_empty() {
        let mut callbacks = UiCallbacks::default();
        assert!(callbacks.is_empty());
        callbacks.on_focus = Some(Box::new(|| {}));
        assert!(!callbacks.is_empty());
        assert_eq!(
            format!("{callbacks:?}"),
            "UiCallbacks { on_focus: true, on_blur: false, on_key: false, on_scroll: false }"
        );
    }
}
