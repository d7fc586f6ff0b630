//! Headless terminal view backed by a bounded scrollback.

mod buffer;


use regex::RegexBuilder;
use splitterm_common::{CellMetrics, GridSize, SessionError, SurfaceId};
use tracing::debug;

use crate::handle::{DataListener, SearchMatch, UiCallbacks, ViewHandle, ViewOptions};

use buffer::LineBuffer;

// =============================================================================
// SCROLLBACK VIEW
// =============================================================================

/// A [`ViewHandle`] that keeps displayed output as searchable text.
///
/// It does not render. Output written while detached still lands in the
/// scrollback. Keyboard input arrives through `type_input` or
/// [`ScrollbackView::key`] and is handed to the registered listener.
pub struct ScrollbackView {
    buffer: LineBuffer,
    grid: GridSize,
    metrics: CellMetrics,
    surface: Option<SurfaceId>,
    listener: Option<DataListener>,
    callbacks: UiCallbacks,
    cursor: Option<SearchMatch>,
    selection: Option<String>,
    focused: bool,
    destroyed: bool,
}

impl ScrollbackView {
    pub fn new(options: &ViewOptions) -> Self {
        Self {
            buffer: LineBuffer::new(options.scrollback_lines),
            grid: options.grid,
            metrics: options.cell_metrics,
            surface: None,
            listener: None,
            callbacks: UiCallbacks::default(),
            cursor: None,
            selection: None,
            focused: false,
            destroyed: false,
        }
    }

    /// A key press: the pane's key callback fires, then the key is typed.
    pub fn key(&mut self, key: &str) {
        if let Some(on_key) = self.callbacks.on_key.as_mut() {
            on_key(key);
        }
        self.type_input(key.as_bytes());
    }

    pub fn blur(&mut self) {
        self.focused = false;
        if let Some(on_blur) = self.callbacks.on_blur.as_mut() {
            on_blur();
        }
    }

    /// Scroll to `line` and report it to the pane.
    pub fn scroll_to(&mut self, line: usize) {
        if let Some(on_scroll) = self.callbacks.on_scroll.as_mut() {
            on_scroll(line);
        }
    }

    /// Select `len` bytes of `line` starting at `column`.
    pub fn select(&mut self, at: SearchMatch, len: usize) {
        self.selection = self.buffer.line(at.line).and_then(|line| {
            line.get(at.column..at.column + len)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        });
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn line_count(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Every match of `needle`, case-insensitive, in scrollback order.
    fn matches(&self, needle: &str) -> Vec<(SearchMatch, usize)> {
        if needle.is_empty() {
            return Vec::new();
        }
        let Ok(re) = RegexBuilder::new(&regex::escape(needle))
            .case_insensitive(true)
            .build()
        else {
            return Vec::new();
        };
        self.buffer
            .iter()
            .enumerate()
            .flat_map(|(line, text)| {
                re.find_iter(&text)
                    .map(|m| (SearchMatch { line, column: m.start() }, m.len()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn land_on(&mut self, hit: Option<(SearchMatch, usize)>) -> Option<SearchMatch> {
        let (at, len) = hit?;
        self.cursor = Some(at);
        self.select(at, len);
        Some(at)
    }
}

impl ViewHandle for ScrollbackView {
    fn write(&mut self, data: &[u8]) {
        if self.destroyed {
            return;
        }
        let evicted = self.buffer.feed(data);
        if evicted > 0 {
            // A cursor whose line scrolled away restarts from the top.
            self.cursor = self.cursor.map(|c| match c.line.checked_sub(evicted) {
                Some(line) => SearchMatch { line, ..c },
                None => SearchMatch { line: 0, column: 0 },
            });
        }
    }

    fn type_input(&mut self, data: &[u8]) {
        if let Some(listener) = self.listener.as_mut() {
            listener(data);
        }
    }

    fn resize(&mut self, grid: GridSize) -> Result<(), SessionError> {
        if self.destroyed {
            return Err(SessionError::Detached);
        }
        self.grid = grid;
        Ok(())
    }

    fn grid(&self) -> GridSize {
        self.grid
    }

    fn cell_metrics(&self) -> CellMetrics {
        self.metrics
    }

    fn on_data(&mut self, listener: Option<DataListener>) {
        self.listener = listener;
    }

    fn set_callbacks(&mut self, callbacks: UiCallbacks) {
        self.callbacks = callbacks;
    }

    fn take_callbacks(&mut self) -> UiCallbacks {
        std::mem::take(&mut self.callbacks)
    }

    fn attach(&mut self, surface: &SurfaceId) -> Result<(), SessionError> {
        if self.destroyed {
            return Err(SessionError::Attach(format!(
                "view destroyed, cannot attach to {surface}"
            )));
        }
        debug!(surface = %surface, "view attached");
        self.surface = Some(surface.clone());
        Ok(())
    }

    fn detach(&mut self) {
        self.surface = None;
        self.focused = false;
    }

    fn surface(&self) -> Option<&SurfaceId> {
        self.surface.as_ref()
    }

    fn destroy(&mut self) {
        self.listener = None;
        self.callbacks = UiCallbacks::default();
        self.surface = None;
        self.buffer.clear();
        self.cursor = None;
        self.selection = None;
        self.destroyed = true;
    }

    fn focus(&mut self) {
        if self.destroyed {
            return;
        }
        self.focused = true;
        if let Some(on_focus) = self.callbacks.on_focus.as_mut() {
            on_focus();
        }
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = None;
        self.selection = None;
    }

    fn find_next(&mut self, needle: &str) -> Option<SearchMatch> {
        let hits = self.matches(needle);
        let next = match self.cursor {
            Some(cursor) => hits.iter().find(|(at, _)| *at > cursor).or(hits.first()),
            None => hits.first(),
        };
        self.land_on(next.copied())
    }

    fn find_previous(&mut self, needle: &str) -> Option<SearchMatch> {
        let hits = self.matches(needle);
        let prev = match self.cursor {
            Some(cursor) => hits.iter().rev().find(|(at, _)| *at < cursor).or(hits.last()),
            None => hits.last(),
        };
        self.land_on(prev.copied())
    }

    fn search_cursor(&self) -> Option<SearchMatch> {
        self.cursor
    }

    fn selection(&self) -> Option<String> {
        self.selection.clone()
    }

    fn tail(&self, n: usize) -> Vec<String> {
        let skip = self.buffer.len().saturating_sub(n);
        self.buffer.iter().skip(skip).map(|l| l.into_owned()).collect()
    }
}
