//! kill / swap / resize.

use std::time::Instant;

use splitterm_common::PixelBounds;
use tracing::{debug, info, warn};

use crate::resize::ResizeRequest;

use super::types::Session;
use super::SessionManager;

impl SessionManager {
    /// Tear session `id` down and forget it. Unknown ids are a no-op.
    ///
    /// Listeners are unregistered before the process is terminated and the
    /// view destroyed. A pending coalesced resize is dropped.
    pub fn kill(&mut self, id: &str) -> bool {
        self.coalescer.cancel(id);
        let Some(mut session) = self.sessions.remove(id) else {
            debug!(session = %id, "kill: unknown session");
            return false;
        };
        if !session.is_live() {
            return false;
        }

        if let Some(process) = session.process.as_mut() {
            process.on_data(None);
        }
        if let Some(view) = session.view.as_mut() {
            view.on_data(None);
            drop(view.take_callbacks());
        }
        if let Some(mut process) = session.process.take() {
            process.terminate();
        }
        if let Some(mut view) = session.view.take() {
            view.destroy();
        }
        info!(session = %id, "killed");
        true
    }

    /// Kill every session.
    pub fn kill_all(&mut self) {
        let ids: Vec<String> = self.sessions.keys().cloned().collect();
        let count = ids.iter().filter(|id| self.kill(id)).count();
        if count > 0 {
            info!(count, "all sessions killed");
        }
    }

    /// Resize both handles of `id`. Pixel bounds are converted with the
    /// view's cell metrics and the configured padding and footer rows.
    pub fn resize(&mut self, id: &str, request: ResizeRequest) -> bool {
        let padding = self.settings.padding_px;
        let footer_rows = self.settings.footer_rows;
        let Some(session) = self.sessions.get_mut(id) else {
            debug!(session = %id, "resize: unknown session");
            return false;
        };
        if session.process.is_none() || session.view.is_none() {
            debug!(session = %id, "resize: session lacks a handle");
            return false;
        }
        let Some(grid) = session.grid_for(request, padding, footer_rows) else {
            return false;
        };
        let resized = session.resize_to(id, grid);
        if resized {
            info!(session = %id, cols = grid.cols, rows = grid.rows, "resized");
        }
        resized
    }

    /// Queue a pixel resize. It is applied by [`flush_resizes`] once no
    /// further request for `id` has arrived for the quiet interval.
    ///
    /// [`flush_resizes`]: SessionManager::flush_resizes
    pub fn request_resize(&mut self, id: &str, bounds: PixelBounds, now: Instant) {
        if !self.contains(id) {
            debug!(session = %id, "request_resize: unknown session");
            return;
        }
        self.coalescer.request(id, bounds, now);
    }

    /// Apply every coalesced resize that is due. Returns the resized ids.
    pub fn flush_resizes(&mut self, now: Instant) -> Vec<String> {
        self.coalescer
            .take_due(now)
            .into_iter()
            .filter(|(id, bounds)| self.resize(id, ResizeRequest::Pixels(*bounds)))
            .map(|(id, _)| id)
            .collect()
    }

    /// Earliest time a queued resize becomes due.
    pub fn next_resize_deadline(&self) -> Option<Instant> {
        self.coalescer.next_deadline()
    }

    /// Exchange the display surfaces of `a` and `b`, then their UI callbacks,
    /// then give each the other's previous grid.
    ///
    /// Handles are neither destroyed nor recreated and data filters stay with
    /// their session. No-op unless both sessions are attached and distinct.
    pub fn swap(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            debug!(session = %a, "swap: same session");
            return false;
        }
        if !self.is_attached(a) || !self.is_attached(b) {
            debug!(a = %a, b = %b, "swap: both sessions must be attached");
            return false;
        }
        let Some(mut first) = self.sessions.remove(a) else {
            return false;
        };
        let Some(mut second) = self.sessions.remove(b) else {
            self.sessions.insert(a.to_string(), first);
            return false;
        };

        exchange(a, &mut first, b, &mut second);

        self.sessions.insert(a.to_string(), first);
        self.sessions.insert(b.to_string(), second);
        info!(a = %a, b = %b, "swapped sessions");
        true
    }
}

fn exchange(a: &str, first: &mut Session, b: &str, second: &mut Session) {
    let (grid_a, grid_b) = (first.grid, second.grid);
    let (Some(view_a), Some(view_b)) = (first.view.as_mut(), second.view.as_mut()) else {
        return;
    };
    let (Some(surface_a), Some(surface_b)) = (view_a.surface().cloned(), view_b.surface().cloned())
    else {
        return;
    };

    view_a.detach();
    view_b.detach();
    if let Err(e) = view_a.attach(&surface_b) {
        warn!(session = %a, surface = %surface_b, "attach failed: {e}");
    }
    if let Err(e) = view_b.attach(&surface_a) {
        warn!(session = %b, surface = %surface_a, "attach failed: {e}");
    }

    let callbacks_a = view_a.take_callbacks();
    let callbacks_b = view_b.take_callbacks();
    view_a.set_callbacks(callbacks_b);
    view_b.set_callbacks(callbacks_a);

    first.resize_to(a, grid_b);
    second.resize_to(b, grid_a);
}
