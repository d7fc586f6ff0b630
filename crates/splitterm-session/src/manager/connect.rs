//! connect / disconnect.

use splitterm_common::SurfaceId;
use tracing::{debug, info, warn};

use crate::handle::{ConnectOptions, DataFilter, SpawnOptions, UiCallbacks};

use super::types::{queueing_listener, Flow};
use super::{expand_home, SessionManager};

impl SessionManager {
    /// Show session `id` on `surface`, creating whatever it is missing.
    ///
    /// An existing view is re-attached rather than replaced, so scrollback and
    /// the running process survive a pane moving between surfaces. A fresh
    /// process gets `options.startup` written once. Listeners are wired at
    /// most once per handle. `filter` replaces the session's data filter and
    /// `callbacks` rebind the view's UI events when given.
    ///
    /// Returns `true` when the session ends up with a view on `surface`.
    pub fn connect(
        &mut self,
        id: &str,
        options: &ConnectOptions,
        surface: &SurfaceId,
        filter: Option<DataFilter>,
        callbacks: Option<UiCallbacks>,
    ) -> bool {
        let existing = self.sessions.get(id);
        let need_view = existing.map_or(true, |s| s.view.is_none());
        let need_process = existing.map_or(true, |s| s.process.is_none());
        let grid = existing.map_or(options.view.grid, |s| s.grid);

        let view = if need_view {
            self.backend
                .create_view(id, &options.view)
                .map_err(|e| warn!(session = %id, "view creation failed: {e}"))
                .ok()
        } else {
            None
        };
        let process = if need_process {
            let spawn = SpawnOptions {
                directory: options.directory.as_deref().map(expand_home),
                grid,
            };
            self.backend
                .spawn_process(id, &spawn)
                .map_err(|e| warn!(session = %id, "process spawn failed: {e}"))
                .ok()
        } else {
            None
        };

        let tx = self.tx.clone();
        let session = self.entry(id, grid);
        if let Some(view) = view {
            session.view = Some(view);
            session.view_wired = false;
        }
        if let Some(process) = process {
            session.process = Some(process);
            session.process_wired = false;
        }
        let generation = session.generation;

        if let Some(view) = session.view.as_mut() {
            if view.surface() != Some(surface) {
                if view.surface().is_some() {
                    view.detach();
                }
                if let Err(e) = view.attach(surface) {
                    warn!(session = %id, surface = %surface, "attach failed: {e}");
                }
            }
            if !session.view_wired {
                view.on_data(Some(queueing_listener(tx.clone(), id, generation, Flow::ToProcess)));
                session.view_wired = true;
            }
            if let Some(callbacks) = callbacks {
                view.set_callbacks(callbacks);
            }
        }

        if !session.process_wired {
            if let Some(process) = session.process.as_mut() {
                process.on_data(Some(queueing_listener(tx, id, generation, Flow::ToView)));
                session.process_wired = true;
                if let Some(startup) = options.startup.as_deref().filter(|s| !s.trim().is_empty()) {
                    debug!(session = %id, "writing startup command");
                    if let Err(e) = process.write(format!("{startup}\n").as_bytes()) {
                        warn!(session = %id, "startup command write failed: {e}");
                    }
                }
            }
        }

        if filter.is_some() {
            session.filter = filter;
        }

        let attached = session.is_attached();
        info!(session = %id, surface = %surface, attached, "connected");
        attached
    }

    /// Detach the view from its surface and unbind its UI callbacks.
    ///
    /// The process and view stay alive and output keeps landing in the
    /// view's scrollback.
    pub fn disconnect(&mut self, id: &str) {
        let Some(view) = self.sessions.get_mut(id).and_then(|s| s.view.as_mut()) else {
            debug!(session = %id, "disconnect: no view");
            return;
        };
        drop(view.take_callbacks());
        view.detach();
        info!(session = %id, "disconnected");
    }
}
