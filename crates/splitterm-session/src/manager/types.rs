//! Session record and the chunks queued by wired listeners.

use std::sync::mpsc;

use splitterm_common::GridSize;
use tracing::warn;

use crate::handle::{DataFilter, DataListener, ProcessHandle, ViewHandle};
use crate::resize::{grid_from_pixels, ResizeRequest};

/// Which way a chunk travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Process output on its way to the view.
    ToView,
    /// Keystrokes on their way to the process.
    ToProcess,
}

pub(crate) struct Chunk {
    pub id: String,
    pub generation: u64,
    pub flow: Flow,
    pub data: Vec<u8>,
}

/// Listener that queues every chunk for the next `pump`.
///
/// Chunks carry the session generation so output from a killed session never
/// reaches a later session reusing its id.
pub(crate) fn queueing_listener(
    tx: mpsc::Sender<Chunk>,
    id: &str,
    generation: u64,
    flow: Flow,
) -> DataListener {
    let id = id.to_string();
    Box::new(move |data: &[u8]| {
        let _ = tx.send(Chunk {
            id: id.clone(),
            generation,
            flow,
            data: data.to_vec(),
        });
    })
}

/// One registry entry. With neither handle present it is a placeholder.
pub(crate) struct Session {
    pub generation: u64,
    pub process: Option<Box<dyn ProcessHandle>>,
    pub view: Option<Box<dyn ViewHandle>>,
    pub grid: GridSize,
    pub scroll_y: usize,
    pub filter: Option<DataFilter>,
    pub process_wired: bool,
    pub view_wired: bool,
}

impl Session {
    pub fn new(generation: u64, grid: GridSize) -> Self {
        Self {
            generation,
            process: None,
            view: None,
            grid,
            scroll_y: 0,
            filter: None,
            process_wired: false,
            view_wired: false,
        }
    }

    pub fn is_live(&self) -> bool {
        self.process.is_some() || self.view.is_some()
    }

    pub fn is_attached(&self) -> bool {
        self.view.as_ref().is_some_and(|v| v.surface().is_some())
    }

    /// Grid for `request`, using the view's cell metrics for pixel bounds.
    pub fn grid_for(
        &self,
        request: ResizeRequest,
        padding: f64,
        footer_rows: u16,
    ) -> Option<GridSize> {
        match request {
            ResizeRequest::Grid(grid) => Some(GridSize::new(grid.cols, grid.rows)),
            ResizeRequest::Pixels(bounds) => self
                .view
                .as_ref()
                .map(|v| grid_from_pixels(bounds, v.cell_metrics(), padding, footer_rows)),
        }
    }

    /// Apply `grid` to both handles. Needs both to be present.
    pub fn resize_to(&mut self, id: &str, grid: GridSize) -> bool {
        let (Some(view), Some(process)) = (self.view.as_mut(), self.process.as_mut()) else {
            return false;
        };
        if let Err(e) = view.resize(grid) {
            warn!(session = %id, "view resize failed: {e}");
        }
        if let Err(e) = process.resize(grid) {
            warn!(session = %id, "process resize failed: {e}");
        }
        self.grid = grid;
        true
    }
}
