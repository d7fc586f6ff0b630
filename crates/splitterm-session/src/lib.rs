//! Session registry for splitterm.
//!
//! A session pairs one interactive process with one terminal view under a
//! shared id. The [`SessionManager`] depends only on the [`ProcessHandle`]
//! and [`ViewHandle`] capabilities; [`PtyProcess`] and [`ScrollbackView`]
//! are the native implementations, created through [`NativeBackend`].

pub mod backend;
pub mod coalescer;
pub mod handle;
pub mod highlight;
pub mod manager;
pub mod pty;
pub mod resize;
pub mod view;

pub use backend::NativeBackend;
pub use coalescer::ResizeCoalescer;
pub use handle::{
    ConnectOptions, DataFilter, DataListener, ProcessHandle, SearchMatch, SessionBackend,
    SpawnOptions, UiCallbacks, ViewHandle, ViewOptions,
};
pub use highlight::SearchHighlighter;
pub use manager::{ManagerSettings, SessionManager};
pub use pty::PtyProcess;
pub use resize::{grid_from_pixels, ResizeRequest};
pub use view::ScrollbackView;
