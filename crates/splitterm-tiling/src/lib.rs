pub mod commands;
pub mod sink;
pub mod state;
pub mod tree;

pub use commands::{LayoutCommand, SwapTarget};
pub use sink::{NullSink, RecordingSink, SessionSink};
pub use state::{LayoutState, PERMANENT_TAB};
pub use tree::{Direction, LayoutNode, LayoutPrefs, LayoutSearch};
