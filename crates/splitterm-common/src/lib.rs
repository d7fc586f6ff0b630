pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, LayoutError, SessionError, SplittermError};
pub use id::new_id;
pub use types::{CellMetrics, GridSize, PixelBounds, SurfaceId};

pub type Result<T> = std::result::Result<T, SplittermError>;
