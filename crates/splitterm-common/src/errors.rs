use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures raised by process and view handles.
///
/// The session manager logs these and degrades to a no-op; they never
/// reach the layout layer.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("spawn failed: {0}")]
    Spawn(String),

    #[error("session io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("resize failed: {0}")]
    Resize(String),

    #[error("signal failed: {0}")]
    Signal(String),

    #[error("view is detached")]
    Detached,

    #[error("view attach failed: {0}")]
    Attach(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout persist error: {0}")]
    Persist(String),

    #[error("layout parse error: {0}")]
    Parse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SplittermError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
