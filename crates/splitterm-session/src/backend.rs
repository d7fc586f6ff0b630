//! Native session backend: PTY processes and headless scrollback views.

use splitterm_common::SessionError;
use splitterm_config::schema::ShellConfig;
use tracing::info;

use crate::handle::{ProcessHandle, SessionBackend, SpawnOptions, ViewHandle, ViewOptions};
use crate::pty::PtyProcess;
use crate::view::ScrollbackView;

pub struct NativeBackend {
    shell: ShellConfig,
}

impl NativeBackend {
    pub fn new(shell: ShellConfig) -> Self {
        Self { shell }
    }
}

impl SessionBackend for NativeBackend {
    fn spawn_process(
        &mut self,
        id: &str,
        options: &SpawnOptions,
    ) -> Result<Box<dyn ProcessHandle>, SessionError> {
        let process = PtyProcess::spawn(options, &self.shell)?;
        info!(session = %id, pid = ?process.pid(), "shell started");
        Ok(Box::new(process))
    }

    fn create_view(
        &mut self,
        _id: &str,
        options: &ViewOptions,
    ) -> Result<Box<dyn ViewHandle>, SessionError> {
        Ok(Box::new(ScrollbackView::new(options)))
    }
}

#[cfg(test)]
mod tests {
    use splitterm_common::{CellMetrics, GridSize};

    use super::*;

    #[test]
    fn creates_views_with_requested_options() {
        let mut backend = NativeBackend::new(ShellConfig::default());
        let options = ViewOptions {
            grid: GridSize::new(100, 30),
            scrollback_lines: 5,
            cell_metrics: CellMetrics {
                width: 7.0,
                height: 14.0,
            },
        };
        let view = backend.create_view("s1", &options).unwrap();
        assert_eq!(view.grid(), GridSize::new(100, 30));
        assert_eq!(view.cell_metrics(), options.cell_metrics);
        assert!(view.surface().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn spawn_failure_surfaces_as_error() {
        let mut backend = NativeBackend::new(ShellConfig {
            program: "/nonexistent/shell".into(),
            ..Default::default()
        });
        let options = SpawnOptions {
            directory: None,
            grid: GridSize::default(),
        };
        assert!(backend.spawn_process("s1", &options).is_err());
    }
}
