//! PtyProcess: a [`ProcessHandle`] over `portable-pty`.

mod command;
mod signal;

use std::io::{Read, Write};
use std::sync::{Arc, Mutex};
use std::thread;

use portable_pty::{native_pty_system, Child, MasterPty, PtySize};
use splitterm_common::{GridSize, SessionError};
use splitterm_config::schema::ShellConfig;
use tracing::{debug, warn};

use crate::handle::{DataListener, ProcessHandle, SpawnOptions};

pub use command::default_shell;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Maximum bytes read from the PTY in one call (8 KB).
pub const PTY_READ_CHUNK: usize = 8_192;

// =============================================================================
// PTY PROCESS
// =============================================================================

type SharedListener = Arc<Mutex<Option<DataListener>>>;

/// An interactive shell running in a pseudo-terminal.
///
/// A background reader thread hands every output chunk to the registered
/// listener. Replacing the listener with `None` stops delivery; chunks read
/// while no listener is registered are dropped.
pub struct PtyProcess {
    writer: Box<dyn Write + Send>,
    master: Box<dyn MasterPty + Send>,
    child: Box<dyn Child + Send + Sync>,
    listener: SharedListener,
    pid: Option<u32>,
    reaped: bool,
}

impl PtyProcess {
    /// Spawn `shell` (or the default shell) in a new PTY of `options.grid`.
    pub fn spawn(options: &SpawnOptions, shell: &ShellConfig) -> Result<Self, SessionError> {
        let pair = native_pty_system()
            .openpty(pty_size(options.grid))
            .map_err(|e| SessionError::Spawn(format!("failed to open PTY: {e}")))?;

        let cmd = command::build(shell, options.directory.as_deref());
        let program = cmd.get_argv().first().cloned().unwrap_or_default();
        let child = pair.slave.spawn_command(cmd).map_err(|e| {
            SessionError::Spawn(format!("failed to spawn {}: {e}", program.to_string_lossy()))
        })?;
        drop(pair.slave);

        let writer = pair
            .master
            .take_writer()
            .map_err(|e| SessionError::Spawn(format!("failed to take PTY writer: {e}")))?;
        let reader = pair
            .master
            .try_clone_reader()
            .map_err(|e| SessionError::Spawn(format!("failed to clone PTY reader: {e}")))?;

        let listener: SharedListener = Arc::new(Mutex::new(None));
        spawn_reader(reader, Arc::clone(&listener))?;

        let pid = child.process_id();
        debug!(?pid, grid = %options.grid, "spawned shell");
        Ok(Self {
            writer,
            master: pair.master,
            child,
            listener,
            pid,
            reaped: false,
        })
    }
}

fn pty_size(grid: GridSize) -> PtySize {
    PtySize {
        rows: grid.rows,
        cols: grid.cols,
        pixel_width: 0,
        pixel_height: 0,
    }
}

fn spawn_reader(mut reader: Box<dyn Read + Send>, listener: SharedListener) -> Result<(), SessionError> {
    thread::Builder::new()
        .name("pty-reader".to_string())
        .spawn(move || {
            let mut buf = [0u8; PTY_READ_CHUNK];
            loop {
                match reader.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => {
                        let Ok(mut guard) = listener.lock() else {
                            break;
                        };
                        if let Some(deliver) = guard.as_mut() {
                            deliver(&buf[..n]);
                        }
                    }
                    Err(e) => {
                        debug!("PTY reader error: {e}");
                        break;
                    }
                }
            }
        })
        .map(|_| ())
        .map_err(|e| SessionError::Spawn(format!("failed to spawn PTY reader thread: {e}")))
}

impl ProcessHandle for PtyProcess {
    fn pid(&self) -> Option<u32> {
        self.pid
    }

    fn write(&mut self, data: &[u8]) -> Result<(), SessionError> {
        self.writer.write_all(data)?;
        self.writer.flush()?;
        Ok(())
    }

    fn resize(&mut self, grid: GridSize) -> Result<(), SessionError> {
        self.master
            .resize(pty_size(grid))
            .map_err(|e| SessionError::Resize(e.to_string()))
    }

    fn on_data(&mut self, listener: Option<DataListener>) {
        match self.listener.lock() {
            Ok(mut slot) => *slot = listener,
            Err(_) => warn!(pid = ?self.pid, "PTY listener lock poisoned"),
        }
    }

    fn child_pids(&self) -> Vec<u32> {
        self.pid.map(signal::child_pids).unwrap_or_default()
    }

    fn interrupt(&mut self, pid: u32) -> Result<(), SessionError> {
        signal::interrupt(pid)
    }

    /// Kill the shell and reap it so no zombie is left behind.
    fn terminate(&mut self) {
        if self.reaped {
            return;
        }
        if let Err(e) = self.child.kill() {
            debug!(pid = ?self.pid, "kill failed (already exited?): {e}");
        }
        match self.child.wait() {
            Ok(status) => debug!(pid = ?self.pid, code = status.exit_code(), "shell exited"),
            Err(e) => debug!(pid = ?self.pid, "PTY wait error: {e}"),
        }
        self.reaped = true;
    }
}

impl Drop for PtyProcess {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.listener.lock() {
            slot.take();
        }
        if !self.reaped {
            // Collect an already-exited shell without blocking.
            if let Err(e) = self.child.try_wait() {
                debug!(pid = ?self.pid, "PTY wait error: {e}");
            }
        }
    }
}
