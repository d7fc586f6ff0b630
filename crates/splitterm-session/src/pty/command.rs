//! Shell command construction with a sanitized environment.

use std::path::Path;

use portable_pty::CommandBuilder;
use splitterm_config::schema::ShellConfig;

/// Get the user's default shell.
///
/// - Unix: reads `$SHELL`, falls back to `/bin/sh`
/// - Windows: reads `$COMSPEC`, falls back to `cmd.exe`
pub fn default_shell() -> String {
    #[cfg(unix)]
    {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
    #[cfg(windows)]
    {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    }
}

/// Variables inherited from the parent environment. Everything else is
/// cleared before the shell starts.
const ALLOWED_ENV_VARS: &[&str] = &[
    "HOME",
    "USER",
    "LOGNAME",
    "SHELL",
    "PATH",
    "LANG",
    "LC_ALL",
    "LC_CTYPE",
    "DISPLAY",
    "WAYLAND_DISPLAY",
    "XDG_RUNTIME_DIR",
    "TMPDIR",
    "TMP",
    "TEMP",
    "USERPROFILE",
    "APPDATA",
    "LOCALAPPDATA",
    "SYSTEMROOT",
    "COMSPEC",
    "HOMEDRIVE",
    "HOMEPATH",
];

/// Build the command for a session's shell.
///
/// Configured `env` entries are applied after the allow-list, and
/// `TERM=xterm-256color` last so it always wins.
pub(crate) fn build(shell: &ShellConfig, directory: Option<&Path>) -> CommandBuilder {
    let program = if shell.program.is_empty() {
        default_shell()
    } else {
        shell.program.clone()
    };
    let mut cmd = CommandBuilder::new(&program);

    cmd.env_clear();
    for key in ALLOWED_ENV_VARS {
        if let Ok(val) = std::env::var(key) {
            cmd.env(key, val);
        }
    }
    for (key, val) in &shell.env {
        cmd.env(key, val);
    }
    cmd.env("TERM", "xterm-256color");

    #[cfg(unix)]
    if shell.login_shell {
        cmd.arg("-l");
    }
    cmd.args(&shell.args);

    match directory {
        Some(dir) => cmd.cwd(dir),
        None => {
            if let Ok(dir) = std::env::current_dir() {
                cmd.cwd(dir);
            }
        }
    }
    cmd
}
