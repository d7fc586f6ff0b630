//! Child enumeration and interrupt delivery.

use splitterm_common::SessionError;

/// Immediate children of `pid`.
#[cfg(target_os = "linux")]
pub(crate) fn child_pids(pid: u32) -> Vec<u32> {
    let path = format!("/proc/{pid}/task/{pid}/children");
    std::fs::read_to_string(path)
        .map(|s| parse_pids(&s))
        .unwrap_or_default()
}

#[cfg(not(target_os = "linux"))]
pub(crate) fn child_pids(_pid: u32) -> Vec<u32> {
    Vec::new()
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_pids(s: &str) -> Vec<u32> {
    s.split_whitespace().filter_map(|p| p.parse().ok()).collect()
}

#[cfg(unix)]
pub(crate) fn interrupt(pid: u32) -> Result<(), SessionError> {
    let target = libc::pid_t::try_from(pid)
        .map_err(|_| SessionError::Signal(format!("pid {pid} out of range")))?;
    // SAFETY: kill(2) has no memory-safety preconditions.
    let rc = unsafe { libc::kill(target, libc::SIGINT) };
    if rc == 0 {
        Ok(())
    } else {
        Err(SessionError::Signal(format!(
            "SIGINT to {pid}: {}",
            std::io::Error::last_os_error()
        )))
    }
}

#[cfg(not(unix))]
pub(crate) fn interrupt(pid: u32) -> Result<(), SessionError> {
    Err(SessionError::Signal(format!(
        "interrupting {pid} is not supported on this platform"
    )))
}
