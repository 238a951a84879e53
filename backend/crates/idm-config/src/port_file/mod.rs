pub(crate) mod port_file_info;

/// Check if a process with the given PID is currently running.
///
/// Uses `kill(pid, 0)`, which checks existence without sending a signal.
#[cfg(unix)]
pub fn is_process_running(pid: u32) -> bool {
    let Ok(pid) = libc::pid_t::try_from(pid) else {
        return false;
    };
    // SAFETY: kill with signal 0 only checks existence, no signal is sent.
    unsafe { libc::kill(pid, 0) == 0 }
}

#[cfg(not(unix))]
pub fn is_process_running(_pid: u32) -> bool {
    // Assume alive. The CLI gets a connection error if the server is gone.
    true
}
