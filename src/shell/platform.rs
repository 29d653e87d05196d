//! Process-level platform helpers.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Check if running as root/admin.
///
/// On Unix this decides whether system package installs need `sudo`.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(windows)]
    {
        std::env::var("ADMIN").is_ok()
    }

    #[cfg(not(any(unix, windows)))]
    {
        false
    }
}

/// Append `dir` to a `PATH`-style value unless it is already present.
///
/// Returns `None` when the entries cannot be joined (an entry contains the
/// platform separator).
pub fn path_with_appended(current: Option<OsString>, dir: &Path) -> Option<OsString> {
    let mut entries: Vec<PathBuf> = current
        .map(|value| std::env::split_paths(&value).collect())
        .unwrap_or_default();

    if entries.iter().any(|entry| entry == dir) {
        return std::env::join_paths(entries).ok();
    }

    entries.push(dir.to_path_buf());
    std::env::join_paths(entries).ok()
}

/// Append `dir` to this process's `PATH`.
///
/// Child processes spawned afterwards inherit the new value.
pub fn append_to_process_path(dir: &Path) {
    match path_with_appended(std::env::var_os("PATH"), dir) {
        Some(updated) => {
            tracing::debug!("Appending {} to PATH", dir.display());
            std::env::set_var("PATH", updated);
        }
        None => tracing::warn!("Could not append {} to PATH", dir.display()),
    }
}
