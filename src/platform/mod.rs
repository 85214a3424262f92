// Zync platform abstraction
// Provides platform-specific paths for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for Zync.
///
/// - **Linux**: `~/.config/zync` (or `$XDG_CONFIG_HOME/zync`)
/// - **macOS**: `~/Library/Application Support/Zync`
/// - **Windows**: `%APPDATA%/Zync`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the directory the bundled web assets are installed in.
///
/// - **Linux**: `<exe dir>/resources`
/// - **macOS**: `<exe dir>/../Resources` (inside the `.app` bundle)
/// - **Windows**: `<exe dir>/resources`
pub fn get_resource_dir() -> PathBuf {
    let exe_dir = executable_dir();
    #[cfg(target_os = "linux")]
    {
        linux::get_resource_dir(exe_dir)
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_resource_dir(exe_dir)
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_resource_dir(exe_dir)
    }
}

/// Directory containing the running executable, or the working directory
/// when that cannot be determined.
fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
