// Zync platform paths for Linux
// Config:    ~/.config/zync
// Resources: <exe dir>/resources

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Zync on Linux.
/// Uses `$XDG_CONFIG_HOME/zync` if set, otherwise `~/.config/zync`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("zync")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("zync")
    }
}

pub fn get_resource_dir(exe_dir: PathBuf) -> PathBuf {
    exe_dir.join("resources")
}
