// Zync platform paths for macOS
// Config:    ~/Library/Application Support/Zync
// Resources: Zync.app/Contents/Resources

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Zync on macOS.
/// `~/Library/Application Support/Zync`
pub fn get_config_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
        .join("Library")
        .join("Application Support")
        .join("Zync")
}

/// The executable lives in `Contents/MacOS`; assets sit beside it in `Contents/Resources`.
pub fn get_resource_dir(exe_dir: PathBuf) -> PathBuf {
    match exe_dir.parent() {
        Some(contents) => contents.join("Resources"),
        None => exe_dir.join("Resources"),
    }
}
