// Zync platform paths for Windows
// Config:    %APPDATA%/Zync
// Resources: <exe dir>/resources

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Zync on Windows.
/// `%APPDATA%/Zync`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Zync")
}

pub fn get_resource_dir(exe_dir: PathBuf) -> PathBuf {
    exe_dir.join("resources")
}
