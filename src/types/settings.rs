use serde::{Deserialize, Serialize};

/// Development server the frontend is served from in debug builds.
pub const DEV_SERVER_URL: &str = "http://localhost:5173";

/// Entry page of the web assets shipped with release builds.
pub const BUNDLED_INDEX_URL: &str = "qrc:/web/index.html";

pub const DEFAULT_TITLE: &str = "Zync";
pub const DEFAULT_WIDTH: u32 = 1700;
pub const DEFAULT_HEIGHT: u32 = 900;

/// Top-level shell settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShellSettings {
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub content: ContentSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Title and initial size of the main window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Which build flavour picks the navigation target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BuildMode {
    Debug,
    Release,
}

/// Where the webview gets its content from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentSettings {
    #[serde(default = "default_dev_url")]
    pub dev_url: String,
    #[serde(default = "default_bundled_url")]
    pub bundled_url: String,
    /// Directory holding the bundled assets. `None` means the platform
    /// resource directory next to the executable.
    #[serde(default)]
    pub assets_dir: Option<String>,
    /// Overrides the compile-time build mode when set.
    #[serde(default)]
    pub build_mode: Option<BuildMode>,
}

fn default_dev_url() -> String {
    DEV_SERVER_URL.to_string()
}

fn default_bundled_url() -> String {
    BUNDLED_INDEX_URL.to_string()
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            dev_url: default_dev_url(),
            bundled_url: default_bundled_url(),
            assets_dir: None,
            build_mode: None,
        }
    }
}

/// Log output settings. `RUST_LOG` takes precedence over `filter`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "zync=info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}
