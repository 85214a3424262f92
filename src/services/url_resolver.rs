// Zync navigation target selection
// Debug builds point the webview at the dev server, release builds at the
// bundled assets. The decision is made once, when the window is built.

use url::Url;

use crate::types::errors::ShellError;
pub use crate::types::settings::{BuildMode, BUNDLED_INDEX_URL, DEV_SERVER_URL};
use crate::types::settings::ContentSettings;

impl BuildMode {
    /// The mode this binary was compiled in.
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Debug
        } else {
            BuildMode::Release
        }
    }
}

/// Mode used for URL selection: the settings override, else the compile-time mode.
pub fn effective_mode(content: &ContentSettings) -> BuildMode {
    content.build_mode.unwrap_or_else(BuildMode::current)
}

/// Picks the navigation target for `mode`.
///
/// The configured string is validated but returned verbatim, so
/// `http://localhost:5173` does not gain a trailing slash.
pub fn resolve_start_url(mode: BuildMode, content: &ContentSettings) -> Result<String, ShellError> {
    let target = match mode {
        BuildMode::Debug => &content.dev_url,
        BuildMode::Release => &content.bundled_url,
    };

    Url::parse(target).map_err(|e| ShellError::InvalidUrl(format!("{} ({})", target, e)))?;
    Ok(target.clone())
}
