use std::fmt;

// === ShellError ===

/// Errors raised while building or running the window shell.
#[derive(Debug)]
pub enum ShellError {
    /// The window title or size is unusable.
    InvalidWindow(String),
    /// A configured navigation target is not a valid URL.
    InvalidUrl(String),
    /// The embedded browser refused a request.
    Browser(String),
    /// The native window could not be created.
    Window(String),
    /// Settings could not be loaded or saved.
    Settings(SettingsError),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::InvalidWindow(msg) => write!(f, "Invalid window: {}", msg),
            ShellError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            ShellError::Browser(msg) => write!(f, "Browser error: {}", msg),
            ShellError::Window(msg) => write!(f, "Window error: {}", msg),
            ShellError::Settings(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Settings(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SettingsError> for ShellError {
    fn from(err: SettingsError) -> Self {
        ShellError::Settings(err)
    }
}

// === SettingsError ===

/// Errors related to reading and writing the settings file.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === AssetError ===

/// Errors returned when serving a bundled asset.
#[derive(Debug)]
pub enum AssetError {
    /// No asset exists at the requested path.
    NotFound(String),
    /// The requested path resolves outside the asset root.
    Forbidden(String),
    /// The asset exists but could not be read.
    IoError(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotFound(path) => write!(f, "Asset not found: {}", path),
            AssetError::Forbidden(path) => write!(f, "Asset path forbidden: {}", path),
            AssetError::IoError(msg) => write!(f, "Asset I/O error: {}", msg),
        }
    }
}

impl AssetError {
    /// HTTP status the asset scheme answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AssetError::NotFound(_) => 404,
            AssetError::Forbidden(_) => 403,
            AssetError::IoError(_) => 500,
        }
    }
}

impl std::error::Error for AssetError {}
