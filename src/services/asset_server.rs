//! Bundled web assets served through a private URL scheme.
//!
//! Release builds navigate to `qrc:/web/index.html`. The shell registers the
//! `qrc` scheme with the webview and answers each request from a resource
//! directory on disk, so `qrc:/web/app.js` resolves to `{root}/web/app.js`.

use std::fs;
use std::path::{Component, Path, PathBuf};

use url::Url;

use crate::types::errors::AssetError;

/// Path served for a request to the scheme root.
const INDEX_PATH: &str = "web/index.html";

/// Schemes the webview already knows how to load.
const BUILTIN_SCHEMES: &[&str] = &["http", "https", "file", "about", "data"];

/// Host used when a bundled URL is handed to the webview.
const ASSET_HOST: &str = "localhost";

/// Returns the scheme of `bundled_url` when the shell has to serve it itself.
pub fn asset_scheme(bundled_url: &str) -> Option<String> {
    let parsed = Url::parse(bundled_url).ok()?;
    let scheme = parsed.scheme();
    if BUILTIN_SCHEMES.contains(&scheme) {
        None
    } else {
        Some(scheme.to_string())
    }
}

/// Rewrites a bundled URL into the form the webview intercepts.
///
/// `qrc:/web/index.html` has no authority, which the webview's request
/// layer cannot represent. It becomes `qrc://localhost/web/index.html`, or
/// `http://qrc.localhost/web/index.html` on Windows where WebView2 only
/// routes custom schemes through that host. URLs on built-in schemes, and
/// strings that are not URLs, are returned unchanged.
pub fn webview_url(logical: &str) -> String {
    let parsed = match Url::parse(logical) {
        Ok(parsed) => parsed,
        Err(_) => return logical.to_string(),
    };
    let scheme = parsed.scheme();
    if BUILTIN_SCHEMES.contains(&scheme) {
        return logical.to_string();
    }

    let host = parsed.host_str().unwrap_or(ASSET_HOST);
    let path = parsed.path();
    let mut out = if cfg!(target_os = "windows") {
        format!("http://{}.{}", scheme, host)
    } else {
        format!("{}://{}", scheme, host)
    };
    if !path.starts_with('/') {
        out.push('/');
    }
    out.push_str(path);
    if let Some(query) = parsed.query() {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = parsed.fragment() {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

/// A resolved asset ready to be sent to the webview.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub mime: &'static str,
    pub body: Vec<u8>,
}

/// Status, content type and body of a reply on the asset scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetResponse {
    pub status: u16,
    pub mime: &'static str,
    pub body: Vec<u8>,
}

/// Resolves request paths against a single asset root.
pub struct AssetServer {
    root: PathBuf,
}

impl AssetServer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Answers a request for `path`: 200 with the asset, otherwise the
    /// error's status and message as plain text.
    pub fn respond(&self, path: &str) -> AssetResponse {
        match self.resolve(path) {
            Ok(asset) => AssetResponse {
                status: 200,
                mime: asset.mime,
                body: asset.body,
            },
            Err(err) => {
                tracing::warn!("{}", err);
                AssetResponse {
                    status: err.status_code(),
                    mime: "text/plain",
                    body: err.to_string().into_bytes(),
                }
            }
        }
    }

    /// Reads the asset at `path`, a percent-encoded URL path.
    ///
    /// Paths containing `..` or resolving outside the root through a symlink
    /// are refused with `Forbidden`.
    pub fn resolve(&self, path: &str) -> Result<Asset, AssetError> {
        let decoded =
            urlencoding::decode(path).map_err(|_| AssetError::NotFound(path.to_string()))?;
        let clean = decoded.trim_start_matches('/');
        let clean = if clean.is_empty() { INDEX_PATH } else { clean };

        let relative = Path::new(clean);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(AssetError::Forbidden(path.to_string()));
        }

        let canonical_root =
            fs::canonicalize(&self.root).map_err(|_| AssetError::NotFound(path.to_string()))?;
        let canonical_file = fs::canonicalize(self.root.join(relative))
            .map_err(|_| AssetError::NotFound(path.to_string()))?;
        if !canonical_file.starts_with(&canonical_root) {
            return Err(AssetError::Forbidden(path.to_string()));
        }
        if !canonical_file.is_file() {
            return Err(AssetError::NotFound(path.to_string()));
        }

        let body = fs::read(&canonical_file)
            .map_err(|e| AssetError::IoError(format!("{}: {}", path, e)))?;
        Ok(Asset {
            mime: mime_from_extension(relative),
            body,
        })
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") | Some("map") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("wasm") => "application/wasm",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
