//! Zync UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The whole interface is the hosted web frontend; this layer only opens the
//! window, registers the bundled-asset scheme and starts the first navigation.

pub mod shell_app;
