//! Zync: a desktop window hosting the Zync web frontend in a native webview.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
