//! App Core for Zync.
//!
//! Holds the settings engine and turns the loaded settings into a
//! `LaunchPlan` the GUI layer can act on.

use std::path::PathBuf;

use crate::platform;
use crate::services::asset_server::asset_scheme;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::url_resolver::{effective_mode, resolve_start_url};
use crate::types::errors::ShellError;
use crate::types::settings::{BuildMode, ShellSettings};
use crate::types::window::WindowSpec;

/// Everything the GUI needs to open the shell, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchPlan {
    pub window: WindowSpec,
    pub mode: BuildMode,
    pub start_url: String,
    /// Custom scheme to register for bundled assets, if the bundled URL uses one.
    pub asset_scheme: Option<String>,
    pub asset_root: PathBuf,
}

pub struct App {
    pub settings_engine: SettingsEngine,
}

impl App {
    /// Creates the app. `config_path` overrides the platform settings location.
    pub fn new(config_path: Option<String>) -> Self {
        Self {
            settings_engine: SettingsEngine::new(config_path),
        }
    }

    pub fn settings(&self) -> &ShellSettings {
        self.settings_engine.get_settings()
    }

    pub fn config_path(&self) -> &str {
        self.settings_engine.get_config_path()
    }

    /// Startup sequence: load settings, writing the defaults out on first run.
    ///
    /// On error the defaults stay in effect and the error is returned for
    /// the caller to report.
    pub fn startup(&mut self) -> Result<(), ShellError> {
        let existed = self.settings_engine.config_exists();
        self.settings_engine.load()?;
        if !existed {
            self.settings_engine.save()?;
        }
        Ok(())
    }

    /// Resolves window, build mode, start URL and asset location from the current settings.
    pub fn launch_plan(&self) -> Result<LaunchPlan, ShellError> {
        let settings = self.settings();
        let mode = effective_mode(&settings.content);
        let start_url = resolve_start_url(mode, &settings.content)?;
        let asset_root = settings
            .content
            .assets_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(platform::get_resource_dir);

        tracing::info!(?mode, url = %start_url, "resolved navigation target");

        Ok(LaunchPlan {
            window: WindowSpec::from(&settings.window),
            mode,
            start_url,
            asset_scheme: asset_scheme(&settings.content.bundled_url),
            asset_root,
        })
    }

    pub fn shutdown(&mut self) {
        tracing::info!("shutting down");
    }
}
