//! Log output via `tracing-subscriber`.
//!
//! The subscriber is installed before settings are read, so settings
//! load/save events are not lost. It starts on `RUST_LOG` or
//! [`FALLBACK_FILTER`]; once settings are loaded, [`LogHandle::apply_configured`]
//! swaps in `logging.filter` unless `RUST_LOG` was given.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Filter used when neither `RUST_LOG` nor the settings give a usable one.
pub const FALLBACK_FILTER: &str = "zync=info";

/// Picks the directive in effect: `env` if it parses, else `configured`
/// if it parses, else [`FALLBACK_FILTER`].
pub fn resolve_directive(env: Option<&str>, configured: &str) -> String {
    [env, Some(configured)]
        .into_iter()
        .flatten()
        .find(|d| EnvFilter::try_new(d).is_ok())
        .unwrap_or(FALLBACK_FILTER)
        .to_string()
}

/// Lets the filter be replaced after the subscriber is installed.
pub struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    env_override: Option<String>,
}

impl LogHandle {
    fn new(handle: reload::Handle<EnvFilter, Registry>, env_override: Option<String>) -> Self {
        Self {
            handle,
            env_override,
        }
    }

    /// Switches to the filter from the settings file. `RUST_LOG` still wins.
    pub fn apply_configured(&self, configured: &str) {
        let directive = resolve_directive(self.env_override.as_deref(), configured);
        if self.env_override.is_none() && directive != configured {
            tracing::warn!(filter = %configured, "invalid log filter in settings, using {}", directive);
        }
        if let Err(e) = self.handle.reload(EnvFilter::new(&directive)) {
            tracing::warn!("could not apply log filter {}: {}", directive, e);
        }
    }

    /// Directives of the filter currently in effect.
    pub fn current_filter(&self) -> Option<String> {
        self.handle.with_current(|filter| filter.to_string()).ok()
    }
}

/// Installs the global subscriber. A second call leaves the first
/// subscriber in place.
pub fn init() -> LogHandle {
    let env_override = std::env::var("RUST_LOG").ok();
    let initial = resolve_directive(env_override.as_deref(), FALLBACK_FILTER);
    let (filter, handle) = reload::Layer::new(EnvFilter::new(initial));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init();

    LogHandle::new(handle, env_override)
}
