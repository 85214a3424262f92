//! Window Shell: the top-level window and the browser it hosts.
//!
//! Ownership is a strict tree: `MainWindow` owns a `CentralWidget`, which
//! owns a `VBoxLayout`, which owns the single browser. The layout has no
//! way to add a second child or change its margins, so the browser always
//! fills the client area.

use crate::types::errors::ShellError;
use crate::types::window::{Margins, WindowSize, WindowSpec};

/// The embedded browser as seen by the shell.
///
/// Implemented by the `wry` webview in the GUI build and by recording
/// fakes in tests.
pub trait BrowserEngine {
    /// Asks the browser to navigate to `url`.
    ///
    /// Returns once the request is issued. Whether the page actually loads
    /// is up to the browser, which shows its own error page on failure.
    fn load_url(&mut self, url: &str) -> Result<(), ShellError>;
}

/// Vertical layout holding exactly one browser with zero margins.
pub struct VBoxLayout<B> {
    margins: Margins,
    browser: B,
}

impl<B> VBoxLayout<B> {
    fn new(browser: B) -> Self {
        Self {
            margins: Margins::ZERO,
            browser,
        }
    }

    pub fn contents_margins(&self) -> Margins {
        self.margins
    }

    pub fn count(&self) -> usize {
        1
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }
}

/// Container occupying the window's client area.
pub struct CentralWidget<B> {
    layout: VBoxLayout<B>,
}

impl<B> CentralWidget<B> {
    pub fn layout(&self) -> &VBoxLayout<B> {
        &self.layout
    }
}

/// The application window.
pub struct MainWindow<B> {
    title: String,
    size: WindowSize,
    requested_url: String,
    central: CentralWidget<B>,
}

impl<B: BrowserEngine> MainWindow<B> {
    /// Builds the window around `browser` and sends it to `start_url`.
    ///
    /// This is the only place a navigation request is issued.
    pub fn new(spec: WindowSpec, browser: B, start_url: &str) -> Result<Self, ShellError> {
        validate_spec(&spec)?;

        let mut central = CentralWidget {
            layout: VBoxLayout::new(browser),
        };
        central.layout.browser.load_url(start_url)?;
        tracing::info!(title = %spec.title, url = %start_url, "main window ready");

        Ok(Self {
            title: spec.title,
            size: spec.size,
            requested_url: start_url.to_string(),
            central,
        })
    }
}

impl<B> MainWindow<B> {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> WindowSize {
        self.size
    }

    pub fn central_widget(&self) -> &CentralWidget<B> {
        &self.central
    }

    pub fn layout(&self) -> &VBoxLayout<B> {
        &self.central.layout
    }

    pub fn contents_margins(&self) -> Margins {
        self.central.layout.contents_margins()
    }

    pub fn child_count(&self) -> usize {
        self.central.layout.count()
    }

    pub fn browser(&self) -> &B {
        self.central.layout.browser()
    }

    /// The navigation target chosen at construction.
    pub fn requested_url(&self) -> &str {
        &self.requested_url
    }
}

fn validate_spec(spec: &WindowSpec) -> Result<(), ShellError> {
    if spec.title.trim().is_empty() {
        return Err(ShellError::InvalidWindow("title is empty".to_string()));
    }
    let WindowSize { width, height } = spec.size;
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(ShellError::InvalidWindow(format!(
            "size {}x{} is not positive",
            width, height
        )));
    }
    Ok(())
}
