use super::settings::WindowSettings;

/// Size of a window in logical (DPI-independent) units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

impl WindowSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Everything needed to open the main window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub title: String,
    pub size: WindowSize,
}

impl From<&WindowSettings> for WindowSpec {
    fn from(settings: &WindowSettings) -> Self {
        Self {
            title: settings.title.clone(),
            size: WindowSize::new(settings.width as f64, settings.height as f64),
        }
    }
}

/// Content margins of a layout, in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Margins {
    pub const ZERO: Margins = Margins {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Margins::ZERO
    }
}
