//! Saved geometry of the main window.

use serde::{Deserialize, Serialize};

/// Position and size of the main window when the application last exited.
///
/// Coordinates are in the desktop's virtual screen space, so `x` and `y` may
/// be negative on multi-monitor setups.  Values are JSON numbers and are kept
/// as `f64` without rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WindowPosition {
    /// Creates a window position from its four components.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
