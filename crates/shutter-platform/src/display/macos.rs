//! macOS display metrics.
//!
//! CGDisplay reports the main display's size both in physical pixels and in
//! points; their ratio is the Retina backing scale factor.

use core_graphics::display::CGDisplay;

use super::DisplayInfo;
use crate::error::{CaptureError, CaptureResult};

pub fn primary_display() -> CaptureResult<DisplayInfo> {
    let display = CGDisplay::main();
    let width = display.pixels_wide() as u32;
    let height = display.pixels_high() as u32;
    if width == 0 || height == 0 {
        return Err(CaptureError::NoDisplay(format!(
            "main display reports {width}x{height}"
        )));
    }

    let points = display.bounds().size;
    let scale_factor = if points.width > 0.0 {
        width as f64 / points.width
    } else {
        1.0
    };

    Ok(DisplayInfo {
        width,
        height,
        scale_factor,
    })
}
