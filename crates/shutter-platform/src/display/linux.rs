//! Linux display metrics via X11.
//!
//! Reports the root screen size of the default X11 screen. X11 does not
//! expose a scale factor at this level, so 1.0 is assumed.

use x11rb::connection::Connection;

use super::DisplayInfo;
use crate::error::{CaptureError, CaptureResult};

pub fn primary_display() -> CaptureResult<DisplayInfo> {
    let (conn, screen_num) =
        x11rb::connect(None).map_err(|err| CaptureError::NoDisplay(err.to_string()))?;
    let screen = &conn.setup().roots[screen_num];

    let width = u32::from(screen.width_in_pixels);
    let height = u32::from(screen.height_in_pixels);
    if width == 0 || height == 0 {
        return Err(CaptureError::NoDisplay(format!(
            "root screen reports {width}x{height}"
        )));
    }

    Ok(DisplayInfo {
        width,
        height,
        scale_factor: 1.0,
    })
}
