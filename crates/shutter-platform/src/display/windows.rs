//! Windows display metrics and DPI awareness.

use std::sync::Once;

use tracing::{info, warn};
use windows_sys::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};

use super::DisplayInfo;
use crate::error::{CaptureError, CaptureResult};

static INIT: Once = Once::new();

/// Set the process DPI awareness to Per-Monitor V2.
///
/// Without this, GDI reports coordinates scaled by the system DPI and the
/// captured bitmap would not match the display's physical pixels. Must run
/// before the first capture.
pub fn set_dpi_aware() {
    INIT.call_once(|| {
        // Per-Monitor V2 needs Windows 10 1703+; resolve the call at link
        // time against user32 instead of pulling in another feature set.
        unsafe {
            const DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2: isize = -4;

            #[link(name = "user32")]
            extern "system" {
                fn SetProcessDpiAwarenessContext(value: isize) -> i32;
            }

            if SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) != 0 {
                info!("Per-Monitor V2 DPI awareness enabled");
            } else {
                warn!("could not enable Per-Monitor V2 DPI awareness; captures may be scaled");
            }
        }
    });
}

pub fn primary_display() -> CaptureResult<DisplayInfo> {
    let width = unsafe { GetSystemMetrics(SM_CXSCREEN) };
    let height = unsafe { GetSystemMetrics(SM_CYSCREEN) };
    if width <= 0 || height <= 0 {
        return Err(CaptureError::NoDisplay(format!(
            "GetSystemMetrics reported {width}x{height}"
        )));
    }
    Ok(DisplayInfo {
        width: width as u32,
        height: height as u32,
        scale_factor: system_scale_factor(),
    })
}

fn system_scale_factor() -> f64 {
    unsafe {
        #[link(name = "user32")]
        extern "system" {
            fn GetDpiForSystem() -> u32;
        }

        GetDpiForSystem() as f64 / 96.0
    }
}
