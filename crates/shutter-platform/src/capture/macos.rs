//! macOS screen capture via CoreGraphics.
//!
//! CGDisplayCreateImage snapshots the whole main display; region requests
//! are served by cropping the full frame in software. Since macOS 10.15 the
//! call silently produces wallpaper-only images without the Screen Recording
//! permission, so access is preflighted and reported as an explicit error.

use core_graphics::display::{CGDisplay, CGDisplayCreateImage};
use core_graphics::image::CGImage;
use foreign_types::ForeignType;
use shutter_core::{Frame, Region};

use crate::error::{CaptureError, CaptureResult};

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    fn CGPreflightScreenCaptureAccess() -> bool;
}

pub fn capture_region(region: Region) -> CaptureResult<Frame> {
    if !unsafe { CGPreflightScreenCaptureAccess() } {
        return Err(CaptureError::PermissionDenied);
    }

    let image = main_display_image()?;
    let full = frame_from_image(&image)?;

    if region.x == 0
        && region.y == 0
        && region.width == full.width()
        && region.height == full.height()
    {
        return Ok(full);
    }
    Ok(full.crop(region)?)
}

fn main_display_image() -> CaptureResult<CGImage> {
    let image_ref = unsafe { CGDisplayCreateImage(CGDisplay::main().id) };
    if image_ref.is_null() {
        return Err(CaptureError::Backend(
            "CGDisplayCreateImage returned null".into(),
        ));
    }
    Ok(unsafe { CGImage::from_ptr(image_ref) })
}

fn frame_from_image(image: &CGImage) -> CaptureResult<Frame> {
    let width = image.width() as u32;
    let height = image.height() as u32;
    let bytes_per_row = image.bytes_per_row() as usize;

    let data = image.data();
    let frame = Frame::from_bgra_with_stride(width, height, bytes_per_row, data.bytes())?;
    Ok(frame)
}
