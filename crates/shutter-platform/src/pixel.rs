//! Pixel color probing.
//!
//! Reads a single screen pixel by capturing a 1x1 region through the same
//! path as full captures, so it inherits region validation, clamping and
//! the per-platform conversion rules.

use shutter_core::{Color, Region};

use crate::capture::capture_region;
use crate::error::{CaptureError, CaptureResult};

/// Read the color of the pixel at the given screen coordinates.
pub fn pixel_at(x: i32, y: i32) -> CaptureResult<Color> {
    let frame = capture_region(Region::new(x, y, 1, 1))?;
    frame
        .pixel(0, 0)
        .ok_or_else(|| CaptureError::Backend("1x1 capture produced no pixel".into()))
}

/// Check if the pixel at the given coordinates matches the expected color
/// within a tolerance. Unreadable pixels (off-screen, no display) count as
/// a mismatch.
pub fn pixel_matches(x: i32, y: i32, expected: &Color, tolerance: u8) -> bool {
    pixel_at(x, y)
        .map(|c| c.matches(expected, tolerance))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Headless-safe: either the probe works and yields a parseable color,
    // or it fails with one of the documented errors.
    #[test]
    fn test_pixel_at_smoke() {
        match pixel_at(0, 0) {
            Ok(color) => {
                assert!(Color::from_hex(&color.to_hex()).is_some());
            }
            Err(
                CaptureError::NoDisplay(_)
                | CaptureError::Unsupported
                | CaptureError::PermissionDenied
                | CaptureError::Backend(_)
                | CaptureError::OutOfBounds { .. },
            ) => {}
            Err(other) => panic!("unexpected error shape: {other}"),
        }
    }

    #[test]
    fn test_pixel_matches_never_panics_off_screen() {
        assert!(!pixel_matches(
            i32::MIN,
            i32::MIN,
            &Color::opaque(0, 0, 0),
            255
        ));
    }
}
