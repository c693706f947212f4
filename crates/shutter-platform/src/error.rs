//! Common error types for shutter-platform.

use shutter_core::{FrameError, Region};
use thiserror::Error;

/// Errors from the capture accessor and display queries.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("screen capture is not supported on this platform")]
    Unsupported,
    #[error("no display available: {0}")]
    NoDisplay(String),
    #[error("screen recording permission denied")]
    PermissionDenied,
    #[error("capture region {0} is empty")]
    EmptyRegion(Region),
    #[error("capture region {region} lies outside the display bounds {bounds}")]
    OutOfBounds { region: Region, bounds: Region },
    #[error("capture failed: {0}")]
    Backend(String),
    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// Result type for capture operations.
pub type CaptureResult<T> = Result<T, CaptureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_region() {
        let err = CaptureError::EmptyRegion(Region::new(0, 0, 0, 10));
        assert_eq!(err.to_string(), "capture region 0,0,0x10 is empty");

        let err = CaptureError::OutOfBounds {
            region: Region::new(5000, 0, 10, 10),
            bounds: Region::of_size(1920, 1080),
        };
        assert!(err.to_string().contains("5000,0,10x10"));
        assert!(err.to_string().contains("0,0,1920x1080"));
    }

    #[test]
    fn test_frame_error_converts() {
        let frame_err = shutter_core::Frame::new(1, 1, vec![0; 3]).unwrap_err();
        let err: CaptureError = frame_err.into();
        assert!(matches!(err, CaptureError::Frame(_)));
    }
}
