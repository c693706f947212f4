//! Display metrics and DPI awareness.
//!
//! Capture works in physical pixels, so callers need the primary display's
//! pixel size to place regions, and on Windows the process must opt in to
//! DPI awareness before GDI reports unscaled coordinates.
//!
//! Platform implementations:
//! - Windows: GetSystemMetrics + Per-Monitor V2 awareness (`windows.rs`)
//! - macOS: CGDisplay main-display metrics (`macos.rs`)
//! - Linux: X11 root screen size (`linux.rs`)

use serde::{Deserialize, Serialize};

use crate::error::CaptureResult;

#[cfg(windows)]
mod windows;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "linux")]
mod linux;

/// Metrics of the primary display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DisplayInfo {
    /// Width in physical pixels.
    pub width: u32,
    /// Height in physical pixels.
    pub height: u32,
    /// Physical-to-logical pixel ratio (1.0 when unscaled or unknown).
    pub scale_factor: f64,
}

/// Query the primary display.
pub fn primary_display() -> CaptureResult<DisplayInfo> {
    #[cfg(windows)]
    {
        windows::primary_display()
    }
    #[cfg(target_os = "macos")]
    {
        macos::primary_display()
    }
    #[cfg(target_os = "linux")]
    {
        linux::primary_display()
    }
    #[cfg(not(any(windows, target_os = "macos", target_os = "linux")))]
    {
        Err(crate::error::CaptureError::Unsupported)
    }
}

/// Opt the process into DPI awareness.
///
/// Required on Windows before capture so GDI works in physical pixels; a
/// no-op everywhere else. Safe to call more than once.
pub fn set_dpi_aware() {
    #[cfg(windows)]
    {
        windows::set_dpi_aware()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_info_serializes() {
        let info = DisplayInfo {
            width: 2560,
            height: 1440,
            scale_factor: 1.5,
        };
        let json = serde_json::to_string(&info).unwrap();
        let back: DisplayInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width, 2560);
        assert_eq!(back.height, 1440);
        assert!((back.scale_factor - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_dpi_aware_is_idempotent() {
        set_dpi_aware();
        set_dpi_aware();
    }

    // Tolerates headless environments: a reachable display must report a
    // non-zero size, an unreachable one must say why.
    #[test]
    fn test_primary_display_smoke() {
        match primary_display() {
            Ok(info) => {
                assert!(info.width > 0);
                assert!(info.height > 0);
                assert!(info.scale_factor > 0.0);
            }
            Err(err) => {
                assert!(!err.to_string().is_empty());
            }
        }
    }
}
