//! shutter-platform: platform-specific I/O boundary for shutter.
//!
//! This crate provides:
//! - One-shot screen capture into owned RGBA8888 frames
//! - Region capture, validated and clamped against the display bounds
//! - Primary display metrics (size, scale factor)
//! - Single-pixel color probing built on region capture
//!
//! ## Module Structure
//!
//! Each functional area is organized as a submodule with platform-specific
//! implementations:
//!
//! - `error` - Common error types
//! - `capture` - Screen and region capture (GDI / CoreGraphics / X11)
//! - `display` - Display metrics and DPI awareness
//! - `pixel` - Pixel color probing
//!
//! Every capture is synchronous and allocates a fresh buffer; ownership of
//! the pixel data transfers to the caller with the returned `Frame`.

mod capture;
mod display;
mod error;
mod pixel;

// Re-export error types
pub use error::{CaptureError, CaptureResult};

// Re-export capture operations
pub use capture::{capture_region, capture_screen};

// Re-export display metrics
pub use display::{primary_display, set_dpi_aware, DisplayInfo};

// Re-export pixel probing
pub use pixel::{pixel_at, pixel_matches};
