//! shutter-core: platform-agnostic screen capture data model.
//!
//! Design goal: keep this crate free of any OS API. Everything that talks to
//! a display server lives in `shutter-platform`; this crate owns the shapes
//! that cross that boundary:
//!
//! - `frame` - Captured frames (owned RGBA8888 buffers) and conversions
//! - `color` - Pixel color values with tolerance matching
//! - `geometry` - Capture regions in physical screen coordinates

mod color;
mod frame;
mod geometry;

pub use color::Color;
pub use frame::{Frame, FrameError, BYTES_PER_PIXEL};
pub use geometry::Region;
