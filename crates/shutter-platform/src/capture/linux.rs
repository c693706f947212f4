//! Linux screen capture via X11.
//!
//! One GetImage round-trip per capture: a ZPixmap read of the requested
//! rectangle from the root window. At depth 24 the fourth byte of each pixel
//! is undefined, so alpha is normalized to opaque after conversion. Wayland
//! sessions without XWayland surface as a connection failure.

use shutter_core::{Frame, Region};
use tracing::debug;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{ConnectionExt as _, ImageFormat};

use crate::error::{CaptureError, CaptureResult};

pub fn capture_region(region: Region) -> CaptureResult<Frame> {
    let (conn, screen_num) =
        x11rb::connect(None).map_err(|err| CaptureError::NoDisplay(err.to_string()))?;
    let screen = &conn.setup().roots[screen_num];

    let reply = conn
        .get_image(
            ImageFormat::Z_PIXMAP,
            screen.root,
            region.x as i16,
            region.y as i16,
            region.width as u16,
            region.height as u16,
            !0,
        )
        .map_err(|err| CaptureError::Backend(err.to_string()))?
        .reply()
        .map_err(|err| CaptureError::Backend(err.to_string()))?;

    debug!(depth = reply.depth, bytes = reply.data.len(), "got ZPixmap reply");

    let mut frame = Frame::from_bgra(region.width, region.height, &reply.data)?;
    if reply.depth < 32 {
        frame.set_opaque();
    }
    Ok(frame)
}
