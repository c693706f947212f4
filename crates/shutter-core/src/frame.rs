//! Captured screen frames.
//!
//! A `Frame` is one snapshot of display contents: width, height and an owned
//! RGBA8888 buffer, row-major, tightly packed. Every constructor upholds the
//! size invariant `data.len() == width * height * 4`; code holding a `Frame`
//! never needs to re-check it.
//!
//! Screen backends rarely hand us this layout directly. GDI, CoreGraphics and
//! X11 all produce BGRA scanlines, usually with per-row stride padding, so the
//! conversion constructors here do the swizzle and drop the padding.

use thiserror::Error;

use crate::color::Color;
use crate::geometry::Region;

/// Bytes per RGBA8888 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Errors from frame construction and manipulation.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
    #[error("source buffer too small: need {needed} bytes, got {actual}")]
    SourceTooSmall { needed: usize, actual: usize },
    #[error("row stride {stride} is smaller than row width {row_bytes}")]
    StrideTooSmall { stride: usize, row_bytes: usize },
    #[error("crop region {0} does not fit inside a {1}x{2} frame")]
    CropOutOfBounds(Region, u32, u32),
}

/// One captured image snapshot.
///
/// Pixel layout is RGBA8888: four 8-bit channels per pixel in red, green,
/// blue, alpha order, rows packed with no padding. The buffer is freshly
/// allocated per capture and owned by this value; consecutive captures never
/// share memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// Create a frame from an existing tightly-packed RGBA buffer.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, FrameError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(FrameError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Convert a tightly-packed BGRA buffer (the common native layout) into
    /// an RGBA frame.
    pub fn from_bgra(width: u32, height: u32, bgra: &[u8]) -> Result<Self, FrameError> {
        Self::from_bgra_with_stride(width, height, width as usize * BYTES_PER_PIXEL, bgra)
    }

    /// Convert BGRA scanlines with a row stride into a tight RGBA frame.
    ///
    /// `stride` is the number of bytes from the start of one source row to
    /// the start of the next; it must be at least `width * 4`. Padding bytes
    /// past the visible row are discarded.
    pub fn from_bgra_with_stride(
        width: u32,
        height: u32,
        stride: usize,
        bgra: &[u8],
    ) -> Result<Self, FrameError> {
        let row_bytes = width as usize * BYTES_PER_PIXEL;
        if stride < row_bytes {
            return Err(FrameError::StrideTooSmall { stride, row_bytes });
        }
        // Trailing padding on the last row is not required to be present.
        let needed = if height == 0 {
            0
        } else {
            stride * (height as usize - 1) + row_bytes
        };
        if bgra.len() < needed {
            return Err(FrameError::SourceTooSmall {
                needed,
                actual: bgra.len(),
            });
        }

        let mut data = vec![0u8; row_bytes * height as usize];
        for y in 0..height as usize {
            let src_row = &bgra[y * stride..y * stride + row_bytes];
            let dst_row = &mut data[y * row_bytes..(y + 1) * row_bytes];
            for (src, dst) in src_row
                .chunks_exact(BYTES_PER_PIXEL)
                .zip(dst_row.chunks_exact_mut(BYTES_PER_PIXEL))
            {
                dst[0] = src[2];
                dst[1] = src[1];
                dst[2] = src[0];
                dst[3] = src[3];
            }
        }
        Ok(Self { width, height, data })
    }

    /// Force every pixel fully opaque.
    ///
    /// X11 ZPixmap data at depth 24 leaves the fourth byte undefined, so the
    /// Linux backend normalizes alpha after conversion.
    pub fn set_opaque(&mut self) {
        for px in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px[3] = 0xFF;
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major, `width * height * 4` long.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read one pixel. Returns `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let px = &self.data[offset..offset + BYTES_PER_PIXEL];
        Some(Color::new(px[0], px[1], px[2], px[3]))
    }

    /// Copy a sub-rectangle into a new frame.
    ///
    /// Used by backends that can only snapshot the full display and serve
    /// region requests in software. The region's origin is interpreted in
    /// this frame's coordinates and must lie fully inside it.
    pub fn crop(&self, region: Region) -> Result<Frame, FrameError> {
        let fits = region.x >= 0
            && region.y >= 0
            && region.x as u64 + region.width as u64 <= self.width as u64
            && region.y as u64 + region.height as u64 <= self.height as u64;
        if !fits {
            return Err(FrameError::CropOutOfBounds(region, self.width, self.height));
        }

        let src_row_bytes = self.width as usize * BYTES_PER_PIXEL;
        let dst_row_bytes = region.width as usize * BYTES_PER_PIXEL;
        let mut data = Vec::with_capacity(dst_row_bytes * region.height as usize);
        for row in 0..region.height as usize {
            let y = region.y as usize + row;
            let start = y * src_row_bytes + region.x as usize * BYTES_PER_PIXEL;
            data.extend_from_slice(&self.data[start..start + dst_row_bytes]);
        }
        Ok(Frame {
            width: region.width,
            height: region.height,
            data,
        })
    }

    /// Hand the pixel buffer to the caller, consuming the frame.
    pub fn into_raw(self) -> (u32, u32, Vec<u8>) {
        (self.width, self.height, self.data)
    }
}
