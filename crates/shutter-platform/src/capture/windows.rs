//! Windows screen capture via GDI.
//!
//! BitBlt the requested rectangle from the screen DC into a memory bitmap,
//! then read it back with GetDIBits as top-down 32bpp scanlines. GDI hands
//! back BGRA with the alpha byte left at zero, so the frame is normalized
//! to opaque after conversion.

use std::ptr;

use shutter_core::{Frame, Region, BYTES_PER_PIXEL};
use windows_sys::Win32::Graphics::Gdi::{
    BitBlt, CreateCompatibleBitmap, CreateCompatibleDC, DeleteDC, DeleteObject, GetDC, GetDIBits,
    ReleaseDC, SelectObject, BITMAPINFO, BITMAPINFOHEADER, BI_RGB, DIB_RGB_COLORS, RGBQUAD,
    SRCCOPY,
};

use crate::error::{CaptureError, CaptureResult};

pub fn capture_region(region: Region) -> CaptureResult<Frame> {
    let width = region.width as i32;
    let height = region.height as i32;

    unsafe {
        let hdc_screen = GetDC(ptr::null_mut()); // null = entire screen
        if hdc_screen.is_null() {
            return Err(CaptureError::NoDisplay("GetDC returned null".into()));
        }

        let hdc_mem = CreateCompatibleDC(hdc_screen);
        if hdc_mem.is_null() {
            ReleaseDC(ptr::null_mut(), hdc_screen);
            return Err(CaptureError::Backend("CreateCompatibleDC failed".into()));
        }

        let hbitmap = CreateCompatibleBitmap(hdc_screen, width, height);
        if hbitmap.is_null() {
            DeleteDC(hdc_mem);
            ReleaseDC(ptr::null_mut(), hdc_screen);
            return Err(CaptureError::Backend("CreateCompatibleBitmap failed".into()));
        }

        let old_bitmap = SelectObject(hdc_mem, hbitmap);

        let blitted = BitBlt(
            hdc_mem, 0, 0, width, height, hdc_screen, region.x, region.y, SRCCOPY,
        );

        let mut bmi = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: width,
                biHeight: -height, // Top-down
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB,
                biSizeImage: 0,
                biXPelsPerMeter: 0,
                biYPelsPerMeter: 0,
                biClrUsed: 0,
                biClrImportant: 0,
            },
            bmiColors: [RGBQUAD {
                rgbBlue: 0,
                rgbGreen: 0,
                rgbRed: 0,
                rgbReserved: 0,
            }],
        };

        let mut bgra = vec![0u8; region.width as usize * region.height as usize * BYTES_PER_PIXEL];

        let copied = GetDIBits(
            hdc_mem,
            hbitmap,
            0,
            region.height,
            bgra.as_mut_ptr() as *mut _,
            &mut bmi,
            DIB_RGB_COLORS,
        );

        SelectObject(hdc_mem, old_bitmap);
        DeleteObject(hbitmap);
        DeleteDC(hdc_mem);
        ReleaseDC(ptr::null_mut(), hdc_screen);

        if blitted == 0 {
            return Err(CaptureError::Backend("BitBlt failed".into()));
        }
        if copied == 0 {
            return Err(CaptureError::Backend("GetDIBits returned no scanlines".into()));
        }

        let mut frame = Frame::from_bgra(region.width, region.height, &bgra)?;
        // GDI does not maintain the alpha channel across BitBlt.
        frame.set_opaque();
        Ok(frame)
    }
}
