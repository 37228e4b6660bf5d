//! # pxm-io
//!
//! Binary PPM (P6) container with exact-format persistence.
//!
//! The P6 flavor of the Netpbm portable pixmap stores a short textual
//! header followed by a raw interleaved RGB payload:
//!
//! ```text
//! "P6\n"
//! <comment line> "\n"
//! <width> " " <height> "\n"
//! <max value>
//! <width * height * 3 payload bytes, row-major, R,G,B per pixel>
//! ```
//!
//! Only a max value of 255 (one byte per channel) is supported; anything
//! else is rejected at load time. The comment line is preserved verbatim
//! across a read/write round trip.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pxm_io::ppm;
//!
//! let image = ppm::read("input.ppm")?;
//! println!("{}x{}", image.width(), image.height());
//! ppm::write("output.ppm", &image)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod ppm;

pub use error::{IoError, IoResult};

/// One pixel: three 8-bit channels, no alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// In-memory PPM (P6) image.
///
/// Pixels are stored as a flat interleaved buffer, row-major with x as the
/// fastest-varying index, exactly as they appear on disk. The buffer length
/// is always `width * height * 3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PpmImage {
    width: u32,
    height: u32,
    max_value: u16,
    comment: String,
    data: Vec<u8>,
}

impl PpmImage {
    /// Creates a black image of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize * 3;
        Self {
            width,
            height,
            max_value: ppm::PPM_MAX_VALUE,
            comment: String::new(),
            data: vec![0u8; size],
        }
    }

    /// Wraps an existing interleaved RGB payload.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Format`] if `data` is not exactly
    /// `width * height * 3` bytes long, or if that product overflows.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> IoResult<Self> {
        let expected = payload_len(width, height).ok_or_else(|| {
            IoError::Format(format!(
                "image dimensions {}x{} overflow the payload size",
                width, height
            ))
        })?;
        if data.len() != expected {
            return Err(IoError::Format(format!(
                "payload is {} bytes, expected {} for {}x{}",
                data.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            max_value: ppm::PPM_MAX_VALUE,
            comment: String::new(),
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Declared per-channel maximum (always 255 for supported files).
    #[inline]
    pub fn max_value(&self) -> u16 {
        self.max_value
    }

    /// The header comment line, without its trailing newline.
    #[inline]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Replaces the header comment line.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Reads the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`, like slice indexing.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Rgb {
        let i = self.offset(x, y);
        Rgb {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
        }
    }

    /// Overwrites the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`, like slice indexing.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgb) {
        let i = self.offset(x, y);
        self.data[i] = pixel.r;
        self.data[i + 1] = pixel.g;
        self.data[i + 2] = pixel.b;
    }

    /// The raw interleaved payload, in on-disk byte order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for image {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * 3
    }
}

/// Payload byte count for the given dimensions, `None` on overflow.
pub(crate) fn payload_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_black() {
        let img = PpmImage::new(4, 3);
        assert_eq!(img.pixel_count(), 12);
        assert_eq!(img.as_bytes().len(), 36);
        assert_eq!(img.get_pixel(3, 2), Rgb::default());
    }

    #[test]
    fn pixel_round_trip() {
        let mut img = PpmImage::new(2, 2);
        let px = Rgb { r: 1, g: 2, b: 3 };
        img.set_pixel(1, 0, px);
        assert_eq!(img.get_pixel(1, 0), px);
        assert_eq!(&img.as_bytes()[3..6], &[1, 2, 3]);
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(PpmImage::from_raw(2, 2, vec![0u8; 12]).is_ok());
        assert!(matches!(
            PpmImage::from_raw(2, 2, vec![0u8; 11]),
            Err(IoError::Format(_))
        ));
    }

    #[test]
    fn from_raw_rejects_overflowing_dimensions() {
        let err = PpmImage::from_raw(u32::MAX, u32::MAX, Vec::new()).unwrap_err();
        assert!(matches!(err, IoError::Format(ref m) if m.contains("overflow")));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_pixel_out_of_bounds_panics() {
        let img = PpmImage::new(2, 2);
        let _ = img.get_pixel(2, 0);
    }
}
