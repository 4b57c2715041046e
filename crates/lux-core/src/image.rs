//! Flat `f32` pixel buffer.
//!
//! [`ImageData`] is the buffer handed to image writers. It holds
//! `channels * width * height` floats, interleaved per pixel, rows
//! top-to-bottom:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//!         ...
//! ```
//!
//! Geometry is limited to 1-4 channels and 8K UHD (7680x4320).
//! [`ImageData::new`] never fails: unsupported geometry yields a disabled
//! buffer whose dimensions are all zero, so callers must check
//! [`ImageData::is_empty`] before use. [`ImageData::try_new`] reports the
//! same condition as an error instead.
//!
//! # Usage
//!
//! ```rust
//! use lux_core::ImageData;
//!
//! let mut img = ImageData::new(3, 512, 512);
//! img.fill([1.0, 0.0, 0.0, 0.0]);
//! assert_eq!(img.color(10, 10), [1.0, 0.0, 0.0, 0.0]);
//!
//! let disabled = ImageData::new(5, 512, 512);
//! assert!(disabled.is_empty());
//! ```

use crate::{Error, Result};

/// Maximum channel count.
pub const MAX_CHANNELS: u32 = 4;

/// Maximum width (8K UHD).
pub const MAX_WIDTH: u32 = 7680;

/// Maximum height (8K UHD).
pub const MAX_HEIGHT: u32 = 4320;

/// Interleaved `f32` pixel buffer with bounds-checked accessors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageData {
    pixels: Vec<f32>,
    channels: u32,
    width: u32,
    height: u32,
}

impl ImageData {
    /// Creates a zero-filled buffer.
    ///
    /// Returns a disabled (all-zero geometry, no storage) buffer when
    /// `channels` is outside 1-4, `width` outside 1-7680 or `height`
    /// outside 1-4320.
    pub fn new(channels: u32, width: u32, height: u32) -> Self {
        Self::try_new(channels, width, height).unwrap_or_default()
    }

    /// Creates a zero-filled buffer, rejecting unsupported geometry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lux_core::ImageData;
    ///
    /// assert!(ImageData::try_new(4, 7680, 4320).is_ok());
    /// assert!(ImageData::try_new(3, 7681, 4320).is_err());
    /// ```
    pub fn try_new(channels: u32, width: u32, height: u32) -> Result<Self> {
        if !(1..=MAX_CHANNELS).contains(&channels) {
            return Err(Error::invalid_dimensions(
                channels,
                width,
                height,
                format!("channels must be 1-{MAX_CHANNELS}"),
            ));
        }
        if !(1..=MAX_WIDTH).contains(&width) {
            return Err(Error::invalid_dimensions(
                channels,
                width,
                height,
                format!("width must be 1-{MAX_WIDTH}"),
            ));
        }
        if !(1..=MAX_HEIGHT).contains(&height) {
            return Err(Error::invalid_dimensions(
                channels,
                width,
                height,
                format!("height must be 1-{MAX_HEIGHT}"),
            ));
        }

        let len = channels as usize * width as usize * height as usize;
        Ok(Self {
            pixels: vec![0.0; len],
            channels,
            width,
            height,
        })
    }

    /// Number of channels per pixel (0 when disabled).
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Width in pixels (0 when disabled).
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels (0 when disabled).
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of stored floats, `channels * width * height`.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Returns `true` for a disabled buffer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Raw interleaved pixel data.
    #[inline]
    pub fn pixels(&self) -> &[f32] {
        &self.pixels
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let c = self.channels as usize;
        Some(c * self.width as usize * y as usize + c * x as usize)
    }

    /// Reads the pixel at (x, y) as RGBA.
    ///
    /// Components past the channel count are zero. Out-of-bounds reads
    /// return all zeros.
    pub fn color(&self, x: u32, y: u32) -> [f32; 4] {
        let mut result = [0.0; 4];
        if let Some(base) = self.offset(x, y) {
            let c = self.channels as usize;
            result[..c].copy_from_slice(&self.pixels[base..base + c]);
        }
        result
    }

    /// Writes the first `channels` components of `color` at (x, y).
    ///
    /// Out-of-bounds writes are ignored.
    pub fn set_color(&mut self, x: u32, y: u32, color: [f32; 4]) {
        if let Some(base) = self.offset(x, y) {
            let c = self.channels as usize;
            self.pixels[base..base + c].copy_from_slice(&color[..c]);
        }
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: [f32; 4]) {
        let c = self.channels as usize;
        if c == 0 {
            return;
        }
        for px in self.pixels.chunks_exact_mut(c) {
            px.copy_from_slice(&color[..c]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let img = ImageData::new(3, 512, 512);
        assert_eq!(img.channels(), 3);
        assert_eq!(img.width(), 512);
        assert_eq!(img.height(), 512);
        assert_eq!(img.pixel_count(), 3 * 512 * 512);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_new_disabled() {
        for (c, w, h) in [(5, 512, 512), (3, 7681, 512), (3, 512, 4321), (0, 1, 1), (1, 0, 1), (1, 1, 0)] {
            let img = ImageData::new(c, w, h);
            assert_eq!(img.channels(), 0);
            assert_eq!(img.width(), 0);
            assert_eq!(img.height(), 0);
            assert_eq!(img.pixel_count(), 0);
            assert!(img.is_empty());
        }
    }

    #[test]
    fn test_limits_inclusive() {
        let img = ImageData::new(1, MAX_WIDTH, 1);
        assert_eq!(img.width(), MAX_WIDTH);
        let img = ImageData::new(1, 1, MAX_HEIGHT);
        assert_eq!(img.height(), MAX_HEIGHT);
    }

    #[test]
    fn test_try_new_errors() {
        let err = ImageData::try_new(5, 512, 512).unwrap_err();
        assert!(err.is_dimension_error());
        assert!(err.to_string().contains("channels"));

        let err = ImageData::try_new(3, 512, 4321).unwrap_err();
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn test_set_get_color() {
        let mut img = ImageData::new(3, 4, 2);
        img.set_color(3, 1, [0.25, 0.5, 0.75, 1.0]);

        // Alpha is not stored for 3 channels
        assert_eq!(img.color(3, 1), [0.25, 0.5, 0.75, 0.0]);
        assert_eq!(img.color(0, 0), [0.0; 4]);

        // Interleaved, row-major layout
        let base = 3 * 4 + 3 * 3;
        assert_eq!(&img.pixels()[base..base + 3], &[0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut img = ImageData::new(4, 2, 2);
        img.set_color(2, 0, [1.0; 4]);
        img.set_color(0, 2, [1.0; 4]);
        assert!(img.pixels().iter().all(|&v| v == 0.0));
        assert_eq!(img.color(5, 5), [0.0; 4]);
    }

    #[test]
    fn test_fill() {
        let mut img = ImageData::new(2, 3, 3);
        img.fill([0.5, 0.25, 9.0, 9.0]);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(img.color(x, y), [0.5, 0.25, 0.0, 0.0]);
            }
        }
    }

    #[test]
    fn test_fill_disabled_is_noop() {
        let mut img = ImageData::new(9, 9, 9);
        img.fill([1.0; 4]);
        assert!(img.is_empty());
    }
}
