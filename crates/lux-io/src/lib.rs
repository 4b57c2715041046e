//! # lux-io
//!
//! Image output for lux.
//!
//! The pixel buffer ([`lux_core::ImageData`]) is handed to a writer that
//! owns file creation and encoding. Only OpenEXR is supported: the buffer
//! holds linear `f32` values and EXR stores them without loss.
//!
//! # Example
//!
//! ```rust,no_run
//! use lux_core::ImageData;
//!
//! let mut image = ImageData::new(4, 512, 512);
//! image.fill([1.0, 0.0, 0.0, 1.0]);
//! lux_io::write("test.exr", &image)?;
//! # Ok::<(), lux_io::IoError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`exr`] - OpenEXR encoding
//! - [`tracing`] - Write logging
//!
//! # Used By
//!
//! - `lux-cli` - `image` and `generate` commands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod openexr;

pub use error::{IoError, IoResult};
pub use openexr::write as write_exr;

use std::path::Path;

use lux_core::ImageData;

/// Writes an image, picking the format from the file extension.
///
/// Returns [`IoError::UnsupportedFormat`] for anything but `.exr`.
pub fn write<P: AsRef<Path>>(path: P, image: &ImageData) -> IoResult<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("exr") => openexr::write(path, image),
        other => Err(IoError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let image = ImageData::new(3, 4, 4);

        let exr_path = dir.path().join("out.EXR");
        write(&exr_path, &image).unwrap();
        assert!(std::fs::metadata(&exr_path).unwrap().len() > 0);

        let png = dir.path().join("out.png");
        let err = write(&png, &image).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(ref e) if e == "png"));
        assert!(!png.exists());
    }
}
