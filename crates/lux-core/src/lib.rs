//! # lux-core
//!
//! Core types shared by the lux crates.
//!
//! - [`Error`] / [`Result`] - Unified error type for parameter and geometry validation
//! - [`ImageData`] - Flat `f32` pixel buffer handed to image writers
//!
//! ## Crate Structure
//!
//! ```text
//! lux-core (this crate)
//!    ^
//!    |
//!    +-- lux-exposure (camera exposure model)
//!    +-- lux-io (image output)
//!    +-- lux-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;

pub use error::*;
pub use image::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use lux_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::{ImageData, MAX_CHANNELS, MAX_HEIGHT, MAX_WIDTH};
}
