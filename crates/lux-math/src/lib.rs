//! # lux-math
//!
//! Linear algebra for color matrix work.
//!
//! - [`Mat3`] - 3x3 `f64` matrices for gamut conversion and adaptation
//! - [`Vec3`] - 3D vectors for XYZ/RGB triplets
//! - Bradford chromatic adaptation ([`adapt_matrix`], [`D65`], [`D60`])
//!
//! # Design
//!
//! Everything is `f64`: calibration constants are published with 7-10
//! significant digits and chained products should not lose them.
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! so in `C * B * A`, `A` is applied to the vector first.
//!
//! # Usage
//!
//! ```rust
//! use lux_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.5, 0.25);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - `DMat3`/`DVec3` interop
//!
//! # Used By
//!
//! - `lux-primaries` - Named matrix registry and composition
//! - `lux-shader` - Matrix literal emission

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;
mod vec3;

pub use adapt::*;
pub use mat3::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DVec3};
}
