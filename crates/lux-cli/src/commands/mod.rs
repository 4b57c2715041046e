//! CLI command implementations

pub mod compose;
pub mod exposure;
pub mod generate;
pub mod image;
pub mod matrices;

use anyhow::{Context, Result};
use lux_core::ImageData;
use lux_math::Mat3;
use lux_shader::Layout;
use std::io::{self, Write};
use std::path::Path;

/// Save image to path
pub fn save_image(path: &Path, image: &ImageData) -> Result<()> {
    lux_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Write one GLSL matrix declaration, optionally with its layout label
pub fn write_matrix<W: Write>(
    out: &mut W,
    name: &str,
    m: &Mat3,
    layout: Layout,
    labelled: bool,
) -> io::Result<()> {
    if labelled {
        lux_shader::write_mat3_labelled(out, name, m, layout)
    } else {
        lux_shader::write_mat3(out, name, m, layout)
    }
}
