//! Test image command.
//!
//! Fills a float buffer with one color and writes it to disk.

use super::save_image;
use crate::ImageArgs;
use anyhow::{Context, Result};
use lux_core::ImageData;
use tracing::{info, trace};

/// Expands up to four components to RGBA, zero-filling the rest.
pub fn fill_color(components: &[f32]) -> [f32; 4] {
    let mut rgba = [0.0; 4];
    for (dst, src) in rgba.iter_mut().zip(components) {
        *dst = *src;
    }
    rgba
}

pub fn run(args: ImageArgs, verbose: u8) -> Result<()> {
    trace!(output = %args.output.display(), channels = args.channels, "image::run");

    let mut image = ImageData::try_new(args.channels, args.width, args.height)
        .context("Invalid image geometry")?;
    let color = fill_color(&args.color);
    image.fill(color);
    info!(
        width = image.width(),
        height = image.height(),
        channels = image.channels(),
        ?color,
        "Filled image"
    );

    save_image(&args.output, &image)?;

    println!("Saved '{}'", args.output.display());
    if verbose > 0 {
        println!(
            "  {}x{}, {} channel(s), float32",
            image.width(),
            image.height(),
            image.channels()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_color() {
        assert_eq!(fill_color(&[1.0, 0.0, 0.0, 0.0]), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(fill_color(&[0.5]), [0.5, 0.0, 0.0, 0.0]);
        assert_eq!(fill_color(&[]), [0.0; 4]);
    }

    #[test]
    fn test_run_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("red.exr");
        let args = ImageArgs {
            output: output.clone(),
            channels: 3,
            width: 8,
            height: 8,
            color: vec![1.0, 0.0, 0.0],
        };
        run(args, 0).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_run_rejects_bad_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("bad.exr");
        let args = ImageArgs {
            output: output.clone(),
            channels: 5,
            width: 8,
            height: 8,
            color: vec![1.0],
        };
        assert!(run(args, 0).is_err());
        assert!(!output.exists());
    }
}
