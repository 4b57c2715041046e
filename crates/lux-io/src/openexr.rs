//! OpenEXR output.
//!
//! Writes an [`ImageData`] as a single-part scanline EXR with one `f32`
//! channel per buffer channel. Channel names follow the channel count:
//!
//! | Channels | Names |
//! |----------|-------|
//! | 1 | `Y` |
//! | 2 | `Y`, `A` |
//! | 3 | `R`, `G`, `B` |
//! | 4 | `R`, `G`, `B`, `A` |

use std::path::Path;

use exr::prelude::*;
use lux_core::ImageData;
use tracing::{debug, trace};

use crate::{IoError, IoResult};

/// EXR channel names used for a buffer with `channels` components.
pub fn channel_names(channels: u32) -> &'static [&'static str] {
    match channels {
        1 => &["Y"],
        2 => &["Y", "A"],
        3 => &["R", "G", "B"],
        _ => &["R", "G", "B", "A"],
    }
}

/// Writes `image` to an EXR file at `path`.
///
/// Pixels are stored as 32-bit float with lossless compression.
/// A disabled buffer is rejected with [`IoError::EmptyImage`] before the
/// file is created.
///
/// # Example
///
/// ```rust,no_run
/// use lux_core::ImageData;
///
/// let mut image = ImageData::new(3, 64, 64);
/// image.fill([1.0, 0.0, 0.0, 1.0]);
/// lux_io::write_exr("red.exr", &image)?;
/// # Ok::<(), lux_io::IoError>(())
/// ```
pub fn write<P: AsRef<Path>>(path: P, image: &ImageData) -> IoResult<()> {
    let path = path.as_ref();
    if image.is_empty() {
        return Err(IoError::EmptyImage);
    }

    let width = image.width() as usize;
    let height = image.height() as usize;
    let stride = image.channels() as usize;
    let names = channel_names(image.channels());
    debug!(path = %path.display(), width, height, channels = stride, "writing EXR");

    // Interleaved buffer -> one plane per channel
    let planes: Vec<AnyChannel<FlatSamples>> = names
        .iter()
        .enumerate()
        .map(|(offset, name)| {
            let samples: Vec<f32> = image
                .pixels()
                .iter()
                .skip(offset)
                .step_by(stride)
                .copied()
                .collect();
            trace!(channel = *name, samples = samples.len(), "channel plane");
            AnyChannel::new(*name, FlatSamples::F32(samples))
        })
        .collect();

    let layer = Layer::new(
        (width, height),
        LayerAttributes::named("main"),
        Encoding::SMALL_LOSSLESS,
        AnyChannels::sort(planes.into()),
    );

    Image::from_layer(layer)
        .write()
        .to_file(path)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}
