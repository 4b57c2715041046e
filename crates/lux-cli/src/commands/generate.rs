//! Full generation run: matrices to stdout, then the test image.

use crate::GenerateArgs;
use anyhow::Result;
use tracing::trace;

pub fn run(args: GenerateArgs, verbose: u8) -> Result<()> {
    trace!("generate::run");
    super::matrices::run(args.matrices)?;
    super::image::run(args.image, verbose)
}
