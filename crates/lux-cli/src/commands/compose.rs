//! Matrix composition command.

use super::write_matrix;
use crate::ComposeArgs;
use anyhow::{Context, Result};
use lux_primaries::compose_ids;
use lux_shader::Layout;
use std::io::{self, Write};
use tracing::{info, trace};

pub fn run(args: ComposeArgs, verbose: u8) -> Result<()> {
    let chain = args
        .matrices
        .iter()
        .map(|id| id.key())
        .collect::<Vec<_>>()
        .join(" -> ");
    trace!(chain = %chain, name = %args.name, "compose::run");
    info!(steps = args.matrices.len(), "Composing matrices");

    let m = compose_ids(&args.matrices);
    let layout = Layout::from_row_major(args.row_major);

    let mut out = io::stdout().lock();
    if verbose > 0 {
        for (i, id) in args.matrices.iter().enumerate() {
            writeln!(out, "// {}. {}", i + 1, id.name())?;
        }
    }
    write_matrix(&mut out, &args.name, &m, layout, args.labelled)
        .context("Failed to write matrix")?;
    out.flush()?;

    Ok(())
}
