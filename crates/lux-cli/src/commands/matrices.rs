//! ACES matrix generation command.
//!
//! Prints the sRGB -> ACEScg chain with RRT saturation, then the
//! ACEScg -> sRGB chain with ODT saturation.

use super::write_matrix;
use crate::MatricesArgs;
use anyhow::{Context, Result};
use lux_math::Mat3;
use lux_primaries::{
    ODT_SAT, RRT_SAT, ap1_to_srgb, ap1_to_srgb_odt_sat, srgb_to_ap1, srgb_to_ap1_rrt_sat,
};
use lux_shader::Layout;
use std::io::{self, Write};
use tracing::{debug, trace};

pub fn run(args: MatricesArgs) -> Result<()> {
    trace!(row_major = args.row_major, labelled = args.labelled, "matrices::run");

    let layout = Layout::from_row_major(args.row_major);
    let mut out = io::stdout().lock();
    emit(&mut out, layout, args.labelled).context("Failed to write matrices")?;
    out.flush()?;

    Ok(())
}

/// Writes both matrix groups, separated by a `---` line.
pub fn emit<W: Write>(out: &mut W, layout: Layout, labelled: bool) -> io::Result<()> {
    let forward: [(&str, Mat3); 3] = [
        ("srgb_to_ap1", srgb_to_ap1()),
        ("rrt_sat", RRT_SAT),
        ("srgb_to_ap1_rrt_sat", srgb_to_ap1_rrt_sat()),
    ];
    let inverse: [(&str, Mat3); 3] = [
        ("ap1_to_srgb", ap1_to_srgb()),
        ("odt_sat", ODT_SAT),
        ("ap1_to_srgb_odt_sat", ap1_to_srgb_odt_sat()),
    ];

    for (name, m) in &forward {
        debug!(name, "emitting");
        write_matrix(out, name, m, layout, labelled)?;
    }
    out.write_all(b"---\n\n")?;
    for (name, m) in &inverse {
        debug!(name, "emitting");
        write_matrix(out, name, m, layout, labelled)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_string(layout: Layout, labelled: bool) -> String {
        let mut out = Vec::new();
        emit(&mut out, layout, labelled).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_emit_order() {
        let text = emit_string(Layout::ColumnMajor, false);
        let names: Vec<&str> = text
            .lines()
            .filter_map(|l| l.strip_prefix("const mat3 "))
            .filter_map(|l| l.split(' ').next())
            .collect();
        assert_eq!(
            names,
            [
                "srgb_to_ap1",
                "rrt_sat",
                "srgb_to_ap1_rrt_sat",
                "ap1_to_srgb",
                "odt_sat",
                "ap1_to_srgb_odt_sat"
            ]
        );

        let (forward, inverse) = text.split_once("---\n\n").unwrap();
        assert_eq!(forward.matches("const mat3").count(), 3);
        assert_eq!(inverse.matches("const mat3").count(), 3);
    }

    #[test]
    fn test_emit_matches_formatter() {
        let text = emit_string(Layout::RowMajor, false);
        let expected = lux_shader::format_mat3("srgb_to_ap1", &srgb_to_ap1(), Layout::RowMajor);
        assert!(text.starts_with(&expected));
        // Row-major prints the first row of the forward matrix first
        assert!(text.contains("    0.613191,  0.339512,  0.047366,"));
    }

    #[test]
    fn test_emit_labelled() {
        let text = emit_string(Layout::ColumnMajor, true);
        assert_eq!(text.matches("// Column written per row\n").count(), 6);
    }
}
