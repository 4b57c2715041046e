//! # lux-shader
//!
//! Renders a [`Mat3`] as a GLSL `mat3` constant for pasting into shader
//! source.
//!
//! # Output format
//!
//! ```text
//! const mat3 m = mat3(
//!     0.613191,  0.070207,  0.020619,    //  0.613191,  0.339512,  0.047366,
//!     0.339512,  0.916336,  0.109567,    //  0.070207,  0.916336,  0.013450,
//!     0.047366,  0.013450,  0.869607     //  0.020619,  0.109567,  0.869607
//! );
//!
//! ```
//!
//! - One text row per line, three values each, six decimals
//! - Non-negative values get a leading space so signs line up
//! - The last value of the block has no trailing comma
//! - The trailing comment shows the same row in the other layout, so a
//!   reader can check the emitted order against the math by eye
//!
//! # Layout
//!
//! Storage and composition always follow the `lux-math` convention
//! (row-major, column vectors); [`Layout`] only picks the text order.
//! GLSL's `mat3(...)` constructor consumes columns, so
//! [`Layout::ColumnMajor`] is the default and prints each matrix column
//! as one text row. [`Layout::RowMajor`] prints the mathematical rows.
//!
//! # Usage
//!
//! ```rust
//! use lux_math::Mat3;
//! use lux_shader::{format_mat3, write_mat3, Layout};
//!
//! let mut out = Vec::new();
//! write_mat3(&mut out, "m", &Mat3::IDENTITY, Layout::ColumnMajor)?;
//! assert!(out.starts_with(b"const mat3 m = mat3(\n"));
//!
//! // Identity is its own transpose
//! assert_eq!(
//!     format_mat3("m", &Mat3::IDENTITY, Layout::ColumnMajor),
//!     format_mat3("m", &Mat3::IDENTITY, Layout::RowMajor),
//! );
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # Concurrency
//!
//! Each call renders the whole declaration first and hands it to the sink
//! in a single `write_all`. No locking is done; callers sharing a sink
//! across threads must serialize access themselves.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::io;

use lux_math::Mat3;

/// Text order of the emitted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Each text row holds one matrix column (GLSL constructor order).
    #[default]
    ColumnMajor,
    /// Each text row holds one matrix row.
    RowMajor,
}

impl Layout {
    /// Picks [`Layout::RowMajor`] when `row_major` is set.
    #[inline]
    pub fn from_row_major(row_major: bool) -> Self {
        if row_major { Self::RowMajor } else { Self::ColumnMajor }
    }

    /// Comment line naming the layout.
    pub fn label(self) -> &'static str {
        match self {
            Self::ColumnMajor => "// Column written per row",
            Self::RowMajor => "// Row written per row",
        }
    }

    /// The other layout (used for the cross-check comment).
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::ColumnMajor => Self::RowMajor,
            Self::RowMajor => Self::ColumnMajor,
        }
    }

    /// Arranges `m` so that `result.m[r]` is text row `r`.
    #[inline]
    fn arrange(self, m: &Mat3) -> Mat3 {
        match self {
            Self::ColumnMajor => m.transpose(),
            Self::RowMajor => *m,
        }
    }
}

fn push_value(line: &mut String, v: f64) {
    if v >= 0.0 {
        line.push(' ');
    }
    line.push_str(&format!("{v:.6}"));
}

/// Renders the declaration to a `String`.
///
/// # Example
///
/// ```rust
/// use lux_math::Mat3;
/// use lux_shader::{format_mat3, Layout};
///
/// let text = format_mat3("scale", &Mat3::scale(2.0), Layout::RowMajor);
/// assert_eq!(
///     text,
///     "const mat3 scale = mat3(\n\
///     \x20   2.000000,  0.000000,  0.000000,    //  2.000000,  0.000000,  0.000000, \n\
///     \x20   0.000000,  2.000000,  0.000000,    //  0.000000,  2.000000,  0.000000, \n\
///     \x20   0.000000,  0.000000,  2.000000     //  0.000000,  0.000000,  2.000000\n\
///     );\n\n"
/// );
/// ```
pub fn format_mat3(name: &str, m: &Mat3, layout: Layout) -> String {
    let text = layout.arrange(m);
    let comment = layout.opposite().arrange(m);

    let mut out = format!("const mat3 {name} = mat3(\n");
    for r in 0..3 {
        let mut values = String::from("   ");
        let mut check = String::new();
        for c in 0..3 {
            let last = r == 2 && c == 2;
            push_value(&mut values, text.m[r][c]);
            push_value(&mut check, comment.m[r][c]);
            if last {
                values.push_str("  ");
            } else {
                values.push_str(", ");
                check.push_str(", ");
            }
        }
        out.push_str(&values);
        out.push_str("   // ");
        out.push_str(&check);
        out.push('\n');
    }
    out.push_str(");\n\n");
    out
}

/// Writes the declaration for `m` to `out`.
///
/// The matrix is only read; sink errors are returned unchanged.
pub fn write_mat3<W: io::Write + ?Sized>(
    out: &mut W,
    name: &str,
    m: &Mat3,
    layout: Layout,
) -> io::Result<()> {
    out.write_all(format_mat3(name, m, layout).as_bytes())
}

/// Like [`write_mat3`], preceded by a comment line naming the layout.
///
/// # Example
///
/// ```rust
/// use lux_math::Mat3;
/// use lux_shader::{write_mat3_labelled, Layout};
///
/// let mut out = Vec::new();
/// write_mat3_labelled(&mut out, "m", &Mat3::IDENTITY, Layout::RowMajor)?;
/// assert!(out.starts_with(b"// Row written per row\nconst mat3 m"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_mat3_labelled<W: io::Write + ?Sized>(
    out: &mut W,
    name: &str,
    m: &Mat3,
    layout: Layout,
) -> io::Result<()> {
    let mut text = String::from(layout.label());
    text.push('\n');
    text.push_str(&format_mat3(name, m, layout));
    out.write_all(text.as_bytes())
}
