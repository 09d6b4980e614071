//! VTK ASCII export of sampled fields.
//!
//! Writes legacy-format `POLYDATA` with one vertex per sample and the field
//! attached as point vectors, which ParaView can render with a glyph filter.

use std::io::{self, Write};

use log::trace;

use crate::sampling::FieldSample;

/// Writes the VTK ASCII file header.
pub fn write_vtk_header<W: Write>(mut writer: W, title: &str) -> io::Result<()> {
    writeln!(writer, "# vtk DataFile Version 3.0")?;
    // The title line is limited to one line of text.
    writeln!(writer, "{}", title.lines().next().unwrap_or_default())?;
    writeln!(writer, "ASCII")?;
    Ok(())
}

/// Writes `samples` as a complete VTK polydata file.
pub fn write_vtk_vector_field<W: Write>(mut writer: W, title: &str, samples: &[FieldSample]) -> io::Result<()> {
    let n = samples.len();
    write_vtk_header(&mut writer, title)?;
    writeln!(writer, "DATASET POLYDATA")?;

    writeln!(writer, "POINTS {n} double")?;
    for s in samples {
        writeln!(writer, "{} {} {}", s.point.x, s.point.y, s.point.z)?;
    }

    writeln!(writer, "VERTICES {n} {}", 2 * n)?;
    for i in 0..n {
        writeln!(writer, "1 {i}")?;
    }

    writeln!(writer, "POINT_DATA {n}")?;
    writeln!(writer, "VECTORS field double")?;
    for s in samples {
        writeln!(writer, "{} {} {}", s.vector.x, s.vector.y, s.vector.z)?;
    }
    trace!("wrote {n} sample(s) to VTK");
    Ok(())
}
