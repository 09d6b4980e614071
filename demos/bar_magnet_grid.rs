use std::io::{self, BufWriter};

use em_fields::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Two magnets facing each other, north to north.
    let mut left = BarMagnet::new(R3::new(-1.0, 0.0, 0.0), R3::new(-3.0, 0.0, 0.0), 2.0, 0.5)?;
    let right = BarMagnet::new(R3::new(1.0, 0.0, 0.0), R3::new(3.0, 0.0, 0.0), 2.0, 0.5)?;
    left.shift(R3::new(0.0, 0.5, 0.0));

    let field = BarMagneticField::new(&[left, right]);
    let grid = SamplingGrid::new((-5.0, 5.0), (-3.0, 3.0), 0.5)?;
    let samples = sample_grid(&field, &grid);

    let stdout = io::stdout();
    write_vtk_vector_field(BufWriter::new(stdout.lock()), "bar magnets", &samples)?;
    Ok(())
}
