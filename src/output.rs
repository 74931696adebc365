// src/output.rs
use crate::surface::PriceSurface;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Write a surface in long format, one row per grid node in row-major order
pub fn write_surface_to_csv(filename: &str, surface: &PriceSurface) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    write_surface(&mut file, surface)?;
    file.flush()
}

pub fn write_surface<W: Write>(out: &mut W, surface: &PriceSurface) -> io::Result<()> {
    writeln!(out, "strike,spot,call,put")?;
    let (rows, cols) = surface.shape();
    for i in 0..rows {
        for j in 0..cols {
            let (s, k, call, put) = surface.cell(i, j);
            writeln!(out, "{},{},{},{}", k, s, call, put)?;
        }
    }
    Ok(())
}

pub fn write_summary_to_csv(filename: &str, summary_data: &[(&str, &str)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}
