//! CSV export of generated grids.
//!
//! Format: one `x,y` line per point, no header, all `i` for `j = 0` first, then
//! `j = 1`, and so on. Floats use Rust's shortest round-trip formatting, so
//! `read_csv` recovers the in-memory values exactly.

use std::fs::{self, File};
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use crate::domain::{Domain, Grid};
use crate::error::DomainError;

/// Default output name of the reference run.
pub const DEFAULT_FILE: &str = "grid.csv";

impl Grid {
    /// Write every point as `x,y` in storage order.
    pub fn write_csv<W: Write>(&self, mut w: W) -> Result<(), DomainError> {
        for (x, y) in self.x.iter().zip(self.y.iter()) {
            writeln!(w, "{x},{y}")?;
        }
        w.flush()?;
        Ok(())
    }
}

impl Domain<'_> {
    /// Export the current grid to `path`, creating parent directories as needed.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<(), DomainError> {
        let grid = self.grid().ok_or(DomainError::NoGrid)?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        grid.write_csv(BufWriter::new(File::create(path)?))?;
        tracing::info!(path = %path.display(), points = grid.len(), "exported grid");
        Ok(())
    }

    /// Export the current grid into any writer.
    pub fn export_to_writer<W: Write>(&self, w: W) -> Result<(), DomainError> {
        self.grid().ok_or(DomainError::NoGrid)?.write_csv(w)
    }
}

/// Parse exported CSV text back into an `nx × ny` grid.
pub fn read_csv<R: BufRead>(reader: R, nx: usize, ny: usize) -> Result<Grid, DomainError> {
    if nx == 0 || ny == 0 {
        return Err(DomainError::InvalidGridSize { nx, ny });
    }
    let expected = (nx + 1) * (ny + 1);
    let mut grid = Grid {
        nx,
        ny,
        x: Vec::with_capacity(expected),
        y: Vec::with_capacity(expected),
    };
    for (k, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lineno = k + 1;
        let (xs, ys) = line
            .split_once(',')
            .ok_or_else(|| DomainError::parse(lineno, "expected `x,y`"))?;
        let x: f64 = xs
            .trim()
            .parse()
            .map_err(|e| DomainError::parse(lineno, format!("bad x {xs:?}: {e}")))?;
        let y: f64 = ys
            .trim()
            .parse()
            .map_err(|e| DomainError::parse(lineno, format!("bad y {ys:?}: {e}")))?;
        grid.x.push(x);
        grid.y.push(y);
    }
    if grid.x.len() != expected {
        return Err(DomainError::parse(
            0,
            format!("expected {expected} points for {nx}x{ny}, found {}", grid.x.len()),
        ));
    }
    Ok(grid)
}
