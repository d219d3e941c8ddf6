//! Summaries of exported grid CSVs (read back through polars).

use anyhow::{bail, Result};
use polars::prelude::*;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSummary {
    pub points: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Point count and bounding box of a headerless `x,y` CSV.
pub fn summarize(path: &Path) -> Result<GridSummary> {
    let df = LazyCsvReader::new(path)
        .with_has_header(false)
        .finish()?
        .collect()?;
    if df.width() != 2 {
        bail!(
            "{}: expected 2 columns (x,y), found {}",
            path.display(),
            df.width()
        );
    }
    let cols = df.get_columns();
    let x = cols[0].cast(&DataType::Float64)?;
    let y = cols[1].cast(&DataType::Float64)?;
    let (x, y) = (x.f64()?, y.f64()?);
    match (x.min(), x.max(), y.min(), y.max()) {
        (Some(x_min), Some(x_max), Some(y_min), Some(y_max)) => Ok(GridSummary {
            points: df.height(),
            x_min,
            x_max,
            y_min,
            y_max,
        }),
        _ => bail!("{}: no grid points", path.display()),
    }
}
