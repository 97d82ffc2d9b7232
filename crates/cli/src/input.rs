//! Point file readers: JSON (`[[x, y], ..]` or `[{"x": .., "y": ..}, ..]`) and CSV (`x,y` columns).

use anyhow::{bail, Context, Result};
use hullscan::Point;
use polars::prelude::*;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum PointRow {
    Pair([i32; 2]),
    Named { x: i32, y: i32 },
}

impl From<PointRow> for Point {
    fn from(row: PointRow) -> Self {
        match row {
            PointRow::Pair(xy) => Point::from(xy),
            PointRow::Named { x, y } => Point::new(x, y),
        }
    }
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let points = match ext.as_deref() {
        Some("json") => read_json(path)?,
        Some("csv") => read_csv(path)?,
        _ => bail!(
            "unsupported point file {} (expected .json or .csv)",
            path.display()
        ),
    };
    tracing::info!(path = %path.display(), points = points.len(), "points loaded");
    Ok(points)
}

fn read_json(path: &Path) -> Result<Vec<Point>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let rows: Vec<PointRow> =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(rows.into_iter().map(Point::from).collect())
}

fn read_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([col("x"), col("y")])
        .collect()
        .with_context(|| format!("reading x,y columns of {}", path.display()))?;
    let xs = integer_column(&df, "x", path)?;
    let ys = integer_column(&df, "y", path)?;
    xs.into_iter()
        .zip(ys)
        .enumerate()
        .map(|(row, (x, y))| {
            Ok(Point::new(
                coordinate(path, row, "x", x)?,
                coordinate(path, row, "y", y)?,
            ))
        })
        .collect()
}

/// Values of an integer-typed column, widened to `i64`. Float or string columns are rejected.
fn integer_column(df: &DataFrame, name: &str, path: &Path) -> Result<Vec<Option<i64>>> {
    let column = df.column(name)?;
    if !column.dtype().is_integer() {
        bail!(
            "{} column {name}: expected integer coordinates, found {}",
            path.display(),
            column.dtype()
        );
    }
    Ok(column.cast(&DataType::Int64)?.i64()?.into_iter().collect())
}

fn coordinate(path: &Path, row: usize, axis: &str, value: Option<i64>) -> Result<i32> {
    let Some(v) = value else {
        bail!("{} row {}: missing {axis}", path.display(), row + 1);
    };
    i32::try_from(v).with_context(|| {
        format!(
            "{} row {}: {axis} = {v} is outside the i32 range",
            path.display(),
            row + 1
        )
    })
}
