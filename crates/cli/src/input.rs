//! Point sets from CSV (`id,x,y` with header).

use anyhow::{bail, Context, Result};
use closest_pair::api::{Point, PointId};
use polars::prelude::*;
use std::path::Path;

/// Read all rows of an `id,x,y` CSV. Integer coordinates are accepted.
///
/// Ids and coordinates are not validated for uniqueness or finiteness.
pub fn read_points_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(1000))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");
    points_from_frame(&df)
}

pub fn points_from_frame(df: &DataFrame) -> Result<Vec<Point>> {
    let ids = column_as(df, "id", &DataType::Int64)?;
    let xs = column_as(df, "x", &DataType::Float64)?;
    let ys = column_as(df, "y", &DataType::Float64)?;
    let ids = ids.i64()?;
    let xs = xs.f64()?;
    let ys = ys.f64()?;

    let mut points = Vec::with_capacity(df.height());
    for (row, ((id, x), y)) in ids.into_iter().zip(xs).zip(ys).enumerate() {
        match (id, x, y) {
            (Some(id), Some(x), Some(y)) => points.push(Point::new(PointId(id), x, y)),
            _ => bail!("row {row}: id, x and y must all be present"),
        }
    }
    Ok(points)
}

fn column_as(df: &DataFrame, name: &str, dtype: &DataType) -> Result<Series> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column '{name}' (expected id,x,y)"))?;
    col.cast(dtype)
        .with_context(|| format!("column '{name}' is not numeric"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_points_with_integer_coordinates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "id,x,y\n0,0,0\n1,3,4\n2,1.5,1\n").unwrap();
        let pts = read_points_csv(&path).unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[1].id, PointId(1));
        assert_eq!((pts[1].x(), pts[1].y()), (3.0, 4.0));
        assert_eq!(pts[2].x(), 1.5);
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "id,x\n0,1\n").unwrap();
        let err = read_points_csv(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing column 'y'"));
    }

    #[test]
    fn null_cell_is_an_error() {
        let df = df!(
            "id" => &[Some(0i64), Some(1)],
            "x" => &[Some(0.0f64), None],
            "y" => &[Some(0.0f64), Some(1.0)]
        )
        .unwrap();
        let err = points_from_frame(&df).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }
}
