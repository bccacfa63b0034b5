//! Fixed-shape 2D grids for parametric surfaces.

use serde::{Deserialize, Serialize};

use crate::error::{DqPlotError, Result};

/// A row-major `rows × cols` grid of scalars.
///
/// The shape is fixed at construction and validated against the data length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Grid {
    /// Creates a grid from row-major values.
    pub fn new(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self> {
        if values.len() != rows * cols {
            return Err(DqPlotError::InvalidParameter {
                name: "values",
                reason: format!(
                    "expected {} values for a {rows}x{cols} grid, got {}",
                    rows * cols,
                    values.len()
                ),
            });
        }
        Ok(Self { rows, cols, values })
    }

    /// Creates a grid of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    /// Creates a grid by evaluating `f(row, col)` at every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let values = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        Self { rows, cols, values }
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the value at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.rows && col < self.cols).then(|| self.values[row * self.cols + col])
    }

    /// Row-major values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Applies `f` to every value, keeping the shape.
    #[must_use]
    pub fn map(&self, f: impl FnMut(f64) -> f64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            values: self.values.iter().copied().map(f).collect(),
        }
    }

    /// Fails with [`DqPlotError::Shape`] unless `other` has the same shape.
    pub fn ensure_same_shape(&self, other: &Grid) -> Result<()> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(DqPlotError::Shape {
                expected: self.shape(),
                actual: other.shape(),
            })
        }
    }
}

/// `n` evenly spaced samples over `[start, end]`, both ends included.
///
/// A single sample yields `[start]`; zero samples yield an empty vector.
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Coordinate grids of shape `(ys.len(), xs.len())` with `X[i, j] = xs[j]`
/// and `Y[i, j] = ys[i]`.
#[must_use]
pub fn meshgrid(xs: &[f64], ys: &[f64]) -> (Grid, Grid) {
    let x = Grid::from_fn(ys.len(), xs.len(), |_, j| xs[j]);
    let y = Grid::from_fn(ys.len(), xs.len(), |i, _| ys[i]);
    (x, y)
}

/// Three same-shaped grids holding the x, y and z coordinates of a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGrid {
    pub x: Grid,
    pub y: Grid,
    pub z: Grid,
}

impl SurfaceGrid {
    /// Bundles three grids, failing with [`DqPlotError::Shape`] on a mismatch.
    pub fn new(x: Grid, y: Grid, z: Grid) -> Result<Self> {
        x.ensure_same_shape(&y)?;
        x.ensure_same_shape(&z)?;
        Ok(Self { x, y, z })
    }

    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// Returns the point stored at `(row, col)`.
    #[must_use]
    pub fn point(&self, row: usize, col: usize) -> Option<glam::DVec3> {
        Some(glam::DVec3::new(
            self.x.get(row, col)?,
            self.y.get(row, col)?,
            self.z.get(row, col)?,
        ))
    }

    /// Iterates over every point in row-major order.
    pub fn points(&self) -> impl Iterator<Item = glam::DVec3> + '_ {
        self.x
            .values()
            .iter()
            .zip(self.y.values())
            .zip(self.z.values())
            .map(|((x, y), z)| glam::DVec3::new(*x, *y, *z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_length() {
        assert!(Grid::new(2, 3, vec![0.0; 6]).is_ok());
        assert!(matches!(
            Grid::new(2, 3, vec![0.0; 5]),
            Err(DqPlotError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_get() {
        let g = Grid::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(g.get(1, 0), Some(3.0));
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.get(0, 2), None);
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(-1.0, 1.0, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(linspace(3.0, 4.0, 1), vec![3.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        let theta = linspace(0.0, std::f64::consts::TAU, 20);
        assert_eq!(theta[19], std::f64::consts::TAU);
    }

    #[test]
    fn test_meshgrid_layout() {
        let (x, y) = meshgrid(&[1.0, 2.0, 3.0], &[10.0, 20.0]);
        assert_eq!(x.shape(), (2, 3));
        assert_eq!(y.shape(), (2, 3));
        assert_eq!(x.values(), &[1.0, 2.0, 3.0, 1.0, 2.0, 3.0]);
        assert_eq!(y.values(), &[10.0, 10.0, 10.0, 20.0, 20.0, 20.0]);
    }

    #[test]
    fn test_surface_grid_rejects_mismatched_shapes() {
        let err = SurfaceGrid::new(Grid::zeros(2, 2), Grid::zeros(2, 2), Grid::zeros(3, 2));
        assert!(matches!(
            err,
            Err(DqPlotError::Shape {
                expected: (2, 2),
                actual: (3, 2)
            })
        ));
    }

    #[test]
    fn test_surface_points() {
        let (x, y) = meshgrid(&[0.0, 1.0], &[5.0]);
        let z = x.map(|v| v * 2.0);
        let surface = SurfaceGrid::new(x, y, z).unwrap();
        let points: Vec<_> = surface.points().collect();
        assert_eq!(points, vec![glam::DVec3::new(0.0, 5.0, 0.0), glam::DVec3::new(1.0, 5.0, 2.0)]);
        assert_eq!(surface.point(0, 1), Some(glam::DVec3::new(1.0, 5.0, 2.0)));
    }
}
