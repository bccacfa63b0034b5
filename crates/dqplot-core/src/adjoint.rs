//! Adjoint action of unit dual quaternions on points, directions and grids.

use glam::DVec3;

use crate::dual_quaternion::DualQuaternion;
use crate::error::Result;
use crate::grid::{Grid, SurfaceGrid};
use crate::predicates::{ensure_pure_quaternion, ensure_unit};

/// Moves the point `t` through the rigid motion `x`.
///
/// Lifts `t` to `1 + ε·t`, conjugates it by `x` as
/// `x · (1 + ε·t) · conj(sharp(x))` and takes half of the translation of the
/// result, which is the rotated and translated point.
///
/// `x` must be a unit dual quaternion and `t` a pure quaternion.
pub fn adjoint(x: &DualQuaternion, t: &DualQuaternion) -> Result<DualQuaternion> {
    ensure_unit("x", x)?;
    ensure_pure_quaternion("t", t)?;
    Ok(adjoint_unchecked(x, t))
}

fn adjoint_unchecked(x: &DualQuaternion, t: &DualQuaternion) -> DualQuaternion {
    let t_dq = DualQuaternion::ONE + DualQuaternion::E * *t;
    (*x * t_dq * x.sharp().conj()).translation() * 0.5
}

/// [`adjoint`] on a plain 3-vector.
pub fn transform_point(x: &DualQuaternion, point: DVec3) -> Result<DVec3> {
    adjoint(x, &DualQuaternion::from_vec3(point)).map(|p| p.vec3())
}

/// Group adjoint `x · v · conj(x)`.
///
/// For a pure quaternion `v` the primary part of the result is `v` rotated by
/// `x`, without the translation. This is how frame axes are carried.
pub fn ad(x: &DualQuaternion, v: &DualQuaternion) -> Result<DualQuaternion> {
    ensure_unit("x", x)?;
    Ok(*x * *v * x.conj())
}

/// Applies [`adjoint`] to every cell of a surface given as three coordinate grids.
///
/// Fails with a shape error unless all grids share a shape, and with a
/// validation error unless `x` is unit. The output has the input's shape.
pub fn map_grid(
    x: &DualQuaternion,
    x_grid: &Grid,
    y_grid: &Grid,
    z_grid: &Grid,
) -> Result<SurfaceGrid> {
    x_grid.ensure_same_shape(y_grid)?;
    x_grid.ensure_same_shape(z_grid)?;
    ensure_unit("x", x)?;

    let (rows, cols) = x_grid.shape();
    let mut xs = Vec::with_capacity(rows * cols);
    let mut ys = Vec::with_capacity(rows * cols);
    let mut zs = Vec::with_capacity(rows * cols);

    let cells = x_grid
        .values()
        .iter()
        .zip(y_grid.values())
        .zip(z_grid.values());
    for ((&px, &py), &pz) in cells {
        let p = DualQuaternion::from_vec3(DVec3::new(px, py, pz));
        let moved = adjoint_unchecked(x, &p).vec3();
        xs.push(moved.x);
        ys.push(moved.y);
        zs.push(moved.z);
    }

    log::trace!("mapped {rows}x{cols} grid through {x}");
    SurfaceGrid::new(
        Grid::new(rows, cols, xs)?,
        Grid::new(rows, cols, ys)?,
        Grid::new(rows, cols, zs)?,
    )
}
