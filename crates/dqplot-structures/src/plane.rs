//! Planes drawn as a square patch plus the plane's local frame.

use dqplot_core::canvas::{Canvas, Style};
use dqplot_core::error::{ensure_positive, Result};
use dqplot_core::grid::{linspace, meshgrid, Grid, SurfaceGrid};
use dqplot_core::predicates::ensure_plane;
use dqplot_core::{cross, dot, map_grid, DualQuaternion, DQ_THRESHOLD};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::pose::{decompose_pose, PoseFrame};

/// A world-space rectangle lying in a plane, with the pose that placed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanePatch {
    /// Rotation aligning `k` with the normal, then translation along it.
    pub pose: DualQuaternion,
    /// Unit normal.
    pub normal: DVec3,
    /// Signed distance from the origin along the normal.
    pub offset: f64,
    /// Local frame; its z-axis is the normal.
    pub frame: PoseFrame,
    /// 2x2 corner grid of the patch.
    pub surface: SurfaceGrid,
}

/// Unit quaternion rotating `k` onto the pure unit quaternion `n`.
///
/// When `n` is `-k` the rotation axis is undefined and a half turn about `i`
/// is used.
#[must_use]
pub fn align_k_to(n: &DualQuaternion) -> DualQuaternion {
    let k = DualQuaternion::K;
    let cos_phi = dot(n, &k).scalar();
    let axis = cross(&k, n);
    let sin_phi = axis.vec3().length();

    if sin_phi < DQ_THRESHOLD {
        return if cos_phi > 0.0 {
            DualQuaternion::ONE
        } else {
            DualQuaternion::I
        };
    }

    let phi = sin_phi.atan2(cos_phi);
    let v = axis * (1.0 / sin_phi);
    (phi / 2.0).cos() + v * (phi / 2.0).sin()
}

/// Decomposes `pi_dq = n + ε·d` into its frame and a patch of
/// `extent_x × extent_y` centered on `d·n`.
pub fn decompose_plane(pi_dq: &DualQuaternion, extent_x: f64, extent_y: f64) -> Result<PlanePatch> {
    ensure_plane("pi_dq", pi_dq)?;
    ensure_positive("extent_x", extent_x)?;
    ensure_positive("extent_y", extent_y)?;

    let n = pi_dq.p();
    let d = pi_dq.d();
    let r = align_k_to(&n);

    // Rotate first, then move along the rotated z-axis by the offset.
    let x_dq = r * (DualQuaternion::ONE + DualQuaternion::E * 0.5 * d * DualQuaternion::K);
    let frame = decompose_pose(&x_dq)?;

    let xs = linspace(-extent_x / 2.0, extent_x / 2.0, 2);
    let ys = linspace(-extent_y / 2.0, extent_y / 2.0, 2);
    let (x_grid, y_grid) = meshgrid(&xs, &ys);
    let z_grid = Grid::zeros(x_grid.rows(), x_grid.cols());
    let surface = map_grid(&x_dq, &x_grid, &y_grid, &z_grid)?;

    Ok(PlanePatch {
        pose: x_dq,
        normal: n.vec3(),
        offset: d.scalar(),
        frame,
        surface,
    })
}

/// Draws the plane's frame (axes of `frame_length`) and its patch.
pub fn draw_plane(
    canvas: &mut dyn Canvas,
    pi_dq: &DualQuaternion,
    extent_x: f64,
    extent_y: f64,
    frame_length: f64,
    style: &Style,
) -> Result<PlanePatch> {
    ensure_positive("frame_length", frame_length)?;
    let patch = decompose_plane(pi_dq, extent_x, extent_y)?;
    log::debug!(
        "drawing plane with normal {} at offset {}",
        patch.normal,
        patch.offset
    );
    patch.frame.draw(canvas, frame_length, None);
    canvas.surface(&patch.surface, style);
    Ok(patch)
}
