//! Cylinders placed at a pose, used as revolute-joint markers.

use std::f64::consts::TAU;

use dqplot_core::canvas::{Canvas, Style};
use dqplot_core::error::Result;
use dqplot_core::grid::{linspace, meshgrid};
use dqplot_core::options::CylinderParams;
use dqplot_core::predicates::ensure_unit;
use dqplot_core::{map_grid, DualQuaternion, SurfaceGrid};

/// Builds the wall of a cylinder centered on `x` and aligned with its z-axis.
///
/// The grid has `axial_segments` rows spanning `[-height/2, height/2]` and
/// `angular_segments` columns spanning `[0, 2π]`, so the first and last
/// columns coincide and the wall is closed.
pub fn decompose_cylinder(x: &DualQuaternion, params: &CylinderParams) -> Result<SurfaceGrid> {
    ensure_unit("x", x)?;
    params.validate()?;

    let z = linspace(
        -params.height / 2.0,
        params.height / 2.0,
        params.axial_segments,
    );
    let theta = linspace(0.0, TAU, params.angular_segments);
    let (theta_grid, z_grid) = meshgrid(&theta, &z);
    let x_grid = theta_grid.map(|t| params.radius * t.cos());
    let y_grid = theta_grid.map(|t| params.radius * t.sin());

    map_grid(x, &x_grid, &y_grid, &z_grid)
}

/// Draws a joint marker cylinder at `x`.
pub fn draw_revolute_joint(
    canvas: &mut dyn Canvas,
    x: &DualQuaternion,
    params: &CylinderParams,
    style: &Style,
) -> Result<SurfaceGrid> {
    let surface = decompose_cylinder(x, params)?;
    canvas.surface(&surface, style);
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dqplot_core::error::DqPlotError;
    use glam::DVec3;
    use std::f64::consts::PI;

    #[test]
    fn test_shape_follows_sampling() {
        let params = CylinderParams {
            angular_segments: 12,
            axial_segments: 5,
            ..Default::default()
        };
        let surface = decompose_cylinder(&DualQuaternion::ONE, &params).unwrap();
        assert_eq!(surface.shape(), (5, 12));
    }

    #[test]
    fn test_points_sit_on_the_wall() {
        let params = CylinderParams::default();
        let surface = decompose_cylinder(&DualQuaternion::ONE, &params).unwrap();
        for p in surface.points() {
            assert!((p.truncate().length() - params.radius).abs() < 1e-12);
            assert!(p.z.abs() <= params.height / 2.0 + 1e-12);
        }
        // Seam is closed.
        let first = surface.point(3, 0).unwrap();
        let last = surface.point(3, params.angular_segments - 1).unwrap();
        assert!((first - last).length() < 1e-12);
    }

    #[test]
    fn test_cylinder_follows_pose() {
        // Axis turned onto world x, centered at (1, 2, 3).
        let center = DVec3::new(1.0, 2.0, 3.0);
        let x = DualQuaternion::from_pose(DualQuaternion::from_rotation(DVec3::Y, PI / 2.0), center);
        let params = CylinderParams::default();
        let surface = decompose_cylinder(&x, &params).unwrap();
        for p in surface.points() {
            let local = p - center;
            let radial = DVec3::new(0.0, local.y, local.z).length();
            assert!((radial - params.radius).abs() < 1e-9);
            assert!(local.x.abs() <= params.height / 2.0 + 1e-9);
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            decompose_cylinder(&DualQuaternion::ZERO, &CylinderParams::default()),
            Err(DqPlotError::Validation { .. })
        ));
        let params = CylinderParams {
            height: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            decompose_cylinder(&DualQuaternion::ONE, &params),
            Err(DqPlotError::InvalidParameter { name: "height", .. })
        ));
    }
}
