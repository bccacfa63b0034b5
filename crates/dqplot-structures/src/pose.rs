//! Reference frames drawn from unit dual quaternions.

use dqplot_core::canvas::{colors, Canvas, LineStyle, Marker, Style};
use dqplot_core::error::{ensure_positive, Result};
use dqplot_core::predicates::ensure_unit;
use dqplot_core::{ad, DualQuaternion};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Origin and rotated unit axes of a pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    pub origin: DVec3,
    pub x_axis: DVec3,
    pub y_axis: DVec3,
    pub z_axis: DVec3,
}

impl PoseFrame {
    /// The x, y and z axes in order.
    #[must_use]
    pub fn axes(&self) -> [DVec3; 3] {
        [self.x_axis, self.y_axis, self.z_axis]
    }

    /// Emits an origin marker and three axis arrows of `length` (red, green, blue),
    /// plus a label at the origin when `name` is given.
    pub fn draw(&self, canvas: &mut dyn Canvas, length: f64, name: Option<&str>) {
        let origin_style = Style::new(colors::BLACK)
            .with_marker(Marker::Cross)
            .with_line_style(LineStyle::None);
        canvas.point(self.origin, &origin_style);

        for (axis, color) in self
            .axes()
            .into_iter()
            .zip([colors::RED, colors::GREEN, colors::BLUE])
        {
            canvas.quiver(self.origin, axis, length, &Style::new(color));
        }

        if let Some(name) = name {
            canvas.label(self.origin, name, &Style::new(colors::BLACK));
        }
    }
}

/// Splits the unit dual quaternion `x` into its translation and rotated axes.
pub fn decompose_pose(x: &DualQuaternion) -> Result<PoseFrame> {
    ensure_unit("x", x)?;

    let axis = |unit: &DualQuaternion| ad(x, unit).map(|v| v.vec3());
    Ok(PoseFrame {
        origin: x.translation().vec3(),
        x_axis: axis(&DualQuaternion::I)?,
        y_axis: axis(&DualQuaternion::J)?,
        z_axis: axis(&DualQuaternion::K)?,
    })
}

/// Draws the frame of `x` with axes of `length`.
pub fn draw_pose(
    canvas: &mut dyn Canvas,
    x: &DualQuaternion,
    length: f64,
    name: Option<&str>,
) -> Result<PoseFrame> {
    ensure_positive("length", length)?;
    let frame = decompose_pose(x)?;
    log::debug!("drawing pose at {}", frame.origin);
    frame.draw(canvas, length, name);
    Ok(frame)
}
