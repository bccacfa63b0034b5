//! Lines drawn from Plücker-coordinate dual quaternions.

use dqplot_core::canvas::{Canvas, Style};
use dqplot_core::error::{ensure_positive, Result};
use dqplot_core::predicates::ensure_line;
use dqplot_core::{cross, DualQuaternion};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A finite piece of a line, centered on the point closest to the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// Foot of the perpendicular from the origin onto the line.
    pub anchor: DVec3,
    /// Unit direction of the line.
    pub direction: DVec3,
    /// `anchor - length * direction`.
    pub start: DVec3,
    /// `anchor + length * direction`.
    pub end: DVec3,
}

/// Decomposes `l_dq = l + ε·m` into a segment reaching `length` on each side of
/// the anchor `l × m`.
pub fn decompose_line(l_dq: &DualQuaternion, length: f64) -> Result<LineSegment> {
    ensure_line("l_dq", l_dq)?;
    ensure_positive("length", length)?;

    let l = l_dq.p();
    let m = l_dq.d();
    // The projection of the origin onto the line.
    let anchor = cross(&l, &m).vec3();
    let direction = l.vec3();

    Ok(LineSegment {
        anchor,
        direction,
        start: anchor - length * direction,
        end: anchor + length * direction,
    })
}

/// Draws `l_dq` as a segment of half-length `length`.
pub fn draw_line(
    canvas: &mut dyn Canvas,
    l_dq: &DualQuaternion,
    length: f64,
    style: &Style,
) -> Result<LineSegment> {
    let segment = decompose_line(l_dq, length)?;
    log::debug!("drawing line through {} along {}", segment.anchor, segment.direction);
    canvas.segment(segment.start, segment.end, style);
    Ok(segment)
}
