//! Dispatch from plottable objects to the primitive decomposers.

use std::any::{type_name, Any};
use std::fmt;

use dqplot_core::canvas::{Canvas, Style};
use dqplot_core::{DqPlotError, DrawMode, DualQuaternion, KinematicChain, PlotOptions, Result};
use serde::Serialize;

use dqplot_structures::{
    draw_line, draw_plane, draw_pose, draw_serial_manipulator, ChainDrawing, LineSegment,
    PlanePatch, PoseFrame, SerialManipulatorDh,
};

/// Opacity of plane patches.
const PLANE_ALPHA: f32 = 0.8;

/// Everything [`plot`] knows how to draw.
#[derive(Clone, Copy)]
pub enum Plottable<'a> {
    /// A rigid-body pose; must be a unit dual quaternion.
    Pose(DualQuaternion),
    /// A Plücker line; must be unit and pure.
    Line(DualQuaternion),
    /// A plane; must be unit with a pure primary part and a real dual part.
    Plane(DualQuaternion),
    /// A kinematic chain at configuration `q`.
    Chain {
        model: &'a dyn KinematicChain,
        q: &'a [f64],
    },
}

impl<'a> Plottable<'a> {
    /// Interprets `dq` according to `mode`.
    pub fn from_dq(dq: DualQuaternion, mode: DrawMode) -> Self {
        match mode {
            DrawMode::Pose => Plottable::Pose(dq),
            DrawMode::Line => Plottable::Line(dq),
            DrawMode::Plane => Plottable::Plane(dq),
        }
    }

    /// Wraps any kinematic chain, including ones defined outside this crate.
    pub fn chain(model: &'a dyn KinematicChain, q: &'a [f64]) -> Self {
        Plottable::Chain { model, q }
    }

    /// Routes an arbitrary object to the matching variant.
    ///
    /// Dual quaternions follow `options.mode`. A [`SerialManipulatorDh`] needs
    /// `options.q`. Any other type fails with [`DqPlotError::UnsupportedType`].
    pub fn classify<T: Any>(obj: &'a T, options: &'a PlotOptions) -> Result<Self> {
        let any: &dyn Any = obj;

        if let Some(dq) = any.downcast_ref::<DualQuaternion>() {
            return Ok(Self::from_dq(*dq, options.mode));
        }

        if let Some(robot) = any.downcast_ref::<SerialManipulatorDh>() {
            return match options.q.as_deref() {
                Some(q) => Ok(Plottable::Chain { model: robot, q }),
                None => Err(DqPlotError::UnsupportedType(format!(
                    "{} without a joint configuration",
                    robot.name()
                ))),
            };
        }

        Err(DqPlotError::UnsupportedType(type_name::<T>().to_string()))
    }

    /// Short name of the variant, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Plottable::Pose(_) => "pose",
            Plottable::Line(_) => "line",
            Plottable::Plane(_) => "plane",
            Plottable::Chain { .. } => "chain",
        }
    }
}

impl fmt::Debug for Plottable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plottable::Pose(dq) => f.debug_tuple("Pose").field(dq).finish(),
            Plottable::Line(dq) => f.debug_tuple("Line").field(dq).finish(),
            Plottable::Plane(dq) => f.debug_tuple("Plane").field(dq).finish(),
            Plottable::Chain { model, q } => f
                .debug_struct("Chain")
                .field("model", &model.name())
                .field("q", q)
                .finish(),
        }
    }
}

/// Geometry produced by [`plot`], one variant per [`Plottable`] variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Drawing {
    Pose(PoseFrame),
    Line(LineSegment),
    Plane(PlanePatch),
    Chain(ChainDrawing),
}

impl Drawing {
    pub fn as_pose(&self) -> Option<&PoseFrame> {
        match self {
            Drawing::Pose(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&LineSegment> {
        match self {
            Drawing::Line(segment) => Some(segment),
            _ => None,
        }
    }

    pub fn as_plane(&self) -> Option<&PlanePatch> {
        match self {
            Drawing::Plane(patch) => Some(patch),
            _ => None,
        }
    }

    pub fn as_chain(&self) -> Option<&ChainDrawing> {
        match self {
            Drawing::Chain(chain) => Some(chain),
            _ => None,
        }
    }
}

/// Draws `item` onto `canvas`.
///
/// Lines are drawn with half-length `options.scale` in the style given by
/// `options.linespec` (or `options.color`). Planes are a square patch of side
/// `options.scale` with frame axes of `options.frame_length`. Poses get axes of
/// length `options.scale`. Nothing reaches the canvas when validation fails.
pub fn plot(canvas: &mut dyn Canvas, item: Plottable<'_>, options: &PlotOptions) -> Result<Drawing> {
    log::debug!("plotting {}", item.kind());

    match item {
        Plottable::Pose(x) => {
            draw_pose(canvas, &x, options.scale, options.name.as_deref()).map(Drawing::Pose)
        }
        Plottable::Line(l_dq) => {
            let style = options.line_style()?;
            draw_line(canvas, &l_dq, options.scale, &style).map(Drawing::Line)
        }
        Plottable::Plane(pi_dq) => {
            let style = Style::new(options.color).with_alpha(PLANE_ALPHA);
            draw_plane(
                canvas,
                &pi_dq,
                options.scale,
                options.scale,
                options.frame_length,
                &style,
            )
            .map(Drawing::Plane)
        }
        Plottable::Chain { model, q } => {
            draw_serial_manipulator(canvas, model, q, &options.chain).map(Drawing::Chain)
        }
    }
}

/// Classifies `obj` and draws it; see [`Plottable::classify`] and [`plot`].
pub fn plot_object<T: Any>(
    canvas: &mut dyn Canvas,
    obj: &T,
    options: &PlotOptions,
) -> Result<Drawing> {
    let item = Plottable::classify(obj, options)?;
    plot(canvas, item, options)
}
