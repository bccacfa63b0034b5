//! dqplot-rs: draw dual quaternions and serial manipulators.
//!
//! A unit dual quaternion can be drawn as a pose (an origin plus three axes),
//! a Plücker line or a plane. A kinematic chain is drawn as joint markers,
//! frames and links. Every primitive is computed completely before it is
//! handed to a [`Canvas`], so a failed validation leaves the canvas untouched.
//!
//! # Quick Start
//!
//! ```
//! use dqplot::*;
//!
//! fn main() -> Result<()> {
//!     let mut canvas = RecordingCanvas::new();
//!
//!     // 60 degrees about x, translated by 0.5j + 0.45k
//!     let r = DualQuaternion::from_rotation(DVec3::X, std::f64::consts::FRAC_PI_3);
//!     let x = DualQuaternion::from_pose(r, DVec3::new(0.0, 0.5, 0.45));
//!     plot_object(&mut canvas, &x, &PlotOptions::new())?;
//!
//!     // Line along z through (0.5, -0.3, 0)
//!     let l_dq = DualQuaternion::line(DVec3::Z, DVec3::new(0.5, -0.3, 0.0));
//!     plot_object(&mut canvas, &l_dq, &PlotOptions::line().with_scale(1.0))?;
//!
//!     // KUKA LWR4 at its home configuration
//!     let robot = SerialManipulatorDh::kuka_lw4();
//!     plot_object(&mut canvas, &robot, &PlotOptions::chain(vec![0.0; 7]))?;
//!
//!     println!("{}", canvas.to_json()?);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `dqplot-core` holds the algebra: [`DualQuaternion`], predicates, the
//!   [`adjoint`] transform and grid mapping, and the collaborator traits.
//! - `dqplot-structures` turns dual quaternions into geometry.
//! - This crate dispatches objects to the right decomposer ([`plot`],
//!   [`plot_object`]) and provides a [`RecordingCanvas`].

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod init;
mod plot;
mod recording;

pub use init::{init_logging, init_logging_with_filter};
pub use plot::{plot, plot_object, Drawing, Plottable};
pub use recording::{DrawCommand, RecordingCanvas};

// Re-export core types
pub use dqplot_core::{
    ad, adjoint, colors, cross, dot, ensure_joint_vector, is_line, is_plane, is_pure,
    is_pure_quaternion, is_quaternion, is_real, is_unit, linspace, map_grid,
    meshgrid, transform_point, Canvas, ChainStyle, CylinderParams, DqCategory, DqPlotError,
    DrawMode, DualQuaternion, Grid, KinematicChain, LineStyle, Marker, PlotOptions, Result,
    Style, SurfaceGrid, DQ_THRESHOLD,
};

// Re-export structures
pub use dqplot_structures::{
    align_k_to, decompose_cylinder, decompose_line, decompose_plane, decompose_pose,
    draw_line, draw_plane, draw_pose, draw_revolute_joint, draw_serial_manipulator,
    render_chain, ChainDrawing, DhParameters, JointDrawing, LineSegment, PlanePatch, PoseFrame,
    SerialManipulatorDh,
};

pub use glam::{DQuat, DVec3, Vec3};
