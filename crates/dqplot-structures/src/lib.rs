//! Primitive decomposers for dqplot-rs.
//!
//! Each module turns one kind of dual quaternion into drawable geometry:
//! - Poses (origin plus rotated axes)
//! - Lines (segment around the point closest to the origin)
//! - Planes (local frame plus a square patch)
//! - Cylinders (revolute-joint markers)
//! - Serial manipulators (markers, frames and links along a kinematic chain)

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod cylinder;
pub mod line;
pub mod plane;
pub mod pose;
pub mod serial_manipulator;

pub use cylinder::{decompose_cylinder, draw_revolute_joint};
pub use line::{decompose_line, draw_line, LineSegment};
pub use plane::{align_k_to, decompose_plane, draw_plane, PlanePatch};
pub use pose::{decompose_pose, draw_pose, PoseFrame};
pub use serial_manipulator::{
    draw_serial_manipulator, render_chain, ChainDrawing, DhParameters, JointDrawing,
    SerialManipulatorDh,
};
