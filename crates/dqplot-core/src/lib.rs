//! Core abstractions for dqplot-rs.
//!
//! This crate provides the algebra and geometry every plot is built from:
//! - [`DualQuaternion`] value type with the sharp and conjugate operators
//! - Classification predicates (unit, pure, line, plane) and precondition checks
//! - The [`adjoint`] transform and the grid mapper [`map_grid`]
//! - Fixed-shape [`Grid`]s for parametric surfaces
//! - The [`Canvas`] and [`KinematicChain`] collaborator traits
//! - Plot options and styles

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Grid sample counts are small
#![allow(clippy::cast_precision_loss)]

pub mod adjoint;
pub mod canvas;
pub mod dual_quaternion;
pub mod error;
pub mod grid;
pub mod kinematics;
pub mod options;
pub mod predicates;

pub use adjoint::{ad, adjoint, map_grid, transform_point};
pub use canvas::{colors, Canvas, LineStyle, Marker, Style};
pub use dual_quaternion::{cross, dot, DualQuaternion, DQ_THRESHOLD};
pub use error::{DqCategory, DqPlotError, Result};
pub use grid::{linspace, meshgrid, Grid, SurfaceGrid};
pub use kinematics::{ensure_joint_vector, KinematicChain};
pub use options::{ChainStyle, CylinderParams, DrawMode, PlotOptions};
pub use predicates::{
    is_line, is_plane, is_pure, is_pure_quaternion, is_quaternion, is_real, is_unit,
};

// Re-export glam types for convenience
pub use glam::{DQuat, DVec3, Vec3};
