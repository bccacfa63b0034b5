//! Serial manipulator drawings: joint markers, frames and connecting links.

mod dh;

use dqplot_core::canvas::Canvas;
use dqplot_core::error::Result;
use dqplot_core::kinematics::{ensure_joint_vector, KinematicChain};
use dqplot_core::options::ChainStyle;
use dqplot_core::{DualQuaternion, SurfaceGrid};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::cylinder::decompose_cylinder;
use crate::pose::{decompose_pose, PoseFrame};

pub use dh::{DhParameters, SerialManipulatorDh};

/// Geometry drawn at one joint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointDrawing {
    pub pose: DualQuaternion,
    pub frame: PoseFrame,
    pub marker: SurfaceGrid,
}

/// A "stick figure with axes" view of a kinematic chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainDrawing {
    pub reference: PoseFrame,
    pub joints: Vec<JointDrawing>,
    pub end_effector: PoseFrame,
    /// Links in chain order: reference to first joint, joint to joint, last
    /// joint to end effector.
    pub segments: Vec<[DVec3; 2]>,
}

impl ChainDrawing {
    /// Joint origins in chain order.
    pub fn vertices(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.joints.iter().map(|joint| joint.frame.origin)
    }

    /// Number of frames: one per joint plus the reference and end effector.
    #[must_use]
    pub fn num_frames(&self) -> usize {
        self.joints.len() + 2
    }

    /// Emits every joint (marker, then frame), then the links and the
    /// reference and end-effector frames.
    pub fn draw(&self, canvas: &mut dyn Canvas, style: &ChainStyle) {
        for joint in &self.joints {
            canvas.surface(&joint.marker, &style.joint_style);
            joint.frame.draw(canvas, style.frame_length, None);
        }
        for [start, end] in &self.segments {
            canvas.segment(*start, *end, &style.link);
        }
        self.reference.draw(canvas, style.frame_length, None);
        self.end_effector.draw(canvas, style.frame_length, None);
    }
}

/// Computes the drawing of `model` at configuration `q`.
///
/// Fails before any pose is evaluated when `q` does not match the model's
/// dimension.
pub fn render_chain<M: KinematicChain + ?Sized>(
    model: &M,
    q: &[f64],
    style: &ChainStyle,
) -> Result<ChainDrawing> {
    ensure_joint_vector(model, q)?;
    style.joint_marker.validate()?;
    log::debug!("rendering {} with {} joints", model.name(), model.dim());

    let joints = (0..model.dim())
        .map(|dof| -> Result<JointDrawing> {
            let pose = model.fkm_to(q, dof)?;
            log::trace!("joint {dof} at {pose}");
            Ok(JointDrawing {
                pose,
                frame: decompose_pose(&pose)?,
                marker: decompose_cylinder(&pose, &style.joint_marker)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let reference = decompose_pose(&model.reference_frame())?;
    let end_effector = decompose_pose(&model.fkm(q)?)?;

    let mut path = Vec::with_capacity(joints.len() + 2);
    path.push(reference.origin);
    path.extend(joints.iter().map(|joint| joint.frame.origin));
    path.push(end_effector.origin);
    let segments = path.windows(2).map(|w| [w[0], w[1]]).collect();

    Ok(ChainDrawing {
        reference,
        joints,
        end_effector,
        segments,
    })
}

/// Draws `model` at configuration `q`.
pub fn draw_serial_manipulator<M: KinematicChain + ?Sized>(
    canvas: &mut dyn Canvas,
    model: &M,
    q: &[f64],
    style: &ChainStyle,
) -> Result<ChainDrawing> {
    let drawing = render_chain(model, q, style)?;
    drawing.draw(canvas, style);
    Ok(drawing)
}
