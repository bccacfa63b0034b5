//! Kinematic model interface consumed by the chain renderer.

use crate::dual_quaternion::DualQuaternion;
use crate::error::{DqPlotError, Result};

/// A serial kinematic chain that can report poses along its joints.
///
/// Implementations compute forward kinematics; dqplot only reads the poses.
pub trait KinematicChain {
    /// Human-readable name used in logs and error messages.
    fn name(&self) -> &str {
        "kinematic chain"
    }

    /// Dimension of the configuration space.
    fn dim(&self) -> usize;

    /// Pose of the chain's reference frame.
    fn reference_frame(&self) -> DualQuaternion;

    /// Pose of joint `joint` (0-based) at configuration `q`.
    fn fkm_to(&self, q: &[f64], joint: usize) -> Result<DualQuaternion>;

    /// Pose of the end effector at configuration `q`.
    fn fkm(&self, q: &[f64]) -> Result<DualQuaternion>;
}

/// Fails with [`DqPlotError::Dimension`] unless `q` has one entry per degree of freedom.
pub fn ensure_joint_vector<M: KinematicChain + ?Sized>(model: &M, q: &[f64]) -> Result<()> {
    if q.len() == model.dim() {
        Ok(())
    } else {
        Err(DqPlotError::Dimension {
            expected: model.dim(),
            actual: q.len(),
        })
    }
}
