//! Revolute serial manipulators described by standard Denavit–Hartenberg parameters.

use std::f64::consts::FRAC_PI_2;

use dqplot_core::error::{DqPlotError, Result};
use dqplot_core::kinematics::{ensure_joint_vector, KinematicChain};
use dqplot_core::predicates::ensure_unit;
use dqplot_core::DualQuaternion;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// One link: `Rz(theta + q) · Tz(d) · Tx(a) · Rx(alpha)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DhParameters {
    pub theta: f64,
    pub d: f64,
    pub a: f64,
    pub alpha: f64,
}

impl DhParameters {
    /// Pose of this link's distal frame relative to its proximal frame at joint value `q`.
    #[must_use]
    pub fn pose(&self, q: f64) -> DualQuaternion {
        DualQuaternion::from_rotation(DVec3::Z, self.theta + q)
            * DualQuaternion::from_translation(DVec3::new(self.a, 0.0, self.d))
            * DualQuaternion::from_rotation(DVec3::X, self.alpha)
    }
}

/// A chain of revolute joints with a reference frame and an end-effector offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerialManipulatorDh {
    name: String,
    links: Vec<DhParameters>,
    reference_frame: DualQuaternion,
    effector: DualQuaternion,
}

impl SerialManipulatorDh {
    /// Creates a manipulator with identity reference frame and effector.
    pub fn new(name: impl Into<String>, links: Vec<DhParameters>) -> Self {
        Self {
            name: name.into(),
            links,
            reference_frame: DualQuaternion::ONE,
            effector: DualQuaternion::ONE,
        }
    }

    /// Creates a manipulator from the four DH columns, which must have equal lengths.
    pub fn from_columns(
        name: impl Into<String>,
        theta: &[f64],
        d: &[f64],
        a: &[f64],
        alpha: &[f64],
    ) -> Result<Self> {
        let n = theta.len();
        if d.len() != n || a.len() != n || alpha.len() != n {
            return Err(DqPlotError::InvalidParameter {
                name: "dh",
                reason: format!(
                    "columns must have equal lengths, got theta={n}, d={}, a={}, alpha={}",
                    d.len(),
                    a.len(),
                    alpha.len()
                ),
            });
        }
        let links = (0..n)
            .map(|i| DhParameters {
                theta: theta[i],
                d: d[i],
                a: a[i],
                alpha: alpha[i],
            })
            .collect();
        Ok(Self::new(name, links))
    }

    /// KUKA LWR4 arm: seven revolute joints, 7 cm flange.
    #[must_use]
    pub fn kuka_lw4() -> Self {
        let pi2 = FRAC_PI_2;
        let d = [0.310, 0.0, 0.4, 0.0, 0.39, 0.0, 0.0];
        let alpha = [pi2, -pi2, -pi2, pi2, pi2, -pi2, 0.0];
        let links = d
            .iter()
            .zip(alpha)
            .map(|(&d, alpha)| DhParameters {
                theta: 0.0,
                d,
                a: 0.0,
                alpha,
            })
            .collect();
        Self {
            effector: DualQuaternion::from_translation(DVec3::new(0.0, 0.0, 0.07)),
            ..Self::new("KUKA LWR4", links)
        }
    }

    /// Sets the reference frame, which must be a unit dual quaternion.
    pub fn with_reference_frame(mut self, reference_frame: DualQuaternion) -> Result<Self> {
        ensure_unit("reference_frame", &reference_frame)?;
        self.reference_frame = reference_frame;
        Ok(self)
    }

    /// Sets the end-effector offset, which must be a unit dual quaternion.
    pub fn with_effector(mut self, effector: DualQuaternion) -> Result<Self> {
        ensure_unit("effector", &effector)?;
        self.effector = effector;
        Ok(self)
    }

    #[must_use]
    pub fn links(&self) -> &[DhParameters] {
        &self.links
    }

    #[must_use]
    pub fn effector(&self) -> DualQuaternion {
        self.effector
    }
}

impl KinematicChain for SerialManipulatorDh {
    fn name(&self) -> &str {
        &self.name
    }

    fn dim(&self) -> usize {
        self.links.len()
    }

    fn reference_frame(&self) -> DualQuaternion {
        self.reference_frame
    }

    /// Reference frame composed with links `0..=joint`; the effector is
    /// appended when `joint` is the last one.
    fn fkm_to(&self, q: &[f64], joint: usize) -> Result<DualQuaternion> {
        ensure_joint_vector(self, q)?;
        if joint >= self.dim() {
            return Err(DqPlotError::JointIndexOutOfRange {
                index: joint,
                dim: self.dim(),
            });
        }

        let x = self.links[..=joint]
            .iter()
            .zip(q)
            .fold(self.reference_frame, |x, (link, &qi)| x * link.pose(qi));
        Ok(if joint + 1 == self.dim() {
            x * self.effector
        } else {
            x
        })
    }

    fn fkm(&self, q: &[f64]) -> Result<DualQuaternion> {
        match self.dim() {
            0 => {
                ensure_joint_vector(self, q)?;
                Ok(self.reference_frame * self.effector)
            }
            n => self.fkm_to(q, n - 1),
        }
    }
}
