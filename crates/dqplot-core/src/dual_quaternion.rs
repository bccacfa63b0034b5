//! Dual quaternion value type.
//!
//! A dual quaternion `h = P + ε·D` pairs a primary quaternion `P` with a dual
//! quaternion `D`, where `ε² = 0`. Unit dual quaternions encode rigid motions,
//! pure ones encode points and Plücker lines, and `n + ε·d` encodes planes.
//!
//! Both parts are stored as [`glam::DQuat`]. Components are exposed in
//! `(w, x, y, z)` order through [`DualQuaternion::q`].

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Tolerance used by every classification and comparison in the crate.
pub const DQ_THRESHOLD: f64 = 1e-12;

const QUAT_ZERO: DQuat = DQuat::from_xyzw(0.0, 0.0, 0.0, 0.0);

/// An immutable dual quaternion `P + ε·D`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualQuaternion {
    primary: DQuat,
    dual: DQuat,
}

impl Default for DualQuaternion {
    fn default() -> Self {
        Self::ONE
    }
}

impl DualQuaternion {
    /// The zero dual quaternion.
    pub const ZERO: Self = Self::new(QUAT_ZERO, QUAT_ZERO);
    /// The multiplicative identity.
    pub const ONE: Self = Self::from_scalar(1.0);
    /// Imaginary unit `i`.
    pub const I: Self = Self::new(DQuat::from_xyzw(1.0, 0.0, 0.0, 0.0), QUAT_ZERO);
    /// Imaginary unit `j`.
    pub const J: Self = Self::new(DQuat::from_xyzw(0.0, 1.0, 0.0, 0.0), QUAT_ZERO);
    /// Imaginary unit `k`.
    pub const K: Self = Self::new(DQuat::from_xyzw(0.0, 0.0, 1.0, 0.0), QUAT_ZERO);
    /// Dual unit `ε`.
    pub const E: Self = Self::new(QUAT_ZERO, DQuat::from_xyzw(0.0, 0.0, 0.0, 1.0));

    /// Creates a dual quaternion from its primary and dual quaternions.
    #[must_use]
    pub const fn new(primary: DQuat, dual: DQuat) -> Self {
        Self { primary, dual }
    }

    /// Creates a dual quaternion from `[w, x, y, z, w', x', y', z']`.
    #[must_use]
    pub const fn from_components(q: [f64; 8]) -> Self {
        Self::new(
            DQuat::from_xyzw(q[1], q[2], q[3], q[0]),
            DQuat::from_xyzw(q[5], q[6], q[7], q[4]),
        )
    }

    /// Creates the real dual quaternion `s`.
    #[must_use]
    pub const fn from_scalar(s: f64) -> Self {
        Self::new(DQuat::from_xyzw(0.0, 0.0, 0.0, s), QUAT_ZERO)
    }

    /// Creates the pure quaternion `x·i + y·j + z·k`.
    #[must_use]
    pub const fn from_vec3(v: DVec3) -> Self {
        Self::new(DQuat::from_xyzw(v.x, v.y, v.z, 0.0), QUAT_ZERO)
    }

    /// Creates the rotation `cos(θ/2) + a·sin(θ/2)` about `axis` (normalized here).
    #[must_use]
    pub fn from_rotation(axis: DVec3, angle: f64) -> Self {
        Self::new(DQuat::from_axis_angle(axis.normalize(), angle), QUAT_ZERO)
    }

    /// Creates the pure translation `1 + ½·ε·t`.
    #[must_use]
    pub fn from_translation(t: DVec3) -> Self {
        Self::ONE + Self::E * Self::from_vec3(t) * 0.5
    }

    /// Creates the pose `r + ½·ε·t·r`: rotate by `rotation`, then translate by `t`
    /// in the world frame.
    #[must_use]
    pub fn from_pose(rotation: Self, t: DVec3) -> Self {
        rotation + Self::E * 0.5 * Self::from_vec3(t) * rotation
    }

    /// Creates the Plücker line `l + ε·(p × l)` through `point` along `direction`.
    #[must_use]
    pub fn line(direction: DVec3, point: DVec3) -> Self {
        let l = direction.normalize();
        Self::new(
            DQuat::from_xyzw(l.x, l.y, l.z, 0.0),
            Self::from_vec3(point.cross(l)).primary,
        )
    }

    /// Creates the plane `n + ε·⟨p, n⟩` through `point` with normal `normal`.
    #[must_use]
    pub fn plane(normal: DVec3, point: DVec3) -> Self {
        let n = normal.normalize();
        Self::from_vec3(n) + Self::E * point.dot(n)
    }

    /// Returns `[w, x, y, z, w', x', y', z']`.
    #[must_use]
    pub fn q(&self) -> [f64; 8] {
        let (p, d) = (self.primary, self.dual);
        [p.w, p.x, p.y, p.z, d.w, d.x, d.y, d.z]
    }

    /// Returns the primary quaternion.
    #[must_use]
    pub fn primary(&self) -> DQuat {
        self.primary
    }

    /// Returns the dual quaternion.
    #[must_use]
    pub fn dual(&self) -> DQuat {
        self.dual
    }

    /// Primary part `P` as a dual quaternion.
    #[must_use]
    pub fn p(&self) -> Self {
        Self::new(self.primary, QUAT_ZERO)
    }

    /// Dual part `D` as a dual quaternion.
    #[must_use]
    pub fn d(&self) -> Self {
        Self::new(self.dual, QUAT_ZERO)
    }

    /// Real part (scalars of both quaternions).
    #[must_use]
    pub fn re(&self) -> Self {
        Self::new(
            DQuat::from_xyzw(0.0, 0.0, 0.0, self.primary.w),
            DQuat::from_xyzw(0.0, 0.0, 0.0, self.dual.w),
        )
    }

    /// Imaginary part (vectors of both quaternions).
    #[must_use]
    pub fn im(&self) -> Self {
        *self - self.re()
    }

    /// Conjugate `P* + ε·D*`.
    #[must_use]
    pub fn conj(&self) -> Self {
        Self::new(self.primary.conjugate(), self.dual.conjugate())
    }

    /// Sharp operator `P − ε·D`.
    #[must_use]
    pub fn sharp(&self) -> Self {
        Self::new(self.primary, -self.dual)
    }

    /// Translation `2·D·P*` encoded by a unit dual quaternion.
    ///
    /// The result is a pure quaternion. Callers are expected to check
    /// [`is_unit`](crate::predicates::is_unit) where it matters.
    #[must_use]
    pub fn translation(&self) -> Self {
        self.d() * self.p().conj() * 2.0
    }

    /// Imaginary part of the primary quaternion as a 3-vector.
    #[must_use]
    pub fn vec3(&self) -> DVec3 {
        self.primary.xyz()
    }

    /// Scalar part of the primary quaternion.
    #[must_use]
    pub fn scalar(&self) -> f64 {
        self.primary.w
    }

    /// Component-wise comparison within [`DQ_THRESHOLD`].
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.q()
            .iter()
            .zip(other.q())
            .all(|(a, b)| (a - b).abs() < DQ_THRESHOLD)
    }
}

/// Cross product `(a·b − b·a)/2`; for pure quaternions this is the vector cross product.
#[must_use]
pub fn cross(a: &DualQuaternion, b: &DualQuaternion) -> DualQuaternion {
    (*a * *b - *b * *a) * 0.5
}

/// Dot product `−(a·b + b·a)/2`; for pure quaternions this is the vector dot product.
#[must_use]
pub fn dot(a: &DualQuaternion, b: &DualQuaternion) -> DualQuaternion {
    -((*a * *b + *b * *a) * 0.5)
}

impl Add for DualQuaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.primary + rhs.primary, self.dual + rhs.dual)
    }
}

impl Add<f64> for DualQuaternion {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        self + Self::from_scalar(rhs)
    }
}

impl Add<DualQuaternion> for f64 {
    type Output = DualQuaternion;

    fn add(self, rhs: DualQuaternion) -> DualQuaternion {
        DualQuaternion::from_scalar(self) + rhs
    }
}

impl Sub for DualQuaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.primary - rhs.primary, self.dual - rhs.dual)
    }
}

impl Sub<f64> for DualQuaternion {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        self - Self::from_scalar(rhs)
    }
}

impl Neg for DualQuaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.primary, -self.dual)
    }
}

impl Mul for DualQuaternion {
    type Output = Self;

    /// `(a + εb)(c + εd) = ac + ε(ad + bc)`
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.primary * rhs.primary,
            self.primary * rhs.dual + self.dual * rhs.primary,
        )
    }
}

impl Mul<f64> for DualQuaternion {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.primary * rhs, self.dual * rhs)
    }
}

impl Mul<DualQuaternion> for f64 {
    type Output = DualQuaternion;

    fn mul(self, rhs: DualQuaternion) -> DualQuaternion {
        rhs * self
    }
}

impl From<f64> for DualQuaternion {
    fn from(s: f64) -> Self {
        Self::from_scalar(s)
    }
}

impl From<DVec3> for DualQuaternion {
    fn from(v: DVec3) -> Self {
        Self::from_vec3(v)
    }
}

fn fmt_quat(q: DQuat, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let terms = [(q.w, ""), (q.x, "i"), (q.y, "j"), (q.z, "k")];
    let mut written = false;
    for (value, unit) in terms {
        if value.abs() < DQ_THRESHOLD {
            continue;
        }
        match (written, value < 0.0) {
            (false, _) => write!(f, "{value}{unit}")?,
            (true, true) => write!(f, " - {}{unit}", -value)?,
            (true, false) => write!(f, " + {value}{unit}")?,
        }
        written = true;
    }
    if !written {
        f.write_str("0")?;
    }
    Ok(())
}

impl fmt::Display for DualQuaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_quat(self.primary, f)?;
        if self.dual.abs_diff_eq(QUAT_ZERO, DQ_THRESHOLD) {
            return Ok(());
        }
        f.write_str(" + E*(")?;
        fmt_quat(self.dual, f)?;
        f.write_str(")")
    }
}
