//! Classification predicates and the precondition checks built on them.
//!
//! The predicates never fail; the `ensure_*` functions turn a failed predicate
//! into a [`DqPlotError::Validation`] that names the argument and its value.

use crate::dual_quaternion::{DualQuaternion, DQ_THRESHOLD};
use crate::error::{DqCategory, DqPlotError, Result};

fn near_zero(value: f64) -> bool {
    value.abs() < DQ_THRESHOLD
}

/// `|P| = 1` and `⟨P, D⟩ = 0`.
#[must_use]
pub fn is_unit(h: &DualQuaternion) -> bool {
    let (p, d) = (h.primary(), h.dual());
    near_zero(p.length() - 1.0) && near_zero(p.dot(d))
}

/// Both real parts vanish.
#[must_use]
pub fn is_pure(h: &DualQuaternion) -> bool {
    near_zero(h.primary().w) && near_zero(h.dual().w)
}

/// All imaginary parts vanish.
#[must_use]
pub fn is_real(h: &DualQuaternion) -> bool {
    h.im().q().iter().all(|c| near_zero(*c))
}

/// The dual part vanishes.
#[must_use]
pub fn is_quaternion(h: &DualQuaternion) -> bool {
    h.d().q().iter().all(|c| near_zero(*c))
}

#[must_use]
pub fn is_pure_quaternion(h: &DualQuaternion) -> bool {
    is_pure(h) && is_quaternion(h)
}

/// A unit, pure dual quaternion: unit direction plus orthogonal moment.
#[must_use]
pub fn is_line(h: &DualQuaternion) -> bool {
    is_unit(h) && is_pure(h)
}

/// A unit dual quaternion whose primary part is pure and dual part is real.
#[must_use]
pub fn is_plane(h: &DualQuaternion) -> bool {
    is_unit(h) && is_pure(&h.p()) && is_real(&h.d())
}

fn ensure(
    holds: bool,
    argument: &'static str,
    expected: DqCategory,
    h: &DualQuaternion,
) -> Result<()> {
    if holds {
        Ok(())
    } else {
        Err(DqPlotError::Validation {
            argument,
            expected,
            value: h.to_string(),
        })
    }
}

pub fn ensure_unit(argument: &'static str, h: &DualQuaternion) -> Result<()> {
    ensure(is_unit(h), argument, DqCategory::Unit, h)
}

pub fn ensure_pure_quaternion(argument: &'static str, h: &DualQuaternion) -> Result<()> {
    ensure(is_pure_quaternion(h), argument, DqCategory::PureQuaternion, h)
}

pub fn ensure_line(argument: &'static str, h: &DualQuaternion) -> Result<()> {
    ensure(is_line(h), argument, DqCategory::Line, h)
}

pub fn ensure_plane(argument: &'static str, h: &DualQuaternion) -> Result<()> {
    ensure(is_plane(h), argument, DqCategory::Plane, h)
}
