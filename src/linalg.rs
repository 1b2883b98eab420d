//! This module implements some domain-specific 4-momentum handling logic.
//!
//! Beams are collinear, so every 4-momentum built by this crate lies along the
//! Z axis of the lab frame. The helpers below are nevertheless written for
//! general 4-vectors.

use crate::numeric::Float;
use nalgebra::{SVector, Vector3};
use prefix_num_ops::real::*;

/// 4-momentum dimension
pub const MOMENTUM_DIM: usize = 4;

/// Relativistic 4-momentum
pub type Momentum = SVector<Float, MOMENTUM_DIM>;

/// Convenience const for accessing the X coordinate of a 4-vector
pub const X: usize = 0;

/// Convenience const for accessing the Y coordinate of a 4-vector
pub const Y: usize = 1;

/// Convenience const for accessing the Z coordinate of a 4-vector
pub const Z: usize = 2;

/// Convenience const for accessing the E coordinate of a 4-vector
pub const E: usize = 3;

/// Build the 4-momentum of something travelling along the beam axis
pub fn along_beam(p_z: Float, energy: Float) -> Momentum {
    let mut momentum = Momentum::zeros();
    momentum[Z] = p_z;
    momentum[E] = energy;
    momentum
}

/// Extract the spatial part of a 4-momentum
pub fn xyz(m: &Momentum) -> Vector3<Float> {
    m.fixed_rows::<3>(X).into_owned()
}

/// Invariant mass √(E² - |p|²) of a 4-momentum
///
/// No guard is applied: space-like inputs yield NaN.
///
pub fn invariant_mass(m: &Momentum) -> Float {
    sqrt(m[E] * m[E] - xyz(m).norm_squared())
}

/// Velocity (in units of c) of the rest frame of a 4-momentum, along Z
pub fn velocity_along_beam(m: &Momentum) -> Float {
    m[Z] / m[E]
}

/// Lorentz factor associated with a velocity (in units of c)
pub fn lorentz_factor(beta: Float) -> Float {
    1. / sqrt(1. - beta * beta)
}
