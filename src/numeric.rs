//! Basic numerical concepts used throughout the crate

#![allow(missing_docs)]

// Floating-point precision is configured here
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f32")]
pub use std::f32 as floats;
#[cfg(not(feature = "f32"))]
pub type Float = f64;
#[cfg(not(feature = "f32"))]
pub use std::f64 as floats;

/// Relative comparison of two floating-point numbers, for testing purposes
///
/// The tolerance is expressed in units of the machine epsilon of `Float`, so
/// that the same tests remain meaningful in single and double precision.
///
#[cfg(test)]
pub fn assert_close(actual: Float, expected: Float, epsilons: Float) {
    let tolerance = epsilons * Float::EPSILON * expected.abs().max(1.);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{actual} differs from {expected} by more than {tolerance}"
    );
}
