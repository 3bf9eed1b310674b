//! Precision-suffixed constructors.
//!
//! Shorthands over [`degrees`](crate::degrees) / [`radians`](crate::radians)
//! that pin the scalar type, for call sites where a bare literal would
//! otherwise need a type annotation.

use crate::unit::{degrees, radians, Degrees, Radians};

/// Single-precision degrees.
///
/// ```rust
/// use angulo_core::degf;
/// let a = degf(90.0);
/// assert_eq!(a.value(), 90.0_f32);
/// ```
#[inline]
pub fn degf(value: f32) -> Degrees<f32> {
    degrees(value)
}

/// Double-precision degrees.
#[inline]
pub fn degd(value: f64) -> Degrees<f64> {
    degrees(value)
}

/// Single-precision radians.
#[inline]
pub fn radf(value: f32) -> Radians<f32> {
    radians(value)
}

/// Double-precision radians.
#[inline]
pub fn radd(value: f64) -> Radians<f64> {
    radians(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_pin_the_scalar_type() {
        assert_eq!(degf(45.0).value(), 45.0_f32);
        assert_eq!(degd(45.0).value(), 45.0_f64);
        assert_eq!(radf(1.5).value(), 1.5_f32);
        assert_eq!(radd(1.5).value(), 1.5_f64);
    }
}
