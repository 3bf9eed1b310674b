//! Trigonometric operations.
//!
//! Forward trigonometry is defined on angles of any unit: the value is cast
//! to radians first, then the host primitive is applied. Inverse
//! trigonometry takes bare scalars and fixes its output unit to radians,
//! because that is the range the primitives define unambiguously.
//!
//! Domain edge cases follow IEEE-754 exactly: `tan` near odd multiples of
//! π/2 returns whatever the primitive returns, and out-of-domain inverse
//! inputs (|x| > 1 for `asin`/`acos`) propagate the primitive's NaN. No
//! validation, no sentinel values.

use crate::angle::Angle;
use crate::cast::CastFrom;
use crate::scalar::Scalar;
use crate::unit::{AngleUnit, Radian, Radians};

impl<T: Scalar, U: AngleUnit> Angle<T, U>
where
    Radian: CastFrom<U>,
{
    /// Sine of the angle.
    ///
    /// ```rust
    /// use angulo_core::degrees;
    /// assert!((degrees(90.0_f64).sin() - 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn sin(self) -> T {
        self.to::<Radian>().value().sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> T {
        self.to::<Radian>().value().cos()
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> T {
        self.to::<Radian>().value().tan()
    }

    /// Simultaneously computes sine and cosine.
    #[inline]
    pub fn sin_cos(self) -> (T, T) {
        let rad = self.to::<Radian>().value();
        (rad.sin(), rad.cos())
    }
}

/// Arc sine, as a radian-tagged angle.
///
/// ```rust
/// use angulo_core::asin;
/// let r = asin(1.0_f64);
/// assert!((r.value() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[inline]
pub fn asin<T: Scalar>(x: T) -> Radians<T> {
    Angle::new(x.asin())
}

/// Arc cosine, as a radian-tagged angle.
#[inline]
pub fn acos<T: Scalar>(x: T) -> Radians<T> {
    Angle::new(x.acos())
}

/// Arc tangent, as a radian-tagged angle.
#[inline]
pub fn atan<T: Scalar>(x: T) -> Radians<T> {
    Angle::new(x.atan())
}

/// Two-argument arc tangent of `y / x`, as a radian-tagged angle.
///
/// The host primitive's quadrant semantics, including signed zero, are
/// preserved as-is.
///
/// ```rust
/// use angulo_core::atan2;
/// let r = atan2(1.0_f64, 1.0);
/// assert!((r.value() - core::f64::consts::FRAC_PI_4).abs() < 1e-12);
/// ```
#[inline]
pub fn atan2<T: Scalar>(y: T, x: T) -> Radians<T> {
    Angle::new(y.atan2(x))
}
