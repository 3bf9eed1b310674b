//! The conversion cast between unit tags.
//!
//! Conversions are registered **peer-to-peer**: each concrete (source,
//! target) pair owns its own formula instead of being routed through one
//! canonical hub unit. With two units the results coincide either way, but
//! per-pair rules keep every conversion a single multiplication and let a
//! future pair pick the numerically most direct factor.

use crate::angle::Angle;
use crate::scalar::Scalar;
use crate::unit::{AngleUnit, Degree, Radian};

/// Conversion rule from a source unit into `Self`.
///
/// A destination unit implements `CastFrom<Src>` once per source unit it
/// accepts. Requesting a cast over an unregistered pair is a missing trait
/// bound — rejected before the program can run, never a runtime defect:
///
/// ```compile_fail
/// use angulo_core::{Angle, AngleUnit, Degree};
///
/// #[derive(Clone, Copy, Debug, Default, PartialEq)]
/// struct Gradian;
/// impl AngleUnit for Gradian {
///     const SYMBOL: &'static str = "gon";
/// }
///
/// let g: Angle<f64, Gradian> = Angle::new(100.0);
/// let _ = g.to::<Degree>(); // no conversion from Gradian is registered
/// ```
pub trait CastFrom<Src: AngleUnit>: AngleUnit {
    /// Converts a raw magnitude expressed in `Src` into `Self`.
    fn cast<T: Scalar>(value: T) -> T;
}

// Identity cast: same unit in, same unit out. No arithmetic is performed,
// so casting a value to its own unit is exact.
impl<U: AngleUnit> CastFrom<U> for U {
    #[inline]
    fn cast<T: Scalar>(value: T) -> T {
        value
    }
}

// Registered conversions.

impl CastFrom<Degree> for Radian {
    #[inline]
    fn cast<T: Scalar>(value: T) -> T {
        value * T::DEG_TO_RAD
    }
}

impl CastFrom<Radian> for Degree {
    #[inline]
    fn cast<T: Scalar>(value: T) -> T {
        value * T::RAD_TO_DEG
    }
}

impl<T: Scalar, U: AngleUnit> Angle<T, U> {
    /// Converts this angle to another unit.
    ///
    /// ```rust
    /// use angulo_core::{degrees, Radian};
    ///
    /// let r = degrees(180.0_f64).to::<Radian>();
    /// assert!((r.value() - core::f64::consts::PI).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn to<V: CastFrom<U>>(self) -> Angle<T, V> {
        Angle::new(V::cast(self.value()))
    }
}

/// Free-function form of [`Angle::to`].
///
/// ```rust
/// use angulo_core::{angle_cast, degrees, Radian};
///
/// let r = angle_cast::<Radian, _, _>(degrees(90.0_f64));
/// assert!((r.value() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[inline]
pub fn angle_cast<V, T, U>(angle: Angle<T, U>) -> Angle<T, V>
where
    T: Scalar,
    U: AngleUnit,
    V: CastFrom<U>,
{
    angle.to()
}

// `From` impls between every registered pair.
crate::impl_angle_conversions!(Degree, Radian);
