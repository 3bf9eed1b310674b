//! Unit tags and named constructors.

use crate::angle::Angle;
use crate::scalar::Scalar;
use core::fmt::Debug;

/// Trait implemented by every **unit tag** type.
///
/// A unit tag carries no data; it exists purely to parameterize
/// [`Angle<T, U>`] at compile time. Two angles with different tags are
/// unrelated types and never mix without an explicit cast.
///
/// `SYMBOL` is the printable abbreviation (e.g. `"°"` or `"rd"`), shown by
/// [`core::fmt::Display`].
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types (this crate's
///   built-in units are unit structs with no fields).
/// - Declaring a new tag does not make it convertible: every conversion to
///   or from it must be registered via [`crate::CastFrom`], and an
///   unregistered pair is a compile error.
pub trait AngleUnit: Copy + PartialEq + Debug + Default + 'static {
    /// Printable unit abbreviation.
    const SYMBOL: &'static str;
}

/// Degree unit tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degree;

impl AngleUnit for Degree {
    const SYMBOL: &'static str = "°";
}

/// Radian unit tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radian;

impl AngleUnit for Radian {
    const SYMBOL: &'static str = "rd";
}

/// An angle expressed in degrees.
pub type Degrees<T> = Angle<T, Degree>;

/// An angle expressed in radians.
pub type Radians<T> = Angle<T, Radian>;

/// Constructs a degree-tagged angle.
///
/// ```rust
/// use angulo_core::degrees;
/// let a = degrees(45.0_f64);
/// assert_eq!(a.value(), 45.0);
/// ```
#[inline]
pub fn degrees<T: Scalar>(value: T) -> Degrees<T> {
    Angle::new(value)
}

/// Constructs a radian-tagged angle.
///
/// ```rust
/// use angulo_core::radians;
/// let a = radians(core::f64::consts::PI);
/// assert_eq!(a.value(), core::f64::consts::PI);
/// ```
#[inline]
pub fn radians<T: Scalar>(value: T) -> Radians<T> {
    Angle::new(value)
}
