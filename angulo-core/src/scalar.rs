//! Scalar backends for angle magnitudes.
//!
//! [`Scalar`] is the crate's seam to the host floating-point math: the trig
//! primitives and the full-precision conversion constants all enter through
//! it. It is implemented for `f32` and `f64`; with `std` the inherent float
//! methods are used, without it the same operations come from `libm`.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Floating-point scalar usable as the magnitude of an angle.
///
/// The conversion constants must be evaluated at the implementing type's own
/// precision; deriving them by narrowing a wider literal loses the last few
/// bits of the factor.
///
/// # Invariants
///
/// - Arithmetic and comparisons follow IEEE-754, including NaN being
///   unordered and infinities propagating.
/// - The trig methods apply the host primitive directly; out-of-domain
///   inputs yield whatever NaN the primitive yields.
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    /// π/180 at this type's full precision: the degrees → radians factor.
    const DEG_TO_RAD: Self;

    /// 180/π at this type's full precision: the radians → degrees factor.
    const RAD_TO_DEG: Self;

    /// Sine of a value in radians.
    fn sin(self) -> Self;

    /// Cosine of a value in radians.
    fn cos(self) -> Self;

    /// Tangent of a value in radians.
    fn tan(self) -> Self;

    /// Arc sine, in radians.
    fn asin(self) -> Self;

    /// Arc cosine, in radians.
    fn acos(self) -> Self;

    /// Arc tangent, in radians.
    fn atan(self) -> Self;

    /// Two-argument arc tangent of `self / other`, in radians, preserving
    /// the quadrant (and signed-zero) semantics of the host primitive.
    fn atan2(self, other: Self) -> Self;
}

macro_rules! impl_scalar {
    ($t:ty, $pi:expr, $sin:path, $cos:path, $tan:path, $asin:path, $acos:path, $atan:path, $atan2:path) => {
        impl Scalar for $t {
            const DEG_TO_RAD: Self = $pi / 180.0;
            const RAD_TO_DEG: Self = 180.0 / $pi;

            #[inline]
            fn sin(self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::sin(self)
                }
                #[cfg(not(feature = "std"))]
                {
                    $sin(self)
                }
            }

            #[inline]
            fn cos(self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::cos(self)
                }
                #[cfg(not(feature = "std"))]
                {
                    $cos(self)
                }
            }

            #[inline]
            fn tan(self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::tan(self)
                }
                #[cfg(not(feature = "std"))]
                {
                    $tan(self)
                }
            }

            #[inline]
            fn asin(self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::asin(self)
                }
                #[cfg(not(feature = "std"))]
                {
                    $asin(self)
                }
            }

            #[inline]
            fn acos(self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::acos(self)
                }
                #[cfg(not(feature = "std"))]
                {
                    $acos(self)
                }
            }

            #[inline]
            fn atan(self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::atan(self)
                }
                #[cfg(not(feature = "std"))]
                {
                    $atan(self)
                }
            }

            #[inline]
            fn atan2(self, other: Self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::atan2(self, other)
                }
                #[cfg(not(feature = "std"))]
                {
                    $atan2(self, other)
                }
            }
        }
    };
}

impl_scalar!(
    f32,
    core::f32::consts::PI,
    libm::sinf,
    libm::cosf,
    libm::tanf,
    libm::asinf,
    libm::acosf,
    libm::atanf,
    libm::atan2f
);

impl_scalar!(
    f64,
    core::f64::consts::PI,
    libm::sin,
    libm::cos,
    libm::tan,
    libm::asin,
    libm::acos,
    libm::atan,
    libm::atan2
);
