//! The angle value type and its arithmetic.

use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::scalar::Scalar;
use crate::unit::AngleUnit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An angle magnitude with a specific unit.
///
/// `Angle<T, U>` wraps one floating-point scalar together with phantom type
/// information about its unit `U`. The unit is a static property only: it is
/// never inspected at runtime and adds no storage. Reinterpreting the scalar
/// under a different tag is only possible through [`Angle::to`] /
/// [`crate::angle_cast`].
///
/// Equality and ordering are the scalar's own (NaN stays unordered).
/// The default value is the zero angle.
///
/// # Examples
///
/// ```rust
/// use angulo_core::Degrees;
///
/// let a = Degrees::<f64>::new(30.0);
/// let b = Degrees::<f64>::new(15.0);
/// let sum = a + b;
/// assert_eq!(sum.value(), 45.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle<T, U: AngleUnit>(T, PhantomData<U>);

impl<T: Scalar, U: AngleUnit> Angle<T, U> {
    /// Creates a new angle with the given magnitude, interpreted in `U`.
    ///
    /// ```rust
    /// use angulo_core::Radians;
    /// let r = Radians::<f64>::new(1.5);
    /// assert_eq!(r.value(), 1.5);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw scalar magnitude, in this angle's unit.
    ///
    /// ```rust
    /// use angulo_core::degrees;
    /// assert_eq!(degrees(90.0_f32).value(), 90.0);
    /// ```
    #[inline]
    pub fn value(self) -> T {
        self.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Scalar, U: AngleUnit> Add for Angle<T, U> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<T: Scalar, U: AngleUnit> AddAssign for Angle<T, U> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<T: Scalar, U: AngleUnit> Sub for Angle<T, U> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<T: Scalar, U: AngleUnit> SubAssign for Angle<T, U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<T: Scalar, U: AngleUnit> Neg for Angle<T, U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<T: Scalar, U: AngleUnit> Mul<T> for Angle<T, U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<T: Scalar, U: AngleUnit> MulAssign<T> for Angle<T, U> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.0 *= rhs;
    }
}

impl<T: Scalar, U: AngleUnit> Div<T> for Angle<T, U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<T: Scalar, U: AngleUnit> DivAssign<T> for Angle<T, U> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.0 /= rhs;
    }
}

// Coherence (E0210) rules out the generic `impl Mul<Angle<T, U>> for T`, so
// the scalar-on-the-left form is expanded per float type.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl<U: AngleUnit> Mul<Angle<$t, U>> for $t {
            type Output = Angle<$t, U>;
            #[inline]
            fn mul(self, rhs: Angle<$t, U>) -> Self::Output {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64);

impl<T: Scalar, U: AngleUnit> PartialEq<T> for Angle<T, U> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.0 == *other
    }
}

impl<T: Scalar, U: AngleUnit> From<T> for Angle<T, U> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<T: Scalar + Serialize, U: AngleUnit> Serialize for Angle<T, U> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Scalar + Deserialize<'de>, U: AngleUnit> Deserialize<'de> for Angle<T, U> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = T::deserialize(deserializer)?;
        Ok(Angle::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{degrees, radians, Degrees};
    use proptest::prelude::*;

    type Deg = Degrees<f64>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction and value access
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_and_value() {
        let a = Deg::new(42.0);
        assert_eq!(a.value(), 42.0);
    }

    #[test]
    fn default_is_the_zero_angle() {
        assert_eq!(Deg::default().value(), 0.0);
        assert_eq!(Degrees::<f32>::default().value(), 0.0);
    }

    #[test]
    fn from_scalar() {
        let a: Deg = 123.456.into();
        assert_eq!(a.value(), 123.456);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Operator traits: Add, Sub, Mul, Div, Neg
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn operator_add() {
        let a = Deg::new(3.0);
        let b = Deg::new(7.0);
        assert_eq!((a + b).value(), 10.0);
    }

    #[test]
    fn operator_sub() {
        let a = Deg::new(10.0);
        let b = Deg::new(3.0);
        assert_eq!((a - b).value(), 7.0);
    }

    #[test]
    fn operator_mul_by_scalar() {
        let a = Deg::new(5.0);
        assert_eq!((a * 3.0).value(), 15.0);
        assert_eq!((3.0 * a).value(), 15.0);
    }

    #[test]
    fn operator_div_by_scalar() {
        let a = Deg::new(15.0);
        assert_eq!((a / 3.0).value(), 5.0);
    }

    #[test]
    fn operator_neg() {
        let a = Deg::new(5.0);
        assert_eq!((-a).value(), -5.0);
        assert_eq!((-(-a)).value(), 5.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Assignment operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn operator_add_assign() {
        let mut a = Deg::new(5.0);
        a += Deg::new(3.0);
        assert_eq!(a.value(), 8.0);
    }

    #[test]
    fn operator_sub_assign() {
        let mut a = Deg::new(10.0);
        a -= Deg::new(3.0);
        assert_eq!(a.value(), 7.0);
    }

    #[test]
    fn operator_mul_assign() {
        let mut a = Deg::new(4.0);
        a *= 2.5;
        assert_eq!(a.value(), 10.0);
    }

    #[test]
    fn operator_div_assign() {
        let mut a = Deg::new(20.0);
        a /= 4.0;
        assert_eq!(a.value(), 5.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn ordering_follows_the_scalar() {
        let a = Deg::new(1.0);
        let b = Deg::new(2.0);
        assert!(a < b);
        assert!(b > a);
        assert!(a <= Deg::new(1.0));
    }

    #[test]
    fn nan_is_unordered() {
        let nan = Deg::new(f64::NAN);
        let a = Deg::new(1.0);
        assert!(!(nan < a));
        assert!(!(nan > a));
        assert!(nan != nan);
        assert!(nan.partial_cmp(&a).is_none());
    }

    #[test]
    fn partial_eq_scalar() {
        let a = Deg::new(5.0);
        assert!(a == 5.0);
        assert!(!(a == 4.0));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Floating-point anomalies propagate, unvalidated
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn division_by_zero_follows_ieee754() {
        assert_eq!((Deg::new(1.0) / 0.0).value(), f64::INFINITY);
        assert_eq!((Deg::new(-1.0) / 0.0).value(), f64::NEG_INFINITY);
        assert!((Deg::new(0.0) / 0.0).value().is_nan());
    }

    #[test]
    fn infinity_survives_arithmetic() {
        let inf = Deg::new(f64::INFINITY);
        assert_eq!((inf + Deg::new(1.0)).value(), f64::INFINITY);
        assert!((inf - inf).value().is_nan());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_addition_matches_scalar_sum(x in -1e9..1e9f64, y in -1e9..1e9f64) {
            let sum = degrees(x) + degrees(y);
            prop_assert_eq!(sum.value(), x + y);
        }

        #[test]
        fn prop_ordering_matches_scalar_ordering(x in -1e9..1e9f64, y in -1e9..1e9f64) {
            prop_assert_eq!(radians(x) < radians(y), x < y);
            prop_assert_eq!(radians(x) == radians(y), x == y);
        }

        #[test]
        fn prop_neg_is_involutive(x in -1e9..1e9f64) {
            prop_assert_eq!((-(-degrees(x))).value(), x);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn serialize_raw_value() {
            let a = Deg::new(42.5);
            let json = serde_json::to_string(&a).unwrap();
            assert_eq!(json, "42.5");
        }

        #[test]
        fn deserialize_raw_value() {
            let a: Deg = serde_json::from_str("42.5").unwrap();
            assert_eq!(a.value(), 42.5);
        }

        #[test]
        fn serde_roundtrip() {
            let original = Deg::new(123.456);
            let json = serde_json::to_string(&original).unwrap();
            let restored: Deg = serde_json::from_str(&json).unwrap();
            assert_eq!(restored.value(), original.value());
        }
    }
}
