//! Macros for wiring up registered unit pairs.

/// Generates bidirectional `From` impls for all pairs of angle units.
///
/// Every pair listed must already have both [`crate::CastFrom`] rules
/// registered; a pair without them fails to compile, which keeps the
/// `From` surface in lockstep with the cast mechanism.
#[macro_export]
macro_rules! impl_angle_conversions {
    // Base case: single unit, no conversions needed
    ($unit:ty) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl<T: $crate::Scalar> From<$crate::Angle<T, $first>> for $crate::Angle<T, $rest> {
                #[inline]
                fn from(angle: $crate::Angle<T, $first>) -> Self {
                    angle.to::<$rest>()
                }
            }

            impl<T: $crate::Scalar> From<$crate::Angle<T, $rest>> for $crate::Angle<T, $first> {
                #[inline]
                fn from(angle: $crate::Angle<T, $rest>) -> Self {
                    angle.to::<$first>()
                }
            }
        )+

        // Recurse with the rest of the units
        $crate::impl_angle_conversions!($($rest),+);
    };
}
