//! Textual rendering of angles.
//!
//! Formatting sits outside and after the computational core: nothing in the
//! cast or trig machinery depends on it. An angle renders as the raw value
//! followed by its unit abbreviation, `90°` or `1.5rd`.

use core::fmt;

use crate::angle::Angle;
use crate::scalar::Scalar;
use crate::unit::AngleUnit;

impl<T: Scalar + fmt::Display, U: AngleUnit> fmt::Display for Angle<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value(), U::SYMBOL)
    }
}
