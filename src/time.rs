use std::fmt::{Debug, Display, Formatter};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Point in time or span length, in whatever unit the integrating system picked.
///
/// Any `f64` round-trips bit-for-bit. Comparison and hashing follow [`OrderedFloat`],
/// so `NaN` equals itself and sorts above every number.
#[repr(transparent)]
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
)]
#[serde(transparent)]
#[from(i32, f64, OrderedFloat<f64>)]
#[must_use]
pub struct Time(pub OrderedFloat<f64>);

impl Time {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    pub const fn abs(self) -> Self {
        Self(OrderedFloat(self.0.0.abs()))
    }

    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0.0.is_finite()
    }
}

impl From<Time> for f64 {
    fn from(time: Time) -> Self {
        time.0.0
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Debug for Time {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.0.0, f)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_from_integer() {
        assert_abs_diff_eq!(f64::from(Time::from(10)), 10.0);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Time::from(8) - Time::from(5), Time::from(3));
        assert_eq!(Time::from(5) + Time::from(3), Time::from(8));
        assert_eq!(-Time::from(1), Time::from(-1));
        assert_eq!(Time::from(-2.5).abs(), Time::from(2.5));
    }

    #[test]
    fn test_nan_equals_itself() {
        assert_eq!(Time::from(f64::NAN), Time::from(f64::NAN));
        assert!(!Time::from(f64::NAN).is_finite());
        assert!(Time::from(f64::NAN) > Time::from(f64::INFINITY));
    }

    #[test]
    fn test_from_str() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!("1.5".parse::<Time>()?, Time::from(1.5));
        Ok(())
    }

    #[test]
    fn test_serialize_bare_number() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Time::from(2.5))?, "2.5");
        assert_eq!(serde_json::from_str::<Time>("7")?, Time::from(7));
        Ok(())
    }

    proptest! {
        #[test]
        fn test_round_trip_is_bitwise(value in any::<f64>()) {
            prop_assert_eq!(f64::from(Time::from(value)).to_bits(), value.to_bits());
        }
    }
}
