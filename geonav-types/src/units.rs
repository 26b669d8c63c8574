//! Newtypes for quantities with units.
//!
//! Every quantity is a thin wrapper around `f64`. Values of different units do not mix: a
//! [`Knots`] value must be converted into [`MetersPerSecond`] with `From`/`Into` before it can
//! be used in a computation expecting meters per second.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Length of a nautical mile in meters.
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

const SECONDS_PER_HOUR: f64 = 3600.0;

macro_rules! unit {
    ($(#[$meta:meta])* $name:ident, $symbol:literal) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub f64);

        impl $name {
            /// Raw numeric value.
            pub fn value(self) -> f64 {
                self.0
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl Mul<f64> for $name {
            type Output = Self;

            fn mul(self, rhs: f64) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $name {
            type Output = Self;

            fn div(self, rhs: f64) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}{}", self.0, $symbol)
            }
        }

        impl AbsDiffEq for $name {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                f64::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                self.0.abs_diff_eq(&other.0, epsilon)
            }
        }

        impl RelativeEq for $name {
            fn default_max_relative() -> f64 {
                f64::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
                self.0.relative_eq(&other.0, epsilon, max_relative)
            }
        }
    };
}

unit!(
    /// Angle in degrees. Headings are measured clockwise from true north.
    Degrees,
    "°"
);
unit!(
    /// Angle in radians.
    Radians,
    " rad"
);
unit!(
    /// Distance in meters.
    Meters,
    " m"
);
unit!(
    /// Time in seconds. Can be negative when it denotes a moment in the past.
    Seconds,
    " s"
);
unit!(
    /// Speed in meters per second. This is the unit all computations use.
    MetersPerSecond,
    " m/s"
);
unit!(
    /// Speed in knots (nautical miles per hour).
    Knots,
    " kn"
);
unit!(
    /// Speed in kilometers per hour.
    KilometersPerHour,
    " km/h"
);

impl Degrees {
    /// Converts the angle into radians.
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }
}

impl Radians {
    /// Converts the angle into degrees.
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }

    /// Sine of the angle.
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    /// Cosine of the angle.
    pub fn cos(self) -> f64 {
        self.0.cos()
    }
}

impl From<Degrees> for Radians {
    fn from(value: Degrees) -> Self {
        value.to_radians()
    }
}

impl From<Radians> for Degrees {
    fn from(value: Radians) -> Self {
        value.to_degrees()
    }
}

impl From<Knots> for MetersPerSecond {
    fn from(value: Knots) -> Self {
        Self(value.0 * METERS_PER_NAUTICAL_MILE / SECONDS_PER_HOUR)
    }
}

impl From<KilometersPerHour> for MetersPerSecond {
    fn from(value: KilometersPerHour) -> Self {
        Self(value.0 * 1000.0 / SECONDS_PER_HOUR)
    }
}

impl From<MetersPerSecond> for Knots {
    fn from(value: MetersPerSecond) -> Self {
        Self(value.0 * SECONDS_PER_HOUR / METERS_PER_NAUTICAL_MILE)
    }
}

impl From<MetersPerSecond> for KilometersPerHour {
    fn from(value: MetersPerSecond) -> Self {
        Self(value.0 * SECONDS_PER_HOUR / 1000.0)
    }
}

impl From<Knots> for KilometersPerHour {
    fn from(value: Knots) -> Self {
        MetersPerSecond::from(value).into()
    }
}

impl From<KilometersPerHour> for Knots {
    fn from(value: KilometersPerHour) -> Self {
        MetersPerSecond::from(value).into()
    }
}

impl Mul<Seconds> for MetersPerSecond {
    type Output = Meters;

    fn mul(self, rhs: Seconds) -> Meters {
        Meters(self.0 * rhs.0)
    }
}

impl Div<MetersPerSecond> for Meters {
    type Output = Seconds;

    fn div(self, rhs: MetersPerSecond) -> Seconds {
        Seconds(self.0 / rhs.0)
    }
}
