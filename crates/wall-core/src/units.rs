//! Exact fixed-point lengths.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Number of stored units per millimetre.
pub const UNITS_PER_MM: u32 = 10;

/// A non-negative length stored as integer tenths of a millimetre.
///
/// Bed joints of 12.5 mm are common, so whole millimetres are not enough to
/// keep course heights exact. All arithmetic stays integral; conversion to a
/// float happens only for display and serialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Length(u32);

impl Length {
    /// The zero length.
    pub const ZERO: Length = Length(0);

    /// Creates a length from whole millimetres.
    pub const fn from_mm(mm: u32) -> Self {
        Self(mm * UNITS_PER_MM)
    }

    /// Creates a length from tenths of a millimetre.
    pub const fn from_tenths(tenths: u32) -> Self {
        Self(tenths)
    }

    /// Converts a millimetre float, rejecting values that are negative,
    /// non-finite, too large or finer than a tenth of a millimetre.
    pub fn try_from_mm_f64(mm: f64) -> Option<Self> {
        if !mm.is_finite() || mm < 0.0 {
            return None;
        }
        let scaled = mm * f64::from(UNITS_PER_MM);
        let rounded = scaled.round();
        if (scaled - rounded).abs() > 1e-6 || rounded > f64::from(u32::MAX) {
            return None;
        }
        Some(Self(rounded as u32))
    }

    /// Returns the raw number of tenths of a millimetre.
    pub const fn tenths(self) -> u32 {
        self.0
    }

    /// Returns the length in millimetres.
    pub fn as_mm(self) -> f64 {
        f64::from(self.0) / f64::from(UNITS_PER_MM)
    }

    /// Whether the length is zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    pub fn checked_add(self, other: Length) -> Option<Length> {
        self.0.checked_add(other.0).map(Length)
    }

    /// Checked subtraction.
    pub fn checked_sub(self, other: Length) -> Option<Length> {
        self.0.checked_sub(other.0).map(Length)
    }

    /// Checked multiplication by an integer factor.
    pub fn checked_mul(self, factor: u32) -> Option<Length> {
        self.0.checked_mul(factor).map(Length)
    }

    /// Returns `self / other` when the division is exact.
    pub fn exact_div(self, other: Length) -> Option<u32> {
        if other.0 == 0 || self.0 % other.0 != 0 {
            return None;
        }
        Some(self.0 / other.0)
    }

    /// Ceiling division by another length.
    pub fn div_ceil(self, other: Length) -> Option<u32> {
        if other.0 == 0 {
            return None;
        }
        Some(self.0.div_ceil(other.0))
    }

    /// Floor division by another length.
    pub fn div_floor(self, other: Length) -> Option<u32> {
        if other.0 == 0 {
            return None;
        }
        Some(self.0 / other.0)
    }

    /// Halves the length when it is evenly divisible.
    pub fn exact_half(self) -> Option<Length> {
        (self.0 % 2 == 0).then_some(Length(self.0 / 2))
    }

    /// Returns the smaller of two lengths.
    pub fn min(self, other: Length) -> Length {
        Length(self.0.min(other.0))
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Length) {
        self.0 += rhs.0;
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<u32> for Length {
    type Output = Length;

    fn mul(self, rhs: u32) -> Length {
        Length(self.0 * rhs)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / UNITS_PER_MM;
        let frac = self.0 % UNITS_PER_MM;
        if frac == 0 {
            write!(f, "{whole}mm")
        } else {
            write!(f, "{whole}.{frac}mm")
        }
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_mm())
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mm = f64::deserialize(deserializer)?;
        Length::try_from_mm_f64(mm).ok_or_else(|| {
            de::Error::custom(format!(
                "length {mm} mm must be finite, non-negative and a multiple of 0.1 mm"
            ))
        })
    }
}
