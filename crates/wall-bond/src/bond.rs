use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wall_core::{Course, ErrorInfo, WallError, WallGeometry};

use crate::english_cross::EnglishCrossBond;
use crate::flemish::FlemishBond;
use crate::stretcher::StretcherBond;
use crate::wild::{WildBond, WildBondConfig};

/// Capability shared by every bond pattern: lay out the full wall.
pub trait CourseGenerator {
    /// Name of the pattern.
    fn name(&self) -> BondName;

    /// Produces every course of the wall, bottom course first.
    fn generate(&self, geometry: &WallGeometry) -> Result<Vec<Course>, WallError>;
}

/// Enumerated bond names accepted on the request surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BondName {
    /// Running bond with half-brick offsets.
    Stretcher,
    /// Alternating stretchers and headers in every course.
    Flemish,
    /// Stretcher courses alternating with header courses.
    EnglishCross,
    /// Irregular seeded pattern.
    Wild,
}

impl BondName {
    /// Every supported bond.
    pub const ALL: [BondName; 4] = [
        BondName::Stretcher,
        BondName::Flemish,
        BondName::EnglishCross,
        BondName::Wild,
    ];

    /// Stable kebab-case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            BondName::Stretcher => "stretcher",
            BondName::Flemish => "flemish",
            BondName::EnglishCross => "english-cross",
            BondName::Wild => "wild",
        }
    }

    /// Whether the pattern consumes a seed.
    pub fn is_seeded(&self) -> bool {
        matches!(self, BondName::Wild)
    }
}

impl fmt::Display for BondName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BondName {
    type Err = WallError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        BondName::ALL
            .into_iter()
            .find(|name| name.as_str() == value)
            .ok_or_else(|| {
                WallError::Serde(
                    ErrorInfo::new("unknown-bond", format!("unknown bond '{value}'"))
                        .with_hint("expected one of stretcher, flemish, english-cross, wild"),
                )
            })
    }
}

/// Closed set of bond generators.
#[derive(Debug, Clone, PartialEq)]
pub enum Bond {
    /// See [`StretcherBond`].
    Stretcher(StretcherBond),
    /// See [`FlemishBond`].
    Flemish(FlemishBond),
    /// See [`EnglishCrossBond`].
    EnglishCross(EnglishCrossBond),
    /// See [`WildBond`].
    Wild(WildBond),
}

impl Bond {
    /// Builds the generator for `name`; `wild` is only consulted for the wild bond.
    pub fn from_name(name: BondName, wild: WildBondConfig) -> Self {
        match name {
            BondName::Stretcher => Bond::Stretcher(StretcherBond),
            BondName::Flemish => Bond::Flemish(FlemishBond),
            BondName::EnglishCross => Bond::EnglishCross(EnglishCrossBond),
            BondName::Wild => Bond::Wild(WildBond::new(wild)),
        }
    }
}

impl CourseGenerator for Bond {
    fn name(&self) -> BondName {
        match self {
            Bond::Stretcher(bond) => bond.name(),
            Bond::Flemish(bond) => bond.name(),
            Bond::EnglishCross(bond) => bond.name(),
            Bond::Wild(bond) => bond.name(),
        }
    }

    fn generate(&self, geometry: &WallGeometry) -> Result<Vec<Course>, WallError> {
        match self {
            Bond::Stretcher(bond) => bond.generate(geometry),
            Bond::Flemish(bond) => bond.generate(geometry),
            Bond::EnglishCross(bond) => bond.generate(geometry),
            Bond::Wild(bond) => bond.generate(geometry),
        }
    }
}

/// Generates the wall for a bond name with default wild-bond settings and the given seed.
pub fn generate(
    name: BondName,
    seed: u64,
    geometry: &WallGeometry,
) -> Result<Vec<Course>, WallError> {
    let wild = WildBondConfig {
        seed,
        ..WildBondConfig::default()
    };
    Bond::from_name(name, wild).generate(geometry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_and_display() {
        for name in BondName::ALL {
            assert_eq!(name.as_str().parse::<BondName>().unwrap(), name);
        }
        assert_eq!(BondName::EnglishCross.to_string(), "english-cross");
        assert!("herringbone".parse::<BondName>().is_err());
    }

    #[test]
    fn dispatch_preserves_name() {
        for name in BondName::ALL {
            assert_eq!(Bond::from_name(name, WildBondConfig::default()).name(), name);
        }
    }
}
