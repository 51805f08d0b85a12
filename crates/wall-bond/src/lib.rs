#![deny(missing_docs)]

//! Brick bond generators. Each bond lays the wall course by course on a
//! quarter-module grid so that head joints can be compared exactly.

mod bond;
mod checks;
mod english_cross;
mod flemish;
mod hash;
mod joints;
mod layout;
mod stretcher;
mod wild;

pub use bond::{generate, Bond, BondName, CourseGenerator};
pub use checks::{check_layout, AuditRules, Violation};
pub use english_cross::EnglishCrossBond;
pub use flemish::FlemishBond;
pub use hash::{canonical_hash, layout_from_bytes, layout_to_bytes};
pub use stretcher::StretcherBond;
pub use wild::{default_seed, PieceWeights, WildBond, WildBondConfig, WildLayout};
