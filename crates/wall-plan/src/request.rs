use serde::{Deserialize, Serialize};
use wall_bond::{BondName, WildBondConfig};
use wall_core::{Dimensions, WallError};
use wall_order::{Strategy, Traversal};

use crate::serde::{from_yaml_str, to_yaml_string};

/// Everything needed to plan one wall. Every field has a default, so an empty
/// document plans the reference 2300 x 2000 mm stretcher wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Bond pattern.
    #[serde(default = "default_bond")]
    pub bond: BondName,
    /// Seed for the wild bond; overrides `wild.seed` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Wall, brick and stride dimensions.
    #[serde(default)]
    pub dimensions: Dimensions,
    /// Accept a stride envelope larger than the wall.
    #[serde(default = "default_allow_partial_stride")]
    pub allow_partial_stride: bool,
    /// Wild-bond search settings.
    #[serde(default)]
    pub wild: WildBondConfig,
    /// Strategies to order the wall with, one placement order each.
    #[serde(default = "default_strategies")]
    pub strategies: Vec<Strategy>,
}

fn default_bond() -> BondName {
    BondName::Stretcher
}

fn default_allow_partial_stride() -> bool {
    true
}

fn default_strategies() -> Vec<Strategy> {
    vec![
        Strategy::StrideOptimized {
            traversal: Traversal::Raster,
        },
        Strategy::CourseByCourse,
    ]
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            bond: default_bond(),
            seed: None,
            dimensions: Dimensions::default(),
            allow_partial_stride: default_allow_partial_stride(),
            wild: WildBondConfig::default(),
            strategies: default_strategies(),
        }
    }
}

impl PlanRequest {
    /// Request for `bond` with every other field defaulted.
    pub fn for_bond(bond: BondName) -> Self {
        Self {
            bond,
            ..Self::default()
        }
    }

    /// Parses a YAML request.
    pub fn from_yaml(data: &str) -> Result<Self, WallError> {
        from_yaml_str(data)
    }

    /// Renders the request as YAML.
    pub fn to_yaml(&self) -> Result<String, WallError> {
        to_yaml_string(self)
    }

    /// Seed the wild bond will use.
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(self.wild.seed)
    }

    /// Wild-bond settings with the effective seed applied.
    pub fn wild_config(&self) -> WildBondConfig {
        WildBondConfig {
            seed: self.effective_seed(),
            ..self.wild.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let request = PlanRequest::from_yaml("{}").unwrap();
        assert_eq!(request, PlanRequest::default());
        assert_eq!(request.effective_seed(), 0x5EED);
    }

    #[test]
    fn explicit_seed_overrides_wild_seed() {
        let request = PlanRequest::from_yaml("bond: wild\nseed: 42\nwild:\n  seed: 7\n").unwrap();
        assert_eq!(request.bond, BondName::Wild);
        assert_eq!(request.wild_config().seed, 42);
    }

    #[test]
    fn unknown_bond_is_a_serde_error() {
        let err = PlanRequest::from_yaml("bond: herringbone\n").unwrap_err();
        assert!(matches!(err, WallError::Serde(info) if info.code == "yaml_deserialize"));
    }
}
