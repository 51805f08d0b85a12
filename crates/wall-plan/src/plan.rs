use tracing::{info, warn};
use wall_bond::{canonical_hash, Bond, BondName, CourseGenerator};
use wall_build::{Wall, WallBuilder};
use wall_core::{ErrorInfo, WallError};
use wall_order::{BuildStrategy, PlacementOrder};

use crate::report::{OrderReport, PlanReport};
use crate::request::PlanRequest;

/// A planned wall: the assembled model plus one placement order per
/// requested strategy.
#[derive(Debug, Clone)]
pub struct WallPlan {
    request: PlanRequest,
    wall: Wall,
    orders: Vec<(PlacementOrder, &'static str)>,
    layout_hash: String,
}

impl WallPlan {
    /// Request the plan was computed from.
    pub fn request(&self) -> &PlanRequest {
        &self.request
    }

    /// Assembled wall.
    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    /// Placement orders, in request order.
    pub fn orders(&self) -> impl Iterator<Item = &PlacementOrder> + '_ {
        self.orders.iter().map(|(order, _)| order)
    }

    /// Placement order of the named strategy.
    pub fn order(&self, strategy: &str) -> Option<&PlacementOrder> {
        self.orders().find(|order| order.strategy() == strategy)
    }

    /// SHA-256 of the generated layout.
    pub fn layout_hash(&self) -> &str {
        &self.layout_hash
    }

    /// Serializable summary of the plan.
    pub fn report(&self) -> PlanReport {
        let grid = self.wall.grid();
        PlanReport {
            bond: self.request.bond,
            seed: self
                .request
                .bond
                .is_seeded()
                .then(|| self.request.effective_seed()),
            courses: self.wall.courses().len() as u32,
            brick_count: self.wall.brick_count(),
            grid_rows: grid.rows(),
            grid_cols: grid.cols(),
            cells: grid.cells().to_vec(),
            layout_hash: self.layout_hash.clone(),
            orders: self
                .orders
                .iter()
                .map(|(order, description)| OrderReport {
                    strategy: order.strategy().to_string(),
                    description: (*description).to_string(),
                    stride_transitions: order.stride_transitions(),
                    distinct_strides: order.distinct_strides(),
                    steps: order.steps().to_vec(),
                })
                .collect(),
        }
    }
}

/// Validates the request, generates the bond, assembles the wall and orders
/// it with every requested strategy.
pub fn plan(request: &PlanRequest) -> Result<WallPlan, WallError> {
    if request.strategies.is_empty() {
        return Err(WallError::Serde(
            ErrorInfo::new("no-strategies", "request names no build strategy")
                .with_hint("list at least one of stride-optimized, course-by-course"),
        ));
    }

    let geometry = request
        .dimensions
        .validate(request.allow_partial_stride)?;
    let bond = Bond::from_name(request.bond, request.wild_config());
    let courses = bond.generate(&geometry).map_err(|err| {
        if request.bond == BondName::Wild {
            warn!(seed = request.effective_seed(), error = %err, "wild bond failed");
        }
        err
    })?;
    let layout_hash = canonical_hash(&courses);
    let wall = WallBuilder::new(geometry).build(courses)?;

    let mut orders = Vec::with_capacity(request.strategies.len());
    for strategy in &request.strategies {
        let order = strategy.order(&wall)?;
        info!(
            bond = %request.bond,
            strategy = strategy.name(),
            summary = %order.summary(),
            "placement order computed"
        );
        orders.push((order, strategy.description()));
    }

    info!(
        bond = %request.bond,
        bricks = wall.brick_count(),
        cells = wall.grid().len(),
        hash = %layout_hash,
        "wall planned"
    );
    Ok(WallPlan {
        request: request.clone(),
        wall,
        orders,
        layout_hash,
    })
}
