use wall_build::Wall;
use wall_core::{BrickId, ErrorInfo, WallError};

/// Precedence DAG over bricks: an edge `a -> b` means `a` must be laid
/// before `b` because `b` rests on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportGraph {
    predecessors: Vec<Vec<BrickId>>,
    successors: Vec<Vec<BrickId>>,
}

impl SupportGraph {
    /// Derives the graph from the wall's support adjacency.
    pub fn from_wall(wall: &Wall) -> Self {
        let len = wall.brick_count();
        let mut predecessors = Vec::with_capacity(len);
        let mut successors = vec![Vec::new(); len];
        for index in 0..len {
            let id = BrickId::from_raw(index as u32);
            let supports = wall.supports(id).to_vec();
            for support in &supports {
                successors[support.index()].push(id);
            }
            predecessors.push(supports);
        }
        Self {
            predecessors,
            successors,
        }
    }

    /// Builds a graph over `len` bricks from explicit `(before, after)` edges.
    pub fn new(
        len: usize,
        edges: impl IntoIterator<Item = (BrickId, BrickId)>,
    ) -> Result<Self, WallError> {
        let mut predecessors = vec![Vec::new(); len];
        let mut successors = vec![Vec::new(); len];
        for (before, after) in edges {
            if before.index() >= len || after.index() >= len {
                return Err(WallError::UnsatisfiableOrder(
                    ErrorInfo::new("unknown-brick", "support edge references a missing brick")
                        .with_context("before", before.as_raw())
                        .with_context("after", after.as_raw())
                        .with_context("bricks", len),
                ));
            }
            predecessors[after.index()].push(before);
            successors[before.index()].push(after);
        }
        Ok(Self {
            predecessors,
            successors,
        })
    }

    /// Number of bricks.
    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    /// Whether the graph has no bricks.
    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// Number of precedence edges.
    pub fn edge_count(&self) -> usize {
        self.predecessors.iter().map(Vec::len).sum()
    }

    /// Bricks that must precede `id`.
    pub fn predecessors(&self, id: BrickId) -> &[BrickId] {
        self.predecessors
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Bricks that rest on `id`.
    pub fn successors(&self, id: BrickId) -> &[BrickId] {
        self.successors
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `order` lists every brick exactly once with each brick after
    /// all of its predecessors.
    pub fn is_linear_extension(&self, order: &[BrickId]) -> bool {
        if order.len() != self.len() {
            return false;
        }
        let mut position = vec![usize::MAX; self.len()];
        for (idx, id) in order.iter().enumerate() {
            match position.get_mut(id.index()) {
                Some(slot) if *slot == usize::MAX => *slot = idx,
                _ => return false,
            }
        }
        order.iter().enumerate().all(|(idx, id)| {
            self.predecessors(*id)
                .iter()
                .all(|before| position[before.index()] < idx)
        })
    }
}
