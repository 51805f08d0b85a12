use std::cmp::Reverse;
use std::collections::BinaryHeap;

use wall_core::{BrickId, ErrorInfo, WallError};

use crate::graph::SupportGraph;

/// Position of a brick inside its cell's queue: lowest course first, then the
/// lateral key chosen by the traversal.
pub(crate) type QueueKey = (u32, u32);

/// Kahn's algorithm with one ready queue per stride cell.
///
/// The current cell is drained for as long as it has a brick whose supports
/// are all laid. When it runs dry the search moves to the first cell, in
/// raster order, that has one, not the cell after the current one: bricks
/// unblocked in a lower or left cell are laid before the robot moves past it,
/// so that cell is not visited again later.
pub(crate) fn interleave(
    graph: &SupportGraph,
    cell_of: &[usize],
    keys: &[QueueKey],
    cell_count: usize,
) -> Result<Vec<BrickId>, WallError> {
    let len = graph.len();
    let mut in_degree: Vec<usize> = (0..len)
        .map(|index| graph.predecessors(BrickId::from_raw(index as u32)).len())
        .collect();
    let mut ready: Vec<BinaryHeap<Reverse<(QueueKey, BrickId)>>> =
        vec![BinaryHeap::new(); cell_count];
    let enqueue = |ready: &mut Vec<BinaryHeap<_>>, index: usize| {
        ready[cell_of[index]].push(Reverse((keys[index], BrickId::from_raw(index as u32))));
    };
    for (index, degree) in in_degree.iter().enumerate() {
        if *degree == 0 {
            enqueue(&mut ready, index);
        }
    }

    let mut order = Vec::with_capacity(len);
    let mut current = 0usize;
    while order.len() < len {
        if ready[current].is_empty() {
            match ready.iter().position(|queue| !queue.is_empty()) {
                Some(next) => current = next,
                None => break,
            }
        }
        let Some(Reverse((_, id))) = ready[current].pop() else {
            break;
        };
        order.push(id);
        for next in graph.successors(id) {
            let slot = &mut in_degree[next.index()];
            *slot -= 1;
            if *slot == 0 {
                enqueue(&mut ready, next.index());
            }
        }
    }

    if order.len() != len {
        return Err(WallError::UnsatisfiableOrder(
            ErrorInfo::new("support-cycle", "support graph contains a cycle")
                .with_context("placed", order.len())
                .with_context("unplaced", len - order.len()),
        ));
    }
    Ok(order)
}
