//! Degree-ordered greedy frequency assignment.
//!
//! Nodes are visited by descending degree (stable, so insertion order breaks ties). Each visited
//! node takes the smallest color its neighbors do not hold, and then every still-uncolored
//! neighbor of it is colored the same way before the walk moves on. That eager neighbor pass
//! means assignment order is not purely degree order; it changes which proper coloring comes
//! out, never whether it is proper.

use crate::graph::{Color, Graph, NodeId};
use serde::Serialize;

/// Outcome of a coloring pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coloring {
    /// Distinct colors present on the graph after the pass.
    pub colors_used: usize,
    /// Nodes in the order they received a color during this pass.
    pub assignment_order: Vec<NodeId>,
}

/// Colors every uncolored node of `graph` and returns the number of distinct colors in use.
///
/// Already-colored nodes are left untouched, so running this on a fully colored graph only
/// recounts.
pub fn color(graph: &mut Graph) -> usize {
    color_greedy(graph).colors_used
}

/// Like [`color`], but also reports the order of assignments.
pub fn color_greedy(graph: &mut Graph) -> Coloring {
    let mut visit: Vec<NodeId> = graph.node_ids().collect();
    // `sort_by` is stable: equal degrees keep insertion order.
    visit.sort_by(|a, b| graph.node(*b).degree.cmp(&graph.node(*a).degree));

    let mut assignment_order = Vec::with_capacity(visit.len());
    for node in visit {
        if !graph.has_color(node) {
            let c = smallest_free_color(graph, node);
            graph.assign_color(node, c);
            assignment_order.push(node);
        }

        for neighbor in graph.neighbors(node) {
            if graph.has_color(neighbor) {
                continue;
            }
            let c = smallest_free_color(graph, neighbor);
            graph.assign_color(neighbor, c);
            assignment_order.push(neighbor);
        }
    }

    let colors_used = graph.color_count();
    tracing::debug!(
        nodes = graph.node_count(),
        assigned = assignment_order.len(),
        colors_used,
        "greedy coloring finished"
    );
    Coloring {
        colors_used,
        assignment_order,
    }
}

fn smallest_free_color(graph: &Graph, node: NodeId) -> Color {
    let mut c = Color::FIRST;
    while !graph.can_color(node, c) {
        c = c.next();
    }
    c
}
