//! Interference graph container.
//!
//! Nodes are stored in an arena (`Vec<Node>`) and edges refer to them by [`NodeId`]. A graph is
//! built once (by the generator or the GXL reader) and afterwards only its node colors change.

use crate::geom::{Point, PolarPoint};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Index of a node inside its owning [`Graph`].
///
/// Ids are only handed out by [`Graph::add_node`] and are meaningless for any other graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

pub type EdgeId = i64;

/// A frequency assignment. Colors are unbounded positive integers starting at 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Color(NonZeroU32);

impl Color {
    pub const FIRST: Color = Color(NonZeroU32::MIN);

    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub position: PolarPoint,
    /// Incident edge count, bumped by [`Graph::add_edge`] rather than recomputed.
    pub degree: usize,
    pub color: Option<Color>,
}

impl Node {
    pub fn new(name: impl Into<String>, position: PolarPoint) -> Self {
        Self {
            name: name.into(),
            position,
            degree: 0,
            color: None,
        }
    }

    pub fn has_color(&self) -> bool {
        self.color.is_some()
    }

    pub fn cartesian(&self) -> Point {
        self.position.to_cartesian()
    }
}

/// An undirected interference edge. `start`/`end` order carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub id: EdgeId,
    pub start: NodeId,
    pub end: NodeId,
}

impl Edge {
    /// The endpoint opposite `node`, or `None` when the edge does not touch it.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.start == node {
            Some(self.end)
        } else if self.end == node {
            Some(self.start)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub max_degree: usize,
    pub mean_degree: f64,
    pub colors_used: usize,
}

#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// Edge ids are handed out per graph, starting at 1.
    next_edge_id: EdgeId,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::new(),
            next_edge_id: 1,
        }
    }

    pub fn add_node(&mut self, name: impl Into<String>, position: PolarPoint) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name, position));
        id
    }

    /// Inserts an edge with the next id from this graph's counter and bumps both degrees.
    pub fn add_edge(&mut self, start: NodeId, end: NodeId) -> EdgeId {
        let id = self.next_edge_id;
        self.add_edge_with_id(start, end, id);
        id
    }

    /// Inserts an edge with a caller-chosen id. The counter moves past `id` so later
    /// [`Graph::add_edge`] calls never reuse it.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint does not belong to this graph.
    pub fn add_edge_with_id(&mut self, start: NodeId, end: NodeId, id: EdgeId) {
        assert!(
            start.0 < self.nodes.len() && end.0 < self.nodes.len(),
            "edge endpoints must belong to the graph"
        );
        self.edges.push(Edge { id, start, end });
        self.nodes[start.0].degree += 1;
        self.nodes[end.0].degree += 1;
        self.next_edge_id = self.next_edge_id.max(id.saturating_add(1));
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// # Panics
    ///
    /// Panics if `id` was issued by a different graph and is out of range here.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// First node with exactly this (case-sensitive) name.
    pub fn node_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Other endpoints of every edge touching `node`, in edge insertion order.
    ///
    /// This is a full edge scan. Duplicate edges (only possible from an imported file) yield
    /// duplicate neighbors.
    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.edges.iter().filter_map(|e| e.other(node)).collect()
    }

    /// # Panics
    ///
    /// Panics if `node` does not belong to this graph.
    pub fn has_color(&self, node: NodeId) -> bool {
        self.nodes[node.0].has_color()
    }

    /// Whether `candidate` may be assigned to `node`: the node must still be uncolored and no
    /// neighbor may already hold `candidate`.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not belong to this graph.
    pub fn can_color(&self, node: NodeId, candidate: Color) -> bool {
        if self.has_color(node) {
            return false;
        }
        self.edges
            .iter()
            .filter_map(|e| e.other(node))
            .all(|m| self.nodes[m.0].color != Some(candidate))
    }

    pub(crate) fn assign_color(&mut self, node: NodeId, color: Color) {
        debug_assert!(!self.has_color(node), "color is assigned once per pass");
        self.nodes[node.0].color = Some(color);
    }

    /// Resets every node to uncolored.
    pub fn clear_colors(&mut self) {
        for n in &mut self.nodes {
            n.color = None;
        }
    }

    /// Number of distinct colors currently assigned.
    pub fn color_count(&self) -> usize {
        let mut seen: Vec<Color> = self.nodes.iter().filter_map(|n| n.color).collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }

    /// Edges whose endpoints carry the same color. Zero for a proper coloring.
    pub fn conflicts(&self) -> usize {
        self.edges
            .iter()
            .filter(|e| {
                let a = self.nodes[e.start.0].color;
                a.is_some() && a == self.nodes[e.end.0].color
            })
            .count()
    }

    pub fn stats(&self) -> GraphStats {
        let max_degree = self.nodes.iter().map(|n| n.degree).max().unwrap_or(0);
        let mean_degree = if self.nodes.is_empty() {
            0.0
        } else {
            self.nodes.iter().map(|n| n.degree).sum::<usize>() as f64 / self.nodes.len() as f64
        };
        GraphStats {
            nodes: self.nodes.len(),
            edges: self.edges.len(),
            max_degree,
            mean_degree,
            colors_used: self.color_count(),
        }
    }
}
