//! Random geometric interference graphs.
//!
//! Transmitters are scattered over a disk of radius `city_radius` by sampling the radius and the
//! angle independently and uniformly. This is not area-uniform: density grows toward the center.
//! Two transmitters interfere when their coverage disks (radius `transmitter_radius`) overlap,
//! i.e. when their distance is strictly below `2 * transmitter_radius`.

use crate::geom::{PolarPoint, polar_distance};
use crate::graph::{Graph, NodeId};
use rand::distributions::Standard;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateOptions {
    pub city_radius: f64,
    pub transmitter_count: usize,
    pub transmitter_radius: f64,
    /// Seed for reproducible placement. `None` draws from OS entropy.
    pub random_seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            city_radius: 100.0,
            transmitter_count: 10,
            transmitter_radius: 10.0,
            random_seed: None,
        }
    }
}

/// Generates a fresh, uncolored graph with OS-seeded randomness.
///
/// Inputs are not validated; negative radii give meaningless (but finite-time) results.
pub fn generate(city_radius: f64, transmitter_count: usize, transmitter_radius: f64) -> Graph {
    generate_with_options(&GenerateOptions {
        city_radius,
        transmitter_count,
        transmitter_radius,
        random_seed: None,
    })
}

pub fn generate_with_options(opts: &GenerateOptions) -> Graph {
    let mut rng = match opts.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_with_rng(
        &mut rng,
        opts.city_radius,
        opts.transmitter_count,
        opts.transmitter_radius,
    )
}

/// Generates a graph drawing positions from `rng`.
///
/// Nodes are named `v1..vN` in generation order. Each new node is compared against all earlier
/// ones before it is appended, so every unordered pair is tested exactly once and no self-loops
/// can appear. Edges are created as `(new, earlier)`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    city_radius: f64,
    transmitter_count: usize,
    transmitter_radius: f64,
) -> Graph {
    let threshold = 2.0 * transmitter_radius;
    let mut graph = Graph::with_capacity(transmitter_count);

    for i in 1..=transmitter_count {
        let u: f64 = rng.sample(Standard);
        let v: f64 = rng.sample(Standard);
        let position = PolarPoint::new(u * city_radius, v * 360.0);

        let overlapping: Vec<NodeId> = graph
            .node_ids()
            .filter(|&earlier| polar_distance(position, graph.node(earlier).position) < threshold)
            .collect();

        let node = graph.add_node(format!("v{i}"), position);
        for earlier in overlapping {
            graph.add_edge(node, earlier);
        }
    }

    tracing::debug!(
        transmitter_count,
        city_radius,
        transmitter_radius,
        edges = graph.edge_count(),
        "generated interference graph"
    );
    graph
}
