#![forbid(unsafe_code)]

//! Frequency assignment for radio transmitters in a circular city.
//!
//! The pipeline is:
//! 1. [`generate`] scatters transmitters over the city disk and links every pair whose coverage
//!    disks overlap, producing an interference [`Graph`].
//! 2. [`color`] assigns each transmitter a frequency ("color") so that no two interfering
//!    transmitters share one, using a degree-ordered greedy heuristic. The result is proper but
//!    not minimal.
//! 3. [`write_gxl`] / [`read_gxl`] persist a graph in the GXL interchange format.
//!
//! Everything here is synchronous and single-threaded; a `Graph` is not meant to be shared across
//! threads while it is being colored.

pub mod coloring;
pub mod error;
pub mod generate;
pub mod geom;
pub mod graph;
pub mod gxl;

pub use coloring::{Coloring, color, color_greedy};
pub use error::{Error, Result};
pub use generate::{GenerateOptions, generate, generate_with_options, generate_with_rng};
pub use geom::{Point, PolarPoint, polar_distance};
pub use graph::{Color, Edge, EdgeId, Graph, GraphStats, Node, NodeId};
pub use gxl::{from_gxl_str, read_gxl, to_gxl_string, write_gxl};
