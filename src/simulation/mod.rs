//! Synthetic workload generation.

pub mod random_graph;

pub use random_graph::{generate_random_graph, GraphConfig, GraphConfigError};
