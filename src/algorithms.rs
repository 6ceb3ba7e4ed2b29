//! Algorithms implemented as extension traits on top of [Graph](crate::graph::Graph).
mod bipartite;

pub use bipartite::BipartiteAlgorithms;
