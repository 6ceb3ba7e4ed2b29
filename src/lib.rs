//! Bipartiteness testing for sparse graphs.
//!
//! A graph is *bipartite* if its vertices can be split into two sets such that every edge
//! runs between the two sets. Equivalently, the graph has a proper two-colouring, which
//! exists iff the graph contains no cycle of odd length. This crate decides the property
//! with a breadth-first two-colouring in linear time.
//!
//! Graphs are stored in an [EditGraph](editgraph::EditGraph) whose vertices can be any
//! hashable type. The tests live in the [BipartiteAlgorithms](algorithms::BipartiteAlgorithms)
//! extension trait, which is available for every [Graph](graph::Graph):
//!
//! ```rust
//! use bipartite::graph::*;
//! use bipartite::editgraph::EditGraph;
//! use bipartite::algorithms::BipartiteAlgorithms;
//!
//! let mut graph:EditGraph<u32> = EditGraph::new();
//! graph.add_edges([(0,1), (1,2), (2,3), (3,0)]);
//! assert_eq!(graph.is_bipartite(), Ok(true));
//!
//! // A chord turns the square into two triangles
//! graph.add_edge(&0, &2);
//! assert_eq!(graph.is_bipartite(), Ok(false));
//!
//! // Without vertices there is nothing to start the traversal from
//! let empty:EditGraph<u32> = EditGraph::new();
//! assert_eq!(empty.is_bipartite(), Err(bipartite::Error::EmptyGraph));
//! assert!(empty.is_bipartite_all());
//! ```
#![allow(non_snake_case)]

pub mod algorithms;
pub mod editgraph;
pub mod error;
pub mod graph;
pub mod io;
pub mod iterators;
pub mod queue;

pub use error::{Error, Result};
