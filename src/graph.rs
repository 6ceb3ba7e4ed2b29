//! Basic graph traits and the vertex-keyed collections used throughout the crate.
//!
//! Vertices are opaque identifiers: any type that is [Hash], [Eq] and [Clone] can serve as a
//! vertex, e.g. `u32` for generated graphs or `String` for graphs loaded from labelled edge lists.
use fxhash::{FxHashMap, FxHashSet};

use std::hash::Hash;

pub type Edge<V> = (V, V);
pub type VertexSet<V> = FxHashSet<V>;
pub type VertexSetRef<'a, V> = FxHashSet<&'a V>;
pub type VertexMap<V, T> = FxHashMap<V, T>;
pub type EdgeSet<V> = FxHashSet<Edge<V>>;

/// Read-only access to an undirected graph.
///
/// Implementors guarantee symmetry: if `v` is among the neighbours of `u` then `u`
/// is among the neighbours of `v`. Algorithms in this crate rely on it and do not check it.
pub trait Graph<V> where V: Hash + Eq + Clone {
    /// Returns the number of vertices in the graph.
    fn num_vertices(&self) -> usize;

    /// Returns the number of edges in the graph.
    fn num_edges(&self) -> usize;

    /// Alias for [Graph::num_vertices].
    fn len(&self) -> usize {
        self.num_vertices()
    }

    /// Returns `true` if the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    /// Returns whether the vertex `u` is contained in the graph.
    fn contains(&self, u:&V) -> bool;

    /// Returns whether vertices `u` and `v` are connected by an edge.
    fn adjacent(&self, u:&V, v:&V) -> bool;

    /// Returns the number of edges incident to `u`. A loop counts once.
    fn degree(&self, u:&V) -> u32;

    /// Iterates over all vertices. Two calls on an unmodified graph yield the
    /// same order.
    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&'a V> + 'a> where V: 'a;

    /// Iterates over the neighbours of `u`.
    ///
    /// Implementations may panic if `u` is not contained in the graph.
    fn neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&'a V> + 'a> where V: 'a;
}

/// A graph that supports insertion and deletion of vertices and edges.
pub trait MutableGraph<V>: Graph<V> where V: Hash + Eq + Clone {
    /// Creates an empty graph.
    fn new() -> Self;

    /// Creates an empty graph with space reserved for roughly `n_guess` vertices.
    fn with_capacity(n_guess:usize) -> Self;

    /// Adds the vertex `u`. Returns `false` if it already existed.
    fn add_vertex(&mut self, u:&V) -> bool;

    /// Removes `u` together with all incident edges. Returns `false` if `u` did not exist.
    fn remove_vertex(&mut self, u:&V) -> bool;

    /// Adds the edge `uv`, inserting missing endpoints. Returns `false` if the edge existed.
    fn add_edge(&mut self, u:&V, v:&V) -> bool;

    /// Removes the edge `uv`. Returns `false` if there was no such edge.
    fn remove_edge(&mut self, u:&V, v:&V) -> bool;

    /// Adds all vertices of the sequence and returns how many of them were new.
    fn add_vertices<I>(&mut self, vertices:I) -> u32 where I: IntoIterator<Item=V> {
        let mut count = 0;
        for v in vertices {
            if self.add_vertex(&v) {
                count += 1;
            }
        }
        count
    }

    /// Adds all edges of the sequence and returns how many of them were new.
    fn add_edges<I>(&mut self, edges:I) -> u32 where I: IntoIterator<Item=Edge<V>> {
        let mut count = 0;
        for (u,v) in edges {
            if self.add_edge(&u, &v) {
                count += 1;
            }
        }
        count
    }
}
