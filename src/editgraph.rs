//!
//! A versatile undirected graph that allows insertions and deletions. It stores adjacency
//! sets in hash maps, so it is not very memory- or cache-efficient, but every editing
//! operation runs in $O(1)$ expected time (removing a vertex costs its degree).
//!
//! Graphs can be loaded from file (see [`bipartite::io`](crate::io)), built from a sequence of
//! edges or constructed by adding vertices and edges by hand. Vertices may be of any hashable
//! type:
//!
//! ```rust
//! use bipartite::graph::*;
//! use bipartite::editgraph::EditGraph;
//!
//! let graph:EditGraph<&str> = vec![("A","B"), ("B","C"), ("C","D")].into_iter().collect();
//! assert_eq!(graph.num_vertices(), 4);
//! assert_eq!(graph.num_edges(), 3);
//! assert!(graph.adjacent(&"C", &"B"));
//! ```
//!
//! For `u32` vertices the struct offers a few constructors for named graphs:
//!
//! ```rust
//! use bipartite::graph::*;
//! use bipartite::iterators::*;
//! use bipartite::editgraph::EditGraph;
//!
//! let graph = EditGraph::path(5);
//! let edges:EdgeSet<u32> = vec![(0,1),(1,2),(2,3),(3,4)].into_iter().collect();
//! assert_eq!(graph.edges().collect::<EdgeSet<u32>>(), edges);
//!
//! let graph = EditGraph::cycle(5);
//! let edges:EdgeSet<u32> = vec![(0,1),(1,2),(2,3),(3,4),(0,4)].into_iter().collect();
//! assert_eq!(graph.edges().collect::<EdgeSet<u32>>(), edges);
//!
//! let graph = EditGraph::biclique(2,3);
//! let edges:EdgeSet<u32> = vec![(0,2),(0,3),(0,4),(1,2),(1,3),(1,4)].into_iter().collect();
//! assert_eq!(graph.edges().collect::<EdgeSet<u32>>(), edges);
//! ```

use fxhash::FxHashMap;

use std::hash::Hash;

use crate::graph::*;
use crate::iterators::*;

/// An implementation of the [MutableGraph] trait with additional generating functions.
#[derive(Debug, Clone)]
pub struct EditGraph<V> where V: Hash + Eq + Clone {
    adj: FxHashMap<V, VertexSet<V>>,
    m: usize
}

impl<V> PartialEq for EditGraph<V> where V: Hash + Eq + Clone {
    fn eq(&self, other: &Self) -> bool {
        if self.num_vertices() != other.num_vertices() {
            return false
        }
        if self.num_edges() != other.num_edges() {
            return false
        }
        self.adj == other.adj
    }
}
impl<V> Eq for EditGraph<V> where V: Hash + Eq + Clone {}

impl<V> Default for EditGraph<V> where V: Hash + Eq + Clone {
    fn default() -> Self {
        EditGraph::new()
    }
}

impl<V> Graph<V> for EditGraph<V> where V: Hash + Eq + Clone {
    /*
        Basic properties and queries
    */
    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn num_edges(&self) -> usize {
        self.m
    }

    fn adjacent(&self, u:&V, v:&V) -> bool {
        match self.adj.get(u) {
            Some(N) => N.contains(v),
            _ => false
        }
    }

    fn degree(&self, u:&V) -> u32 {
        self.adj.get(u).map_or(0, |N| N.len() as u32)
    }

    /*
        Iteration and access
    */
    fn contains(&self, u:&V) -> bool {
        self.adj.contains_key(u)
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&'a V> + 'a> where V: 'a {
        Box::new(self.adj.keys())
    }

    fn neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&'a V> + 'a> where V: 'a {
        match self.adj.get(u) {
            Some(N) => Box::new(N.iter()),
            None => panic!("Vertex not contained in EditGraph")
        }
    }
}

impl<V> MutableGraph<V> for EditGraph<V> where V: Hash + Eq + Clone {
    fn new() -> EditGraph<V> {
        EditGraph{adj: FxHashMap::default(), m: 0}
    }

    fn with_capacity(n_guess:usize) -> Self {
        EditGraph {
            adj: FxHashMap::with_capacity_and_hasher(n_guess, Default::default()),
            m: 0
        }
    }

    fn add_vertex(&mut self, u:&V) -> bool {
        if !self.adj.contains_key(u) {
            self.adj.insert(u.clone(), VertexSet::default());
            true
        } else {
            false
        }
    }

    fn add_edge(&mut self, u:&V, v:&V) -> bool {
        self.add_vertex(u);
        self.add_vertex(v);
        if self.adjacent(u, v) {
            return false
        }

        if let Some(N) = self.adj.get_mut(u) {
            N.insert(v.clone());
        }
        if let Some(N) = self.adj.get_mut(v) {
            N.insert(u.clone());
        }
        self.m += 1;
        true
    }

    fn remove_edge(&mut self, u:&V, v:&V) -> bool {
        if !self.adjacent(u, v) {
            return false
        }

        if let Some(N) = self.adj.get_mut(u) {
            N.remove(v);
        }
        if let Some(N) = self.adj.get_mut(v) {
            N.remove(u);
        }
        self.m -= 1;
        true
    }

    fn remove_vertex(&mut self, u:&V) -> bool {
        let N = match self.adj.remove(u) {
            Some(N) => N,
            None => return false
        };

        for v in &N {
            // The loop uv with v == u went away with the adjacency set itself
            if let Some(NN) = self.adj.get_mut(v) {
                NN.remove(u);
            }
            self.m -= 1;
        }

        true
    }
}

impl<V> FromIterator<Edge<V>> for EditGraph<V> where V: Hash + Eq + Clone {
    fn from_iter<T: IntoIterator<Item=Edge<V>>>(iter: T) -> Self {
        let mut res = EditGraph::new();
        res.add_edges(iter);
        res
    }
}

impl EditGraph<u32> {
    /// Generates a path on `n` vertices. A path on one vertex is a single isolated vertex.
    pub fn path(n:u32) -> EditGraph<u32> {
        let mut res = EditGraph::with_capacity(n as usize);
        if n > 0 {
            res.add_vertex(&0);
        }
        for v in 1..n {
            res.add_edge(&(v-1), &v);
        }

        res
    }

    /// Generates a cycle on `n` vertices. Meaningful for `n >= 3`: smaller values
    /// produce a loop (`n = 1`) or a single edge (`n = 2`).
    pub fn cycle(n:u32) -> EditGraph<u32> {
        let mut res = EditGraph::with_capacity(n as usize);
        for u in 0..n {
            let v = (u+1) % n;
            res.add_edge(&u,&v);
        }

        res
    }

    /// Generates a matching on `2n` vertices.
    pub fn matching(n:u32) -> EditGraph<u32> {
        let mut res = EditGraph::with_capacity(2*n as usize);
        for u in 0..n {
            let v = u+n;
            res.add_edge(&u,&v);
        }

        res
    }

    /// Generates a star with `n` leaves, so `n+1` vertices total.
    pub fn star(n:u32) -> EditGraph<u32> {
        let mut res = EditGraph::biclique(1, n);
        res.add_vertex(&0);
        res
    }

    /// Generates a complete graph (clique) on `n` vertices.
    pub fn clique(n:u32) -> EditGraph<u32> {
        let mut res = EditGraph::with_capacity(n as usize);
        for u in 0..n {
            res.add_vertex(&u);
            for v in (u+1)..n {
                res.add_edge(&u,&v);
            }
        }

        res
    }

    /// Generates a complete bipartite graph (biclique) on `s`+`t` vertices.
    pub fn biclique(s:u32, t:u32) -> EditGraph<u32> {
        let mut res = EditGraph::with_capacity((s+t) as usize);
        for u in 0..s {
            for v in s..(s+t) {
                res.add_edge(&u,&v);
            }
        }

        res
    }

    /// Creates a new graph that is the disjoint union of `self` and `graph`.
    /// The vertices of the second graph are relabelled to avoid index clashes.
    pub fn disj_union(&self, graph: &EditGraph<u32>) -> EditGraph<u32> {
        let mut res = EditGraph::with_capacity(self.len() + graph.len());

        let offset:u32 = self.vertices().max().map_or(0, |v| v + 1);

        res.add_vertices(self.vertices().cloned());
        res.add_edges(self.edges());

        res.add_vertices(graph.vertices().map(|v| v+offset));
        res.add_edges(graph.edges().map(|(u,v)| (u+offset,v+offset) ));

        res
    }
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn equality() {
        let mut G:EditGraph<u32> = EditGraph::new();
        G.add_edge(&0, &1);
        G.add_edge(&1, &2);
        G.add_edge(&2, &3);
        G.add_edge(&3, &0);

        let mut H = G.clone();
        assert_eq!(G, H);
        H.add_edge(&0, &2);
        assert_ne!(G, H);
        H.remove_edge(&0, &2);
        assert_eq!(G, H);
        assert_eq!(G, EditGraph::cycle(4));
    }

    #[test]
    fn basic_operations() {
        let mut G:EditGraph<u32> = EditGraph::new();
        G.add_vertex(&0);
        G.add_vertex(&1);
        G.add_vertex(&2);
        assert_eq!(G.num_edges(), 0);

        G.add_edge(&0, &1);
        assert_eq!(G.degree(&0), 1);
        assert_eq!(G.degree(&1), 1);
        assert_eq!(G.degree(&2), 0);
        assert_eq!(G.num_vertices(), 3);
        assert_eq!(G.num_edges(), 1);

        assert!(!G.add_edge(&1, &0));
        assert_eq!(G.num_edges(), 1);

        G.remove_edge(&0, &1);
        assert_eq!(G.degree(&0), 0);
        assert_eq!(G.degree(&1), 0);
        assert_eq!(G.num_edges(), 0);

        G.add_edge(&0, &1);
        G.add_edge(&0, &2);
        G.add_edge(&1, &2);
        assert_eq!(G.degree(&0), 2);
        assert_eq!(G.num_edges(), 3);

        G.remove_vertex(&2);
        assert_eq!(G.degree(&0), 1);
        assert_eq!(G.num_vertices(), 2);
        assert_eq!(G.num_edges(), 1);

        G.remove_vertex(&1);
        assert_eq!(G.degree(&0), 0);
        assert_eq!(G.num_vertices(), 1);
        assert_eq!(G.num_edges(), 0);

        G.remove_vertex(&0);
        assert!(G.is_empty());
        assert_eq!(G.num_edges(), 0);
        assert!(!G.remove_vertex(&0));
    }

    #[test]
    fn loops() {
        let mut G:EditGraph<u32> = EditGraph::new();
        G.add_edge(&0, &1);
        G.add_edge(&0, &0);

        assert_eq!(G.num_edges(), 2);
        assert_eq!(G.degree(&0), 2);
        assert!(G.adjacent(&0, &0));

        G.remove_vertex(&0);
        assert_eq!(G.num_vertices(), 1);
        assert_eq!(G.num_edges(), 0);
    }

    #[test]
    fn labelled_vertices() {
        let G:EditGraph<String> = vec![("A", "B"), ("B", "C")].into_iter()
                                    .map(|(u,v)| (u.to_string(), v.to_string()))
                                    .collect();

        let (a, b) = ("A".to_string(), "B".to_string());
        assert!(G.contains(&b));
        assert_eq!(G.degree(&b), 2);
        assert_eq!(G.neighbours(&a).collect::<VertexSetRef<String>>(),
                    [&b].into_iter().collect());
    }

    #[test]
    fn generators() {
        assert_eq!(EditGraph::path(0).num_vertices(), 0);
        assert_eq!(EditGraph::path(1).num_vertices(), 1);
        assert_eq!(EditGraph::path(1).num_edges(), 0);
        assert_eq!(EditGraph::path(6).num_edges(), 5);

        assert_eq!(EditGraph::matching(4).num_vertices(), 8);
        assert_eq!(EditGraph::matching(4).num_edges(), 4);

        assert_eq!(EditGraph::star(0).num_vertices(), 1);
        assert_eq!(EditGraph::star(5).degree(&0), 5);

        assert_eq!(EditGraph::clique(1).num_vertices(), 1);
        assert_eq!(EditGraph::clique(5).num_edges(), 10);
        assert_eq!(EditGraph::biclique(3, 4).num_edges(), 12);
    }

    #[test]
    fn disjoint_union() {
        let G = EditGraph::cycle(3).disj_union(&EditGraph::path(2));

        assert_eq!(G.num_vertices(), 5);
        assert_eq!(G.num_edges(), 4);
        assert!(G.adjacent(&3, &4));
        assert!(!G.adjacent(&2, &3));
    }
}
