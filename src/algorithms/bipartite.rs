use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::*;
use crate::queue::Queue;

/// Bipartiteness tests via breadth-first two-colouring.
///
/// The traversal colours the start vertex with one colour and every newly discovered
/// vertex with the colour opposite to the vertex it was discovered from. The graph (or
/// component) is bipartite iff no edge ends up joining two vertices of the same colour.
/// Every vertex is enqueued at most once and every adjacency is scanned at most once,
/// so all tests run in $O(|V| + |E|)$ time over the part of the graph they visit.
///
/// A loop $uu$ joins $u$ to itself and therefore makes a graph non-bipartite.
pub trait BipartiteAlgorithms<V> where V: Hash + Eq + Clone {
    /// Decides whether the connected component of an arbitrary start vertex is bipartite.
    /// The start vertex is the first vertex yielded by [Graph::vertices].
    ///
    /// Only that component is traversed. Vertices unreachable from the start vertex are
    /// never coloured, so a graph whose *other* components contain odd cycles is still
    /// reported as bipartite. Use [BipartiteAlgorithms::is_bipartite_all] to check the whole
    /// graph, or [BipartiteAlgorithms::is_bipartite_from] to control the start vertex.
    ///
    /// Returns [Error::EmptyGraph] if the graph has no vertices.
    ///
    /// ```rust
    /// use bipartite::graph::*;
    /// use bipartite::editgraph::EditGraph;
    /// use bipartite::algorithms::BipartiteAlgorithms;
    ///
    /// let mut graph:EditGraph<&str> = EditGraph::new();
    /// graph.add_vertices(["A", "B", "C", "D"]);
    /// graph.add_edges([("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
    /// assert_eq!(graph.is_bipartite(), Ok(true));
    ///
    /// graph.add_vertex(&"E");
    /// graph.add_edges([("B", "E"), ("D", "E")]);
    /// assert_eq!(graph.is_bipartite(), Ok(false));
    /// ```
    fn is_bipartite(&self) -> Result<bool>;

    /// Decides whether the connected component containing `seed` is bipartite.
    ///
    /// Returns [Error::UnknownVertex] if `seed` is not contained in the graph.
    fn is_bipartite_from(&self, seed:&V) -> Result<bool> where V: Debug;

    /// Decides whether the whole graph is bipartite by restarting the traversal in
    /// every component that has not been coloured yet. The graph without vertices
    /// is bipartite.
    fn is_bipartite_all(&self) -> bool;
}

impl<V, G> BipartiteAlgorithms<V> for G where V: Hash + Eq + Clone, G: Graph<V> {
    fn is_bipartite(&self) -> Result<bool> {
        let seed = self.vertices().next().ok_or(Error::EmptyGraph)?;
        debug!(vertices = self.num_vertices(), edges = self.num_edges(), "two-colouring component of first vertex");

        let mut colours = VertexMap::default();
        let res = colour_component(self, seed, &mut colours);

        debug!(coloured = colours.len(), bipartite = res, "two-colouring finished");
        Ok(res)
    }

    fn is_bipartite_from(&self, seed:&V) -> Result<bool> where V: Debug {
        if !self.contains(seed) {
            return Err(Error::UnknownVertex(format!("{seed:?}")))
        }
        debug!(?seed, "two-colouring component of seed");

        let mut colours = VertexMap::default();
        let res = colour_component(self, seed, &mut colours);

        debug!(coloured = colours.len(), bipartite = res, "two-colouring finished");
        Ok(res)
    }

    fn is_bipartite_all(&self) -> bool {
        let mut colours = VertexMap::with_capacity_and_hasher(self.num_vertices(), Default::default());
        let mut components = 0;

        for v in self.vertices() {
            if colours.contains_key(v) {
                continue;
            }
            components += 1;
            if !colour_component(self, v, &mut colours) {
                debug!(components, "component is not bipartite");
                return false;
            }
        }

        debug!(components, "all components are bipartite");
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Colour {
    Zero,
    One
}

impl Colour {
    fn opposite(self) -> Colour {
        match self {
            Colour::Zero => Colour::One,
            Colour::One => Colour::Zero
        }
    }
}

/// Colours the component of `seed` breadth-first, adding to `colours`. A vertex is
/// explored iff it has a colour. Returns `false` as soon as an edge with equally
/// coloured endpoints is found; `colours` is then only partially filled.
fn colour_component<V, G>(graph:&G, seed:&V, colours:&mut VertexMap<V, Colour>) -> bool
        where V: Hash + Eq + Clone, G: Graph<V> + ?Sized {
    let mut queue = Queue::new();
    colours.insert(seed.clone(), Colour::Zero);
    queue.push(seed.clone());

    while let Some(u) = queue.pop() {
        let colour = colours[&u];
        for v in graph.neighbours(&u) {
            match colours.get(v) {
                None => {
                    colours.insert(v.clone(), colour.opposite());
                    queue.push(v.clone());
                }
                Some(&c) if c == colour => {
                    trace!(coloured = colours.len(), "edge joins two vertices of the same colour");
                    return false;
                }
                Some(_) => {}
            }
        }
    }

    true
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
    use crate::editgraph::EditGraph;
    use crate::iterators::*;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn path() {
        let G:EditGraph<&str> = [("A","B"), ("B","C"), ("C","D")].into_iter().collect();
        assert_eq!(G.is_bipartite(), Ok(true));
        assert!(G.is_bipartite_all());
    }

    #[test]
    fn square_and_odd_extension() {
        let mut G:EditGraph<&str> = [("A","B"), ("A","C"), ("B","D"), ("C","D")].into_iter().collect();
        assert_eq!(G.is_bipartite(), Ok(true));

        G.add_edges([("B","E"), ("D","E")]);
        assert_eq!(G.is_bipartite(), Ok(false));
        for v in ["A","B","C","D","E"] {
            assert_eq!(G.is_bipartite_from(&v), Ok(false));
        }
        assert!(!G.is_bipartite_all());
    }

    #[test]
    fn single_vertex() {
        let mut G:EditGraph<&str> = EditGraph::new();
        G.add_vertex(&"A");
        assert_eq!(G.is_bipartite(), Ok(true));
        assert_eq!(G.is_bipartite_from(&"A"), Ok(true));
        assert!(G.is_bipartite_all());
    }

    #[test]
    fn empty_graph() {
        let G:EditGraph<u32> = EditGraph::new();
        assert_eq!(G.is_bipartite(), Err(Error::EmptyGraph));
        assert_eq!(G.is_bipartite_from(&0), Err(Error::UnknownVertex("0".to_string())));
        assert!(G.is_bipartite_all());
    }

    #[test]
    fn two_triangles() {
        let G = EditGraph::cycle(3).disj_union(&EditGraph::cycle(3));
        assert_eq!(G.is_bipartite(), Ok(false));
        for v in G.vertices() {
            assert_eq!(G.is_bipartite_from(v), Ok(false));
        }
        assert!(!G.is_bipartite_all());
    }

    #[test]
    fn seed_decides_component() {
        // Triangle on 0,1,2 and a single edge 3-4
        let G = EditGraph::cycle(3).disj_union(&EditGraph::path(2));

        for v in [0,1,2] {
            assert_eq!(G.is_bipartite_from(&v), Ok(false));
        }
        for v in [3,4] {
            assert_eq!(G.is_bipartite_from(&v), Ok(true));
        }
        assert!(!G.is_bipartite_all());

        let first = *G.vertices().next().unwrap();
        assert_eq!(G.is_bipartite(), G.is_bipartite_from(&first));
    }

    #[test]
    fn repeated_calls_agree() {
        let G = EditGraph::cycle(3).disj_union(&EditGraph::cycle(4));
        let first = G.is_bipartite();
        for _ in 0..10 {
            assert_eq!(G.is_bipartite(), first);
        }
    }

    #[test]
    fn named_graphs() {
        for n in 1..12 {
            assert_eq!(EditGraph::path(n).is_bipartite(), Ok(true));
            assert_eq!(EditGraph::star(n).is_bipartite(), Ok(true));
            assert!(EditGraph::matching(n).is_bipartite_all());
            assert!(EditGraph::biclique(n, n+1).is_bipartite_all());
        }

        for n in 3..12 {
            let expected = n % 2 == 0;
            assert_eq!(EditGraph::cycle(n).is_bipartite(), Ok(expected));
            assert_eq!(EditGraph::clique(n).is_bipartite(), Ok(false));
        }

        assert_eq!(EditGraph::clique(2).is_bipartite(), Ok(true));
    }

    #[test]
    fn loops() {
        let mut G = EditGraph::path(4);
        assert_eq!(G.is_bipartite(), Ok(true));

        G.add_edge(&2, &2);
        assert_eq!(G.is_bipartite(), Ok(false));
        assert_eq!(G.is_bipartite_from(&0), Ok(false));
        assert!(!G.is_bipartite_all());
    }

    #[test]
    fn matching_checks_one_component() {
        // Every component is a single edge, so the seed's component is always fine
        let mut G = EditGraph::matching(5);
        G.add_edge(&20, &21);
        G.add_edge(&21, &22);
        G.add_edge(&22, &20);

        assert_eq!(G.is_bipartite_from(&0), Ok(true));
        assert_eq!(G.is_bipartite_from(&20), Ok(false));
        assert!(!G.is_bipartite_all());
    }

    #[test]
    fn random_bipartite() {
        let mut rng = ChaCha8Rng::seed_from_u64(2342);

        for _ in 0..50 {
            let s:u32 = rng.gen_range(1..20);
            let t:u32 = rng.gen_range(1..20);

            // Edges only run between 0..s and s..s+t
            let mut G:EditGraph<u32> = EditGraph::new();
            G.add_vertices(0..(s+t));
            G.add_edge(&0, &s);
            for _ in 0..rng.gen_range(0..80) {
                let u = rng.gen_range(0..s);
                let v = rng.gen_range(s..(s+t));
                G.add_edge(&u, &v);
            }

            assert!(G.is_bipartite_all());
            for v in G.vertices() {
                assert_eq!(G.is_bipartite_from(v), Ok(true));
            }

            // Close a triangle on top of some edge
            let (u, v) = G.edges().next().unwrap();
            let x = s + t;
            G.add_edge(&u, &x);
            G.add_edge(&v, &x);

            assert!(!G.is_bipartite_all());
            assert_eq!(G.is_bipartite_from(&u), Ok(false));
            assert_eq!(G.is_bipartite_from(&x), Ok(false));
        }
    }

    #[test]
    fn colours() {
        assert_eq!(Colour::Zero.opposite(), Colour::One);
        assert_eq!(Colour::One.opposite().opposite(), Colour::One);
    }
}
