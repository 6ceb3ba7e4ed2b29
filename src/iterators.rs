use std::hash::Hash;

use crate::graph::*;

pub type VertexIterator<'a, V> = Box<dyn Iterator<Item=&'a V> + 'a>;

/*
    Neighbourhood iterator for normal graphs. At each step,
    the iterator returns a pair (v,N(v)).
*/
pub struct NIterator<'a, V, G> where V: Hash + Eq + Clone + 'a, G: Graph<V> {
    graph: &'a G,
    v_it: VertexIterator<'a, V>,
}

impl<'a, V, G> NIterator<'a, V, G> where V: Hash + Eq + Clone + 'a, G: Graph<V> {
    pub fn new(graph: &'a G) -> NIterator<'a, V, G> {
        NIterator {
            graph,
            v_it: graph.vertices(),
        }
    }
}

impl<'a, V, G> Iterator for NIterator<'a, V, G> where V: Hash + Eq + Clone + 'a, G: Graph<V> {
    type Item = (&'a V, VertexIterator<'a, V>);

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.v_it.next()?;
        let N = self.graph.neighbours(v);

        Some((v, N))
    }
}

/*
    Edge iterator for normal graphs.
*/
pub struct EdgeIterator<'a, V, G> where V: Hash + Eq + Clone + Ord + 'a, G: Graph<V> {
    N_it: NIterator<'a, V, G>,
    curr: Option<(&'a V, VertexIterator<'a, V>)>,
}

impl<'a, V, G> EdgeIterator<'a, V, G> where V: Hash + Eq + Clone + Ord + 'a, G: Graph<V> {
    pub fn new(graph: &'a G) -> EdgeIterator<'a, V, G> {
        let mut N_it = NIterator::new(graph);
        let curr = N_it.next();
        EdgeIterator { N_it, curr }
    }
}

impl<'a, V, G> Iterator for EdgeIterator<'a, V, G> where V: Hash + Eq + Clone + Ord + 'a, G: Graph<V> {
    type Item = Edge<V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (v, N) = self.curr.as_mut()?;
            let v:&'a V = *v;
            match N.next() {
                // Tie-breaking so we only return every edge once
                Some(u) if v <= u => return Some((v.clone(), u.clone())),
                Some(_) => continue,
                None => self.curr = self.N_it.next()
            }
        }
    }
}

pub trait EdgeIterable<V, G> where V: Hash + Eq + Clone + Ord, G: Graph<V> {
    /// Iterates over all edges. Each edge $uv$ is returned once, as the pair
    /// with the smaller endpoint first.
    fn edges<'a>(&'a self) -> EdgeIterator<'a, V, G> where V: 'a, G: 'a;
}

impl<V, G> EdgeIterable<V, G> for G where V: Hash + Eq + Clone + Ord, G: Graph<V> {
    fn edges<'a>(&'a self) -> EdgeIterator<'a, V, G> where V: 'a, G: 'a {
        EdgeIterator::new(self)
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
