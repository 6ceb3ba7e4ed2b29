/// Errors raised by the graph algorithms of this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Graph has no vertices to start a traversal from")]
    EmptyGraph,

    #[error("Vertex {0} not contained in graph")]
    UnknownVertex(String),
}

pub type Result<T> = std::result::Result<T, Error>;
