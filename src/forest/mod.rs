//! Components maintaining an ordered forest of directed edges.
//!
//! Edges are kept sorted ascending by their target identifier. Every target
//! appears at most once, so a node never has more than one incoming edge,
//! while the number of outgoing edges per node is unconstrained. The edge
//! set as a whole never contains a cycle.
mod ordered;

pub use ordered::{Edge, InsertError, Iter, OrderedForest};
