//! An ordered forest of directed edges over integer node identifiers.
//!
//! The central type is [`OrderedForest`]: a collection of `source -> target`
//! edges which always forms a rooted forest. Every node has at most one
//! incoming edge while outgoing edges are unconstrained, self-loops are
//! forbidden, and the edge set never contains a cycle. The edges are kept
//! continuously sorted by target identifier to support ordered traversal.
//!
//! Every insertion is validated transactionally: a [`UnionFind`] structure
//! is rebuilt over the current edges and the candidate is only linked in
//! when its endpoints are not yet connected. Insertions that would break an
//! invariant are rejected with an [`InsertError`] and leave the forest
//! untouched.
//!
//! Node identifiers are any type implementing [`memory::EntityIndex`];
//! unsigned integers qualify directly, and the [`NodeId`] newtype is
//! provided for applications that want identifiers kept apart from other
//! integers.
//!
//! # Example
//!
//! ```
//! use edgeforest::{InsertError, OrderedForest};
//!
//! let mut forest = OrderedForest::<u32>::new();
//!
//! forest.insert(1, 2).unwrap();
//! forest.insert(2, 4).unwrap();
//! forest.insert(2, 3).unwrap();
//!
//! // Node 4 already has an incoming edge.
//! assert_eq!(forest.insert(3, 4), Err(InsertError::TargetOccupied));
//! // Nodes 4 and 1 are already connected through 1 -> 2 -> 4.
//! assert_eq!(forest.insert(4, 1), Err(InsertError::Cycle));
//!
//! let edges: Vec<_> = forest.iter().map(|e| (e.source, e.target)).collect();
//! assert_eq!(edges, [(1, 2), (2, 3), (2, 4)]);
//! ```
pub mod connectivity;
pub mod forest;
pub mod memory;

pub use crate::connectivity::UnionFind;
pub use crate::forest::{Edge, InsertError, OrderedForest};

make_entity! {
    /// Identifier of a node in a forest.
    ///
    /// Any unsigned integer type can be used as a node identifier instead;
    /// this newtype exists to keep node identifiers apart from other
    /// integers in larger applications.
    pub struct NodeId(u32);
}
