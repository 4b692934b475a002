//! Connectivity queries over node identifiers.
use crate::memory::{EntityIndex, SecondaryMap};

/// A union-find structure tracking a partition of node identifiers into
/// disjoint sets.
///
/// Identifiers that were never united form singleton sets, including
/// identifiers beyond the preallocated table, so the structure behaves as if
/// it were total over the identifier type.
#[derive(Debug, Clone)]
pub struct UnionFind<Index> {
    parents: SecondaryMap<Index, Option<Index>>,
}

impl<Index: EntityIndex> UnionFind<Index> {
    /// Creates a union-find structure in which every identifier is its own
    /// singleton set.
    pub fn new() -> Self {
        Self {
            parents: SecondaryMap::new(),
        }
    }

    /// Creates a union-find structure with a parent table covering the
    /// identifiers `0..nodes`.
    ///
    /// Callers validating a set of edges pass the largest identifier plus
    /// one, so that the largest identifier itself is covered by the table.
    pub fn with_capacity(nodes: usize) -> Self {
        let mut parents = SecondaryMap::with_capacity(nodes);
        parents.resize(nodes);
        Self { parents }
    }

    /// Returns the representative of the set containing a node.
    ///
    /// Walks the parent chain iteratively. The chain cannot contain a cycle
    /// since [`UnionFind::union`] only ever attaches one root below another.
    pub fn find(&self, mut node: Index) -> Index {
        while let Some(parent) = self.parents[node] {
            node = parent;
        }

        node
    }

    /// Unites the sets containing the two nodes.
    ///
    /// The representative of `b`'s set becomes the representative of the
    /// merged set. Returns `false` when the nodes already share a set, in
    /// which case nothing changes.
    pub fn union(&mut self, a: Index, b: Index) -> bool {
        let a = self.find(a);
        let b = self.find(b);

        if a == b {
            return false;
        }

        self.parents[a] = Some(b);
        true
    }

    /// Returns whether the two nodes are in the same set.
    pub fn connected(&self, a: Index, b: Index) -> bool {
        self.find(a) == self.find(b)
    }
}

impl<Index: EntityIndex> Default for UnionFind<Index> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fresh_nodes_are_singletons() {
        let connectivity = UnionFind::<u32>::with_capacity(8);

        assert_eq!(connectivity.find(3), 3);
        assert!(!connectivity.connected(3, 5));
        assert!(connectivity.connected(5, 5));
    }

    #[test]
    fn union_attaches_the_first_root_below_the_second() {
        let mut connectivity = UnionFind::<u32>::with_capacity(4);

        assert!(connectivity.union(0, 1));
        assert_eq!(connectivity.find(0), 1);
        assert_eq!(connectivity.find(1), 1);

        assert!(connectivity.union(1, 2));
        assert_eq!(connectivity.find(0), 2);
        assert!(!connectivity.union(2, 0));
    }

    #[test]
    fn connectivity_is_transitive() {
        let mut connectivity = UnionFind::<u32>::with_capacity(8);

        connectivity.union(0, 1);
        connectivity.union(2, 3);
        assert!(!connectivity.connected(0, 3));

        connectivity.union(1, 2);
        assert!(connectivity.connected(0, 3));
    }

    #[test]
    fn identifiers_beyond_the_table_are_singletons() {
        let mut connectivity = UnionFind::<u32>::with_capacity(2);

        assert_eq!(connectivity.find(1000), 1000);
        assert!(connectivity.union(1000, 0));
        assert!(connectivity.connected(1000, 0));
    }

    #[test]
    fn largest_identifier_is_covered_by_the_table() {
        let mut connectivity = UnionFind::<u32>::with_capacity(8);

        assert!(connectivity.union(7, 0));
        assert!(connectivity.connected(0, 7));
        assert!(!connectivity.union(0, 7));
    }
}
