use std::fmt;
use std::iter::FusedIterator;

use bitvec::vec::BitVec;
use thiserror::Error;

use crate::connectivity::UnionFind;
use crate::memory::map::SecondaryMap;
use crate::memory::EntityIndex;

/// A directed edge between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<Index> {
    /// The node the edge starts at.
    pub source: Index,
    /// The node the edge points to.
    pub target: Index,
}

/// A forest of directed edges kept sorted by target identifier.
///
/// The forest maintains four invariants across every mutation:
///
///  - no two edges share a target, so every node has at most one parent,
///  - no edge connects a node to itself,
///  - the edges never close a cycle when treated as undirected connections,
///  - iteration yields edges in ascending target order.
///
/// Insertions that would break an invariant are rejected and leave the
/// forest untouched. Fan-out is unconstrained: any number of edges may start
/// at the same node.
///
/// Since targets are unique, edges are stored keyed by their target
/// identifier, with doubly linked neighbour links maintaining the sorted
/// order.
///
/// # Example
///
/// ```
/// # use edgeforest::{InsertError, OrderedForest};
/// let mut forest = OrderedForest::<u32>::new();
///
/// forest.insert(1, 2).unwrap();
/// forest.insert(2, 4).unwrap();
/// forest.insert(2, 3).unwrap();
///
/// assert_eq!(forest.insert(4, 1), Err(InsertError::Cycle));
/// assert!(forest.iter().map(|e| e.target).eq([2, 3, 4]));
/// ```
#[derive(Debug, Clone)]
pub struct OrderedForest<Index> {
    data: SecondaryMap<Index, EdgeData<Index>>,
    /// Occupancy of the target slots in `data`.
    present: BitVec,
    /// The targets of the edges at both ends of the sorted sequence, if any.
    ends: [Option<Index>; 2],
    len: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct EdgeData<Index> {
    /// The source of the edge stored in this target slot.
    source: Index,
    /// The targets of the edges with the neighbouring smaller and larger
    /// targets, if any.
    siblings: [Option<Index>; 2],
}

impl<Index: EntityIndex> OrderedForest<Index> {
    /// Creates a new empty forest.
    pub fn new() -> Self {
        Self {
            data: SecondaryMap::new(),
            present: BitVec::new(),
            ends: [None; 2],
            len: 0,
        }
    }

    /// Creates a new empty forest with preallocated space for the targets
    /// `0..nodes`.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            data: SecondaryMap::with_capacity(nodes),
            present: BitVec::with_capacity(nodes),
            ends: [None; 2],
            len: 0,
        }
    }

    /// Returns the number of edges in the forest.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the forest contains no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether some edge points at the target.
    #[inline]
    pub fn contains_target(&self, target: Index) -> bool {
        self.present.get(target.index()).map_or(false, |bit| *bit)
    }

    /// Returns whether the exact edge is in the forest.
    pub fn contains(&self, source: Index, target: Index) -> bool {
        self.contains_target(target) && self.data[target].source == source
    }

    /// Returns the source of the edge pointing at the target, if any.
    ///
    /// Since fan-in is limited to one edge per node, this is the unique
    /// parent of the node in the forest.
    pub fn source(&self, target: Index) -> Option<Index> {
        if self.contains_target(target) {
            Some(self.data[target].source)
        } else {
            None
        }
    }

    /// Returns the edge with the smallest target, if any.
    pub fn first(&self) -> Option<Edge<Index>> {
        self.ends[0].map(|target| Edge {
            source: self.data[target].source,
            target,
        })
    }

    /// Returns the edge with the largest target, if any.
    pub fn last(&self) -> Option<Edge<Index>> {
        self.ends[1].map(|target| Edge {
            source: self.data[target].source,
            target,
        })
    }

    /// Inserts the edge `source -> target` at its sorted position.
    ///
    /// The position is found by a scan from the front. Before the edge is
    /// linked in, the current edges together with the candidate are checked
    /// for acyclicity; the forest is only modified when the candidate passes
    /// every check.
    ///
    /// # Errors
    ///
    ///  - When the edge connects a node to itself.
    ///  - When an edge pointing at the target is already present. This also
    ///    rejects exact duplicates, which makes insertion idempotent.
    ///  - When the edge would close a cycle.
    ///
    /// # Example
    ///
    /// ```
    /// # use edgeforest::{InsertError, OrderedForest};
    /// let mut forest = OrderedForest::<u32>::new();
    ///
    /// forest.insert(1, 2).unwrap();
    /// assert_eq!(forest.insert(1, 2), Err(InsertError::TargetOccupied));
    /// assert_eq!(forest.insert(3, 3), Err(InsertError::SelfLoop));
    /// assert_eq!(forest.len(), 1);
    /// ```
    pub fn insert(&mut self, source: Index, target: Index) -> Result<(), InsertError> {
        if source == target {
            return Err(InsertError::SelfLoop);
        } else if self.contains_target(target) {
            return Err(InsertError::TargetOccupied);
        }

        let mut prev = None;

        for edge in self.iter() {
            if edge.target.index() > target.index() {
                break;
            }

            prev = Some(edge.target);
        }

        if self.would_close_cycle(source, target) {
            return Err(InsertError::Cycle);
        }

        let next = match prev {
            Some(prev) => self.data[prev].siblings[1],
            None => self.ends[0],
        };

        self.data[target] = EdgeData {
            source,
            siblings: [prev, next],
        };

        match prev {
            Some(prev) => self.data[prev].siblings[1] = Some(target),
            None => self.ends[0] = Some(target),
        }

        match next {
            Some(next) => self.data[next].siblings[0] = Some(target),
            None => self.ends[1] = Some(target),
        }

        let slot = target.index();

        if slot >= self.present.len() {
            self.present.resize(slot + 1, false);
        }

        self.present.set(slot, true);
        self.len += 1;

        Ok(())
    }

    /// Returns whether inserting `source -> target` would close a cycle.
    ///
    /// Edges are treated as undirected connections: the candidate closes a
    /// cycle exactly when its endpoints are already connected through the
    /// current edges. The check rebuilds a [`UnionFind`] covering every
    /// identifier up to the largest one among the current edges and the
    /// candidate.
    pub fn would_close_cycle(&self, source: Index, target: Index) -> bool {
        let mut max_id = source.index().max(target.index());

        for edge in self.iter() {
            max_id = max_id.max(edge.source.index()).max(edge.target.index());
        }

        let mut connectivity = UnionFind::with_capacity(max_id + 1);

        for edge in self.iter() {
            connectivity.union(edge.source, edge.target);
        }

        connectivity.connected(source, target)
    }

    /// Removes and returns the edge matching both `source` and `target`.
    ///
    /// Returns `None` and leaves the forest unchanged when no edge matches
    /// exactly; an edge pointing at `target` from a different source does
    /// not count as a match.
    pub fn remove(&mut self, source: Index, target: Index) -> Option<Edge<Index>> {
        if !self.contains(source, target) {
            return None;
        }

        let siblings = self.data[target].siblings;

        match siblings[0] {
            Some(prev) => self.data[prev].siblings[1] = siblings[1],
            None => self.ends[0] = siblings[1],
        }

        match siblings[1] {
            Some(next) => self.data[next].siblings[0] = siblings[0],
            None => self.ends[1] = siblings[0],
        }

        self.data[target] = EdgeData::default();
        self.present.set(target.index(), false);
        self.len -= 1;

        Some(Edge { source, target })
    }

    /// Removes every edge from the forest.
    pub fn clear(&mut self) {
        self.data.clear();
        self.present.clear();
        self.ends = [None; 2];
        self.len = 0;
    }

    /// Iterates over the edges in ascending target order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Index> {
        Iter {
            forest: self,
            next: self.ends[0],
            prev: self.ends[1],
            len: self.len,
        }
    }
}

impl<Index: EntityIndex> Default for OrderedForest<Index> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, Index: EntityIndex> IntoIterator for &'a OrderedForest<Index> {
    type Item = Edge<Index>;
    type IntoIter = Iter<'a, Index>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<Index: EntityIndex + fmt::Display> fmt::Display for OrderedForest<Index> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in self.iter() {
            writeln!(f, "{} -> {}", edge.source, edge.target)?;
        }

        Ok(())
    }
}

/// Iterator over the edges of a forest created by [`OrderedForest::iter`].
#[derive(Clone)]
pub struct Iter<'a, Index> {
    forest: &'a OrderedForest<Index>,
    next: Option<Index>,
    prev: Option<Index>,
    len: usize,
}

impl<'a, Index: EntityIndex> Iterator for Iter<'a, Index> {
    type Item = Edge<Index>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        let target = self.next.unwrap();
        let data = &self.forest.data[target];
        self.next = data.siblings[1];

        Some(Edge {
            source: data.source,
            target,
        })
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, Index: EntityIndex> DoubleEndedIterator for Iter<'a, Index> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        let target = self.prev.unwrap();
        let data = &self.forest.data[target];
        self.prev = data.siblings[0];

        Some(Edge {
            source: data.source,
            target,
        })
    }
}

impl<'a, Index: EntityIndex> ExactSizeIterator for Iter<'a, Index> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, Index: EntityIndex> FusedIterator for Iter<'a, Index> {}

/// Error returned by [`OrderedForest::insert`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError {
    #[error("the edge connects a node to itself")]
    SelfLoop,
    #[error("an edge pointing at the target is already present")]
    TargetOccupied,
    #[error("inserting the edge would close a cycle")]
    Cycle,
}
