//! Search nodes, the per-call node arena and the frontier.

use crate::grid::Coord;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Index of a [`SearchNode`] in the arena of one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One discovered grid position.
///
/// Nodes are never updated in place: a cheaper route to the same cell is a
/// new node. `parent` is a back-link into the arena used only for path
/// reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub coord: Coord,
    /// Steps from the start (g-cost).
    pub depth: usize,
    /// `depth + heuristic` (f-cost).
    pub estimated_cost: usize,
    pub parent: Option<NodeId>,
}

/// Append-only node storage owned by a single search.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub(crate) fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub(crate) fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Coordinates from the root to `id`, following parent links.
    pub(crate) fn path_to(&self, id: NodeId) -> Vec<Coord> {
        let mut path = Vec::with_capacity(self.get(id).depth + 1);
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            path.push(node.coord);
            current = node.parent;
        }
        path.reverse();
        path
    }
}

#[derive(Debug)]
struct FrontierEntry {
    cost: usize,
    seq: u64,
    node: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: invert so the lowest cost, then the
        // earliest insertion, comes out first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue over f-cost with FIFO order among equal costs.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn push(&mut self, node: NodeId, cost: usize) {
        self.heap.push(FrontierEntry {
            cost,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(row: usize, col: usize, depth: usize, parent: Option<NodeId>) -> SearchNode {
        SearchNode {
            coord: Coord::new(row, col),
            depth,
            estimated_cost: depth,
            parent,
        }
    }

    #[test]
    fn test_frontier_pops_lowest_cost() {
        let mut frontier = Frontier::default();
        frontier.push(NodeId(0), 5);
        frontier.push(NodeId(1), 2);
        frontier.push(NodeId(2), 9);
        assert_eq!(frontier.pop(), Some(NodeId(1)));
        assert_eq!(frontier.pop(), Some(NodeId(0)));
        assert_eq!(frontier.pop(), Some(NodeId(2)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_frontier_fifo_on_ties() {
        let mut frontier = Frontier::default();
        for i in 0..6 {
            frontier.push(NodeId(i), 3);
        }
        frontier.push(NodeId(99), 1);
        assert_eq!(frontier.len(), 7);
        assert_eq!(frontier.pop(), Some(NodeId(99)));
        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop()).map(NodeId::index).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_frontier_entry_equality_follows_ordering() {
        let a = FrontierEntry { cost: 4, seq: 7, node: NodeId(1) };
        let b = FrontierEntry { cost: 4, seq: 7, node: NodeId(2) };
        let c = FrontierEntry { cost: 4, seq: 8, node: NodeId(1) };
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a > c);
    }

    #[test]
    fn test_arena_path_reconstruction() {
        let mut arena = NodeArena::default();
        let a = arena.push(node(0, 0, 0, None));
        let b = arena.push(node(0, 1, 1, Some(a)));
        let _sibling = arena.push(node(1, 0, 1, Some(a)));
        let c = arena.push(node(1, 1, 2, Some(b)));
        assert_eq!(arena.len(), 4);
        assert_eq!(
            arena.path_to(c),
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
        assert_eq!(arena.path_to(a), vec![Coord::new(0, 0)]);
    }
}
