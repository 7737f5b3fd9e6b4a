use std::collections::VecDeque;

use bitvec::{bitvec, vec::BitVec};
use tracing::trace;

use super::{element, Element, InvalidArgument, Network, Node};

/// Breadth-first walk over the nodes reachable from a start node, yielding every node
/// exactly once, starting with the start node itself.
///
/// The visited set survives [move_to](Self::move_to), so walking from several starts
/// visits each component only once.
#[derive(Debug, Clone)]
pub(crate) struct Bfs<'a> {
    network: &'a Network,
    queue: VecDeque<Node>,
    visited: BitVec,
}

impl<'a> Bfs<'a> {
    pub fn new(network: &'a Network, start: Node) -> Self {
        let mut ret = Self::empty(network);
        ret.move_to(start);
        ret
    }

    /// A walk that has not been started yet.
    pub fn empty(network: &'a Network) -> Self {
        Self {
            network,
            queue: VecDeque::new(),
            visited: bitvec![0; network.len()],
        }
    }

    /// Continue the walk from `start`, unless it has already been visited.
    pub fn move_to(&mut self, start: Node) {
        if !self.visited[start] {
            self.visited.set(start, true);
            self.queue.push_back(start);
        }
    }

    #[inline]
    pub fn is_visited(&self, node: Node) -> bool {
        self.visited[node]
    }
}

impl Iterator for Bfs<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        let node = self.queue.pop_front()?;
        // mark when pushing, not when popping, so that no node enters the queue twice
        for &neighbour in self.network.neighbourhood(node) {
            if !self.visited[neighbour] {
                self.visited.set(neighbour, true);
                self.queue.push_back(neighbour);
            }
        }
        Some(node)
    }
}

impl Network {
    /// Whether `end` can be reached from `start` by following connections. Every
    /// element reaches itself.
    pub fn query(&self, start: Element, end: Element) -> Result<bool, InvalidArgument> {
        let (a, b) = self.check_arguments(start, end)?;
        let reachable = Bfs::new(self, a).any(|node| node == b);
        trace!(start, end, reachable, "query");
        Ok(reachable)
    }

    /// All elements reachable from `element`, including itself, in ascending order.
    pub fn component(&self, element: Element) -> Result<Vec<Element>, InvalidArgument> {
        let start = self.node(element)?;
        let mut component =
            Bfs::new(self, start).map(self::element).collect::<Vec<_>>();
        component.sort_unstable();
        Ok(component)
    }

    pub fn number_of_components(&self) -> usize {
        let mut bfs = Bfs::empty(self);
        let mut count = 0;
        for node in 0..self.len() {
            if !bfs.is_visited(node) {
                bfs.move_to(node);
                bfs.by_ref().for_each(drop);
                count += 1;
            }
        }
        count
    }
}
