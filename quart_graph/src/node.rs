//! Node definitions - vertices of the quartly-linked graph.

use crate::{DeepClone, Direction};

/// Stable handle naming a node inside one graph's arena.
///
/// Handles are never reused, so a handle to an evicted node stays dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A graph vertex: an owned payload plus one neighbor slot per direction.
///
/// Neighbor slots are only wired by the owning [`QuartGraph`](crate::QuartGraph).
#[derive(Debug)]
pub struct Node<V> {
    value: V,
    neighbors: [Option<NodeId>; 4],
    entry_direction: Option<Direction>,
}

impl<V> Node<V> {
    /// Create an isolated node with no entry direction.
    pub fn new(value: V) -> Self {
        Self {
            value,
            neighbors: [None; 4],
            entry_direction: None,
        }
    }

    /// Create a node entering `target` from `direction`.
    ///
    /// Only the new node's own back-link is set here. The graph writes the
    /// target's slot in the same operation once it has checked it is free.
    pub(crate) fn attached(value: V, direction: Direction, target: NodeId) -> Self {
        let mut node = Self::new(value);
        node.neighbors[direction.opposite().index()] = Some(target);
        node.entry_direction = Some(direction);
        node
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Mutable access to the payload. Wiring stays with the graph.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub(crate) fn into_value(self) -> V {
        self.value
    }

    /// The node in the given slot, if any.
    pub fn neighbor(&self, direction: Direction) -> Option<NodeId> {
        self.neighbors[direction.index()]
    }

    /// Occupied slots, in `Direction::ALL` order.
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, NodeId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(direction).map(|id| (direction, id)))
    }

    /// Number of occupied slots.
    pub fn degree(&self) -> usize {
        self.neighbors.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_isolated(&self) -> bool {
        self.degree() == 0
    }

    /// Direction this node was attached from; `None` for a root-created node.
    pub fn entry_direction(&self) -> Option<Direction> {
        self.entry_direction
    }

    pub(crate) fn set_neighbor(&mut self, direction: Direction, node: Option<NodeId>) {
        self.neighbors[direction.index()] = node;
    }

    pub(crate) fn clear_neighbors(&mut self) {
        self.neighbors = [None; 4];
    }
}

impl<V: DeepClone> Node<V> {
    /// Copy the payload and entry direction, leaving every slot empty.
    ///
    /// Topology is rebuilt by the graph; a single node never walks its neighbors.
    pub fn deep_clone(&self) -> Result<Node<V>, V::Error> {
        Ok(Node {
            value: self.value.deep_clone()?,
            neighbors: [None; 4],
            entry_direction: self.entry_direction,
        })
    }
}
