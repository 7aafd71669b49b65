//! Quart Graph - the container that owns and wires the nodes.

use log::debug;
use std::collections::{HashMap, HashSet, VecDeque};

use super::{DeepClone, Direction, GraphError, GraphResult, Node, NodeId};

/// Original handle -> cloned handle, as produced by [`QuartGraph::try_clone_mapped`].
pub type HandleMap = HashMap<NodeId, NodeId>;

/// A graph of nodes linked through four cardinal slots.
///
/// The graph owns every node reachable from its root. Nodes are stored in an
/// arena and refer to each other by [`NodeId`]; an evicted node leaves an empty
/// slot behind so stale handles never alias a newer node.
///
/// Lookups (`find_node`, `exists`, `remove`) are linear walks from the root.
#[derive(Debug)]
pub struct QuartGraph<V> {
    /// Arena of nodes. `None` marks an evicted slot.
    nodes: Vec<Option<Node<V>>>,

    /// First node ever inserted (or the neighbor promoted when it was removed).
    root: Option<NodeId>,

    /// Number of live nodes, all of them reachable from `root`.
    len: usize,
}

impl<V> Default for QuartGraph<V> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            len: 0,
        }
    }
}

impl<V> QuartGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Check whether a handle still names a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<V>> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<V>> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Payload of a live node.
    pub fn value(&self, id: NodeId) -> Option<&V> {
        self.node(id).map(Node::value)
    }

    /// Mutable payload of a live node.
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.node_mut(id).map(Node::value_mut)
    }

    /// One-hop lookup: the node next to `id` in `direction`.
    pub fn neighbor(&self, id: NodeId, direction: Direction) -> Option<NodeId> {
        self.node(id).and_then(|node| node.neighbor(direction))
    }

    /// Walk every node reachable from the root, each exactly once.
    ///
    /// Breadth-first, expanding neighbors in `Direction::ALL` order, so the
    /// sequence is the same on every call over an unchanged graph.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self)
    }

    /// Payloads in traversal order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, node)| node.value())
    }

    /// Check the symmetry invariant on every reachable node.
    ///
    /// `A.neighbor(d) == B` must imply `B.neighbor(d.opposite()) == A`, and no
    /// node may be its own neighbor.
    pub fn is_symmetric(&self) -> bool {
        self.iter().all(|(id, node)| {
            node.neighbors().all(|(direction, other)| {
                other != id && self.neighbor(other, direction.opposite()) == Some(id)
            })
        })
    }

    fn push(&mut self, node: Node<V>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(node));
        self.len += 1;
        id
    }

    /// Link `from` to `to` through `direction`, and `to` back to `from`.
    fn wire(&mut self, from: NodeId, direction: Direction, to: NodeId) {
        if let Some(node) = self.node_mut(from) {
            node.set_neighbor(direction, Some(to));
        }
        if let Some(node) = self.node_mut(to) {
            node.set_neighbor(direction.opposite(), Some(from));
        }
    }

    /// Sever every link of `id`, on both sides, leaving it isolated.
    pub(crate) fn disconnect(&mut self, id: NodeId) {
        let links: Vec<(Direction, NodeId)> = match self.node(id) {
            Some(node) => node.neighbors().collect(),
            None => return,
        };

        for (direction, other) in links {
            if let Some(neighbor) = self.node_mut(other) {
                neighbor.set_neighbor(direction.opposite(), None);
            }
        }

        if let Some(node) = self.node_mut(id) {
            node.clear_neighbors();
        }
    }

    /// Evict every node the root can no longer reach.
    fn prune_unreachable(&mut self) {
        let reachable: HashSet<NodeId> = self.iter().map(|(id, _)| id).collect();

        let mut pruned = 0;
        for (index, slot) in self.nodes.iter_mut().enumerate() {
            if slot.is_some() && !reachable.contains(&NodeId(index)) {
                *slot = None;
                pruned += 1;
            }
        }

        self.len = reachable.len();
        if pruned > 0 {
            debug!("pruned {} node(s) cut off from the root", pruned);
        }
    }
}

impl<V: PartialEq> QuartGraph<V> {
    /// Insert `value` next to the node holding `target`, in `direction`.
    ///
    /// The first insertion into an empty graph ignores `target` and
    /// `direction` and makes the new node the root. There is no duplicate
    /// guard here; callers that need unique values check [`exists`](Self::exists).
    ///
    /// # Errors
    ///
    /// - [`GraphError::ElementNotFound`] when `target` is missing or not in the graph
    /// - [`GraphError::DirectionOccupied`] when the target's slot is already taken
    ///
    /// Either way the graph is left untouched.
    pub fn insert(
        &mut self,
        value: V,
        target: Option<&V>,
        direction: Direction,
    ) -> GraphResult<NodeId> {
        if self.is_empty() {
            let id = self.push(Node::new(value));
            self.root = Some(id);
            debug!("inserted root node {}", id);
            return Ok(id);
        }

        let target_id = target
            .and_then(|target| self.find_node(target))
            .ok_or(GraphError::ElementNotFound)?;

        if self.neighbor(target_id, direction).is_some() {
            return Err(GraphError::DirectionOccupied { direction });
        }

        let id = self.push(Node::attached(value, direction, target_id));
        if let Some(target) = self.node_mut(target_id) {
            target.set_neighbor(direction, Some(id));
        }

        debug!("inserted node {} {} of {}", id, direction, target_id);
        debug_assert!(self.is_symmetric());
        Ok(id)
    }

    /// Link two nodes already in the graph: `to` becomes the `direction`
    /// neighbor of `from`, and `from` the opposite neighbor of `to`.
    ///
    /// This is how loops (a 2x2 block of rooms, say) are closed, since
    /// [`insert`](Self::insert) always hangs a fresh node off an existing one.
    ///
    /// # Errors
    ///
    /// - [`GraphError::ElementNotFound`] when either value is not in the graph
    /// - [`GraphError::SelfLink`] when both values resolve to the same node
    /// - [`GraphError::DirectionOccupied`] when either side's slot is taken
    pub fn connect(&mut self, from: &V, direction: Direction, to: &V) -> GraphResult<()> {
        let from_id = self.find_node(from).ok_or(GraphError::ElementNotFound)?;
        let to_id = self.find_node(to).ok_or(GraphError::ElementNotFound)?;

        if from_id == to_id {
            return Err(GraphError::SelfLink);
        }
        if self.neighbor(from_id, direction).is_some() {
            return Err(GraphError::DirectionOccupied { direction });
        }
        if self.neighbor(to_id, direction.opposite()).is_some() {
            return Err(GraphError::DirectionOccupied {
                direction: direction.opposite(),
            });
        }

        self.wire(from_id, direction, to_id);
        debug!("connected {} {} to {}", from_id, direction, to_id);
        debug_assert!(self.is_symmetric());
        Ok(())
    }

    /// First node, in traversal order, whose payload equals `value`.
    pub fn find_node(&self, value: &V) -> Option<NodeId> {
        self.iter()
            .find(|(_, node)| node.value() == value)
            .map(|(id, _)| id)
    }

    /// Check whether any reachable node holds a payload equal to `value`.
    pub fn exists(&self, value: &V) -> bool {
        self.find_node(value).is_some()
    }

    /// Remove the node holding `value` and hand its payload back.
    ///
    /// The node is disconnected on both sides of every link before it is
    /// evicted. Removing the root promotes its first neighbor (in
    /// `Direction::ALL` order) to root; removing the last node empties the
    /// graph. Nodes the root can no longer reach afterwards are evicted too.
    ///
    /// # Errors
    ///
    /// [`GraphError::ElementNotFound`] when no node holds `value`.
    pub fn remove(&mut self, value: &V) -> GraphResult<V> {
        let id = self.find_node(value).ok_or(GraphError::ElementNotFound)?;
        let successor = self
            .node(id)
            .and_then(|node| node.neighbors().next())
            .map(|(_, other)| other);

        self.disconnect(id);
        let node = self
            .nodes
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(GraphError::ElementNotFound)?;
        self.len -= 1;

        if self.root == Some(id) {
            self.root = successor;
            match successor {
                Some(new_root) => debug!("removed root {}, promoted {}", id, new_root),
                None => debug!("removed root {}, graph is now empty", id),
            }
        } else {
            debug!("removed node {}", id);
        }

        self.prune_unreachable();
        debug_assert!(self.is_symmetric());
        Ok(node.into_value())
    }
}

impl<V: DeepClone> QuartGraph<V> {
    /// Deep-copy the graph, keeping its shape and its sharing.
    ///
    /// A node reachable along several paths is copied exactly once. The copy
    /// shares nothing with `self`. If any payload fails to copy, no graph is
    /// returned and the payload's error comes back as-is.
    pub fn try_clone(&self) -> Result<QuartGraph<V>, V::Error> {
        self.try_clone_mapped().map(|(graph, _)| graph)
    }

    /// Like [`try_clone`](Self::try_clone), also returning which cloned handle
    /// each original handle became.
    ///
    /// The clone is compact: handles are assigned in traversal order, so the
    /// cloned root is always the first slot.
    pub fn try_clone_mapped(&self) -> Result<(QuartGraph<V>, HandleMap), V::Error> {
        let mut cloned = QuartGraph::new();
        let mut handles = HandleMap::new();

        let Some(root_id) = self.root else {
            return Ok((cloned, handles));
        };
        let Some(root) = self.node(root_id) else {
            return Ok((cloned, handles));
        };

        let cloned_root = cloned.push(root.deep_clone()?);
        cloned.root = Some(cloned_root);
        handles.insert(root_id, cloned_root);

        for (original_id, original) in self.iter() {
            // Every visited node was discovered through an already-mapped one.
            let Some(&copy_id) = handles.get(&original_id) else {
                continue;
            };

            for (direction, neighbor_id) in original.neighbors() {
                let neighbor_copy = match handles.get(&neighbor_id) {
                    Some(&id) => id,
                    None => {
                        let Some(neighbor) = self.node(neighbor_id) else {
                            continue;
                        };
                        let id = cloned.push(neighbor.deep_clone()?);
                        handles.insert(neighbor_id, id);
                        id
                    }
                };
                cloned.wire(copy_id, direction, neighbor_copy);
            }
        }

        debug!("cloned graph with {} node(s)", cloned.len());
        debug_assert!(cloned.is_symmetric());
        Ok((cloned, handles))
    }
}

impl<V: Clone> Clone for QuartGraph<V> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(graph) => graph,
            Err(never) => match never {},
        }
    }
}

impl<'a, V> IntoIterator for &'a QuartGraph<V> {
    type Item = (NodeId, &'a Node<V>);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Breadth-first walk over the nodes reachable from the root.
pub struct Iter<'a, V> {
    graph: &'a QuartGraph<V>,
    queue: VecDeque<NodeId>,
    visited: HashSet<NodeId>,
}

impl<'a, V> Iter<'a, V> {
    fn new(graph: &'a QuartGraph<V>) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = HashSet::new();
        if let Some(root) = graph.root {
            queue.push_back(root);
            visited.insert(root);
        }
        Self {
            graph,
            queue,
            visited,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (NodeId, &'a Node<V>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.queue.pop_front() {
            let Some(node) = self.graph.node(id) else {
                continue;
            };

            for (_, other) in node.neighbors() {
                if self.visited.insert(other) {
                    self.queue.push_back(other);
                }
            }

            return Some((id, node));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Snapshot = Vec<(&'static str, [Option<&'static str>; 4])>;

    /// Payloads in traversal order, each with the payloads of its four neighbors.
    fn snapshot(graph: &QuartGraph<&'static str>) -> Snapshot {
        graph
            .iter()
            .map(|(_, node)| {
                let mut around = [None; 4];
                for (slot, direction) in Direction::ALL.into_iter().enumerate() {
                    around[slot] = node
                        .neighbor(direction)
                        .and_then(|id| graph.value(id))
                        .copied();
                }
                (*node.value(), around)
            })
            .collect()
    }

    /// A north of C, B north of D, A west of B, C west of D.
    fn grid() -> QuartGraph<&'static str> {
        let mut graph = QuartGraph::new();
        graph.insert("A", None, Direction::North).unwrap();
        graph.insert("B", Some(&"A"), Direction::East).unwrap();
        graph.insert("C", Some(&"A"), Direction::South).unwrap();
        graph.insert("D", Some(&"C"), Direction::East).unwrap();
        graph.connect(&"B", Direction::South, &"D").unwrap();
        graph
    }

    #[test]
    fn test_first_insert_becomes_root() {
        let mut graph = QuartGraph::new();
        assert!(graph.is_empty());

        let id = graph.insert("Hall", Some(&"ignored"), Direction::West).unwrap();

        assert_eq!(graph.root(), Some(id));
        assert_eq!(graph.len(), 1);
        assert!(graph.node(id).unwrap().is_isolated());
        assert_eq!(graph.node(id).unwrap().entry_direction(), None);
    }

    #[test]
    fn test_insert_wires_both_sides() {
        let mut graph = QuartGraph::new();
        let hall = graph.insert("Hall", None, Direction::North).unwrap();
        let attic = graph.insert("Attic", Some(&"Hall"), Direction::North).unwrap();

        assert_eq!(graph.neighbor(hall, Direction::North), Some(attic));
        assert_eq!(graph.neighbor(attic, Direction::South), Some(hall));
        assert_eq!(
            graph.node(attic).unwrap().entry_direction(),
            Some(Direction::North)
        );
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_insert_missing_target() {
        let mut graph = QuartGraph::new();
        graph.insert("Hall", None, Direction::North).unwrap();
        let before = snapshot(&graph);

        let err = graph.insert("Attic", Some(&"Nowhere"), Direction::North);
        assert_eq!(err, Err(GraphError::ElementNotFound));

        let err = graph.insert("Attic", None, Direction::North);
        assert_eq!(err, Err(GraphError::ElementNotFound));

        assert_eq!(snapshot(&graph), before);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_insert_into_occupied_slot() {
        let mut graph = QuartGraph::new();
        graph.insert("Hall", None, Direction::North).unwrap();
        graph.insert("Attic", Some(&"Hall"), Direction::North).unwrap();
        let before = snapshot(&graph);

        let err = graph.insert("Tower", Some(&"Hall"), Direction::North);
        assert_eq!(
            err,
            Err(GraphError::DirectionOccupied {
                direction: Direction::North
            })
        );

        assert_eq!(snapshot(&graph), before);
        assert_eq!(graph.len(), 2);
        assert!(!graph.exists(&"Tower"));
    }

    #[test]
    fn test_connect_rejects_bad_links() {
        let mut graph = grid();
        let before = snapshot(&graph);

        assert_eq!(
            graph.connect(&"A", Direction::North, &"A"),
            Err(GraphError::SelfLink)
        );
        assert_eq!(
            graph.connect(&"A", Direction::North, &"Z"),
            Err(GraphError::ElementNotFound)
        );
        assert_eq!(
            graph.connect(&"A", Direction::East, &"D"),
            Err(GraphError::DirectionOccupied {
                direction: Direction::East
            })
        );
        // A's west slot is free but C's east slot already holds D.
        assert_eq!(
            graph.connect(&"A", Direction::West, &"C"),
            Err(GraphError::DirectionOccupied {
                direction: Direction::East
            })
        );

        assert_eq!(snapshot(&graph), before);
    }

    #[test]
    fn test_exists_and_find_node() {
        let mut graph = QuartGraph::new();
        let hall = graph.insert("Hall", None, Direction::North).unwrap();
        let cellar = graph.insert("Cellar", Some(&"Hall"), Direction::South).unwrap();

        assert!(graph.exists(&"Hall"));
        assert!(graph.exists(&"Cellar"));
        assert!(!graph.exists(&"Attic"));
        assert_eq!(graph.find_node(&"Hall"), Some(hall));
        assert_eq!(graph.find_node(&"Cellar"), Some(cellar));
        assert_eq!(graph.find_node(&"Attic"), None);
    }

    #[test]
    fn test_duplicates_allowed_first_match_wins() {
        let mut graph = QuartGraph::new();
        let first = graph.insert("Hall", None, Direction::North).unwrap();
        graph.insert("Hall", Some(&"Hall"), Direction::East).unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.find_node(&"Hall"), Some(first));
    }

    #[test]
    fn test_grid_traversal_visits_each_node_once() {
        let graph = grid();
        assert!(graph.is_symmetric());

        let visited: Vec<_> = graph.values().copied().collect();
        assert_eq!(visited.len(), 4);

        let unique: HashSet<_> = visited.iter().collect();
        assert_eq!(unique.len(), 4);

        // Breadth-first from A, neighbors in N, S, E, W order.
        assert_eq!(visited, vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_traversal_is_restartable() {
        let graph = grid();
        let first: Vec<_> = graph.iter().map(|(id, _)| id).collect();
        let second: Vec<_> = (&graph).into_iter().map(|(id, _)| id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_graph() {
        let mut graph: QuartGraph<&str> = QuartGraph::new();
        assert_eq!(graph.iter().count(), 0);
        assert!(!graph.exists(&"Hall"));
        assert_eq!(graph.remove(&"Hall"), Err(GraphError::ElementNotFound));
        assert!(graph.clone().is_empty());
    }

    #[test]
    fn test_remove_severs_both_sides() {
        let mut graph = QuartGraph::new();
        graph.insert("A", None, Direction::North).unwrap();
        let b = graph.insert("B", Some(&"A"), Direction::East).unwrap();

        assert_eq!(graph.remove(&"A"), Ok("A"));

        assert_eq!(graph.neighbor(b, Direction::West), None);
        assert_eq!(graph.root(), Some(b));
        assert_eq!(graph.len(), 1);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_remove_missing_value() {
        let mut graph = grid();
        let before = snapshot(&graph);

        assert_eq!(graph.remove(&"Z"), Err(GraphError::ElementNotFound));
        assert_eq!(snapshot(&graph), before);
    }

    #[test]
    fn test_remove_leaf_keeps_rest() {
        let mut graph = grid();
        let a = graph.find_node(&"A").unwrap();
        let d = graph.find_node(&"D").unwrap();

        graph.remove(&"D").unwrap();

        assert!(!graph.contains(d));
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.root(), Some(a));
        assert!(graph.is_symmetric());
        let b = graph.find_node(&"B").unwrap();
        assert_eq!(graph.neighbor(b, Direction::South), None);
    }

    #[test]
    fn test_remove_last_node_empties_graph() {
        let mut graph = QuartGraph::new();
        graph.insert("Hall", None, Direction::North).unwrap();

        graph.remove(&"Hall").unwrap();

        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);

        // The graph accepts a fresh root afterwards.
        let id = graph.insert("Cellar", None, Direction::North).unwrap();
        assert_eq!(graph.root(), Some(id));
    }

    #[test]
    fn test_remove_connector_prunes_far_side() {
        // Hall - Corridor - Vault, in a line going east.
        let mut graph = QuartGraph::new();
        graph.insert("Hall", None, Direction::North).unwrap();
        graph.insert("Corridor", Some(&"Hall"), Direction::East).unwrap();
        let vault = graph.insert("Vault", Some(&"Corridor"), Direction::East).unwrap();

        graph.remove(&"Corridor").unwrap();

        assert_eq!(graph.len(), 1);
        assert!(!graph.exists(&"Vault"));
        assert!(!graph.contains(vault));
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_remove_root_promotes_first_neighbor() {
        // Root with neighbors south and east: south comes first.
        let mut graph = QuartGraph::new();
        graph.insert("Hall", None, Direction::North).unwrap();
        let garden = graph.insert("Garden", Some(&"Hall"), Direction::East).unwrap();
        let cellar = graph.insert("Cellar", Some(&"Hall"), Direction::South).unwrap();

        graph.remove(&"Hall").unwrap();

        assert_eq!(graph.root(), Some(cellar));
        assert!(!graph.contains(garden));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_remove_root_in_grid_keeps_cycle_remainder() {
        let mut graph = grid();
        graph.remove(&"A").unwrap();

        // C, D and B stay connected through D.
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.value(graph.root().unwrap()), Some(&"C"));
        assert!(graph.exists(&"B"));
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_clone_preserves_grid_sharing() {
        let graph = grid();
        let (copy, handles) = graph.try_clone_mapped().unwrap();

        assert_eq!(copy.len(), 4);
        assert_eq!(handles.len(), 4);
        let distinct: HashSet<NodeId> = handles.values().copied().collect();
        assert_eq!(distinct.len(), 4);

        assert_eq!(snapshot(&copy), snapshot(&graph));
        assert!(copy.is_symmetric());

        // The loop A -> B -> D -> C -> A closes on the same cloned node.
        let a = copy.root().unwrap();
        let b = copy.neighbor(a, Direction::East).unwrap();
        let d = copy.neighbor(b, Direction::South).unwrap();
        let c = copy.neighbor(d, Direction::West).unwrap();
        assert_eq!(copy.neighbor(c, Direction::North), Some(a));
        assert_eq!(copy.neighbor(a, Direction::South), Some(c));
    }

    #[test]
    fn test_clone_keeps_entry_directions() {
        let graph = grid();
        let copy = graph.clone();

        for ((_, original), (_, cloned)) in graph.iter().zip(copy.iter()) {
            assert_eq!(original.entry_direction(), cloned.entry_direction());
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let mut graph = QuartGraph::new();
        graph.insert(String::from("Hall"), None, Direction::North).unwrap();
        graph
            .insert(String::from("Cellar"), Some(&String::from("Hall")), Direction::South)
            .unwrap();

        let mut copy = graph.clone();
        let root = copy.root().unwrap();
        copy.value_mut(root).unwrap().push_str(" (flooded)");
        copy.remove(&String::from("Cellar")).unwrap();
        copy.insert(String::from("Roof"), Some(&String::from("Hall (flooded)")), Direction::North)
            .unwrap();

        let names: Vec<_> = graph.values().cloned().collect();
        assert_eq!(names, vec!["Hall", "Cellar"]);
        assert_eq!(graph.len(), 2);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_clone_compacts_evicted_slots() {
        let mut graph = grid();
        graph.remove(&"D").unwrap();

        let (copy, handles) = graph.try_clone_mapped().unwrap();
        let root = graph.root().unwrap();

        assert_eq!(handles.get(&root), copy.root().as_ref());
        assert_eq!(copy.root().map(NodeId::index), Some(0));
        let mut indices: Vec<_> = copy.iter().map(|(id, _)| id.index()).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[derive(Debug, PartialEq)]
    struct Fragile {
        name: &'static str,
        copyable: bool,
    }

    impl DeepClone for Fragile {
        type Error = String;

        fn deep_clone(&self) -> Result<Self, Self::Error> {
            if self.copyable {
                Ok(Fragile {
                    name: self.name,
                    copyable: true,
                })
            } else {
                Err(format!("{} cannot be copied", self.name))
            }
        }
    }

    #[test]
    fn test_failing_payload_aborts_clone() {
        let mut graph = QuartGraph::new();
        let sturdy = Fragile {
            name: "Hall",
            copyable: true,
        };
        graph.insert(sturdy, None, Direction::North).unwrap();
        graph
            .insert(
                Fragile {
                    name: "Mirror",
                    copyable: false,
                },
                Some(&Fragile {
                    name: "Hall",
                    copyable: true,
                }),
                Direction::West,
            )
            .unwrap();

        let err = graph.try_clone().unwrap_err();
        assert_eq!(err, "Mirror cannot be copied");
    }
}
