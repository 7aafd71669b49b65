//! Player definitions.

use quart_graph::NodeId;

use super::{Bag, Item, PlayerId};
use crate::config::WorldConfig;

/// What happened to the old bag when the player switched bags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BagSwap {
    /// The old bag now rides inside the new one.
    Stored { old: String },
    /// The old bag did not fit and was taken apart.
    Disassembled { old: String },
}

/// The adventurer exploring the world.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    capacity: usize,
    bag: Bag,
    /// Handle of the room the player stands in, inside the manager's graph.
    pub(crate) current_room: Option<NodeId>,
}

impl Player {
    /// Create a player carrying the default starting bag.
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self::with_config(name, capacity, &WorldConfig::default())
    }

    /// Create a player whose starting bag follows `config`.
    pub fn with_config(name: impl Into<String>, capacity: usize, config: &WorldConfig) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            capacity,
            bag: Bag::new(
                config.starting_bag_name.clone(),
                config.starting_bag_value,
                capacity,
            ),
            current_room: None,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    pub fn current_room(&self) -> Option<NodeId> {
        self.current_room
    }

    pub fn has_started(&self) -> bool {
        self.current_room.is_some()
    }

    pub fn is_full(&self) -> bool {
        self.bag.is_full()
    }

    pub fn add_item(&mut self, item: Item) -> Result<(), Item> {
        self.bag.add_item(item)
    }

    pub fn remove_item(&mut self, item: &Item) -> Option<Item> {
        self.bag.remove_item(item)
    }

    pub fn find_item(&self, item: &Item) -> Option<&Item> {
        self.bag.find(item)
    }

    pub fn has_item(&self, item: &Item) -> bool {
        self.bag.contains(item)
    }

    /// Check whether `item` may go in the player's inventory.
    ///
    /// Large bags are never carried loose, and a standard bag can only be
    /// picked up while carrying a large one.
    pub fn can_pick(&self, item: &Item) -> bool {
        match item.as_bag() {
            None => true,
            Some(bag) if bag.is_large() => false,
            Some(_) => self.bag.is_large(),
        }
    }

    /// Switch to `new_bag`, moving everything across.
    ///
    /// A standard old bag is kept inside the new one when it fits; otherwise
    /// it is disassembled. When the contents do not fit, nothing changes and
    /// the new bag is handed back.
    pub fn change_bag(&mut self, mut new_bag: Bag) -> Result<BagSwap, Bag> {
        if !self.bag.transfer_into(&mut new_bag) {
            return Err(new_bag);
        }

        let old = std::mem::replace(&mut self.bag, new_bag);
        let old_name = old.name().to_string();
        if old.is_large() {
            return Ok(BagSwap::Disassembled { old: old_name });
        }

        match self.bag.add_item(Item::bag(old)) {
            Ok(()) => Ok(BagSwap::Stored { old: old_name }),
            Err(_) => Ok(BagSwap::Disassembled { old: old_name }),
        }
    }

    /// Empty the inventory and leave the world.
    pub fn reset(&mut self) {
        self.bag.empty();
        self.current_room = None;
    }
}
