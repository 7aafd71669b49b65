//! Room definitions.

use super::Item;

/// Items a room holds unless configured otherwise.
pub const DEFAULT_ROOM_CAPACITY: usize = 2;

/// What a puzzle toggle did to a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleChange {
    /// The riddle flag flipped.
    Changed,
    /// The riddle flag was already in the requested state.
    Unchanged,
    /// The room was opened with a key, so puzzles no longer apply.
    AlreadyUnlocked { key: String },
}

/// A room of the world. Rooms are the payload of the world graph.
///
/// Rooms are identified by name: two rooms with the same name are the same
/// room, whatever they currently hold.
#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    items: Vec<Item>,
    capacity: usize,
    riddle: bool,
    unlocked_with: Option<Item>,
}

impl Room {
    /// Create an empty room with the default capacity.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_capacity(name, DEFAULT_ROOM_CAPACITY)
    }

    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            capacity,
            riddle: false,
            unlocked_with: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Leave `item` in the room, or hand it back if the room is full.
    pub fn add_item(&mut self, item: Item) -> Result<(), Item> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove_item(&mut self, item: &Item) -> Option<Item> {
        let position = self.items.iter().position(|stored| stored == item)?;
        Some(self.items.remove(position))
    }

    /// The stored item equal to `item`, carrying its real name.
    pub fn find_item(&self, item: &Item) -> Option<&Item> {
        self.items.iter().find(|stored| *stored == item)
    }

    pub fn has_item(&self, item: &Item) -> bool {
        self.find_item(item).is_some()
    }

    /// Sum of the values of the items lying here.
    pub fn items_value(&self) -> i32 {
        self.items.iter().map(Item::value).sum()
    }

    pub fn has_riddle(&self) -> bool {
        self.riddle
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked_with.is_some()
    }

    /// Name of the key that opened the room.
    pub fn key_name(&self) -> Option<&str> {
        self.unlocked_with.as_ref().map(Item::name)
    }

    /// Arm the riddle. An unlocked room keeps no riddle.
    pub fn activate_puzzle(&mut self) -> PuzzleChange {
        if let Some(key) = self.key_name() {
            return PuzzleChange::AlreadyUnlocked {
                key: key.to_string(),
            };
        }
        if self.riddle {
            return PuzzleChange::Unchanged;
        }
        self.riddle = true;
        PuzzleChange::Changed
    }

    /// Disarm the riddle without solving it.
    pub fn deactivate_puzzle(&mut self) -> PuzzleChange {
        if let Some(key) = self.key_name() {
            return PuzzleChange::AlreadyUnlocked {
                key: key.to_string(),
            };
        }
        if !self.riddle {
            return PuzzleChange::Unchanged;
        }
        self.riddle = false;
        PuzzleChange::Changed
    }

    /// Solve the active riddle. Returns false when there was none.
    pub fn solve_puzzle(&mut self) -> bool {
        std::mem::replace(&mut self.riddle, false)
    }

    /// Open the room with `key`, clearing any riddle. A room opens only once;
    /// the key is handed back if it already was.
    pub fn unlock(&mut self, key: Item) -> Result<(), Item> {
        if self.is_unlocked() {
            return Err(key);
        }
        self.riddle = false;
        self.unlocked_with = Some(key);
        Ok(())
    }

    /// Back to an empty, locked room without riddle.
    pub fn reset(&mut self) {
        self.riddle = false;
        self.items.clear();
        self.unlocked_with = None;
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Room: {}.", self.name)
    }
}
