//! Item definitions: keys, relics and bags.

/// Kinds of items in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Key,
    Relic,
    Bag,
}

/// An item lying in a room or carried in a bag.
///
/// Items compare by kind and value; the name is a label only, so a probe like
/// `Item::key("any", 7)` finds the stored key of value 7 whatever it is called.
#[derive(Debug, Clone)]
pub enum Item {
    /// Unlocks the room it is used in.
    Key { name: String, value: i32 },
    /// Can be inspected, nothing more.
    Relic { name: String, value: i32 },
    /// A container the player can switch to.
    Bag(Bag),
}

impl Item {
    pub fn key(name: impl Into<String>, value: i32) -> Self {
        Item::Key {
            name: name.into(),
            value,
        }
    }

    pub fn relic(name: impl Into<String>, value: i32) -> Self {
        Item::Relic {
            name: name.into(),
            value,
        }
    }

    pub fn bag(bag: Bag) -> Self {
        Item::Bag(bag)
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Key { name, .. } | Item::Relic { name, .. } => name,
            Item::Bag(bag) => bag.name(),
        }
    }

    pub fn value(&self) -> i32 {
        match self {
            Item::Key { value, .. } | Item::Relic { value, .. } => *value,
            Item::Bag(bag) => bag.value(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Key { .. } => ItemKind::Key,
            Item::Relic { .. } => ItemKind::Relic,
            Item::Bag(_) => ItemKind::Bag,
        }
    }

    pub fn as_bag(&self) -> Option<&Bag> {
        match self {
            Item::Bag(bag) => Some(bag),
            _ => None,
        }
    }

    pub fn into_bag(self) -> Result<Bag, Item> {
        match self {
            Item::Bag(bag) => Ok(bag),
            other => Err(other),
        }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Item::Key { value: a, .. }, Item::Key { value: b, .. }) => a == b,
            (Item::Relic { value: a, .. }, Item::Relic { value: b, .. }) => a == b,
            (Item::Bag(a), Item::Bag(b)) => a == b,
            _ => false,
        }
    }
}

/// Size class of a bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BagSize {
    /// Holds anything but bags.
    Standard,
    /// Holds anything but other large bags.
    Large,
}

/// A bounded container of items.
#[derive(Debug, Clone)]
pub struct Bag {
    name: String,
    value: i32,
    capacity: usize,
    size: BagSize,
    items: Vec<Item>,
}

impl Bag {
    /// Create a standard bag.
    pub fn new(name: impl Into<String>, value: i32, capacity: usize) -> Self {
        Self {
            name: name.into(),
            value,
            capacity,
            size: BagSize::Standard,
            items: Vec::new(),
        }
    }

    /// Create a large bag holding at least `min_capacity` items.
    pub fn large(
        name: impl Into<String>,
        value: i32,
        capacity: usize,
        min_capacity: usize,
    ) -> Self {
        Self {
            size: BagSize::Large,
            ..Self::new(name, value, capacity.max(min_capacity))
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn size(&self) -> BagSize {
        self.size
    }

    pub fn is_large(&self) -> bool {
        self.size == BagSize::Large
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A zero-capacity bag counts as full.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Check whether this kind of bag may hold `item` at all, ignoring space.
    pub fn accepts(&self, item: &Item) -> bool {
        match (self.size, item.as_bag()) {
            (_, None) => true,
            (BagSize::Standard, Some(_)) => false,
            (BagSize::Large, Some(inner)) => !inner.is_large(),
        }
    }

    /// Put `item` in the bag, or hand it back if it does not fit or is refused.
    pub fn add_item(&mut self, item: Item) -> Result<(), Item> {
        if self.is_full() || !self.accepts(&item) {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    /// Take out the first item equal to `item`.
    pub fn remove_item(&mut self, item: &Item) -> Option<Item> {
        let position = self.items.iter().position(|stored| stored == item)?;
        Some(self.items.remove(position))
    }

    /// The stored item equal to `item`, carrying its real name.
    pub fn find(&self, item: &Item) -> Option<&Item> {
        self.items.iter().find(|stored| *stored == item)
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.find(item).is_some()
    }

    /// Remove and return everything in the bag.
    pub fn empty(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.items)
    }

    /// Sum of the values of the contents.
    pub fn contents_value(&self) -> i32 {
        self.items.iter().map(Item::value).sum()
    }

    /// Move every item into `other`, or nothing at all if they do not all fit.
    pub fn transfer_into(&mut self, other: &mut Bag) -> bool {
        if self.items.is_empty() {
            return true;
        }
        let fits = self.len() + other.len() <= other.capacity
            && self.items.iter().all(|item| other.accepts(item));
        if !fits {
            return false;
        }
        other.items.append(&mut self.items);
        true
    }
}

impl PartialEq for Bag {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.capacity == other.capacity
            && self.value == other.value
            && self.contents_value() == other.contents_value()
    }
}
