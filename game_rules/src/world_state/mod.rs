//! World state management - the game manager holding the room graph and the player.

use log::{info, warn};
use quart_graph::{Direction, GraphError, NodeId, QuartGraph};

use crate::config::WorldConfig;
use crate::entities::{Bag, BagSwap, Item, ItemKind, Player, PlayerId, PuzzleChange, Room};
use crate::error::{WorldError, WorldResult};
use crate::narration::Narration;

/// The complete state of the adventure: rooms wired on a graph, plus the player.
///
/// Rooms are addressed by name. Every operation reports what happened as a
/// [`Narration`] (also logged at info level); only broken preconditions, such
/// as naming a room that is not in the world, come back as [`WorldError`].
#[derive(Debug)]
pub struct GameManager {
    rooms: QuartGraph<Room>,
    player: Option<Player>,
    config: WorldConfig,
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl Clone for GameManager {
    /// Deep copy. Rooms keep their layout and the player keeps standing in
    /// the copy of the room they stood in.
    fn clone(&self) -> Self {
        let (rooms, handles) = match self.rooms.try_clone_mapped() {
            Ok(cloned) => cloned,
            Err(never) => match never {},
        };

        let player = self.player.clone().map(|mut player| {
            player.current_room = player
                .current_room
                .and_then(|id| handles.get(&id).copied());
            player
        });

        Self {
            rooms,
            player,
            config: self.config.clone(),
        }
    }
}

impl GameManager {
    /// Create an empty world.
    pub fn new(config: WorldConfig) -> Self {
        Self {
            rooms: QuartGraph::new(),
            player: None,
            config,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn rooms(&self) -> &QuartGraph<Room> {
        &self.rooms
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Look up a room by name.
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.locate(name).and_then(|id| self.rooms.value(id))
    }

    /// The room the player stands in.
    pub fn current_room(&self) -> Option<&Room> {
        self.player
            .as_ref()
            .and_then(Player::current_room)
            .and_then(|id| self.rooms.value(id))
    }

    /// Create a room sized by the configuration.
    pub fn create_room(&self, name: impl Into<String>) -> Room {
        Room::with_capacity(name, self.config.room_capacity)
    }

    /// Create a player with the configured inventory and starting bag.
    pub fn create_player(&self, name: impl Into<String>) -> Player {
        Player::with_config(name, self.config.default_player_capacity, &self.config)
    }

    /// Create a large bag, raised to the configured minimum capacity.
    pub fn create_large_bag(&self, name: impl Into<String>, value: i32, capacity: usize) -> Bag {
        Bag::large(name, value, capacity, self.config.large_bag_min_capacity)
    }

    fn locate(&self, name: &str) -> Option<NodeId> {
        self.rooms.find_node(&Room::new(name))
    }

    fn room_mut(&mut self, name: &str) -> WorldResult<&mut Room> {
        let id = self
            .locate(name)
            .ok_or_else(|| WorldError::RoomDoesNotExist(name.to_string()))?;
        self.rooms
            .value_mut(id)
            .ok_or_else(|| WorldError::RoomDoesNotExist(name.to_string()))
    }

    /// The player and the room they stand in.
    fn started_mut(&mut self) -> WorldResult<(&mut Player, &mut Room)> {
        let player = self.player.as_mut().ok_or(WorldError::NoPlayer)?;
        let room = match player.current_room {
            Some(id) => self.rooms.value_mut(id),
            None => None,
        };
        let room = room.ok_or_else(|| WorldError::PlayerNotStarted(player.name().to_string()))?;
        Ok((player, room))
    }

    /// Put back an item taken out a moment ago. The slot it left is still free.
    fn restore(put_back: Result<(), Item>, owner: &str) {
        if let Err(lost) = put_back {
            warn!("{} could not be put back with {} and was lost", lost.name(), owner);
        }
    }

    fn narrate(narration: Narration) -> Narration {
        info!("{}", narration);
        narration
    }

    /// Bring a player into the game. Only one player plays at a time.
    pub fn add_player(&mut self, player: Player) -> Narration {
        if let Some(current) = &self.player {
            warn!("{} is already playing, rejecting {}", current.name(), player.name());
            return Self::narrate(Narration::PlayerRejected {
                player: player.name().to_string(),
            });
        }

        let name = player.name().to_string();
        self.player = Some(player);
        Self::narrate(Narration::PlayerAdded { player: name })
    }

    /// Take the player with `id` out of the game, emptying their inventory.
    ///
    /// Two players may share a name, so the id decides who leaves.
    pub fn remove_player(&mut self, id: PlayerId) -> Narration {
        match self.player.take() {
            Some(mut player) if player.id() == id => {
                player.reset();
                Self::narrate(Narration::PlayerRemoved {
                    player: player.name().to_string(),
                })
            }
            other => {
                self.player = other;
                Self::narrate(Narration::PlayerMissing {
                    player: id.to_string(),
                })
            }
        }
    }

    /// Add `room` to the world, through `direction` exit of the `target` room.
    ///
    /// The first room needs no target. A room whose name is already taken is
    /// rejected with a narration.
    ///
    /// # Errors
    ///
    /// - [`WorldError::NoTargetRoom`] when the world has rooms but no `target` is given
    /// - [`WorldError::RoomDoesNotExist`] when `target` is not in the world
    /// - [`WorldError::ExitIsOccupied`] when that exit already leads somewhere
    pub fn add_room(
        &mut self,
        room: Room,
        target: Option<&str>,
        direction: Direction,
    ) -> WorldResult<Narration> {
        let name = room.name().to_string();
        if self.rooms.exists(&room) {
            warn!("room {} already exists", name);
            return Ok(Self::narrate(Narration::RoomRejected { room: name }));
        }

        let was_empty = self.rooms.is_empty();
        if !was_empty && target.is_none() {
            return Err(WorldError::NoTargetRoom(name));
        }
        let probe = target.map(Room::new);
        let target_name = target.unwrap_or_default().to_string();

        match self.rooms.insert(room, probe.as_ref(), direction) {
            Ok(_) => {}
            Err(GraphError::ElementNotFound) => {
                return Err(WorldError::RoomDoesNotExist(target_name));
            }
            Err(GraphError::DirectionOccupied { direction }) => {
                return Err(WorldError::ExitIsOccupied {
                    room: target_name,
                    direction,
                });
            }
            Err(other) => return Err(other.into()),
        }

        let connection = if was_empty {
            None
        } else {
            Some((target_name, direction))
        };
        Ok(Self::narrate(Narration::RoomAdded {
            room: name,
            connection,
        }))
    }

    /// Open a passage between two rooms already in the world, so that `to`
    /// lies through the `direction` exit of `from`.
    ///
    /// # Errors
    ///
    /// - [`WorldError::RoomDoesNotExist`] when either room is missing
    /// - [`WorldError::ExitIsOccupied`] when either end of the passage is taken
    /// - [`WorldError::Graph`] when both names are the same room
    pub fn connect_rooms(
        &mut self,
        from: &str,
        direction: Direction,
        to: &str,
    ) -> WorldResult<Narration> {
        match self
            .rooms
            .connect(&Room::new(from), direction, &Room::new(to))
        {
            Ok(()) => Ok(Self::narrate(Narration::RoomsConnected {
                from: from.to_string(),
                to: to.to_string(),
                direction,
            })),
            Err(GraphError::ElementNotFound) => {
                let missing = if self.locate(from).is_none() { from } else { to };
                Err(WorldError::RoomDoesNotExist(missing.to_string()))
            }
            Err(GraphError::DirectionOccupied { direction: taken }) => {
                let room = if taken == direction { from } else { to };
                Err(WorldError::ExitIsOccupied {
                    room: room.to_string(),
                    direction: taken,
                })
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Remove a room, sealing every exit that led to it.
    ///
    /// Rooms only reachable through it are lost with it. A player standing in
    /// a lost room is taken out of the world and has to be started again.
    ///
    /// # Errors
    ///
    /// [`WorldError::RoomDoesNotExist`] when no room has that name.
    pub fn remove_room(&mut self, name: &str) -> WorldResult<Narration> {
        self.rooms
            .remove(&Room::new(name))
            .map_err(|err| match err {
                GraphError::ElementNotFound => WorldError::RoomDoesNotExist(name.to_string()),
                other => other.into(),
            })?;

        if let Some(player) = self.player.as_mut() {
            if player
                .current_room
                .is_some_and(|id| !self.rooms.contains(id))
            {
                warn!("{} lost their room with {}", player.name(), name);
                player.current_room = None;
            }
        }

        Ok(Self::narrate(Narration::RoomRemoved {
            room: name.to_string(),
        }))
    }

    /// Leave `item` in the named room, if it exists and has space.
    pub fn add_item(&mut self, room: &str, item: Item) -> Narration {
        let item_name = item.name().to_string();
        let Ok(room) = self.room_mut(room) else {
            return Self::narrate(Narration::ItemRejected { item: item_name });
        };

        match room.add_item(item) {
            Ok(()) => Self::narrate(Narration::ItemAdded { item: item_name }),
            Err(_) => Self::narrate(Narration::ItemRejected { item: item_name }),
        }
    }

    /// Place the player in the named room.
    ///
    /// # Errors
    ///
    /// [`WorldError::NoPlayer`] or [`WorldError::RoomDoesNotExist`].
    pub fn start_player(&mut self, room: &str) -> WorldResult<Narration> {
        if self.player.is_none() {
            return Err(WorldError::NoPlayer);
        }
        let id = self
            .locate(room)
            .ok_or_else(|| WorldError::RoomDoesNotExist(room.to_string()))?;

        let player = self.player.as_mut().ok_or(WorldError::NoPlayer)?;
        if player.has_started() {
            return Ok(Self::narrate(Narration::AlreadyStarted {
                player: player.name().to_string(),
            }));
        }

        player.current_room = Some(id);
        Ok(Self::narrate(Narration::PlayerStarted {
            player: player.name().to_string(),
            room: room.to_string(),
        }))
    }

    /// Walk through the `direction` exit of the current room.
    ///
    /// An active riddle keeps the player in place.
    pub fn move_player(&mut self, direction: Direction) -> WorldResult<Narration> {
        let player = self.player.as_mut().ok_or(WorldError::NoPlayer)?;
        let not_started = || WorldError::PlayerNotStarted(player.name().to_string());
        let here = player.current_room.ok_or_else(not_started)?;
        let from = self.rooms.value(here).ok_or_else(not_started)?;

        let destination = self
            .rooms
            .neighbor(here, direction)
            .filter(|_| !from.has_riddle())
            .and_then(|id| self.rooms.value(id).map(|room| (id, room)));

        let player_name = player.name().to_string();
        let narration = match destination {
            Some((id, to)) => {
                let narration = Narration::PlayerMoved {
                    player: player_name,
                    from: from.name().to_string(),
                    to: to.name().to_string(),
                    direction,
                };
                player.current_room = Some(id);
                narration
            }
            None => Narration::MoveBlocked {
                player: player_name,
                direction,
            },
        };
        Ok(Self::narrate(narration))
    }

    /// Pick `item` up from the current room.
    pub fn pick_up_item(&mut self, item: &Item) -> WorldResult<Narration> {
        let (player, room) = self.started_mut()?;
        let found = room.find_item(item).map(|stored| stored.name().to_string());
        let full = player.is_full();
        let storable = player.can_pick(item);

        let narration = match found {
            Some(name) if !full && storable => match room.remove_item(item) {
                Some(stored) => match player.add_item(stored) {
                    Ok(()) => Narration::PickedUp {
                        player: player.name().to_string(),
                        item: name,
                        room: room.name().to_string(),
                    },
                    Err(back) => {
                        Self::restore(room.add_item(back), room.name());
                        Narration::NotStorable { item: name }
                    }
                },
                None => Narration::ItemNotInRoom {
                    item: name,
                    room: room.name().to_string(),
                },
            },
            _ if full => Narration::InventoryFull {
                player: player.name().to_string(),
            },
            None => Narration::ItemNotInRoom {
                item: item.name().to_string(),
                room: room.name().to_string(),
            },
            Some(name) => Narration::NotStorable { item: name },
        };
        Ok(Self::narrate(narration))
    }

    /// Drop `item` from the inventory into the current room.
    pub fn drop_item(&mut self, item: &Item) -> WorldResult<Narration> {
        let (player, room) = self.started_mut()?;

        let Some(name) = player.find_item(item).map(|stored| stored.name().to_string()) else {
            return Ok(Self::narrate(Narration::NotInInventory {
                item: item.name().to_string(),
                player: player.name().to_string(),
            }));
        };

        let room_full = Narration::RoomFull {
            room: room.name().to_string(),
        };
        if room.is_full() {
            return Ok(Self::narrate(room_full));
        }

        let narration = match player.remove_item(item).map(|stored| room.add_item(stored)) {
            Some(Ok(())) => Narration::Dropped {
                player: player.name().to_string(),
                item: name,
                room: room.name().to_string(),
            },
            Some(Err(back)) => {
                Self::restore(player.add_item(back), player.name());
                room_full
            }
            None => Narration::NotInInventory {
                item: name,
                player: player.name().to_string(),
            },
        };
        Ok(Self::narrate(narration))
    }

    /// Destroy `item`, taken from the inventory first, else from the room.
    pub fn disassemble_item(&mut self, item: &Item) -> WorldResult<Narration> {
        let (player, room) = self.started_mut()?;

        let taken = player
            .remove_item(item)
            .or_else(|| room.remove_item(item));
        let narration = match taken {
            Some(stored) => Narration::Disassembled {
                player: player.name().to_string(),
                item: stored.name().to_string(),
            },
            None => Narration::CannotDisassemble {
                player: player.name().to_string(),
                item: item.name().to_string(),
            },
        };
        Ok(Self::narrate(narration))
    }

    /// Solve the riddle of the current room.
    pub fn solve_puzzle(&mut self) -> WorldResult<Narration> {
        let (player, room) = self.started_mut()?;

        let narration = if room.solve_puzzle() {
            Narration::PuzzleSolved {
                player: player.name().to_string(),
                room: room.name().to_string(),
            }
        } else {
            Narration::NoActivePuzzle {
                room: room.name().to_string(),
            }
        };
        Ok(Self::narrate(narration))
    }

    /// Arm the riddle of the named room.
    pub fn activate_puzzle(&mut self, room: &str) -> WorldResult<Narration> {
        let room = self.room_mut(room)?;
        let narration = Self::puzzle_narration(room.activate_puzzle(), room.name(), true);
        Ok(Self::narrate(narration))
    }

    /// Disarm the riddle of the named room.
    pub fn deactivate_puzzle(&mut self, room: &str) -> WorldResult<Narration> {
        let room = self.room_mut(room)?;
        let narration = Self::puzzle_narration(room.deactivate_puzzle(), room.name(), false);
        Ok(Self::narrate(narration))
    }

    fn puzzle_narration(change: PuzzleChange, room: &str, activated: bool) -> Narration {
        let room = room.to_string();
        match change {
            PuzzleChange::Changed if activated => Narration::PuzzleActivated { room },
            PuzzleChange::Changed => Narration::PuzzleDeactivated { room },
            PuzzleChange::Unchanged => Narration::PuzzleUnchanged { room },
            PuzzleChange::AlreadyUnlocked { key } => Narration::UnlockedWith { room, key },
        }
    }

    /// Use `item`, which must be carried or lying in the current room.
    ///
    /// Keys unlock the room (and are used up), relics are inspected, and bags
    /// replace the player's current bag.
    pub fn use_item(&mut self, item: &Item) -> WorldResult<Narration> {
        let (player, room) = self.started_mut()?;

        let stored_name = player
            .find_item(item)
            .or_else(|| room.find_item(item))
            .map(|stored| stored.name().to_string());
        let not_near = Narration::NotNear {
            item: item.name().to_string(),
            player: player.name().to_string(),
        };

        let narration = match (item.kind(), stored_name) {
            (ItemKind::Key, _) if room.is_unlocked() => Narration::AlreadyUnlocked {
                room: room.name().to_string(),
            },
            (_, None) => not_near,
            (ItemKind::Key, Some(key)) => {
                let taken = player
                    .remove_item(item)
                    .or_else(|| room.remove_item(item));
                match taken.map(|stored| room.unlock(stored)) {
                    Some(Ok(())) => Narration::KeyUsed {
                        player: player.name().to_string(),
                        key,
                        room: room.name().to_string(),
                    },
                    Some(Err(_)) => Narration::AlreadyUnlocked {
                        room: room.name().to_string(),
                    },
                    None => not_near,
                }
            }
            (ItemKind::Relic, Some(relic)) => Narration::Inspecting {
                player: player.name().to_string(),
                item: relic,
            },
            (ItemKind::Bag, Some(bag_name)) => Self::swap_bag(player, room, item, bag_name),
        };
        Ok(Self::narrate(narration))
    }

    /// Swap the player's bag for the one matching `item`, taken from the room
    /// first. A bag that cannot hold the inventory goes back where it was.
    fn swap_bag(player: &mut Player, room: &mut Room, item: &Item, bag_name: String) -> Narration {
        let from_room = room.has_item(item);
        let taken = if from_room {
            room.remove_item(item)
        } else {
            player.remove_item(item)
        };

        // Items only match items of the same kind.
        let Some(Ok(bag)) = taken.map(Item::into_bag) else {
            return Narration::NotNear {
                item: bag_name,
                player: player.name().to_string(),
            };
        };

        match player.change_bag(bag) {
            Ok(swap) => Narration::NowCarrying {
                player: player.name().to_string(),
                bag: bag_name,
                disassembled: match swap {
                    BagSwap::Stored { .. } => None,
                    BagSwap::Disassembled { old } => Some(old),
                },
            },
            Err(bag) => {
                let returned = Item::bag(bag);
                if from_room {
                    Self::restore(room.add_item(returned), room.name());
                } else {
                    Self::restore(player.add_item(returned), player.name());
                }
                Narration::BagTooSmall { bag: bag_name }
            }
        }
    }
}
