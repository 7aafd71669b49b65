//! Narration - the sentences the world speaks back to the player.

use quart_graph::Direction;

/// One user-facing outcome of a world operation.
///
/// `Display` renders the sentence shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narration {
    // Players
    PlayerAdded { player: String },
    PlayerRejected { player: String },
    PlayerRemoved { player: String },
    PlayerMissing { player: String },
    PlayerStarted { player: String, room: String },
    AlreadyStarted { player: String },

    // Rooms
    RoomAdded {
        room: String,
        /// Room it hangs off, and through which of that room's exits.
        connection: Option<(String, Direction)>,
    },
    RoomRejected { room: String },
    RoomsConnected { from: String, to: String, direction: Direction },
    RoomRemoved { room: String },

    // Movement
    PlayerMoved {
        player: String,
        from: String,
        to: String,
        direction: Direction,
    },
    MoveBlocked { player: String, direction: Direction },

    // Items
    ItemAdded { item: String },
    ItemRejected { item: String },
    PickedUp { player: String, item: String, room: String },
    InventoryFull { player: String },
    ItemNotInRoom { item: String, room: String },
    NotStorable { item: String },
    Dropped { player: String, item: String, room: String },
    NotInInventory { item: String, player: String },
    RoomFull { room: String },
    Disassembled { player: String, item: String },
    CannotDisassemble { player: String, item: String },
    NotNear { item: String, player: String },
    Inspecting { player: String, item: String },
    KeyUsed { player: String, key: String, room: String },
    AlreadyUnlocked { room: String },
    NowCarrying {
        player: String,
        bag: String,
        /// Old bag that had to be taken apart during the swap.
        disassembled: Option<String>,
    },
    BagTooSmall { bag: String },

    // Puzzles
    PuzzleSolved { player: String, room: String },
    NoActivePuzzle { room: String },
    PuzzleActivated { room: String },
    PuzzleDeactivated { room: String },
    PuzzleUnchanged { room: String },
    UnlockedWith { room: String, key: String },
}

impl std::fmt::Display for Narration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Narration::PlayerAdded { player } => write!(f, "{} was added to the game.", player),
            Narration::PlayerRejected { player } => {
                write!(f, "Could not add {} to the game.", player)
            }
            Narration::PlayerRemoved { player } => {
                write!(f, "{} was removed from the game.", player)
            }
            Narration::PlayerMissing { player } => write!(f, "{} does not exist.", player),
            Narration::PlayerStarted { player, room } => {
                write!(f, "{} starts in {}.", player, room)
            }
            Narration::AlreadyStarted { player } => write!(f, "{} has already started.", player),

            Narration::RoomAdded {
                room,
                connection: None,
            } => write!(f, "{} was added.", room),
            Narration::RoomAdded {
                room,
                connection: Some((target, direction)),
            } => write!(
                f,
                "{} was added and is connected to {} from the {} exit.",
                room, target, direction
            ),
            Narration::RoomRejected { room } => write!(f, "Could not add {} to the game.", room),
            Narration::RoomsConnected {
                from,
                to,
                direction,
            } => write!(
                f,
                "{} is now connected to {} through the {} exit.",
                from, to, direction
            ),
            Narration::RoomRemoved { room } => write!(f, "{} was removed from the game.", room),

            Narration::PlayerMoved {
                player,
                from,
                to,
                direction,
            } => write!(
                f,
                "{} moved from {} to {} via the {} exit.",
                player, from, to, direction
            ),
            Narration::MoveBlocked { player, direction } => {
                write!(f, "{} could not move via the {} exit.", player, direction)
            }

            Narration::ItemAdded { item } => write!(f, "{} was added to the game.", item),
            Narration::ItemRejected { item } => write!(f, "Could not add {} to the game.", item),
            Narration::PickedUp { player, item, room } => {
                write!(f, "{} picked up {} from {}.", player, item, room)
            }
            Narration::InventoryFull { player } => write!(f, "{}'s inventory is full.", player),
            Narration::ItemNotInRoom { item, room } => write!(f, "{} is not in {}.", item, room),
            Narration::NotStorable { item } => write!(f, "{} is not valid for storing.", item),
            Narration::Dropped { player, item, room } => {
                write!(f, "{} dropped {} in {}.", player, item, room)
            }
            Narration::NotInInventory { item, player } => {
                write!(f, "{} is not in {}'s inventory.", item, player)
            }
            Narration::RoomFull { room } => write!(f, "{} is full.", room),
            Narration::Disassembled { player, item } => {
                write!(f, "{} disassembled {}.", player, item)
            }
            Narration::CannotDisassemble { player, item } => {
                write!(f, "{} could not disassemble {}.", player, item)
            }
            Narration::NotNear { item, player } => write!(f, "{} is not near {}.", item, player),
            Narration::Inspecting { player, item } => {
                write!(f, "{} is inspecting {}.", player, item)
            }
            Narration::KeyUsed { player, key, room } => {
                write!(f, "{} used {} in {}.", player, key, room)
            }
            Narration::AlreadyUnlocked { room } => write!(f, "{} was already unlocked.", room),
            Narration::NowCarrying {
                player,
                bag,
                disassembled,
            } => {
                if let Some(old) = disassembled {
                    write!(f, "{} disassembled {}. ", player, old)?;
                }
                write!(f, "{} is now carrying {}.", player, bag)
            }
            Narration::BagTooSmall { bag } => write!(f, "{} is too small.", bag),

            Narration::PuzzleSolved { player, room } => {
                write!(f, "{} is solving the puzzle in {}.", player, room)
            }
            Narration::NoActivePuzzle { room } => {
                write!(f, "There is no active puzzle in {}.", room)
            }
            Narration::PuzzleActivated { room } => {
                write!(f, "The puzzle in {} is now active.", room)
            }
            Narration::PuzzleDeactivated { room } => {
                write!(f, "The puzzle in {} is no longer active.", room)
            }
            Narration::PuzzleUnchanged { room } => write!(f, "Nothing changed in {}.", room),
            Narration::UnlockedWith { room, key } => {
                write!(f, "{} was unlocked with {}.", room, key)
            }
        }
    }
}
