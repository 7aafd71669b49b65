//! # Game Rules
//!
//! The rules of a small text adventure built on [`quart_graph`]: rooms wired
//! by compass exits, a single player carrying a bag, items to pick up and use,
//! and riddles that block a room's exits until solved or unlocked.
//!
//! ## Core Components
//!
//! - **entities**: Items, bags, rooms and the player
//! - **world_state**: The `GameManager` owning the room graph and the player
//! - **narration**: The sentences every operation reports back
//! - **config**: Tunables loaded from TOML
//! - **error**: Precondition failures of world operations

pub mod config;
pub mod entities;
pub mod error;
pub mod narration;
pub mod world_state;

pub use config::*;
pub use entities::*;
pub use error::*;
pub use narration::*;
pub use world_state::*;
