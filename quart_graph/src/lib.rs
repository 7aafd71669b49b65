//! # Quart Graph
//!
//! A directional graph container where every node has up to four neighbors,
//! one per cardinal direction. Rooms of the adventure world are wired together
//! with it, but the container itself knows nothing about rooms.
//!
//! ## Core Components
//!
//! - **direction**: The four cardinal directions and their opposites
//! - **node**: Arena entries holding a payload and four neighbor slots
//! - **graph**: The owning container (insert, search, remove, iterate, clone)
//! - **clone**: The `DeepClone` capability payloads provide for graph cloning
//!
//! ## Design Philosophy
//!
//! - **Handles, not pointers**: Nodes live in an arena and refer to each other by `NodeId`
//! - **Symmetric wiring**: `A.north == B` holds exactly when `B.south == A`
//! - **Cycle-safe**: Every walk carries a visited set, so grids with loops are fine

pub mod clone;
pub mod direction;
pub mod error;
pub mod graph;
pub mod node;

pub use clone::*;
pub use direction::*;
pub use error::*;
pub use graph::*;
pub use node::*;
