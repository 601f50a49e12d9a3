//! Storage layer for the ScorePlay roster service
//!
//! Process-lifetime, in-memory state organized into:
//! - `models`: Team and Player records plus caller input types
//! - `store`: Synchronized collections with store-assigned ids
//! - `locks`: Per-team locks for read-modify-write flows

pub mod locks;
pub mod models;
pub mod store;

#[cfg(test)]
mod tests;

// Re-export the main types for easy access
pub use locks::TeamLocks;
pub use models::*;
pub use store::{EntityStore, PlayerStore, TeamStore};
