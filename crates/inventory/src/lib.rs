//! Inventory domain module.
//!
//! This crate contains the inventory item model and the user document that
//! owns it, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod item;
pub mod user;

pub use item::{InventoryItem, ItemPatch, NewItem};
pub use user::UserDocument;
