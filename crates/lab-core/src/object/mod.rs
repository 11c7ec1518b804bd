//! Item identifiers and the player's inventory

mod inventory;
mod item;

pub use inventory::Inventory;
pub use item::ItemId;
