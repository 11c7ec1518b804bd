//! Item identifiers

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Every item that can appear in a room or the inventory
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemId {
    Torch,
    Sword,
    BronzeBox,
    /// Opens the door to the treasure room
    RustyKey,
    /// Opens the treasure chest
    TreasureKey,
    TreasureChest,
    Coin,
    MysteriousAmulet,
    AncientBook,
}

impl ItemId {
    /// Identifier as shown to the player
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Parse a player-typed item name
    pub fn parse(name: &str) -> Option<ItemId> {
        name.trim().parse().ok()
    }

    /// Whether the item can be picked up
    pub const fn is_portable(self) -> bool {
        !matches!(self, ItemId::TreasureChest)
    }
}
