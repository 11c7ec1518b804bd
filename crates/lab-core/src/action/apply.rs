//! Using items from the inventory

use crate::action::ActionResult;
use crate::action::trap::{TrapOutcome, trigger_trap};
use crate::dungeon::RoomId;
use crate::gameloop::GameState;
use crate::object::ItemId;

/// Use an item the player is carrying
pub fn use_item(state: &mut GameState, name: &str) -> ActionResult {
    let name = name.trim();
    if name.is_empty() {
        state.message("Which item do you want to use?");
        return ActionResult::NoTime;
    }

    let item = match ItemId::parse(name) {
        Some(item) if state.has_item(item) => item,
        _ => {
            state.message("You don't have that item.");
            return ActionResult::NoTime;
        }
    };

    match item {
        ItemId::Torch => {
            state.message("You light the torch. It grows brighter and less frightening around you.");
            ActionResult::NoTime
        }
        ItemId::Sword => {
            state.message("You grip the sword tighter and feel confident.");
            ActionResult::NoTime
        }
        ItemId::BronzeBox => {
            if state.inventory.add(ItemId::RustyKey) {
                state.message("You carefully open the bronze box and find a rusty key inside.");
                ActionResult::Success
            } else {
                state.message("The box is empty, you already took everything.");
                ActionResult::NoTime
            }
        }
        _ if state.is_in(RoomId::TrapRoom) => {
            state.message("You fumble with the item, but nothing happens.");
            match trigger_trap(state) {
                TrapOutcome::Died => ActionResult::Died("fell into a pit".to_string()),
                TrapOutcome::LostItem(_) | TrapOutcome::Survived => ActionResult::Success,
            }
        }
        _ => {
            state.message("You don't know how to use this item.");
            ActionResult::NoTime
        }
    }
}
