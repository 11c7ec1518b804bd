//! Picking up items and listing the inventory

use crate::action::ActionResult;
use crate::gameloop::GameState;
use crate::object::ItemId;

/// Pick up an item from the current room
pub fn take_item(state: &mut GameState, name: &str) -> ActionResult {
    let name = name.trim();
    if name.is_empty() {
        state.message("What exactly do you want to take?");
        return ActionResult::NoTime;
    }

    let item = ItemId::parse(name);
    if item.is_some_and(|item| !item.is_portable()) {
        state.message("You can't lift the chest, it is far too heavy.");
        return ActionResult::NoTime;
    }

    if let Some(item) = item.filter(|&item| state.has_item(item)) {
        state.message(format!("You already carry: {}", item));
        return ActionResult::NoTime;
    }

    let here = state.current_room;
    let taken = item.filter(|&item| {
        state
            .rooms
            .room_mut(here)
            .is_some_and(|room| room.remove_item(item))
    });
    let Some(taken) = taken else {
        state.message("There is no such item here.");
        return ActionResult::NoTime;
    };

    state.inventory.add(taken);
    state.message(format!("You pick up: {}", taken));
    ActionResult::Success
}

/// List the inventory in pickup order
pub fn show_inventory(state: &mut GameState) -> ActionResult {
    if state.inventory.is_empty() {
        state.message("Your inventory is empty.");
        return ActionResult::NoTime;
    }

    let lines: Vec<String> = state.inventory.iter().map(|item| format!(" - {}", item)).collect();
    state.message("You are carrying:");
    for line in lines {
        state.message(line);
    }
    ActionResult::NoTime
}
