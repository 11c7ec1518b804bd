//! Random events on arrival
//!
//! Rolled once per successful move, seeded by the step counter alone, so a
//! given route through the labyrinth always produces the same events.

use crate::action::trap::{TrapOutcome, trigger_trap};
use crate::dungeon::RoomId;
use crate::gameloop::GameState;
use crate::object::ItemId;
use crate::rng::pseudo_random;

/// What happened on arrival, when anything did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalEvent {
    /// A coin turned up in the room
    Loot,
    /// Something rustled in the dark
    Scare { deterred: bool },
    /// The floor was checked for traps; `None` if nothing sprang
    TrapCheck(Option<TrapOutcome>),
}

/// Roll for and apply an arrival event
pub fn random_event(state: &mut GameState) -> Option<ArrivalEvent> {
    let steps = state.steps_taken;
    let trigger = pseudo_random(steps, state.config.event_probability_modulo);
    if trigger != 0 {
        return None;
    }

    let event_type = pseudo_random(steps + 1, state.config.random_event_types);
    log::debug!("arrival event {} at step {}", event_type, steps);

    let event = match event_type {
        0 => {
            state.message("You notice an old coin on the floor.");
            if let Some(room) = state.room_here_mut() {
                room.add_item(ItemId::Coin);
            }
            ArrivalEvent::Loot
        }
        1 => {
            state.message("Something rustles in the dark nearby.");
            let deterred = state.has_item(ItemId::Sword);
            if deterred {
                state.message("You grip your sword and the creature in the dark backs away.");
            }
            ArrivalEvent::Scare { deterred }
        }
        _ => {
            if state.is_in(RoomId::TrapRoom) && !state.has_item(ItemId::Torch) {
                state.message("The floor under your feet gives a suspicious spring...");
                ArrivalEvent::TrapCheck(Some(trigger_trap(state)))
            } else {
                ArrivalEvent::TrapCheck(None)
            }
        }
    };
    Some(event)
}
