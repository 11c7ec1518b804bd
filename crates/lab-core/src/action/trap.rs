//! Trap mechanics
//!
//! A sprung trap knocks one item loose, or, when the player carries
//! nothing, rolls for a fatal fall.

use crate::gameloop::{GameState, Outcome};
use crate::object::ItemId;
use crate::rng::pseudo_random;

/// Consequence of a sprung trap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapOutcome {
    /// The item fell out of the inventory and is gone
    LostItem(ItemId),
    /// Empty-handed, and the death roll missed
    Survived,
    /// Empty-handed, and the death roll hit
    Died,
}

/// Spring a trap on the player
pub fn trigger_trap(state: &mut GameState) -> TrapOutcome {
    state.message("A trap is triggered! The floor beneath you starts to shake...");
    let steps = state.steps_taken;

    if !state.inventory.is_empty() {
        let index = pseudo_random(steps, state.inventory.len() as u32) as usize;
        if let Some(lost) = state.inventory.remove_at(index) {
            log::debug!("trap took inventory slot {} ({}) at step {}", index, lost, steps);
            state.message(format!("You barely keep your balance and drop: {}.", lost));
            return TrapOutcome::LostItem(lost);
        }
    }

    let roll = pseudo_random(steps, state.config.trap_danger_modulo);
    log::debug!(
        "trap death roll {} against threshold {} at step {}",
        roll,
        state.config.trap_death_threshold,
        steps
    );
    if roll < state.config.trap_death_threshold {
        state.message("The floor suddenly collapses. You fall into a pit. Game over.");
        state.end_game(Outcome::Died);
        TrapOutcome::Died
    } else {
        state.message("By some miracle you cling to the edge and survive.");
        TrapOutcome::Survived
    }
}
