//! Room puzzles
//!
//! Each puzzle is solved at most once. A correct answer clears it and may
//! hand out the room's reward; a wrong answer in the trap room springs the
//! trap.

use crate::action::ActionResult;
use crate::action::prompt::Prompt;
use crate::action::trap::{TrapOutcome, trigger_trap};
use crate::dungeon::RoomId;
use crate::gameloop::GameState;
use crate::object::ItemId;

/// Normalize a typed or stored answer for comparison
pub fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Whether `given` solves a puzzle whose answer is `expected`
///
/// A puzzle answered by "7" also accepts a blank answer.
pub fn answer_matches(expected: &str, given: &str) -> bool {
    let expected = normalize_answer(expected);
    let given = normalize_answer(given);
    given == expected || (expected == "7" && given.is_empty())
}

/// Item handed out for solving the puzzle in `room`
pub const fn puzzle_reward(room: RoomId) -> Option<ItemId> {
    match room {
        RoomId::Hall => Some(ItemId::TreasureKey),
        RoomId::Library => Some(ItemId::MysteriousAmulet),
        _ => None,
    }
}

/// Show the current room's puzzle and ask for an answer
pub fn do_solve(state: &mut GameState, prompt: &mut dyn Prompt) -> ActionResult {
    let question = match state.room_here().and_then(|room| room.puzzle()) {
        Some(puzzle) => puzzle.question.clone(),
        None => {
            state.message("There are no puzzles here.");
            return ActionResult::NoTime;
        }
    };

    match prompt.ask(&format!("{}\nYour answer: ", question)) {
        Some(answer) => solve_puzzle(state, &answer),
        None => state.quit(),
    }
}

/// Check an answer against the current room's puzzle
pub fn solve_puzzle(state: &mut GameState, answer: &str) -> ActionResult {
    let room_id = state.current_room;
    let expected = match state.room_here().and_then(|room| room.puzzle()) {
        Some(puzzle) => puzzle.answer.clone(),
        None => {
            state.message("There are no puzzles here.");
            return ActionResult::NoTime;
        }
    };

    if !answer_matches(&expected, answer) {
        state.message("Wrong. Try again.");
        if room_id == RoomId::TrapRoom {
            return match trigger_trap(state) {
                TrapOutcome::Died => ActionResult::Died("fell into a pit".to_string()),
                TrapOutcome::LostItem(_) | TrapOutcome::Survived => ActionResult::Success,
            };
        }
        return ActionResult::NoTime;
    }

    state.message("Correct! You solved the puzzle.");
    if let Some(room) = state.room_here_mut() {
        room.clear_puzzle();
    }
    log::info!("puzzle in {} solved at step {}", room_id, state.steps_taken);

    match room_id {
        RoomId::TrapRoom => {
            state.message("Some of the tiles stop clicking. The trap seems to have calmed down.");
        }
        _ => {
            if let Some(reward) = puzzle_reward(room_id) {
                if state.inventory.add(reward) {
                    state.message(reward_message(reward));
                }
            }
        }
    }
    ActionResult::Success
}

fn reward_message(item: ItemId) -> String {
    match item {
        ItemId::TreasureKey => "You find a small key to the treasure chest.".to_string(),
        ItemId::MysteriousAmulet => "You find a strange amulet among the scrolls.".to_string(),
        other => format!("You receive: {}.", other),
    }
}
