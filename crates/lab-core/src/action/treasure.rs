//! The treasure chest
//!
//! The chest opens for the treasure key without further questions. Without
//! the key the player may try the room's code instead; a wrong code costs
//! nothing.

use crate::action::ActionResult;
use crate::action::prompt::Prompt;
use crate::action::puzzle::normalize_answer;
use crate::dungeon::RoomId;
use crate::gameloop::{GameState, Outcome};
use crate::object::ItemId;

/// Whether `given` opens a lock whose code is `expected`
///
/// A code of "7" also accepts `seven_word`. This differs from the blank
/// answer room puzzles accept for "7".
pub fn code_matches(expected: &str, given: &str, seven_word: &str) -> bool {
    let expected = normalize_answer(expected);
    let given = normalize_answer(given);
    given == expected || (expected == "7" && given == normalize_answer(seven_word))
}

/// Try to open the treasure chest in the current room
pub fn attempt_open_treasure(state: &mut GameState, prompt: &mut dyn Prompt) -> ActionResult {
    if !state.is_in(RoomId::TreasureRoom) {
        state.message("There is nothing to open here.");
        return ActionResult::NoTime;
    }

    let chest_here = state
        .room_here()
        .is_some_and(|room| room.has_item(ItemId::TreasureChest));
    if !chest_here {
        state.message("The chest is already gone.");
        return ActionResult::NoTime;
    }

    if state.has_item(ItemId::TreasureKey) {
        state.message("You turn the key you found and the lock clicks. The chest is open!");
        return open_chest(state, "Inside lies the treasure. You win!");
    }

    let confirm = format!(
        "The chest is locked. You could try to crack it by entering a code.\nEnter a code? ({}/no): ",
        state.config.confirm_word
    );
    let choice = match prompt.ask(&confirm) {
        Some(choice) => choice,
        None => return state.quit(),
    };
    if normalize_answer(&choice) != normalize_answer(&state.config.confirm_word) {
        state.message("You step back from the chest.");
        return ActionResult::NoTime;
    }

    let question = match state.room_here().and_then(|room| room.puzzle()) {
        Some(puzzle) => puzzle.question.clone(),
        None => {
            state.message("The code has already been used.");
            return ActionResult::NoTime;
        }
    };

    match prompt.ask(&format!("{}\nCode: ", question)) {
        Some(code) => enter_code(state, &code),
        None => state.quit(),
    }
}

/// Check a code against the treasure room's lock
pub fn enter_code(state: &mut GameState, code: &str) -> ActionResult {
    if !state.is_in(RoomId::TreasureRoom) {
        state.message("There is nothing to open here.");
        return ActionResult::NoTime;
    }

    let expected = match state.room_here().and_then(|room| room.puzzle()) {
        Some(puzzle) => puzzle.answer.clone(),
        None => {
            state.message("The code has already been used.");
            return ActionResult::NoTime;
        }
    };

    if !code_matches(&expected, code, &state.config.seven_word_alias) {
        state.message("Wrong code. The chest stays shut.");
        return ActionResult::NoTime;
    }

    state.message("The code is correct! The lock opens.");
    if let Some(room) = state.room_here_mut() {
        room.clear_puzzle();
    }
    open_chest(state, "You see a mountain of gold and jewels. You win!")
}

fn open_chest(state: &mut GameState, closing: &str) -> ActionResult {
    if let Some(room) = state.room_here_mut() {
        room.remove_item(ItemId::TreasureChest);
    }
    state.message(closing);
    state.end_game(Outcome::Won);
    ActionResult::Won
}
