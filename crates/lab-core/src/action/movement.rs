//! Movement between rooms

use crate::action::{ActionResult, Direction};
use crate::dungeon::RoomId;
use crate::gameloop::GameState;
use crate::object::ItemId;
use crate::world::events::random_event;

/// Move the player by a raw direction token
pub fn move_player(state: &mut GameState, token: &str) -> ActionResult {
    match Direction::parse(token) {
        Some(direction) => do_move(state, direction),
        None => {
            state.message("There is no such direction.");
            ActionResult::NoTime
        }
    }
}

/// Move the player one room in `direction`
///
/// Rejected moves leave the state untouched. A successful move counts a
/// step, rolls for an arrival event and, if the player survives it, asks
/// for the new room to be shown.
pub fn do_move(state: &mut GameState, direction: Direction) -> ActionResult {
    let target = match state.room_here().and_then(|room| room.exit(direction)) {
        Some(target) => target,
        None => {
            state.message("You can't go that way.");
            return ActionResult::NoTime;
        }
    };

    if target == RoomId::TreasureRoom {
        if !state.has_item(ItemId::RustyKey) {
            state.message("The door is locked. You need a key to go further.");
            return ActionResult::NoTime;
        }
        state.message("You use the key you found to unlock the way into the treasure room.");
    }

    state.current_room = target;
    state.steps_taken += 1;
    log::debug!("moved {} to {} (step {})", direction, target, state.steps_taken);

    random_event(state);
    if state.game_over {
        return ActionResult::Died("fell into a pit".to_string());
    }

    state.show_room(target);
    ActionResult::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::dungeon::{Room, RoomGraph, RoomTable};
    use crate::gameloop::{Narration, Outcome};
    use hashbrown::HashMap;

    fn corridor() -> GameState {
        let mut rooms = HashMap::new();
        rooms.insert(
            RoomId::Entrance,
            Room::new("Start.")
                .with_exit(Direction::North, RoomId::Hall)
                .with_exit(Direction::East, RoomId::TrapRoom),
        );
        rooms.insert(
            RoomId::Hall,
            Room::new("Hall.")
                .with_exit(Direction::South, RoomId::Entrance)
                .with_exit(Direction::North, RoomId::TreasureRoom),
        );
        rooms.insert(
            RoomId::TrapRoom,
            Room::new("Tiles.").with_exit(Direction::West, RoomId::Entrance),
        );
        rooms.insert(
            RoomId::TreasureRoom,
            Room::new("Vault.").with_exit(Direction::South, RoomId::Hall),
        );
        let graph = RoomGraph::from_table(RoomTable {
            start: RoomId::Entrance,
            rooms,
        })
        .unwrap();
        GameState::new(graph, EngineConfig::default())
    }

    #[test]
    fn test_unknown_direction() {
        let mut state = corridor();
        assert_eq!(move_player(&mut state, "upward"), ActionResult::NoTime);
        assert_eq!(state.current_room, RoomId::Entrance);
        assert_eq!(state.steps_taken, 0);
        assert_eq!(state.message_texts().last(), Some("There is no such direction."));
    }

    #[test]
    fn test_no_exit_that_way() {
        let mut state = corridor();
        assert_eq!(move_player(&mut state, "south"), ActionResult::NoTime);
        assert_eq!(state.current_room, RoomId::Entrance);
        assert_eq!(state.steps_taken, 0);
        assert_eq!(state.message_texts().last(), Some("You can't go that way."));
    }

    #[test]
    fn test_successful_move() {
        let mut state = corridor();
        assert_eq!(move_player(&mut state, "North"), ActionResult::Success);
        assert_eq!(state.current_room, RoomId::Hall);
        assert_eq!(state.steps_taken, 1);
        assert_eq!(state.messages.last(), Some(&Narration::Room(RoomId::Hall)));
    }

    #[test]
    fn test_treasure_room_locked_without_rusty_key() {
        let mut state = corridor();
        do_move(&mut state, Direction::North);
        assert_eq!(do_move(&mut state, Direction::North), ActionResult::NoTime);
        assert_eq!(state.current_room, RoomId::Hall);
        assert_eq!(state.steps_taken, 1);
    }

    #[test]
    fn test_treasure_key_does_not_open_the_door() {
        let mut state = corridor();
        state.inventory.add(ItemId::TreasureKey);
        do_move(&mut state, Direction::North);
        assert_eq!(do_move(&mut state, Direction::North), ActionResult::NoTime);
        assert_eq!(state.current_room, RoomId::Hall);
    }

    #[test]
    fn test_rusty_key_opens_the_door() {
        let mut state = corridor();
        state.inventory.add(ItemId::RustyKey);
        do_move(&mut state, Direction::North);
        assert_eq!(do_move(&mut state, Direction::North), ActionResult::Success);
        assert_eq!(state.current_room, RoomId::TreasureRoom);
        assert_eq!(state.steps_taken, 2);
        assert!(state.has_item(ItemId::RustyKey));
    }

    #[test]
    fn test_fatal_arrival_hides_room() {
        let mut state = corridor();
        // Step 61 rolls a trap check on arrival, and its death roll is 0
        state.steps_taken = 60;
        let result = do_move(&mut state, Direction::East);
        assert!(matches!(result, ActionResult::Died(_)));
        assert_eq!(state.outcome, Some(Outcome::Died));
        assert!(!state.messages.contains(&Narration::Room(RoomId::TrapRoom)));
    }
}
