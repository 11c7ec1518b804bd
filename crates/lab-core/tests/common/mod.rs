use lab_core::dungeon::RoomGraph;
use lab_core::{EngineConfig, GameLoop, GameState};

pub const LABYRINTH_JSON: &str = r#"{
    "start": "entrance",
    "rooms": {
        "entrance": {
            "description": "The mouth of the labyrinth.",
            "items": ["torch"],
            "exits": { "north": "hall", "east": "trap_room" }
        },
        "hall": {
            "description": "An echoing hall with a pedestal.",
            "exits": { "south": "entrance", "west": "library", "north": "treasure_room" },
            "puzzle": { "question": "How many days are in a week?", "answer": "7" }
        },
        "trap_room": {
            "description": "Clicking tiles.",
            "items": ["rusty_key"],
            "exits": { "west": "entrance" },
            "puzzle": { "question": "Say 'step' three times.", "answer": "step step step" }
        },
        "library": {
            "description": "Dusty scrolls.",
            "items": ["ancient_book"],
            "exits": { "east": "hall", "north": "armory" },
            "puzzle": { "question": "What has keys but opens no locks?", "answer": "piano" }
        },
        "armory": {
            "description": "Old weapons.",
            "items": ["sword", "bronze_box"],
            "exits": { "south": "library" }
        },
        "treasure_room": {
            "description": "A great chest on a table.",
            "items": ["treasure_chest"],
            "exits": { "south": "hall" },
            "puzzle": { "question": "Colours in a rainbow?", "answer": "7" }
        }
    }
}"#;

pub fn new_state() -> GameState {
    let graph = RoomGraph::from_json(LABYRINTH_JSON).unwrap();
    GameState::new(graph, EngineConfig::default())
}

pub fn new_game() -> GameLoop {
    GameLoop::new(new_state())
}
