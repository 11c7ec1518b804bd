//! Room definitions
//!
//! The labyrinth: six rooms, the items lying in them, and their puzzles.
//! `rusty_key` (trap room) opens the treasure room door; `treasure_key`
//! (hall puzzle reward) opens the chest.

use hashbrown::HashMap;

use lab_core::action::Direction;
use lab_core::dungeon::{GraphError, Puzzle, Room, RoomGraph, RoomId, RoomTable};
use lab_core::object::ItemId;

/// Static room definition
#[derive(Debug, Clone, Copy)]
pub struct RoomDef {
    pub id: RoomId,
    pub description: &'static str,
    pub items: &'static [ItemId],
    pub exits: &'static [(Direction, RoomId)],
    /// (question, answer)
    pub puzzle: Option<(&'static str, &'static str)>,
}

impl RoomDef {
    /// Build the live room
    pub fn to_room(&self) -> Room {
        let mut room = Room::new(self.description);
        for &item in self.items {
            room = room.with_item(item);
        }
        for &(direction, target) in self.exits {
            room = room.with_exit(direction, target);
        }
        if let Some((question, answer)) = self.puzzle {
            room = room.with_puzzle(Puzzle::new(question, answer));
        }
        room
    }
}

pub const ROOMS: &[RoomDef] = &[
    RoomDef {
        id: RoomId::Entrance,
        description: "You stand at the entrance of the labyrinth. Damp stone walls glisten \
                      and a cold draught comes from deeper inside.",
        items: &[ItemId::Torch],
        exits: &[
            (Direction::North, RoomId::Hall),
            (Direction::East, RoomId::TrapRoom),
        ],
        puzzle: None,
    },
    RoomDef {
        id: RoomId::Hall,
        description: "A vast hall full of echoes. An inscription is carved into a stone \
                      pedestal in the middle.",
        items: &[],
        exits: &[
            (Direction::South, RoomId::Entrance),
            (Direction::West, RoomId::Library),
            (Direction::North, RoomId::TreasureRoom),
        ],
        puzzle: Some((
            "The inscription reads: \"How many days are there in a week?\" (answer with a digit)",
            "7",
        )),
    },
    RoomDef {
        id: RoomId::TrapRoom,
        description: "A room with a treacherous tiled floor. The tiles click under your feet.",
        items: &[ItemId::RustyKey],
        exits: &[(Direction::West, RoomId::Entrance)],
        puzzle: Some((
            "The tiles are armed. To pass safely, say the word \"step\" three times \
             (enter \"step step step\")",
            "step step step",
        )),
    },
    RoomDef {
        id: RoomId::Library,
        description: "A dusty library. Old scrolls are piled on the shelves.",
        items: &[ItemId::AncientBook],
        exits: &[
            (Direction::East, RoomId::Hall),
            (Direction::North, RoomId::Armory),
        ],
        puzzle: Some((
            "One scroll holds a riddle: \"What has keys but cannot open a single lock?\" \
             (one word)",
            "piano",
        )),
    },
    RoomDef {
        id: RoomId::Armory,
        description: "An old armory. Rusted weapons hang on the walls.",
        items: &[ItemId::Sword, ItemId::BronzeBox],
        exits: &[(Direction::South, RoomId::Library)],
        puzzle: None,
    },
    RoomDef {
        id: RoomId::TreasureRoom,
        description: "The treasure room. A huge chest stands on a table, its lock set \
                      with numbered dials.",
        items: &[ItemId::TreasureChest],
        exits: &[(Direction::South, RoomId::Hall)],
        puzzle: Some((
            "The dials want a code: the number of colours in a rainbow.",
            "7",
        )),
    },
];

/// The built-in room table
pub fn room_table() -> RoomTable {
    let rooms: HashMap<RoomId, Room> = ROOMS.iter().map(|def| (def.id, def.to_room())).collect();
    RoomTable {
        start: RoomId::Entrance,
        rooms,
    }
}

/// The built-in room graph
pub fn default_graph() -> Result<RoomGraph, GraphError> {
    RoomGraph::from_table(room_table())
}
