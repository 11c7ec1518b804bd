//! Room graph arena
//!
//! Rooms live in one map keyed by [`RoomId`]. Resolvers borrow the single
//! room they need through [`RoomGraph::room_mut`]; rooms are never copied
//! out of the arena during play.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Room, RoomId};
use crate::action::Direction;
use crate::object::ItemId;

/// Content loading errors
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("room table has no `{0}` room")]
    MissingRoom(RoomId),

    #[error("exit {direction} from `{from}` leads to missing room `{to}`")]
    DanglingExit {
        from: RoomId,
        direction: Direction,
        to: RoomId,
    },

    #[error("room `{room}` lists `{item}` more than once")]
    DuplicateItem { room: RoomId, item: ItemId },

    #[error("`{item}` is placed in both `{first}` and `{second}`")]
    SharedItem {
        item: ItemId,
        first: RoomId,
        second: RoomId,
    },

    #[error("invalid room table: {0}")]
    Parse(#[from] serde_json::Error),
}

fn default_start() -> RoomId {
    RoomId::Entrance
}

/// Serialized form of the room content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTable {
    /// Room the player starts in
    #[serde(default = "default_start")]
    pub start: RoomId,
    pub rooms: HashMap<RoomId, Room>,
}

/// Validated room graph
#[derive(Debug, Clone)]
pub struct RoomGraph {
    start: RoomId,
    rooms: HashMap<RoomId, Room>,
}

impl RoomGraph {
    /// Validate a room table and build the graph
    pub fn from_table(table: RoomTable) -> Result<Self, GraphError> {
        let RoomTable { start, rooms } = table;

        if !rooms.contains_key(&start) {
            return Err(GraphError::MissingRoom(start));
        }
        if !rooms.contains_key(&RoomId::TreasureRoom) {
            return Err(GraphError::MissingRoom(RoomId::TreasureRoom));
        }

        // Sorted so the first reported problem does not depend on hash order
        let mut ids: Vec<RoomId> = rooms.keys().copied().collect();
        ids.sort();

        let mut placed: HashMap<ItemId, RoomId> = HashMap::new();
        for &id in &ids {
            let room = &rooms[&id];
            if let Some(item) = room.duplicate_item() {
                return Err(GraphError::DuplicateItem { room: id, item });
            }
            for &item in room.items() {
                if let Some(&first) = placed.get(&item) {
                    return Err(GraphError::SharedItem {
                        item,
                        first,
                        second: id,
                    });
                }
                placed.insert(item, id);
            }
            for (direction, to) in room.sorted_exits() {
                if !rooms.contains_key(&to) {
                    return Err(GraphError::DanglingExit {
                        from: id,
                        direction,
                        to,
                    });
                }
            }
        }

        if !rooms.values().any(|room| room.has_item(ItemId::TreasureChest)) {
            log::warn!("room table places no treasure chest; the game cannot be won by opening it");
        }

        Ok(Self { start, rooms })
    }

    /// Parse a JSON room table and validate it
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let table: RoomTable = serde_json::from_str(json)?;
        Self::from_table(table)
    }

    /// Room the player starts in
    pub fn start(&self) -> RoomId {
        self.start
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(&id)
    }

    pub fn contains(&self, id: RoomId) -> bool {
        self.rooms.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Room identifiers in declaration order of [`RoomId`]
    pub fn ids(&self) -> Vec<RoomId> {
        let mut ids: Vec<RoomId> = self.rooms.keys().copied().collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::Puzzle;

    fn two_rooms() -> RoomTable {
        let mut rooms = HashMap::new();
        rooms.insert(
            RoomId::Entrance,
            Room::new("Start.").with_exit(Direction::North, RoomId::TreasureRoom),
        );
        rooms.insert(
            RoomId::TreasureRoom,
            Room::new("Gold.")
                .with_item(ItemId::TreasureChest)
                .with_exit(Direction::South, RoomId::Entrance),
        );
        RoomTable {
            start: RoomId::Entrance,
            rooms,
        }
    }

    #[test]
    fn test_valid_table() {
        let graph = RoomGraph::from_table(two_rooms()).unwrap();
        assert_eq!(graph.start(), RoomId::Entrance);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.ids(), vec![RoomId::Entrance, RoomId::TreasureRoom]);
    }

    #[test]
    fn test_missing_start_room() {
        let mut table = two_rooms();
        table.start = RoomId::Hall;
        assert!(matches!(
            RoomGraph::from_table(table),
            Err(GraphError::MissingRoom(RoomId::Hall))
        ));
    }

    #[test]
    fn test_missing_treasure_room() {
        let mut table = two_rooms();
        table.rooms.remove(&RoomId::TreasureRoom);
        table.rooms.insert(RoomId::Entrance, Room::new("Alone."));
        assert!(matches!(
            RoomGraph::from_table(table),
            Err(GraphError::MissingRoom(RoomId::TreasureRoom))
        ));
    }

    #[test]
    fn test_dangling_exit() {
        let mut table = two_rooms();
        table.rooms.insert(
            RoomId::Entrance,
            Room::new("Start.").with_exit(Direction::West, RoomId::Library),
        );
        match RoomGraph::from_table(table) {
            Err(GraphError::DanglingExit { from, direction, to }) => {
                assert_eq!(from, RoomId::Entrance);
                assert_eq!(direction, Direction::West);
                assert_eq!(to, RoomId::Library);
            }
            other => panic!("expected dangling exit, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "rooms": {
                "entrance": {
                    "description": "Start.",
                    "items": ["torch"],
                    "exits": { "north": "treasure_room" }
                },
                "treasure_room": {
                    "description": "Gold.",
                    "items": ["treasure_chest"],
                    "exits": { "south": "entrance" },
                    "puzzle": { "question": "Code?", "answer": "7" }
                }
            }
        }"#;
        let graph = RoomGraph::from_json(json).unwrap();
        assert_eq!(graph.start(), RoomId::Entrance);
        let entrance = graph.room(RoomId::Entrance).unwrap();
        assert_eq!(entrance.items(), &[ItemId::Torch]);
        assert_eq!(entrance.exit(Direction::North), Some(RoomId::TreasureRoom));
        assert!(entrance.puzzle().is_none());
        let vault = graph.room(RoomId::TreasureRoom).unwrap();
        assert_eq!(vault.puzzle(), Some(&Puzzle::new("Code?", "7")));
    }

    #[test]
    fn test_duplicate_item_in_json() {
        let json = r#"{
            "rooms": {
                "entrance": { "description": "x", "items": ["coin", "coin"] },
                "treasure_room": { "description": "y" }
            }
        }"#;
        assert!(matches!(
            RoomGraph::from_json(json),
            Err(GraphError::DuplicateItem { room: RoomId::Entrance, item: ItemId::Coin })
        ));
    }

    #[test]
    fn test_item_placed_in_two_rooms() {
        let mut table = two_rooms();
        table.rooms.insert(
            RoomId::Entrance,
            Room::new("Start.")
                .with_item(ItemId::Torch)
                .with_exit(Direction::North, RoomId::TreasureRoom),
        );
        table.rooms.insert(
            RoomId::TreasureRoom,
            Room::new("Gold.")
                .with_item(ItemId::TreasureChest)
                .with_item(ItemId::Torch),
        );
        assert!(matches!(
            RoomGraph::from_table(table),
            Err(GraphError::SharedItem {
                item: ItemId::Torch,
                first: RoomId::Entrance,
                second: RoomId::TreasureRoom,
            })
        ));
    }

    #[test]
    fn test_unknown_room_id_is_a_parse_error() {
        let json = r#"{ "rooms": { "kitchen": { "description": "x" } } }"#;
        assert!(matches!(RoomGraph::from_json(json), Err(GraphError::Parse(_))));
    }
}
