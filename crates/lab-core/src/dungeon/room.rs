//! Room definitions

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::action::Direction;
use crate::object::ItemId;

/// Room identifiers
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RoomId {
    Entrance,
    Hall,
    TrapRoom,
    Library,
    Armory,
    /// Locked behind the rusty key; holds the treasure chest
    TreasureRoom,
}

impl RoomId {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// A question and the answer that clears it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub question: String,
    pub answer: String,
}

impl Puzzle {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A room in the graph
///
/// The description and exits never change after loading. Items move in and
/// out, and the puzzle is cleared once solved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    description: String,
    #[serde(default)]
    items: Vec<ItemId>,
    #[serde(default)]
    exits: HashMap<Direction, RoomId>,
    #[serde(default)]
    puzzle: Option<Puzzle>,
}

impl Room {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_exit(mut self, direction: Direction, target: RoomId) -> Self {
        self.exits.insert(direction, target);
        self
    }

    pub fn with_item(mut self, item: ItemId) -> Self {
        self.add_item(item);
        self
    }

    pub fn with_puzzle(mut self, puzzle: Puzzle) -> Self {
        self.puzzle = Some(puzzle);
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn has_item(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// Put an item in the room. Returns false if it was already here.
    pub fn add_item(&mut self, item: ItemId) -> bool {
        if self.has_item(item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Take an item out of the room. Returns false if it was not here.
    pub fn remove_item(&mut self, item: ItemId) -> bool {
        match self.items.iter().position(|&here| here == item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Target of the exit in `direction`, if any
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }

    pub fn exits(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        self.exits.iter().map(|(&dir, &target)| (dir, target))
    }

    /// Exits ordered by direction name, for display
    pub fn sorted_exits(&self) -> Vec<(Direction, RoomId)> {
        let mut exits: Vec<_> = self.exits().collect();
        exits.sort_by_key(|(dir, _)| dir.name());
        exits
    }

    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    pub fn has_puzzle(&self) -> bool {
        self.puzzle.is_some()
    }

    /// Mark the puzzle solved. A cleared puzzle never comes back.
    pub fn clear_puzzle(&mut self) -> Option<Puzzle> {
        self.puzzle.take()
    }

    pub(crate) fn duplicate_item(&self) -> Option<ItemId> {
        self.items
            .iter()
            .enumerate()
            .find(|(idx, item)| self.items[..*idx].contains(item))
            .map(|(_, &item)| item)
    }
}
