//! Game state and command loop

use serde::{Deserialize, Serialize};

use crate::action::{ActionResult, Command, Prompt, apply, movement, pickup, puzzle, treasure};
use crate::config::EngineConfig;
use crate::dungeon::{Room, RoomGraph, RoomId};
use crate::object::{Inventory, ItemId};

/// Something for the front end to show the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narration {
    /// A line of narration
    Text(String),
    /// Render this room (description, items, exits, puzzle hint)
    Room(RoomId),
}

/// How the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Won,
    Died,
    Quit,
}

/// Result of a game loop tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// Player died with message
    PlayerDied(String),
    /// Player quit
    PlayerQuit,
    /// Player opened the chest
    PlayerWon,
}

/// Main game state
///
/// Owned by the one running session and passed by reference to every
/// resolver.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Room the player stands in; always present in `rooms`
    pub current_room: RoomId,

    /// Player inventory
    pub inventory: Inventory,

    /// Successful moves so far. Seeds every random roll; never reset.
    pub steps_taken: u64,

    /// Set once, on death, victory or quitting
    pub game_over: bool,

    /// Why the game ended
    pub outcome: Option<Outcome>,

    /// Room graph with the live item sets and puzzles
    pub rooms: RoomGraph,

    /// Event and trap tuning
    pub config: EngineConfig,

    /// Narration produced since the front end last drained it
    pub messages: Vec<Narration>,
}

impl GameState {
    /// Start a new game in the graph's start room
    pub fn new(rooms: RoomGraph, config: EngineConfig) -> Self {
        Self {
            current_room: rooms.start(),
            inventory: Inventory::new(),
            steps_taken: 0,
            game_over: false,
            outcome: None,
            rooms,
            config,
            messages: Vec::new(),
        }
    }

    /// Add a message to the narration buffer
    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.push(Narration::Text(msg.into()));
    }

    /// Ask the front end to render a room
    pub fn show_room(&mut self, id: RoomId) {
        self.messages.push(Narration::Room(id));
    }

    /// Drain the narration buffer
    pub fn take_messages(&mut self) -> Vec<Narration> {
        std::mem::take(&mut self.messages)
    }

    /// Text messages currently buffered, ignoring room renders
    pub fn message_texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.messages.iter().filter_map(|m| match m {
            Narration::Text(text) => Some(text.as_str()),
            Narration::Room(_) => None,
        })
    }

    /// The room the player stands in
    pub fn room_here(&self) -> Option<&Room> {
        self.rooms.room(self.current_room)
    }

    pub fn room_here_mut(&mut self) -> Option<&mut Room> {
        self.rooms.room_mut(self.current_room)
    }

    pub fn is_in(&self, room: RoomId) -> bool {
        self.current_room == room
    }

    pub fn has_item(&self, item: ItemId) -> bool {
        self.inventory.contains(item)
    }

    /// Enter the terminal state. Only the first call has any effect.
    pub fn end_game(&mut self, outcome: Outcome) {
        if self.game_over {
            return;
        }
        log::info!(
            "game over: {:?} in {} after {} steps",
            outcome,
            self.current_room,
            self.steps_taken
        );
        self.game_over = true;
        self.outcome = Some(outcome);
    }

    /// Leave the labyrinth (explicit quit or an interrupted prompt)
    pub fn quit(&mut self) -> ActionResult {
        self.message("You decide to leave the labyrinth. Game over.");
        self.end_game(Outcome::Quit);
        ActionResult::Quit
    }
}

/// Game loop controller
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Create a new game loop with the given state
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Consume the game loop and return the owned game state
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Resolve one command completely, including any random event it sets off
    pub fn tick(&mut self, command: Command, prompt: &mut dyn Prompt) -> GameLoopResult {
        if self.state.game_over {
            self.state.message("The game is over.");
            return self.finished();
        }

        match self.execute_command(command, prompt) {
            ActionResult::Success | ActionResult::NoTime => GameLoopResult::Continue,
            ActionResult::Died(msg) => GameLoopResult::PlayerDied(msg),
            ActionResult::Won => GameLoopResult::PlayerWon,
            ActionResult::Quit => GameLoopResult::PlayerQuit,
        }
    }

    fn finished(&self) -> GameLoopResult {
        match self.state.outcome {
            Some(Outcome::Won) => GameLoopResult::PlayerWon,
            Some(Outcome::Died) => GameLoopResult::PlayerDied("already dead".to_string()),
            Some(Outcome::Quit) | None => GameLoopResult::PlayerQuit,
        }
    }

    /// Execute a player command
    fn execute_command(&mut self, command: Command, prompt: &mut dyn Prompt) -> ActionResult {
        let state = &mut self.state;
        match command {
            Command::Go(direction) => movement::move_player(state, &direction),
            Command::Look => {
                state.show_room(state.current_room);
                ActionResult::NoTime
            }
            Command::Inventory => pickup::show_inventory(state),
            Command::Take(name) => pickup::take_item(state, &name),
            Command::Use(name) => apply::use_item(state, &name),
            Command::Solve => {
                if state.is_in(RoomId::TreasureRoom) {
                    treasure::attempt_open_treasure(state, prompt)
                } else {
                    puzzle::do_solve(state, prompt)
                }
            }
            Command::Quit => state.quit(),
        }
    }
}
