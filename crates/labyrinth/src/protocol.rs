//! JSON line protocol
//!
//! One request per input line, one response per output line. Each request
//! is resolved completely, random events included, before the next line
//! is read. Prompts raised while resolving draw from the request's
//! `answers`; running out of answers is an interrupt.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use lab_core::action::{Direction, ScriptedPrompt};
use lab_core::dungeon::RoomId;
use lab_core::object::ItemId;
use lab_core::{GameLoop, GameState, Outcome};

use crate::display::{render_help, render_narration};
use crate::input::{Input, parse_line};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub command: String,
    #[serde(default)]
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitView {
    pub direction: Direction,
    pub room: RoomId,
}

/// The current room as the client sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomView {
    pub id: RoomId,
    pub description: String,
    pub items: Vec<ItemId>,
    pub exits: Vec<ExitView>,
    /// Question text while the room's puzzle is unsolved
    pub puzzle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub messages: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prompts: Vec<String>,
    pub room: Option<RoomView>,
    pub inventory: Vec<ItemId>,
    pub steps_taken: u64,
    pub game_over: bool,
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reply {
    State(Response),
    Error { error: String },
}

impl RoomView {
    fn current(state: &GameState) -> Option<Self> {
        let room = state.room_here()?;
        Some(Self {
            id: state.current_room,
            description: room.description().to_string(),
            items: room.items().to_vec(),
            exits: room
                .sorted_exits()
                .into_iter()
                .map(|(direction, room)| ExitView { direction, room })
                .collect(),
            puzzle: room.puzzle().map(|puzzle| puzzle.question.clone()),
        })
    }
}

impl Response {
    fn snapshot(state: &GameState, messages: Vec<String>, prompts: Vec<String>) -> Self {
        Self {
            messages,
            prompts,
            room: RoomView::current(state),
            inventory: state.inventory.as_slice().to_vec(),
            steps_taken: state.steps_taken,
            game_over: state.game_over,
            outcome: state.outcome,
        }
    }
}

/// Resolve one request line against the game
pub fn handle_line(game: &mut GameLoop, line: &str) -> Reply {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(err) => {
            log::debug!("rejected request {:?}: {}", line, err);
            return Reply::Error {
                error: format!("malformed request: {}", err),
            };
        }
    };

    let mut prompt = ScriptedPrompt::new(request.answers);
    let mut messages = Vec::new();
    match parse_line(&request.command) {
        Input::Empty => {}
        Input::Help => messages.extend(render_help()),
        Input::Hint(hint) => messages.push(hint.to_string()),
        Input::Unknown(verb) => messages.push(format!("Unknown command '{}'.", verb)),
        Input::Command(command) => {
            game.tick(command, &mut prompt);
        }
    }

    let narration = game.state_mut().take_messages();
    messages.extend(render_narration(&game.state().rooms, &narration));
    if prompt.remaining() > 0 {
        log::debug!("{} unused answers", prompt.remaining());
    }
    Reply::State(Response::snapshot(game.state(), messages, prompt.asked().to_vec()))
}

/// The state before any command, for the client's first screen
pub fn initial_reply(game: &mut GameLoop) -> Reply {
    let start = game.state().current_room;
    game.state_mut().show_room(start);
    let narration = game.state_mut().take_messages();
    let messages = render_narration(&game.state().rooms, &narration);
    Reply::State(Response::snapshot(game.state(), messages, Vec::new()))
}

/// Serve requests until end of input or the game ends
pub fn run_protocol<R: BufRead, W: Write>(
    game: &mut GameLoop,
    reader: R,
    mut writer: W,
) -> anyhow::Result<()> {
    write_reply(&mut writer, &initial_reply(game))?;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        write_reply(&mut writer, &handle_line(game, &line))?;
        if game.state().game_over {
            break;
        }
    }
    Ok(())
}

fn write_reply<W: Write>(writer: &mut W, reply: &Reply) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *writer, reply)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
