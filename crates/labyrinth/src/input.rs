//! Input handling - convert typed lines to commands
//!
//! The first word is the command, lowercased; the rest of the line is
//! joined back together as its argument.

use lab_core::action::{Command, Direction};

/// What a typed line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Blank line
    Empty,
    /// Show the command table
    Help,
    /// A game command
    Command(Command),
    /// A command missing its argument
    Hint(&'static str),
    /// Not a command at all
    Unknown(String),
}

/// Parse one line of player input
pub fn parse_line(line: &str) -> Input {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Input::Empty;
    };
    let verb = verb.to_lowercase();
    let arg = words.collect::<Vec<_>>().join(" ");

    match verb.as_str() {
        "go" if arg.is_empty() => Input::Hint("Which way? Try: go north"),
        "go" => Input::Command(Command::Go(arg)),
        "look" => Input::Command(Command::Look),
        "take" if arg.is_empty() => Input::Hint("Which item? Try: take torch"),
        "take" => Input::Command(Command::Take(arg)),
        "use" if arg.is_empty() => Input::Hint("Which item? Try: use torch"),
        "use" => Input::Command(Command::Use(arg)),
        "inventory" => Input::Command(Command::Inventory),
        "solve" => Input::Command(Command::Solve),
        "quit" | "exit" => Input::Command(Command::Quit),
        "help" => Input::Help,
        _ if arg.is_empty() && Direction::parse(&verb).is_some() => {
            Input::Command(Command::Go(verb))
        }
        _ => Input::Unknown(verb),
    }
}
