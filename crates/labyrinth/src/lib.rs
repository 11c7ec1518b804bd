//! labyrinth: Text front end for the treasure labyrinth
//!
//! Turns typed lines into core commands and renders the narration buffer.
//! Two modes share the same engine: an interactive console and a JSON
//! line protocol.

pub mod console;
pub mod display;
pub mod input;
pub mod logger;
pub mod protocol;
pub mod repl;

pub use console::Console;
pub use input::{Input, parse_line};
pub use protocol::{Reply, Request, Response, handle_line, run_protocol};
pub use repl::run_interactive;
