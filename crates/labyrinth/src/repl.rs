//! Interactive console loop

use std::io::{self, BufRead, Write};

use lab_core::{GameLoop, GameLoopResult};

use crate::console::Console;
use crate::display::{render_help, render_narration, welcome_banner};
use crate::input::{Input, parse_line};

/// Play until the game ends or input runs out
///
/// End of input at the command line is treated like `quit`.
pub fn run_interactive<R: BufRead, W: Write>(
    game: &mut GameLoop,
    console: &mut Console<R, W>,
) -> io::Result<GameLoopResult> {
    console.write_lines(&welcome_banner())?;
    let start = game.state().current_room;
    game.state_mut().show_room(start);
    flush_narration(game, console)?;

    loop {
        let Some(line) = console.read_line("\n> ")? else {
            game.state_mut().quit();
            flush_narration(game, console)?;
            return Ok(GameLoopResult::PlayerQuit);
        };

        let command = match parse_line(&line) {
            Input::Empty => continue,
            Input::Help => {
                console.write_lines(&render_help())?;
                continue;
            }
            Input::Hint(hint) => {
                console.write_lines(&[hint])?;
                continue;
            }
            Input::Unknown(verb) => {
                console.write_lines(&[format!(
                    "Unknown command '{}'. Type 'help' for the list of commands.",
                    verb
                )])?;
                continue;
            }
            Input::Command(command) => command,
        };

        let result = game.tick(command, console);
        flush_narration(game, console)?;
        if result != GameLoopResult::Continue {
            return Ok(result);
        }
    }
}

fn flush_narration<R: BufRead, W: Write>(
    game: &mut GameLoop,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let messages = game.state_mut().take_messages();
    let lines = render_narration(&game.state().rooms, &messages);
    console.write_lines(&lines)
}
