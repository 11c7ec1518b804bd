//! Help text for player commands

/// One line of the help listing
#[derive(Debug, Clone, Copy)]
pub struct CommandHelp {
    pub usage: &'static str,
    pub description: &'static str,
}

impl CommandHelp {
    const fn new(usage: &'static str, description: &'static str) -> Self {
        Self { usage, description }
    }
}

pub const COMMANDS: &[CommandHelp] = &[
    CommandHelp::new("go <direction>", "move north/south/east/west"),
    CommandHelp::new("<direction>", "shorthand for go <direction>"),
    CommandHelp::new("look", "describe the current room"),
    CommandHelp::new("take <item>", "pick up an item"),
    CommandHelp::new("use <item>", "use an item from the inventory"),
    CommandHelp::new("inventory", "show the inventory"),
    CommandHelp::new("solve", "solve the room's puzzle or open the chest"),
    CommandHelp::new("quit", "leave the game"),
    CommandHelp::new("help", "show this list"),
];
