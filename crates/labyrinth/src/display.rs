//! Text rendering of rooms, narration and help

use lab_core::Narration;
use lab_core::dungeon::{Room, RoomGraph, RoomId};
use lab_data::COMMANDS;

/// Render a room: header, description, items, exits and puzzle hint
pub fn render_room(id: RoomId, room: &Room) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("== {} ==", id.name().to_uppercase()),
        room.description().to_string(),
    ];

    if !room.items().is_empty() {
        let items: Vec<&str> = room.items().iter().map(|item| item.name()).collect();
        lines.push(format!("Items: {}", items.join(", ")));
    }

    let exits = room.sorted_exits();
    if !exits.is_empty() {
        let names: Vec<&str> = exits.iter().map(|(dir, _)| dir.name()).collect();
        lines.push(format!("Exits: {}", names.join(", ")));
    }

    if room.has_puzzle() {
        lines.push("There seems to be a puzzle here (use the solve command).".to_string());
    }
    lines
}

/// Render drained narration in order
pub fn render_narration(rooms: &RoomGraph, messages: &[Narration]) -> Vec<String> {
    let mut lines = Vec::new();
    for message in messages {
        match message {
            Narration::Text(text) => lines.push(text.clone()),
            Narration::Room(id) => match rooms.room(*id) {
                Some(room) => lines.extend(render_room(*id, room)),
                None => log::warn!("narration names unknown room {}", id),
            },
        }
    }
    lines
}

/// Render the command table
pub fn render_help() -> Vec<String> {
    let width = COMMANDS.iter().map(|cmd| cmd.usage.len()).max().unwrap_or(0);
    let mut lines = vec![String::new(), "Available commands:".to_string()];
    lines.extend(
        COMMANDS
            .iter()
            .map(|cmd| format!("  {:<width$}  {}", cmd.usage, cmd.description)),
    );
    lines
}

pub fn welcome_banner() -> Vec<String> {
    vec![
        "Welcome to the Treasure Labyrinth!".to_string(),
        "Find the chest and open it. Type 'help' for the list of commands.".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_core::action::Direction;
    use lab_core::dungeon::Puzzle;
    use lab_core::object::ItemId;

    #[test]
    fn test_room_header_and_sorted_exits() {
        let room = Room::new("A dusty library.")
            .with_item(ItemId::AncientBook)
            .with_exit(Direction::North, RoomId::Armory)
            .with_exit(Direction::East, RoomId::Hall);
        let lines = render_room(RoomId::Library, &room);
        assert_eq!(lines[1], "== LIBRARY ==");
        assert_eq!(lines[2], "A dusty library.");
        assert_eq!(lines[3], "Items: ancient_book");
        assert_eq!(lines[4], "Exits: east, north");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_room_without_items_has_no_item_line() {
        let room = Room::new("Empty.").with_puzzle(Puzzle::new("?", "7"));
        let lines = render_room(RoomId::TrapRoom, &room);
        assert_eq!(lines[1], "== TRAP_ROOM ==");
        assert!(!lines.iter().any(|line| line.starts_with("Items:")));
        assert!(!lines.iter().any(|line| line.starts_with("Exits:")));
        assert!(lines.last().is_some_and(|line| line.contains("solve")));
    }

    #[test]
    fn test_narration_keeps_order() {
        let graph = lab_data::default_graph().unwrap();
        let messages = vec![
            Narration::Text("first".into()),
            Narration::Room(RoomId::Entrance),
            Narration::Text("last".into()),
        ];
        let lines = render_narration(&graph, &messages);
        assert_eq!(lines.first().map(String::as_str), Some("first"));
        assert!(lines.contains(&"== ENTRANCE ==".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("last"));
    }

    #[test]
    fn test_help_lists_every_command() {
        let lines = render_help();
        assert_eq!(lines.len(), COMMANDS.len() + 2);
        assert!(lines.iter().any(|line| line.contains("solve")));
    }
}
