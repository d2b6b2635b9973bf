//! Parsing of typed moves.

/// Parses `"row col"` (space or comma separated) into coordinates.
///
/// Only the shape is checked here. Range checking is left to the board
/// engine so off-board input gets its proper error.
pub fn parse_coords(line: &str) -> Option<(usize, usize)> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Returns true for input that ends the game loop.
pub fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}
