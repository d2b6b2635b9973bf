//! Core domain types for the 3x3 board.

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Mark written by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Mark {
    /// The human-controlled mark (rendered `X`).
    PlayerA,
    /// The automated mark (rendered `O`).
    PlayerB,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::PlayerA => Mark::PlayerB,
            Mark::PlayerB => Mark::PlayerA,
        }
    }

    /// Text glyph for this mark.
    pub fn symbol(self) -> char {
        Cell::from(self).symbol()
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One square of the grid.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Holds the human mark.
    PlayerA,
    /// Holds the automated mark.
    PlayerB,
}

impl Cell {
    /// Returns the mark held by this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Mark::PlayerA),
            Cell::PlayerB => Some(Mark::PlayerB),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Text glyph: `X`, `O` or `.`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerA => 'X',
            Cell::PlayerB => 'O',
        }
    }

    /// Parses a glyph produced by [`Cell::symbol`].
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::PlayerA),
            'O' | 'o' => Some(Cell::PlayerB),
            _ => None,
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::PlayerA => Cell::PlayerA,
            Mark::PlayerB => Cell::PlayerB,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 3x3 grid of cells, row-major.
///
/// A `Board` is a plain value. Moves produce a new board through
/// [`crate::apply_move`]; nothing mutates a board that has been handed out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: [[Cell; SIDE]; SIDE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            rows: [[Cell::Empty; SIDE]; SIDE],
        }
    }

    /// Builds a board from explicit rows.
    pub fn from_rows(rows: [[Cell; SIDE]; SIDE]) -> Self {
        Self { rows }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: crate::Position) -> Cell {
        self.rows[pos.row()][pos.col()]
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, pos: crate::Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns the rows of the grid.
    pub fn rows(&self) -> &[[Cell; SIDE]; SIDE] {
        &self.rows
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Counts cells holding the given value.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells().filter(|c| *c == cell).count()
    }

    /// Returns a copy with one cell replaced. Legality is the caller's concern.
    pub(crate) fn with(mut self, pos: crate::Position, cell: Cell) -> Self {
        self.rows[pos.row()][pos.col()] = cell;
        self
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
            if r + 1 < SIDE {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// A character that is not a cell glyph or separator.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),

    /// Wrong number of cell glyphs.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for ParseBoardError {}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine glyphs (`X`, `O`, `.`) in row-major order.
    ///
    /// Whitespace and the `|`, `-`, `+` separators printed by `Display`
    /// are ignored, so a displayed board parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELLS);
        for ch in s.chars() {
            if ch.is_whitespace() || matches!(ch, '|' | '-' | '+') {
                continue;
            }
            let cell = Cell::from_symbol(ch).ok_or(ParseBoardError::UnexpectedChar(ch))?;
            cells.push(cell);
        }
        if cells.len() != CELLS {
            return Err(ParseBoardError::WrongLength(cells.len()));
        }

        let mut rows = [[Cell::Empty; SIDE]; SIDE];
        for (i, cell) in cells.into_iter().enumerate() {
            rows[i / SIDE][i % SIDE] = cell;
        }
        Ok(Self { rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;
    use strum::IntoEnumIterator;

    #[test]
    fn test_marks_round_trip_through_cells() {
        for mark in Mark::iter() {
            assert_eq!(mark.opponent().opponent(), mark);
            assert_ne!(mark.opponent(), mark);
            assert_eq!(Cell::from(mark).mark(), Some(mark));
            assert_eq!(Cell::from_symbol(mark.symbol()), Some(Cell::from(mark)));
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.count(Cell::Empty), CELLS);
    }

    #[test]
    fn test_mark_opponent() {
        assert_eq!(Mark::PlayerA.opponent(), Mark::PlayerB);
        assert_eq!(Mark::PlayerB.opponent(), Mark::PlayerA);
    }

    #[test]
    fn test_cell_from_mark() {
        assert_eq!(Cell::from(Mark::PlayerA), Cell::PlayerA);
        assert_eq!(Cell::PlayerB.mark(), Some(Mark::PlayerB));
        assert_eq!(Cell::Empty.mark(), None);
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XXX .O. O..".parse().unwrap();
        assert_eq!(board.rows()[0], [Cell::PlayerA; 3]);
        assert_eq!(board.get(Position::new(1, 1).unwrap()), Cell::PlayerB);
        assert_eq!(board.get(Position::new(2, 0).unwrap()), Cell::PlayerB);
        assert_eq!(board.count(Cell::Empty), 4);
    }

    #[test]
    fn test_display_parses_back() {
        let board: Board = "XO. .X. ..O".parse().unwrap();
        let text = board.to_string();
        assert_eq!(text, "X|O|.\n-+-+-\n.|X|.\n-+-+-\n.|.|O");
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XX?......".parse::<Board>(),
            Err(ParseBoardError::UnexpectedChar('?'))
        );
        assert_eq!("XO".parse::<Board>(), Err(ParseBoardError::WrongLength(2)));
    }
}
