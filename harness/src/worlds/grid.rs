//! `GridWorld`: a 4-connected maze parsed from ASCII art.
//!
//! ```text
//! #######
//! #A   ##
//! # ##  #
//! #    B#
//! #######
//! ```
//!
//! `#` is a wall, `A` the start, `B` the goal; any other cell must be a
//! space. Unlike the co-star graph this world has a meaningful heuristic:
//! Manhattan distance to the goal never overestimates the remaining moves,
//! and priority search with [`manhattan`] usually expands far fewer nodes
//! than uniform-cost search. Frontier entries are not re-priced, so on
//! some mazes it settles for a longer path.

use degrees_search::contract::SearchSpace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("maze has no start cell 'A'")]
    MissingStart,
    #[error("maze has no goal cell 'B'")]
    MissingGoal,
    #[error("marker '{marker}' appears more than once")]
    DuplicateMarker { marker: char },
    #[error("unexpected character {ch:?} at row {row}, column {col}")]
    UnexpectedChar { ch: char, row: usize, col: usize },
}

#[derive(Debug, Clone)]
pub struct GridWorld {
    /// Row-major; ragged rows are padded with walls.
    walls: Vec<Vec<bool>>,
    cols: usize,
    start: Cell,
    goal: Cell,
}

impl GridWorld {
    /// Parse a maze. Blank leading/trailing lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] when a marker is missing or repeated, or an
    /// unknown character appears.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut walls = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (row, line) in text.trim_matches('\n').lines().enumerate() {
            let mut cells = Vec::new();
            for (col, ch) in line.chars().enumerate() {
                let here = Cell::new(row, col);
                match ch {
                    '#' => cells.push(true),
                    ' ' => cells.push(false),
                    'A' => {
                        if start.replace(here).is_some() {
                            return Err(GridError::DuplicateMarker { marker: 'A' });
                        }
                        cells.push(false);
                    }
                    'B' => {
                        if goal.replace(here).is_some() {
                            return Err(GridError::DuplicateMarker { marker: 'B' });
                        }
                        cells.push(false);
                    }
                    other => {
                        return Err(GridError::UnexpectedChar { ch: other, row, col });
                    }
                }
            }
            walls.push(cells);
        }

        let cols = walls.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut walls {
            row.resize(cols, true);
        }

        Ok(Self {
            walls,
            cols,
            start: start.ok_or(GridError::MissingStart)?,
            goal: goal.ok_or(GridError::MissingGoal)?,
        })
    }

    #[must_use]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[must_use]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.walls.len()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `cell` is a wall. Cells outside the maze count as walls.
    #[must_use]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls
            .get(cell.row)
            .and_then(|r| r.get(cell.col))
            .copied()
            .unwrap_or(true)
    }

    fn step(cell: Cell, mv: Move) -> Option<Cell> {
        match mv {
            Move::Up => cell.row.checked_sub(1).map(|row| Cell::new(row, cell.col)),
            Move::Down => Some(Cell::new(cell.row + 1, cell.col)),
            Move::Left => cell.col.checked_sub(1).map(|col| Cell::new(cell.row, col)),
            Move::Right => Some(Cell::new(cell.row, cell.col + 1)),
        }
    }
}

impl SearchSpace for GridWorld {
    type State = Cell;
    type Action = Move;

    #[allow(clippy::unnecessary_literal_bound)]
    fn space_id(&self) -> &str {
        "grid"
    }

    fn neighbors(&self, state: &Cell) -> Vec<(Move, Cell)> {
        [Move::Up, Move::Down, Move::Left, Move::Right]
            .into_iter()
            .filter_map(|mv| Self::step(*state, mv).map(|c| (mv, c)))
            .filter(|(_, c)| !self.is_wall(*c))
            .collect()
    }
}

/// Manhattan distance to `target`, as a heuristic.
pub fn manhattan(target: Cell) -> impl Fn(&Cell) -> u64 {
    move |cell: &Cell| (cell.row.abs_diff(target.row) + cell.col.abs_diff(target.col)) as u64
}
