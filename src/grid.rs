use crate::error::MazeError;
use crate::graph::Maze;
use serde::Serialize;
use std::fmt;

/// A grid cell coordinate. Serialized as `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "[usize; 2]")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl From<Position> for [usize; 2] {
    fn from(pos: Position) -> Self {
        [pos.row, pos.col]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
}

#[derive(Debug, Clone)]
pub struct Grid {
    pub cells: Vec<Vec<Cell>>,
    pub start: Position,
    pub goal: Position,
}

impl Grid {
    /// Builds a grid from rows of cells. Rows must all have the same length.
    pub fn new(cells: Vec<Vec<Cell>>, start: Position, goal: Position) -> Result<Self, MazeError> {
        let width = cells.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MazeError::EmptyGrid);
        }
        if let Some((row, cells)) = cells.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(MazeError::RaggedRow {
                row,
                expected: width,
                found: cells.len(),
            });
        }

        let grid = Grid { cells, start, goal };
        for endpoint in [start, goal] {
            if !grid.is_walkable(endpoint) {
                return Err(MazeError::UnknownEndpoint(endpoint.to_string()));
            }
        }
        Ok(grid)
    }

    /// Parses a text layout: `.` free, `#` wall, `S` start, `B` goal.
    /// Whitespace-only lines are ignored and each line is trimmed.
    pub fn parse(layout: &str) -> Result<Self, MazeError> {
        let mut cells = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (row, line) in layout.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let mut cells_row = Vec::with_capacity(line.len());
            for (col, marker) in line.chars().enumerate() {
                let cell = match marker {
                    '.' => Cell::Empty,
                    '#' => Cell::Wall,
                    'S' | 'B' => {
                        let slot = if marker == 'S' { &mut start } else { &mut goal };
                        if slot.replace(Position::new(row, col)).is_some() {
                            return Err(MazeError::DuplicateMarker(marker));
                        }
                        Cell::Empty
                    }
                    _ => return Err(MazeError::UnknownMarker { row, col, marker }),
                };
                cells_row.push(cell);
            }
            cells.push(cells_row);
        }

        if cells.is_empty() {
            return Err(MazeError::EmptyGrid);
        }
        let start = start.ok_or(MazeError::MissingMarker('S'))?;
        let goal = goal.ok_or(MazeError::MissingMarker('B'))?;
        Grid::new(cells, start, goal)
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Empty)
    }

    /// Wall positions in row-major order.
    pub fn walls(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(_, cell)| **cell == Cell::Wall)
                    .map(move |(col, _)| Position::new(row, col))
            })
            .collect()
    }

    /// Orthogonal neighbors in up, down, left, right order, skipping walls
    /// and anything off the grid.
    pub fn get_neighbors(&self, pos: &Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        let (row, col) = (pos.row as isize, pos.col as isize);

        for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let (nr, nc) = (row + dr, col + dc);
            if nr < 0 || nc < 0 {
                continue;
            }
            let next = Position::new(nr as usize, nc as usize);
            if self.is_walkable(next) {
                neighbors.push(next);
            }
        }
        neighbors
    }

    /// Text rendering with the given path overlaid.
    /// Legend: S=Start, B=Goal, *=Path, #=Wall, .=Empty
    pub fn render(&self, path: &[Position]) -> String {
        let mut out = String::with_capacity(self.rows() * (self.cols() * 2 + 4));
        for (row, cells) in self.cells.iter().enumerate() {
            out.push_str(&format!("{:2} ", row));
            for (col, cell) in cells.iter().enumerate() {
                let pos = Position::new(row, col);
                let c = if pos == self.start {
                    'S'
                } else if pos == self.goal {
                    'B'
                } else if path.contains(&pos) {
                    '*'
                } else if *cell == Cell::Wall {
                    '#'
                } else {
                    '.'
                };
                out.push(c);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

impl Maze for Grid {
    type Node = Position;

    fn neighbors(&self, node: Position) -> Vec<Position> {
        self.get_neighbors(&node)
    }

    fn contains(&self, node: Position) -> bool {
        self.is_walkable(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "
        S.#
        .#.
        ..B
    ";

    #[test]
    fn parse_reads_markers() {
        let grid = Grid::parse(SMALL).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 3));
        assert_eq!(grid.start, Position::new(0, 0));
        assert_eq!(grid.goal, Position::new(2, 2));
        assert_eq!(grid.walls(), vec![Position::new(0, 2), Position::new(1, 1)]);
    }

    #[test]
    fn neighbors_are_up_down_left_right() {
        let grid = Grid::parse("...\n.S.\n..B").unwrap();
        assert_eq!(
            grid.neighbors(Position::new(1, 1)),
            vec![
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let grid = Grid::parse(SMALL).unwrap();
        assert_eq!(grid.neighbors(Position::new(0, 0)), vec![Position::new(1, 0), Position::new(0, 1)]);
        assert!(grid.neighbors(Position::new(1, 2)).contains(&Position::new(2, 2)));
        assert!(!grid.contains(Position::new(1, 1)));
        assert!(!grid.contains(Position::new(3, 0)));
    }

    #[test]
    fn parse_rejects_bad_layouts() {
        assert_eq!(Grid::parse("").unwrap_err(), MazeError::EmptyGrid);
        assert_eq!(Grid::parse("S.\n.").unwrap_err(), MazeError::MissingMarker('B'));
        assert_eq!(
            Grid::parse("S..\nB.").unwrap_err(),
            MazeError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(Grid::parse("SSB").unwrap_err(), MazeError::DuplicateMarker('S'));
        assert_eq!(
            Grid::parse("S?B").unwrap_err(),
            MazeError::UnknownMarker {
                row: 0,
                col: 1,
                marker: '?'
            }
        );
    }

    #[test]
    fn position_serializes_as_pair() {
        let json = serde_json::to_string(&Position::new(6, 0)).unwrap();
        assert_eq!(json, "[6,0]");
    }

    #[test]
    fn render_marks_path() {
        let grid = Grid::parse(SMALL).unwrap();
        let path = [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)];
        let text = grid.render(&path);
        assert!(text.starts_with(" 0 S . # "));
        assert!(text.contains(" 2 * * B "));
    }
}
