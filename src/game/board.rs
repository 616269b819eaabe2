use std::ops::{Index, IndexMut};

use super::direction::Direction;

/// Cell value of an empty tile
pub const EMPTY: i32 = 0;
/// Cell value of a food tile
pub const FOOD: i32 = 1;

/// A position on the board, addressed by row then column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move one cell in `direction` on a torus of side `size`
    ///
    /// Each axis is computed as `(coord ± 1 + size) mod size`, so leaving one
    /// edge re-enters from the opposite one.
    pub fn wrapped_step(&self, direction: Direction, size: usize) -> Self {
        let (dr, dc) = direction.delta();
        let n = size as i64;
        Self {
            row: ((self.row as i64 + dr + n) % n) as usize,
            col: ((self.col as i64 + dc + n) % n) as usize,
        }
    }
}

/// Decoded meaning of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Food,
    /// Snake segment with this many ticks left before it vanishes
    Snake(u32),
}

impl Tile {
    pub fn from_cell(value: i32) -> Self {
        match value {
            v if v < 0 => Tile::Snake(v.unsigned_abs()),
            FOOD => Tile::Food,
            _ => Tile::Empty,
        }
    }
}

/// Square grid of encoded tiles
///
/// `0` is empty, `1` is food and `-k` is a snake segment with `k` ticks of
/// lifetime left. The head is the most negative cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<i32>,
}

impl Board {
    /// Create a `size` x `size` board with every cell empty
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![EMPTY; size * size],
        }
    }

    /// Build a board by evaluating `f` for every position in row-major order
    pub fn from_fn(size: usize, mut f: impl FnMut(Position) -> i32) -> Self {
        let cells = (0..size * size)
            .map(|idx| f(Position::new(idx / size, idx % size)))
            .collect();
        Self { size, cells }
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Position) -> Option<i32> {
        self.offset(pos).map(|idx| self.cells[idx])
    }

    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.get(pos).map(Tile::from_cell)
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(EMPTY)
    }

    /// Iterate over every cell with its position, row by row
    pub fn cells(&self) -> impl Iterator<Item = (Position, i32)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &value)| (Position::new(idx / size, idx % size), value))
    }

    /// Iterate over the rows of the board
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    /// Number of cells currently holding food
    pub fn food_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == FOOD).count()
    }

    /// Number of cells currently occupied by the snake
    pub fn snake_cells(&self) -> usize {
        self.cells.iter().filter(|&&v| v < 0).count()
    }

    fn offset(&self, pos: Position) -> Option<usize> {
        (pos.row < self.size && pos.col < self.size).then(|| pos.row * self.size + pos.col)
    }
}

impl Index<Position> for Board {
    type Output = i32;

    fn index(&self, pos: Position) -> &i32 {
        assert!(
            pos.row < self.size && pos.col < self.size,
            "position {pos:?} outside {0}x{0} board",
            self.size
        );
        &self.cells[pos.row * self.size + pos.col]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut i32 {
        assert!(
            pos.row < self.size && pos.col < self.size,
            "position {pos:?} outside {0}x{0} board",
            self.size
        );
        &mut self.cells[pos.row * self.size + pos.col]
    }
}
