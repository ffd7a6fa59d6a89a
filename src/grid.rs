//! Fixed-size character grid.
//!
//! A `Grid` is a row-major `rows x cols` matrix of single byte symbols, set
//! once from a flat string and immutable afterwards. Cells are addressed as
//! `(row, col)` with `row in 0..rows` and `col in 0..cols`.
//!
//! ## Neighbor order
//!
//! Neighbors are enumerated clockwise starting straight north:
//!
//! ```text
//! +----+----+----+
//! | NW | N  | NE |      8  1  2
//! +----+----+----+
//! | W  | ** | E  |      7  X  3
//! +----+----+----+
//! | SW | S  | SE |      6  5  4
//! +----+----+----+
//! ```
//!
//! This order decides the order in which the search discovers words, so it is
//! part of the observable behavior and must not change.
//!
//! Which of the eight directions stay inside the grid depends only on the
//! cell's position, so the grid precomputes a `Direction` mask per cell at
//! construction time.

use crate::error::{Error, Result};
use std::fmt;

/// Grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    pub const fn new(rows: usize, cols: usize) -> Self {
        GridSize { rows, cols }
    }

    /// Number of cells (`rows * cols`).
    pub const fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Parse a size written as `RxC`, e.g. `"4x4"` or `"3X5"`.
    pub fn parse(value: &str) -> Result<Self> {
        let caps = crate::regex!(r"^\s*(\d+)\s*[xX]\s*(\d+)\s*$")
            .captures(value)
            .ok_or_else(|| Error::InvalidSize(format!("'{value}' (expected <rows>x<cols>)")))?;

        let dim = |idx: usize| -> Result<usize> {
            caps[idx].parse::<usize>().map_err(|_| Error::InvalidSize(format!("'{value}' is out of range")))
        };
        let size = GridSize::new(dim(1)?, dim(2)?);
        size.validate()?;
        Ok(size)
    }

    fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidSize(format!("{self} has no cells")));
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(Error::InvalidSize(format!("{self} is too large")));
        }
        Ok(())
    }
}

impl Default for GridSize {
    fn default() -> Self {
        GridSize::new(4, 4)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A grid coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Step one cell in `dir`, or `None` when that would leave the
    /// non-negative quadrant. Upper bounds are the grid's business.
    fn step(self, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.offset()?;
        Some(Cell { row: self.row.checked_add_signed(dr)?, col: self.col.checked_add_signed(dc)? })
    }
}

bitflags::bitflags! {
    /// The eight compass directions around a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Direction: u8 {
        const N  = 1 << 0;
        const NE = 1 << 1;
        const E  = 1 << 2;
        const SE = 1 << 3;
        const S  = 1 << 4;
        const SW = 1 << 5;
        const W  = 1 << 6;
        const NW = 1 << 7;
    }
}

impl Direction {
    /// Visitation order for neighbor enumeration.
    pub const CLOCKWISE: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// `(row, col)` deltas, index-aligned with [`Direction::CLOCKWISE`].
    const OFFSETS: [(isize, isize); 8] = [(-1, 0), (-1, 1), (0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1)];

    /// `(row, col)` delta of a single direction; `None` for an empty or
    /// composite mask.
    pub fn offset(self) -> Option<(isize, isize)> {
        Self::CLOCKWISE.into_iter().zip(Self::OFFSETS).find_map(|(dir, delta)| (dir == self).then_some(delta))
    }
}

/// Immutable `rows x cols` matrix of symbols.
#[derive(Debug, Clone)]
pub struct Grid {
    size: GridSize,
    symbols: Vec<u8>,
    /// In-bounds directions per cell, row-major like `symbols`.
    open: Vec<Direction>,
}

impl Grid {
    /// Build a grid from exactly `size.cells()` symbols in row-major order.
    pub fn new(size: GridSize, symbols: impl AsRef<[u8]>) -> Result<Self> {
        size.validate()?;
        let symbols = symbols.as_ref();
        if symbols.len() != size.cells() {
            return Err(Error::MalformedGrid { expected: size.cells(), actual: symbols.len() });
        }

        let mut open = Vec::with_capacity(size.cells());
        for row in 0..size.rows {
            for col in 0..size.cols {
                let origin = Cell::new(row, col);
                let mut dirs = Direction::empty();
                for dir in Direction::CLOCKWISE {
                    if origin.step(dir).is_some_and(|c| c.row < size.rows && c.col < size.cols) {
                        dirs |= dir;
                    }
                }
                open.push(dirs);
            }
        }

        Ok(Grid { size, symbols: symbols.to_vec(), open })
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size.rows
    }

    pub fn cols(&self) -> usize {
        self.size.cols
    }

    /// Row-major index of `cell`.
    pub fn index(&self, cell: Cell) -> usize {
        debug_assert!(cell.row < self.size.rows && cell.col < self.size.cols, "cell {cell:?} outside {}", self.size);
        cell.row * self.size.cols + cell.col
    }

    /// Symbol stored at `cell`.
    pub fn at(&self, cell: Cell) -> u8 {
        self.symbols[self.index(cell)]
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size.rows).flat_map(move |row| (0..self.size.cols).map(move |col| Cell::new(row, col)))
    }

    /// Directions from `cell` that stay inside the grid.
    pub fn directions_of(&self, cell: Cell) -> Direction {
        self.open[self.index(cell)]
    }

    /// Up to eight neighbors of `cell`, clockwise from north.
    pub fn neighbors_of(&self, cell: Cell) -> impl DoubleEndedIterator<Item = Cell> + '_ {
        let open = self.directions_of(cell);
        Direction::CLOCKWISE.into_iter().filter(move |dir| open.contains(*dir)).filter_map(move |dir| cell.step(dir))
    }

    /// The raw symbols, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.symbols.chunks(self.size.cols).enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            let mut first = true;
            for sym in row {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                write!(f, "{}", String::from_utf8_lossy(std::slice::from_ref(sym)))?;
            }
        }
        Ok(())
    }
}
