//! Hex board state: the grid, stone placement and removal, and enumeration.
//!
//! Cells are stored row-major as `Option<Color>`, where `None` is an empty
//! cell. Reads never mutate; only [`Board::place`] and [`Board::remove`]
//! change a cell.

use std::fmt;

use crate::constants::{BLACK_GLYPH, EMPTY_GLYPH, HEX_DIRECTIONS, WHITE_GLYPH};

/// Stone color.
///
/// Border assignment is fixed: White links row 0 to row N-1, Black links
/// column 0 to column N-1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other color.
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Color::White => WHITE_GLYPH,
            Color::Black => BLACK_GLYPH,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// A cell coordinate as `(row, col)`.
pub type Point = (usize, usize);

/// A square Hex board of side `size`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero. Callers are expected to validate user input.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Stone at `(row, col)`, or `None` for an empty or out-of-bounds cell.
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.cells[self.idx(row, col)]
    }

    /// Put a stone on an empty, in-bounds cell.
    ///
    /// Returns `false` without touching the board if the cell is out of
    /// bounds or already occupied.
    pub fn place(&mut self, row: usize, col: usize, color: Color) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        let idx = self.idx(row, col);
        if self.cells[idx].is_some() {
            return false;
        }
        self.cells[idx] = Some(color);
        true
    }

    /// Reset an in-bounds cell to empty, whatever it held before.
    ///
    /// This is a reset rather than an undo: it does not check which color
    /// (if any) occupied the cell. Returns `false` only when out of bounds.
    pub fn remove(&mut self, row: usize, col: usize) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        let idx = self.idx(row, col);
        self.cells[idx] = None;
        true
    }

    /// Snapshot of all empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Point> {
        self.points().filter(|&(r, c)| self.get(r, c).is_none()).collect()
    }

    /// All stones of one color in row-major order.
    pub fn stones(&self, color: Color) -> Vec<Point> {
        self.points()
            .filter(|&(r, c)| self.get(r, c) == Some(color))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// In-bounds neighbors of `(row, col)` following [`HEX_DIRECTIONS`].
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = Point> + '_ {
        HEX_DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.in_bounds(r, c).then_some((r, c))
        })
    }

    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        (0..s).flat_map(move |r| (0..s).map(move |c| (r, c)))
    }

    fn glyph(&self, row: usize, col: usize) -> char {
        self.get(row, col).map_or(EMPTY_GLYPH, Color::glyph)
    }
}

/// Renders the board as a slanted rhombus:
///
/// ```text
///   0 w 1 w 2
/// 0 +---+---+
///  b \ / \ / \
///   1 +---+---+
///    b \ / \ / \
///     2 +---+---+
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size;
        let connector = format!("\\{}", " / \\".repeat(n - 1));

        write!(f, "  0")?;
        for c in 1..n {
            write!(f, " w {c}")?;
        }
        writeln!(f)?;

        let mut indent = String::new();
        for r in 0..n {
            if r > 0 {
                indent.push(' ');
                writeln!(f, "{indent}b {connector}")?;
                if r < 10 {
                    indent.push(' ');
                }
            }
            write!(f, "{indent}{r} {}", self.glyph(r, 0))?;
            for c in 1..n {
                write!(f, "---{}", self.glyph(r, c))?;
            }
            writeln!(f)?;
            if r >= 10 {
                indent.push(' ');
            }
        }
        Ok(())
    }
}
