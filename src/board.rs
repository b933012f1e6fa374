//! Square Go board: intersection grid, bounds and adjacency queries.
//!
//! The grid is stored row-major (`y * size + x`). Adjacency is never
//! materialised; [`Board::neighbors`] derives it from the coordinates.

use std::fmt;
use std::str::FromStr;

use crate::constants::{GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE};
use crate::error::{BoardError, ParseError};

/// State of one intersection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Intersection {
    Empty,
    Black,
    White,
}

impl Intersection {
    pub fn glyph(self) -> char {
        match self {
            Intersection::Empty => GLYPH_EMPTY,
            Intersection::Black => GLYPH_BLACK,
            Intersection::White => GLYPH_WHITE,
        }
    }

    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            GLYPH_EMPTY => Some(Intersection::Empty),
            GLYPH_BLACK => Some(Intersection::Black),
            GLYPH_WHITE => Some(Intersection::White),
            _ => None,
        }
    }

    pub fn is_stone(self) -> bool {
        self != Intersection::Empty
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intersection::Empty => "empty",
            Intersection::Black => "black",
            Intersection::White => "white",
        };
        f.write_str(name)
    }
}

/// A coordinate tagged with a color.
///
/// Equality and hashing cover all three fields, so the same coordinate seen
/// with two different colors yields two distinct points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
    pub color: Intersection,
}

impl Point {
    pub fn new(x: usize, y: usize, color: Intersection) -> Self {
        Self { x, y, color }
    }

    pub fn coord(&self) -> (usize, usize) {
        (self.x, self.y)
    }
}

/// Neighbor offsets, in enumeration order: (x, y+1), (x, y-1), (x+1, y), (x-1, y).
const DELTA: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Intersection>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Intersection::Empty; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// True iff `0 <= x < size` and `0 <= y < size`.
    pub fn is_on_board(&self, x: isize, y: isize) -> bool {
        let s = self.size as isize;
        (0..s).contains(&x) && (0..s).contains(&y)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Intersection> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.cells[self.idx(x, y)])
    }

    /// The point at `(x, y)` tagged with its current color.
    pub fn point(&self, x: usize, y: usize) -> Option<Point> {
        self.get(x, y).map(|c| Point::new(x, y, c))
    }

    /// In-bounds orthogonal neighbors of `(x, y)`, each tagged with the color
    /// read from the grid now.
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<Point> {
        let mut v = Vec::with_capacity(4);
        for (dx, dy) in DELTA {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if self.is_on_board(nx, ny) {
                let (nx, ny) = (nx as usize, ny as usize);
                v.push(Point::new(nx, ny, self.cells[self.idx(nx, ny)]));
            }
        }
        v
    }

    /// Raw write. Occupancy is not checked; the coordinate must be on the board.
    pub fn set_color(&mut self, x: usize, y: usize, color: Intersection) {
        let i = self.idx(x, y);
        self.cells[i] = color;
    }

    /// Every coordinate with its current color, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| Point::new(i % self.size, i / self.size, c))
    }

    pub fn clear(&mut self) {
        self.cells.fill(Intersection::Empty);
    }

    /// One glyph per cell, row 0 first, rows separated by `\n`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.size).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c.glyph())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().collect();
        if rows.is_empty() {
            return Err(ParseError::Empty);
        }
        let size = rows.len();
        let mut board = Board {
            size,
            cells: vec![Intersection::Empty; size * size],
        };
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != board.size {
                return Err(ParseError::NotSquare {
                    row: y,
                    len,
                    size: board.size,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let c = Intersection::from_glyph(ch).ok_or(ParseError::BadChar(ch))?;
                board.set_color(x, y, c);
            }
        }
        Ok(board)
    }
}
