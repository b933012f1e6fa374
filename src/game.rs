//! Stone placement with legality checks.
//!
//! There is no capture logic: a move that leaves an opposing chain without
//! liberties is accepted and that chain stays on the board. A move whose own
//! chain would have no liberties is rejected.

use std::str::FromStr;

use tracing::debug;

use crate::board::{Board, Intersection, Point};
use crate::error::{BoardError, PlayError};
use crate::group::liberties;
use crate::score::{Tally, area_score, score};

/// A stone color accepted by [`Game::place`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stone {
    Black,
    White,
}

impl From<Stone> for Intersection {
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Black => Intersection::Black,
            Stone::White => Intersection::White,
        }
    }
}

impl FromStr for Stone {
    type Err = PlayError;

    /// Accepts `black`/`white` or the glyphs `b`/`w`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Stone::Black),
            "white" | "w" => Ok(Stone::White),
            _ => Err(PlayError::InvalidColor),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
}

impl Game {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
        })
    }

    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn clear(&mut self) {
        self.board.clear();
    }

    /// Play `color` at column `x`, row `y`.
    ///
    /// # Errors
    /// - [`PlayError::InvalidColor`] - `color` is not a recognised token
    /// - [`PlayError::OutOfBounds`] - coordinate not on the board
    /// - [`PlayError::Occupied`] - intersection is not empty
    /// - [`PlayError::NoLiberties`] - the new chain would have no liberties
    pub fn play(&mut self, color: &str, x: isize, y: isize) -> Result<(), PlayError> {
        let stone = color.parse::<Stone>()?;
        self.place(stone, x, y)
    }

    pub fn place(&mut self, stone: Stone, x: isize, y: isize) -> Result<(), PlayError> {
        if !self.board.is_on_board(x, y) {
            debug!(x, y, "rejected: off board");
            return Err(PlayError::OutOfBounds);
        }
        let (x, y) = (x as usize, y as usize);
        if self.board.get(x, y) != Some(Intersection::Empty) {
            debug!(x, y, "rejected: occupied");
            return Err(PlayError::Occupied);
        }

        let color = Intersection::from(stone);
        self.board.set_color(x, y, color);
        if liberties(&self.board, Point::new(x, y, color)) == 0 {
            self.board.set_color(x, y, Intersection::Empty); // undo suicidal move
            debug!(x, y, %color, "rejected: no liberties");
            return Err(PlayError::NoLiberties);
        }
        debug!(x, y, %color, "placed");
        Ok(())
    }

    /// Liberties of the chain at `(x, y)`, seeded with the color found there.
    /// Returns `None` off the board.
    pub fn liberties(&self, x: usize, y: usize) -> Option<usize> {
        self.board.point(x, y).map(|p| liberties(&self.board, p))
    }

    pub fn score(&self) -> Tally {
        score(&self.board)
    }

    pub fn area_score(&self) -> Tally {
        area_score(&self.board)
    }
}
