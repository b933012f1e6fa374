//! go-board: a minimal Go board-state engine.
//!
//! Tracks stones on an NxN grid, validates placements, discovers chains and
//! their liberties, and tallies the board by flood-filling empty regions.
//!
//! ## Modules
//!
//! - [`constants`] - Default board size and rendering glyphs
//! - [`board`] - Intersection grid, bounds and adjacency
//! - [`group`] - Chain discovery, liberties and region borders
//! - [`score`] - Whole-board tallies
//! - [`game`] - Stone placement with legality checks
//! - [`protocol`] - Line-oriented text protocol driving a game
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use go_board::game::Game;
//! use go_board::board::Intersection;
//!
//! let mut game = Game::new(5).unwrap();
//! game.play("black", 2, 2).unwrap();
//! assert_eq!(game.liberties(2, 2), Some(4));
//! assert_eq!(game.play("white", 2, 2).unwrap_err().to_string(), "occupied territory");
//! assert_eq!(game.score()[&Intersection::Black], 1);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod group;
pub mod protocol;
pub mod score;
