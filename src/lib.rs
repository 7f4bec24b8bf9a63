//! Conway's Game of Life on a square, wrapping board.
//!
//! [`Board`] holds the current generation, [`Board::advance`] steps it and
//! [`Board::render`] turns it into text. The terminal display and the
//! settings file live in [`life`], [`terminal`] and [`settings`].

pub mod board;
pub mod config;
pub mod error;
pub mod life;
pub mod pattern;
pub mod settings;
pub mod terminal;

pub use board::{build_generation, Board, Generation};
pub use error::{LifeError, Result};
pub use pattern::{Catalog, Cell, Pattern};
