//! A heuristic computer opponent for the board game 'Connect 4'
//!
//! The agent scores positions by counting patterns in every 4-cell window
//! of the board and picks its moves with a fixed-depth minimax search.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::{Board, Piece}, search::Minimax};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::from_moves("112233")?;
//! let mut minimax = Minimax::new(Piece::One);
//! let result = minimax.minimax(&board, 2, true);
//!
//! assert_eq!(result.column, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod error;
pub use error::{Error, Result};

pub mod board;

pub mod rules;

pub mod eval;

pub mod search;

pub mod config;

pub mod game;

pub mod arena;


/// The default number of rows on the game board
pub const ROWS: usize = 6;

/// The default number of columns on the game board
pub const COLS: usize = 7;

/// The length of a winning line, and of every scored window
pub const CONNECT: usize = 4;

// a window must fit on the default board in every direction
const_assert!(ROWS >= CONNECT);
const_assert!(COLS >= CONNECT);
