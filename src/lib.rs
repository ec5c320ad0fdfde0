//! Hexplay: a Hex engine driven by flat Monte Carlo playouts.
//!
//! Black connects the left and right columns, White connects the top and
//! bottom rows. The engine scores each empty cell by claiming it, filling the
//! rest of the board at random many times, and counting how often it ends up
//! connected.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, playout count, and glyphs
//! - [`board`] - Board state, placement, neighbors, and rendering
//! - [`connectivity`] - Border-to-border BFS (win detection)
//! - [`playout`] - Random completions for win-probability estimates
//! - [`selector`] - Move selection strategies
//! - [`game`] - Interactive console game loop
//!
//! ## Example
//!
//! ```
//! use hexplay::board::{Board, Color};
//! use hexplay::selector::{MonteCarloSelector, MoveSelector};
//!
//! let mut board = Board::new(4);
//! board.place(1, 1, Color::White);
//!
//! let mut ai = MonteCarloSelector::seeded(100, 42);
//! let (r, c) = ai.select_move(&mut board, Color::Black);
//! assert!(board.place(r, c, Color::Black));
//! ```

pub mod board;
pub mod connectivity;
pub mod constants;
pub mod game;
pub mod playout;
pub mod selector;
