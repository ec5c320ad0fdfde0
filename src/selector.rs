//! Move selection.
//!
//! [`MoveSelector`] is the single capability the game needs from an AI:
//! given a board and a color, name a cell. [`MonteCarloSelector`] implements
//! it by scoring every empty cell with flat Monte Carlo playouts.
//!
//! Each candidate is placed tentatively, scored with
//! [`playout::evaluate`](crate::playout::evaluate), and removed again, so the
//! board is unchanged once a move has been chosen.

use std::time::Instant;

use fastrand::Rng;
use log::{debug, info};

use crate::board::{Board, Color, Point};
use crate::constants::PLAYOUTS;
use crate::playout::evaluate;

/// A strategy that picks the next move for `color`.
///
/// The board is borrowed mutably so implementations can try moves in place,
/// but it must be returned in the state it was given.
pub trait MoveSelector {
    /// Choose a cell to play.
    ///
    /// The board must have at least one empty cell.
    fn select_move(&mut self, board: &mut Board, color: Color) -> Point;
}

/// Flat Monte Carlo move selection.
pub struct MonteCarloSelector {
    /// Playouts per candidate move
    trials: usize,
    rng: Rng,
}

impl Default for MonteCarloSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MonteCarloSelector {
    /// Create a selector with the default playout count and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(PLAYOUTS, Rng::new())
    }

    /// Create a selector with an explicit playout count and random source.
    pub fn with_rng(trials: usize, rng: Rng) -> Self {
        Self { trials, rng }
    }

    /// Create a selector whose choices are reproducible from `seed`.
    pub fn seeded(trials: usize, seed: u64) -> Self {
        Self::with_rng(trials, Rng::with_seed(seed))
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Win-probability estimate for every empty cell, in row-major order.
    pub fn candidate_scores(&mut self, board: &mut Board, color: Color) -> Vec<(Point, f64)> {
        board
            .empty_cells()
            .into_iter()
            .map(|pt| (pt, self.score_candidate(board, pt, color)))
            .collect()
    }

    /// Place `color` at `pt`, evaluate, and take the stone back.
    fn score_candidate(&mut self, board: &mut Board, (r, c): Point, color: Color) -> f64 {
        board.place(r, c, color);
        let score = evaluate(board, color, self.trials, &mut self.rng);
        board.remove(r, c);
        debug!("candidate ({r}, {c}) for {color}: {score:.3}");
        score
    }
}

impl MoveSelector for MonteCarloSelector {
    /// Pick the empty cell with the highest playout win rate.
    ///
    /// Only a strictly better score replaces the current best, so ties go to
    /// the first cell in row-major order. If every candidate scores zero the
    /// first empty cell is returned.
    ///
    /// # Panics
    ///
    /// Panics if the board is full.
    fn select_move(&mut self, board: &mut Board, color: Color) -> Point {
        let start = Instant::now();
        let blank = board.empty_cells();
        let mut best_cell = *blank.first().expect("select_move called on a full board");
        let mut best = 0.0;

        for pt in blank {
            let score = self.score_candidate(board, pt, color);
            if score > best {
                best = score;
                best_cell = pt;
            }
        }

        info!(
            "{color} plays ({}, {}) with win rate {best:.3} in {:.2?}",
            best_cell.0,
            best_cell.1,
            start.elapsed()
        );
        best_cell
    }
}
