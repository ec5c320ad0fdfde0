//! Monte Carlo playouts (random board completion).
//!
//! A playout fills every empty cell with alternating colors in a random
//! order, then asks who won the full board. Repeating this many times gives
//! an estimate of a color's chance of winning from the current position.
//!
//! All randomness comes from a caller-supplied [`fastrand::Rng`], so a seeded
//! generator reproduces the same estimates.

use fastrand::Rng;
use log::trace;

use crate::board::{Board, Color, Point};

/// Shuffle `cells` in place (Fisher-Yates).
pub fn shuffle(cells: &mut [Point], rng: &mut Rng) {
    for i in (1..cells.len()).rev() {
        let j = rng.usize(..=i);
        cells.swap(i, j);
    }
}

/// Fill `cells` in order with alternating colors, starting with `first`.
///
/// Every cell must be empty; the cells are taken from a snapshot of the
/// board's empty cells.
pub fn fill_alternating(board: &mut Board, cells: &[Point], first: Color) {
    let mut color = first;
    for &(r, c) in cells {
        let placed = board.place(r, c, color);
        debug_assert!(placed, "playout cell ({r}, {c}) was not empty");
        color = color.opponent();
    }
}

/// Estimate the probability that `perspective` wins from this position.
///
/// Runs `trials` random completions of the board. In each one the first
/// filled cell goes to the opponent of `perspective` and colors alternate
/// from there, regardless of how many stones are already down. The board
/// is restored after every trial, so it is unchanged on return.
///
/// Returns a value in `[0, 1]`; zero trials yield `0.0`.
pub fn evaluate(board: &mut Board, perspective: Color, trials: usize, rng: &mut Rng) -> f64 {
    if trials == 0 {
        return 0.0;
    }

    let blank = board.empty_cells();
    let mut order = blank.clone();
    let mut wins = 0usize;

    for _ in 0..trials {
        shuffle(&mut order, rng);
        fill_alternating(board, &order, perspective.opponent());

        if board.global_winner() == perspective {
            wins += 1;
        }

        // Take back the random moves
        for &(r, c) in &blank {
            board.remove(r, c);
        }
    }

    let p = wins as f64 / trials as f64;
    trace!(
        "evaluate {perspective}: {wins}/{trials} playouts won over {} empty cells",
        blank.len()
    );
    p
}
