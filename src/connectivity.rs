//! Border-to-border connectivity checks.
//!
//! Both checks share one breadth-first flood fill: starting from a set of
//! same-colored seeds, it walks same-color adjacency and records which of the
//! color's two target borders the group touches.

use std::collections::VecDeque;

use crate::board::{Board, Color, Point};

impl Board {
    /// Flood-fill `color` from all `seeds` at once and report which of the
    /// color's borders were reached.
    ///
    /// For Black, flag 0 is column 0 and flag 1 is column N-1. For White,
    /// flag 0 is row 0 and flag 1 is row N-1. With no seeds both flags stay
    /// `false`.
    pub fn border_flags(&self, seeds: &[Point], color: Color) -> [bool; 2] {
        let mut flags = [false, false];
        if seeds.is_empty() {
            return flags;
        }

        let n = self.size();
        let mut visited = vec![false; n * n];
        let mut queue: VecDeque<Point> = VecDeque::with_capacity(seeds.len());
        for &(r, c) in seeds {
            visited[r * n + c] = true;
            queue.push_back((r, c));
        }

        while let Some((r, c)) = queue.pop_front() {
            let edge = match color {
                Color::Black => c,
                Color::White => r,
            };
            if edge == 0 {
                flags[0] = true;
            }
            if edge == n - 1 {
                flags[1] = true;
            }

            for (nr, nc) in self.neighbors(r, c) {
                let i = nr * n + nc;
                if !visited[i] && self.get(nr, nc) == Some(color) {
                    visited[i] = true;
                    queue.push_back((nr, nc));
                }
            }
        }

        flags
    }

    /// Did the stone at `(row, col)` complete a border-to-border path?
    ///
    /// Only the group containing that stone is explored. Empty or
    /// out-of-bounds cells never win.
    pub fn local_win(&self, row: usize, col: usize) -> bool {
        match self.get(row, col) {
            Some(color) => self.border_flags(&[(row, col)], color) == [true, true],
            None => false,
        }
    }

    /// Winner of a completely filled board.
    ///
    /// Only Black's connectivity is checked, seeded from its stones in
    /// column 0; any other outcome is reported as White. On a full board
    /// exactly one color is connected, so this is exact there. On a partially
    /// filled board it reports White whenever Black is not yet connected.
    pub fn global_winner(&self) -> Color {
        let seeds: Vec<Point> = (0..self.size())
            .filter(|&r| self.get(r, 0) == Some(Color::Black))
            .map(|r| (r, 0))
            .collect();

        if self.border_flags(&seeds, Color::Black) == [true, true] {
            Color::Black
        } else {
            Color::White
        }
    }
}
