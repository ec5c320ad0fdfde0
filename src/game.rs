//! Interactive console game: a human against a [`MoveSelector`].
//!
//! The loop asks for a board size and a side. Black always moves first, and
//! turns alternate until the last stone played completes a path. After each
//! game the player may ask for a rematch on a fresh board.
//!
//! Input is read as whitespace-separated tokens, so `3 4` on one line and
//! `3` / `4` on two lines are equivalent. Input and output are generic, which
//! lets tests drive a whole game from a byte string.
//!
//! ## Example
//!
//! ```ignore
//! use hexplay::game::Game;
//! use hexplay::selector::MonteCarloSelector;
//! let stdin = std::io::stdin();
//! let mut game = Game::new(stdin.lock(), std::io::stdout(), MonteCarloSelector::new());
//! game.run()?;
//! ```

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use log::info;

use crate::board::{Board, Color};
use crate::constants::{CLEAR_SCREEN, DEFAULT_SIZE};
use crate::selector::MoveSelector;

/// Console game state.
pub struct Game<R, W, S> {
    input: R,
    out: W,
    /// AI used for the computer's moves
    selector: S,
    /// Tokens read but not yet consumed
    tokens: VecDeque<String>,
    clear_screen: bool,
    board: Board,
}

impl<R: BufRead, W: Write, S: MoveSelector> Game<R, W, S> {
    pub fn new(input: R, out: W, selector: S) -> Self {
        Self {
            input,
            out,
            selector,
            tokens: VecDeque::new(),
            clear_screen: true,
            board: Board::new(DEFAULT_SIZE),
        }
    }

    /// Enable or disable clearing the terminal before each turn.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// The board of the current (or last) game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play games until the player declines a rematch.
    ///
    /// Fails if input closes mid-game or output cannot be written.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.setup()?;
            let human = self.choose()?;
            let computer = human.opponent();
            info!("new game on {0}x{0}: human {human}, computer {computer}", self.board.size());

            let mut to_move = Color::Black;
            let winner = loop {
                let won = if to_move == computer {
                    self.computer_turn(computer)?
                } else {
                    self.player_turn(human)?
                };
                if won {
                    break to_move;
                }
                to_move = to_move.opponent();
            };
            info!("{winner} wins");

            if winner == computer {
                writeln!(self.out, "I win")?;
            } else {
                writeln!(self.out, "You win!")?;
            }
            self.prompt("Want to play again? (y/n) ")?;
            let again = self.next_token()?;
            if again != "y" && again != "Y" {
                break;
            }
        }
        writeln!(self.out, "Let's play again sometime!")?;
        self.out.flush()?;
        Ok(())
    }

    /// Ask for a board size and start a fresh board.
    fn setup(&mut self) -> Result<()> {
        self.prompt("Enter board size: ")?;
        let size = self
            .next_token()?
            .parse::<usize>()
            .ok()
            .filter(|&n| n > 0);

        let size = match size {
            Some(n) => n,
            None => {
                writeln!(self.out, "Invalid input, I'll pick {DEFAULT_SIZE}.")?;
                DEFAULT_SIZE
            }
        };
        self.board = Board::new(size);
        write!(self.out, "{}", self.board)?;
        Ok(())
    }

    /// Ask which side the human plays. Returns the human's color.
    fn choose(&mut self) -> Result<Color> {
        self.prompt("Pick a side (b/w): ")?;
        let side = self.next_token()?;
        let human = match side.as_str() {
            "b" | "B" => Color::Black,
            "w" | "W" => Color::White,
            _ => {
                writeln!(self.out, "Invalid side")?;
                writeln!(self.out, "I'll be the black side")?;
                writeln!(self.out, "Thinking...")?;
                Color::White
            }
        };
        Ok(human)
    }

    /// Let the AI move. Returns true if that move won.
    fn computer_turn(&mut self, computer: Color) -> Result<bool> {
        self.clear()?;
        self.prompt("My turn! I move: ")?;
        let (r, c) = self.selector.select_move(&mut self.board, computer);
        self.board.place(r, c, computer);
        writeln!(self.out, "{r} {c}")?;
        write!(self.out, "{}", self.board)?;
        Ok(self.board.local_win(r, c))
    }

    /// Read moves until the human names a legal cell. Returns true if it won.
    fn player_turn(&mut self, human: Color) -> Result<bool> {
        self.clear()?;
        writeln!(self.out, "Your turn!")?;
        write!(self.out, "{}", self.board)?;

        let (r, c) = loop {
            self.prompt("Where are you putting your piece? (y x = ) ")?;
            let row = self.next_token()?.parse::<usize>();
            let col = self.next_token()?.parse::<usize>();
            if let (Ok(r), Ok(c)) = (row, col) {
                if self.board.place(r, c, human) {
                    break (r, c);
                }
            }
            writeln!(self.out, "You can't do that!")?;
        };

        self.clear()?;
        writeln!(self.out, "Thinking...")?;
        write!(self.out, "{}", self.board)?;
        Ok(self.board.local_win(r, c))
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            write!(self.out, "{CLEAR_SCREEN}")?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush().context("failed to flush output")
    }

    /// Next whitespace-separated input token, reading more lines as needed.
    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            let n = self
                .input
                .read_line(&mut line)
                .context("failed to read input")?;
            if n == 0 {
                bail!("input closed");
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Point;

    /// Always plays the first empty cell in row-major order.
    struct FirstEmpty;

    impl MoveSelector for FirstEmpty {
        fn select_move(&mut self, board: &mut Board, _color: Color) -> Point {
            board.empty_cells()[0]
        }
    }

    fn play(script: &str) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = Game::new(script.as_bytes(), &mut out, FirstEmpty)
            .with_clear_screen(false)
            .run();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_next_token_spans_lines() {
        let mut out = Vec::new();
        let mut game = Game::new("  3 4\n\n5\n".as_bytes(), &mut out, FirstEmpty);
        assert_eq!(game.next_token().unwrap(), "3");
        assert_eq!(game.next_token().unwrap(), "4");
        assert_eq!(game.next_token().unwrap(), "5");
        assert!(game.next_token().is_err());
    }

    #[test]
    fn test_human_wins_single_cell() {
        let (result, out) = play("1\nb\n0 0\nn\n");
        assert!(result.is_ok());
        assert!(out.contains("Your turn!"));
        assert!(out.contains("You win!"));
        assert!(out.ends_with("Let's play again sometime!\n"));
    }

    #[test]
    fn test_computer_moves_first_as_black() {
        let (result, out) = play("1\nw\nN\n");
        assert!(result.is_ok());
        assert!(out.contains("My turn! I move: 0 0\n"));
        assert!(out.contains("I win"));
        assert!(!out.contains("Your turn!"));
    }

    #[test]
    fn test_illegal_moves_are_retried() {
        // Human is Black on 2x2: 9 9 is off-board, "a 1" is not a number,
        // and 0 1 is taken by the computer's reply.
        let (result, out) = play("2\nb\n9 9\na 1\n0 0\n0 1\n1 0\nn\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("You can't do that!").count(), 3);
        // Computer answers at (0,1) then completes the right column at (1,1)
        assert!(out.contains("My turn! I move: 0 1\n"));
        assert!(out.contains("My turn! I move: 1 1\n"));
        assert!(out.contains("I win"));
    }

    #[test]
    fn test_rematch_starts_fresh_board() {
        let (result, out) = play("1\nb\n0 0\ny\n2\nb\n0 0\n1 0\nn\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("Enter board size: ").count(), 2);
        assert!(out.contains("You win!"));
        assert!(out.contains("I win"));
    }

    #[test]
    fn test_invalid_size_and_side_fall_back() {
        // Input runs out after the computer's first move on the default board
        let (result, out) = play("0\nq\n");
        assert!(result.is_err());
        assert!(out.contains("Invalid input, I'll pick 9."));
        assert!(out.contains("Invalid side\nI'll be the black side\n"));
        assert!(out.contains("My turn! I move: 0 0\n"));
        assert!(out.contains("8 +---+"));
    }

    #[test]
    fn test_non_numeric_size_falls_back() {
        let mut out = Vec::new();
        let mut game = Game::new("big\n".as_bytes(), &mut out, FirstEmpty);
        game.setup().unwrap();
        assert_eq!(game.board().size(), DEFAULT_SIZE);
    }

    #[test]
    fn test_clear_screen_is_emitted() {
        let mut out = Vec::new();
        Game::new("1\nb\n0 0\nn\n".as_bytes(), &mut out, FirstEmpty)
            .run()
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(CLEAR_SCREEN));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (result, _) = play("");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }
}
