use crate::core::{Board, Checker, Coord};
use crate::error::GameError;
use crate::player::Player;
use log::warn;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Player typing coordinates on a line-based console.
///
/// Typing `c` at either prompt quits the game.
pub struct HumanPlayer<R, W> {
    name: String,
    checker: Checker,
    move_count: usize,
    input: R,
    output: W,
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    pub fn stdio(name: &str, checker: Checker) -> Self {
        Self::new(name, checker, BufReader::new(io::stdin()), io::stdout())
    }
}

enum Answer {
    Number(i64),
    Quit,
    Retry,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: &str, checker: Checker, input: R, output: W) -> Self {
        Self {
            name: name.to_string(),
            checker,
            move_count: 0,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, msg: &str) {
        if let Err(e) = writeln!(self.output, "{}", msg) {
            warn!("console write failed: {}", e);
        }
    }

    fn ask(&mut self, prompt: &str) -> Answer {
        if let Err(e) = write!(self.output, "{}", prompt).and_then(|_| self.output.flush()) {
            warn!("console write failed: {}", e);
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                warn!("input closed, {} leaves the game", self.name);
                Answer::Quit
            }
            Err(e) => {
                warn!("console read failed: {}", e);
                Answer::Quit
            }
            Ok(_) => {
                let line = line.trim();
                if line.eq_ignore_ascii_case("c") {
                    return Answer::Quit;
                }
                match line.parse::<i64>() {
                    Ok(n) => Answer::Number(n),
                    Err(_) => {
                        self.say("Please try again and input numbers only!");
                        Answer::Retry
                    }
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose_move(&mut self, board: &mut Board) -> Result<Option<Coord>, GameError> {
        let turn = format!("{}'s turn!", self.label());
        self.say(&turn);
        loop {
            let row = match self.ask("Enter a row: ") {
                Answer::Number(n) => n,
                Answer::Quit => return Ok(None),
                Answer::Retry => continue,
            };
            let col = match self.ask("Enter a column: ") {
                Answer::Number(n) => n,
                Answer::Quit => return Ok(None),
                Answer::Retry => continue,
            };

            // negative numbers are still numbers, just never on the board
            if let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) {
                if board.can_place(r, c) {
                    return Ok(Some(Coord::new(r, c)));
                }
            }
            self.say(&format!(
                "Cannot add a checker at row {} and column {}. Try again!",
                row, col
            ));
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn checker(&self) -> Checker {
        self.checker
    }

    fn move_count(&self) -> usize {
        self.move_count
    }

    fn record_move(&mut self) {
        self.move_count += 1;
    }
}
