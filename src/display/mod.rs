use crate::core::{Board, Coord};
use crossterm::style::Stylize;
use std::io::{self, Write};

pub fn render_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "********************************".bold())?;
    writeln!(out, "{}", "* Welcome to Tic Tac Toe game! *".bold().yellow())?;
    writeln!(out, "{}", "********************************".bold())?;
    writeln!(out)
}

/// Same layout as `Board`'s `Display`, with checkers colored and the last
/// move highlighted.
pub fn render_board(out: &mut impl Write, board: &Board, last_move: Option<Coord>) -> io::Result<()> {
    let first = board.checkers().first();
    let separator = format!("{}-", "--".repeat(board.width() + 1));

    for row in 0..board.height() {
        write!(out, "{} |", row % 10)?;
        for col in 0..board.width() {
            match board.get(row, col) {
                Some(c) => {
                    let text = c.to_string();
                    if last_move == Some(Coord::new(row, col)) {
                        write!(out, "{}", text.red().bold())?;
                    } else if c == first {
                        write!(out, "{}", text.cyan())?;
                    } else {
                        write!(out, "{}", text.magenta())?;
                    }
                }
                None => write!(out, " ")?,
            }
            write!(out, "|")?;
        }
        writeln!(out)?;
        writeln!(out, "{}", separator)?;
    }

    write!(out, "  ")?;
    for col in 0..board.width() {
        write!(out, " {}", col % 10)?;
    }
    writeln!(out)?;
    writeln!(out)
}
