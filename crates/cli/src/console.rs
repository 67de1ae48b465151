use crate::view::{help_text, render_buys, render_state};
use gembazaar_core::{Game, Move, MoveError, MoveSource};
use std::io::{BufRead, Write};

/// Reads one move per line for whichever player is due, printing the table
/// before every prompt.
pub struct ConsoleSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        write!(self.output, "{prompt}").ok()?;
        self.output.flush().ok()?;
        let mut line = String::new();
        if self.input.read_line(&mut line).ok()? == 0 {
            return None;
        }
        Some(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleSource<R, W> {
    fn next_move(&mut self, game: &Game, player: usize) -> Option<Result<Move, MoveError>> {
        writeln!(self.output, "{}", render_state(game)).ok()?;
        if let Ok(buys) = game.possible_buys(player) {
            writeln!(self.output, "{}", render_buys(&buys)).ok()?;
        }
        loop {
            let line = self.read_line(&format!("Player {player} move [t3/t2/r/b] > "))?;
            match line.as_str() {
                "" => continue,
                "quit" | "exit" => return None,
                "help" | "?" => {
                    writeln!(self.output, "{}", help_text()).ok()?;
                }
                "json" => match serde_json::to_string_pretty(game.table()) {
                    Ok(json) => writeln!(self.output, "{json}").ok()?,
                    Err(err) => writeln!(self.output, "json error: {err}").ok()?,
                },
                _ => return Some(Move::parse_line(&line)),
            }
        }
    }

    fn rejected(&mut self, _player: usize, error: &MoveError) {
        let _ = writeln!(self.output, "illegal move: {error}");
    }
}
