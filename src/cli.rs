//! Interactive session for driving a game from a terminal.
//!
//! A line-oriented loop in the style of Go engine text protocols: one
//! command per line, responses prefixed with `=` on success and `?` on
//! failure, `#` lines ignored as comments.
//!
//! ## Commands
//!
//! - `play <vertex>` - Play a move ("D4"; "pass" also works here)
//! - `pass` - Pass the turn
//! - `board` - Print the board
//! - `moves` - Print the move log, one turn pair per line
//! - `captures` - Print both capture counts
//! - `turn` - Print the turn number and the color to move
//! - `derive <all|some|none> [seed phrase...]` - Derive a password
//! - `clear` - End the game and start a fresh one
//! - `end` - End the game without clearing the board
//! - `help` - List all commands
//! - `quit` - Exit the session

use std::io::{self, BufRead, Write};

use crate::encode::SymbolPolicy;
use crate::game::Game;
use crate::password::{PasswordOptions, derive_password};
use crate::record::{Move, format_vertex, parse_vertex};

/// The list of known session commands.
const KNOWN_COMMANDS: &[&str] = &[
    "board", "captures", "clear", "derive", "end", "help", "moves", "pass", "play", "quit", "turn",
];

/// Session state: one game at a time, replaced wholesale by `clear`.
pub struct Session {
    game: Game,
    rows: usize,
    cols: usize,
}

impl Session {
    pub fn new(rows: usize, cols: usize) -> Self {
        let game = Game::new(rows, cols);
        let rows = game.board().rows();
        let cols = game.board().cols();
        Self { game, rows, cols }
    }

    /// Run the command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);

            let prefix = if success { '=' } else { '?' };
            if message.is_empty() {
                writeln!(stdout, "{prefix}").unwrap();
            } else {
                writeln!(stdout, "{prefix} {message}").unwrap();
            }
            stdout.flush().unwrap();

            if command == "quit" {
                break;
            }
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "help" => (true, KNOWN_COMMANDS.join("\n")),

            "play" => {
                if args.is_empty() {
                    return (false, "missing vertex".to_string());
                }
                match parse_vertex(args[0], self.rows, self.cols) {
                    Some(Move::Pass) => self.pass(),
                    Some(Move::Play { row, col }) => match self.game.play(row, col) {
                        Ok(()) => (true, String::new()),
                        Err(e) => (false, e.to_string()),
                    },
                    None => (false, format!("invalid vertex: {}", args[0])),
                }
            }

            "pass" => self.pass(),

            "board" => (true, self.game.board().to_string()),

            "moves" => (true, self.format_moves()),

            "captures" => (
                true,
                format!(
                    "black {} white {}",
                    self.game.black_captures(),
                    self.game.white_captures()
                ),
            ),

            "turn" => {
                if self.game.is_over() {
                    (true, format!("game over after {} turns", self.game.turn()))
                } else {
                    (
                        true,
                        format!("turn {}, {} to move", self.game.turn(), self.game.to_move()),
                    )
                }
            }

            "derive" => self.derive(args),

            "clear" => {
                self.game.end();
                self.game = Game::new(self.rows, self.cols);
                (true, String::new())
            }

            "end" => {
                self.game.end();
                (true, String::new())
            }

            "quit" => (true, String::new()),

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn pass(&mut self) -> (bool, String) {
        match self.game.pass() {
            Ok(()) => {
                if self.game.is_over() {
                    (true, "game over".to_string())
                } else {
                    (true, String::new())
                }
            }
            Err(e) => (false, e.to_string()),
        }
    }

    fn derive(&mut self, args: &[&str]) -> (bool, String) {
        if args.is_empty() {
            return (false, "usage: derive <all|some|none> [seed phrase]".to_string());
        }
        let policy = match args[0] {
            "all" => SymbolPolicy::AllSymbols,
            "some" => SymbolPolicy::SomeSymbols,
            "none" => SymbolPolicy::NoSymbols,
            other => return (false, format!("unknown symbol policy: {other}")),
        };

        let phrase = args[1..].join(" ");
        let mut options = PasswordOptions::new(&phrase);
        options.policy = policy;

        match derive_password(self.game.move_log(), &options) {
            Ok(derived) => {
                let mut out = derived.password;
                if derived.short_password {
                    out.push_str("\nWARNING: this password is short");
                }
                if derived.no_seed {
                    out.push_str("\nNOTE: no seed used");
                }
                (true, out)
            }
            Err(e) => (false, e.to_string()),
        }
    }

    /// One full turn pair per line, record-book style.
    fn format_moves(&self) -> String {
        let records: Vec<String> = self
            .game
            .move_log()
            .iter()
            .map(|r| format_vertex(r.mv, self.rows))
            .collect();
        records
            .chunks(2)
            .map(|pair| pair.join(", "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_and_captures() {
        let mut session = Session::new(9, 9);

        // Black surrounds and captures the white stone at E5.
        for mv in ["E6", "E5", "D5", "A1", "F5", "A2", "E4"] {
            let (success, msg) = session.execute("play", &[mv]);
            assert!(success, "play {mv} failed: {msg}");
        }

        let (success, msg) = session.execute("captures", &[]);
        assert!(success);
        assert_eq!(msg, "black 1 white 0");
    }

    #[test]
    fn test_invalid_vertex() {
        let mut session = Session::new(9, 9);
        let (success, msg) = session.execute("play", &["Z99"]);
        assert!(!success);
        assert!(msg.contains("invalid vertex"));
    }

    #[test]
    fn test_two_passes_end_the_session_game() {
        let mut session = Session::new(9, 9);
        session.execute("pass", &[]);
        let (success, msg) = session.execute("pass", &[]);
        assert!(success);
        assert_eq!(msg, "game over");

        let (success, msg) = session.execute("play", &["C3"]);
        assert!(!success);
        assert!(msg.contains("over"));
    }

    #[test]
    fn test_clear_starts_fresh() {
        let mut session = Session::new(9, 9);
        session.execute("play", &["C3"]);
        session.execute("pass", &[]);
        session.execute("pass", &[]);

        let (success, _) = session.execute("clear", &[]);
        assert!(success);

        let (success, msg) = session.execute("turn", &[]);
        assert!(success);
        assert_eq!(msg, "turn 0, black to move");
    }

    #[test]
    fn test_derive_reports_warnings() {
        let mut session = Session::new(9, 9);
        session.execute("play", &["C3"]);
        session.execute("play", &["D4"]);

        let (success, msg) = session.execute("derive", &["all"]);
        assert!(success, "derive failed: {msg}");
        assert!(msg.contains("WARNING"), "4 characters is short");
        assert!(msg.contains("no seed used"));

        let (success, msg) = session.execute("derive", &["all", "long", "seed"]);
        assert!(success);
        assert!(!msg.contains("no seed used"));
    }

    #[test]
    fn test_derive_rejects_unknown_policy() {
        let mut session = Session::new(9, 9);
        let (success, msg) = session.execute("derive", &["most"]);
        assert!(!success);
        assert!(msg.contains("unknown symbol policy"));
    }

    #[test]
    fn test_moves_listing() {
        let mut session = Session::new(9, 9);
        session.execute("play", &["C3"]);
        session.execute("play", &["G7"]);
        session.execute("pass", &[]);

        let (success, msg) = session.execute("moves", &[]);
        assert!(success);
        assert_eq!(msg, "C3, G7\npass");
    }

    #[test]
    fn test_unknown_command() {
        let mut session = Session::new(9, 9);
        let (success, msg) = session.execute("genmove", &["black"]);
        assert!(!success);
        assert!(msg.contains("unknown command"));
    }
}
