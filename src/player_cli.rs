#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::action::Action;
use crate::player::{Controller, Player};
use crate::state::GameState;
use crate::ui::print_player_view;

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Undo,
    Quit,
    Help,
}

/// Parse a prompt line: key names, action names, `u`/`undo`, `q`/`quit`, `?`/`help`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line {
        "q" | "quit" | "exit" => return Some(Command::Quit),
        "u" | "undo" => return Some(Command::Undo),
        "?" | "h" | "help" => return Some(Command::Help),
        _ => {}
    }
    Action::from_key(line)
        .or_else(|| line.parse().ok())
        .map(Command::Act)
}

pub fn print_help() {
    println!("Keys: w/a/s/d or up/down/left/right to move, r to rotate,");
    println!("      Enter or 'confirm' to place, u to undo, q to quit.");
}

/// Person at the terminal, one command per line.
pub struct CliPlayer<R> {
    input: R,
    reveal: bool,
}

impl CliPlayer<io::StdinLock<'static>> {
    pub fn stdin(reveal: bool) -> Self {
        Self::new(io::stdin().lock(), reveal)
    }
}

impl<R: BufRead> CliPlayer<R> {
    pub fn new(input: R, reveal: bool) -> Self {
        Self { input, reveal }
    }

    /// Read one raw line. `Ok(None)` on end of input.
    pub fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Show the boards and read commands until one parses. `Ok(None)` on end of input.
    pub fn read_command(&mut self, state: &GameState) -> anyhow::Result<Option<Command>> {
        print_player_view(state, self.reveal);
        loop {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_command(&line) {
                Some(Command::Help) => print_help(),
                Some(cmd) => return Ok(Some(cmd)),
                None => {
                    println!("Unknown command {:?}", line.trim());
                    print_help();
                }
            }
        }
    }
}

impl<R: BufRead> Controller for CliPlayer<R> {
    fn next_action(
        &mut self,
        _rng: &mut SmallRng,
        state: &GameState,
        _player: Player,
    ) -> anyhow::Result<Option<Action>> {
        loop {
            match self.read_command(state)? {
                Some(Command::Act(action)) => return Ok(Some(action)),
                Some(Command::Undo) => println!("Nothing to undo here"),
                Some(Command::Help) => print_help(),
                Some(Command::Quit) | None => return Ok(None),
            }
        }
    }
}
