//! Text front end: a line-oriented command interpreter driving one game
//!
//! Manual sides type moves (`a7-a6`, or `-` to pass) and commands; automated
//! sides are played by the [`AIEngine`] as soon as it is their turn.
//!
//! ```
//! use ataxx::game::Game;
//! use ataxx::EngineConfig;
//!
//! let script = "manual blue\na7-a6\ndump\nquit\n";
//! let mut out = Vec::new();
//! let mut game = Game::new(script.as_bytes(), &mut out, EngineConfig::default()).unwrap();
//! game.run().unwrap();
//! drop(game);
//! assert!(String::from_utf8(out).unwrap().contains("==="));
//! ```

pub mod player;

use std::io::{BufRead, Write};

use log::{info, warn};

use crate::board::{Board, PieceColor};
use crate::config::EngineConfig;
use crate::engine::AIEngine;
use crate::error::{AtaxxResult, GameError};
use crate::moves::Move;

pub use player::{PlayerKind, Players};

const HELP: &str = "\
Commands:
  new                 start a new game (player settings are kept)
  auto <color>        let the engine play <color>
  manual <color>      play <color> by hand
  block <square>      block a square and its mirror images (before play)
  seed <n>            reseed the engine
  dump                print the board
  undo                take back the last move (and any engine replies)
  help                show this message
  quit                leave
  <c0><r0>-<c1><r1>   move, e.g. a7-b6
  -                   pass (only when no move exists)
";

enum Flow {
    Continue,
    Quit,
}

/// One game session over an input and output stream.
pub struct Game<R, W> {
    board: Board,
    engine: AIEngine,
    players: Players,
    input: R,
    output: W,
    /// Result already printed for the current decided position
    reported: bool,
}

impl<R: BufRead, W: Write> Game<R, W> {
    /// # Errors
    /// `GameError::InvalidConfig` if `config` fails validation
    pub fn new(input: R, output: W, config: EngineConfig) -> AtaxxResult<Self> {
        Ok(Self {
            board: Board::new(),
            engine: AIEngine::with_config(config)?,
            players: Players::default(),
            input,
            output,
            reported: false,
        })
    }

    #[must_use]
    pub fn with_players(mut self, players: Players) -> Self {
        self.players = players;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn engine(&self) -> &AIEngine {
        &self.engine
    }

    pub fn players(&self) -> Players {
        self.players
    }

    /// Play until `quit` or end of input.
    ///
    /// Rejected commands and moves are reported on the output and the
    /// session continues; only I/O failures end it with an error.
    pub fn run(&mut self) -> AtaxxResult<()> {
        info!(
            "game started: red {} vs blue {}",
            self.players.get(PieceColor::Red),
            self.players.get(PieceColor::Blue)
        );
        loop {
            self.report_result()?;

            let color = self.board.whose_move();
            if !self.board.is_game_over() && self.players.get(color) == PlayerKind::Auto {
                self.auto_move()?;
                continue;
            }

            if self.board.is_game_over() {
                write!(self.output, "> ")?;
            } else {
                write!(self.output, "{color}> ")?;
            }
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            match self.execute(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(GameError::Io(err)) => return Err(GameError::Io(err)),
                Err(err) => {
                    warn!("rejected {:?}: {err}", line.trim());
                    writeln!(self.output, "{err}")?;
                }
            }
        }
        Ok(())
    }

    fn auto_move(&mut self) -> AtaxxResult<()> {
        let color = self.board.whose_move();
        let result = self.engine.find_move(&self.board)?;
        self.board.make_move(result.best_move)?;
        match result.best_move {
            Move::Pass => writeln!(self.output, "{color} passes.")?,
            mv => writeln!(self.output, "{color} moves {mv}.")?,
        }
        Ok(())
    }

    /// Print the outcome once per decided position.
    fn report_result(&mut self) -> AtaxxResult<()> {
        match self.board.winner() {
            None => self.reported = false,
            Some(_) if self.reported => {}
            Some(winner) => {
                let text = match winner {
                    PieceColor::Red => "Red wins.",
                    PieceColor::Blue => "Blue wins.",
                    _ => "Draw.",
                };
                info!(
                    "game over after {} moves: {text} ({} red, {} blue)",
                    self.board.num_moves(),
                    self.board.red_pieces(),
                    self.board.blue_pieces()
                );
                writeln!(self.output, "{text}")?;
                self.reported = true;
            }
        }
        Ok(())
    }

    fn execute(&mut self, line: &str) -> AtaxxResult<Flow> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Flow::Continue);
        };
        let arg = words.next();
        let malformed = || GameError::UnknownCommand(line.trim().to_string());

        match command.to_ascii_lowercase().as_str() {
            "quit" => return Ok(Flow::Quit),
            "new" => {
                self.board.clear();
                info!("new game");
            }
            kind @ ("auto" | "manual") => {
                let color: PieceColor = arg.ok_or_else(malformed)?.parse()?;
                let kind: PlayerKind = kind.parse()?;
                self.players.set(color, kind)?;
                info!("{color} is now {kind}");
            }
            "block" => self.board.set_block_str(arg.ok_or_else(malformed)?)?,
            "seed" => {
                let text = arg.ok_or_else(malformed)?;
                let seed = text
                    .parse::<u64>()
                    .map_err(|_| GameError::InvalidConfig(format!("bad seed {text:?}")))?;
                self.engine.set_seed(seed);
            }
            "dump" => write!(self.output, "===\n{}===\n", self.board)?,
            "undo" => self.undo()?,
            "help" => self.output.write_all(HELP.as_bytes())?,
            _ => match command.parse::<Move>() {
                Ok(mv) => self.board.make_move(mv)?,
                Err(_) => return Err(malformed()),
            },
        }
        Ok(Flow::Continue)
    }

    /// Undo back to the most recent position where a manual side is to move.
    fn undo(&mut self) -> AtaxxResult<()> {
        self.board.undo()?;
        while self.players.get(self.board.whose_move()) == PlayerKind::Auto
            && !self.board.all_moves().is_empty()
        {
            self.board.undo()?;
        }
        Ok(())
    }
}
