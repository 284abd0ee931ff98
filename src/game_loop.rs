#![cfg(feature = "std")]

use crate::{
    core::{GameEngine, GameStatus},
    interface::{parse_move, Interface, Notice},
};

/// Drives one game from the empty board to a win or a draw.
pub struct GameLoop<I> {
    engine: GameEngine,
    interface: I,
}

impl<I: Interface> GameLoop<I> {
    pub fn new(interface: I) -> Self {
        Self {
            engine: GameEngine::new(),
            interface,
        }
    }

    pub fn into_parts(self) -> (GameEngine, I) {
        (self.engine, self.interface)
    }

    /// Play until a terminal state and return it.
    ///
    /// Bad input re-prompts the same player. Running out of input before the
    /// game ends is an error.
    pub fn run(&mut self) -> anyhow::Result<GameStatus> {
        self.interface.show_board(self.engine.board())?;

        loop {
            let player = self.engine.to_move();
            let line = self.interface.prompt_move(player)?.ok_or_else(|| {
                anyhow::anyhow!(
                    "input closed before the game finished ({} to move)",
                    player
                )
            })?;

            let status = match parse_move(&line).and_then(|i| self.engine.play(i)) {
                Ok(status) => status,
                Err(e) => {
                    log::warn!("rejected move {:?} from {}: {}", line.trim(), player, e);
                    self.interface.announce(Notice::InvalidMove(e))?;
                    continue;
                }
            };
            self.interface.show_board(self.engine.board())?;

            match status {
                GameStatus::Won(winner) => {
                    log::info!("{} won after {} moves", winner, self.engine.moves_played());
                    self.interface.announce(Notice::Win(winner))?;
                    return Ok(status);
                }
                GameStatus::Draw => {
                    log::info!("draw after {} moves", self.engine.moves_played());
                    self.interface.announce(Notice::Draw)?;
                    return Ok(status);
                }
                GameStatus::InProgress => {}
            }
        }
    }
}
