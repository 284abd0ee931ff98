use crate::core::{
    board::Board,
    common::{MoveError, Player},
};

/// Current status of a game, derived after every accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Core game logic: the board plus whose turn it is and who, if anyone, won.
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    board: Board,
    to_move: Player,
    moves_played: usize,
    winner: Option<Player>,
}

impl GameEngine {
    /// Fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark the next accepted move places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Number of accepted moves so far.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Play the active player's mark at `index`.
    ///
    /// The turn passes to the opponent only when the move is accepted and
    /// the game is still in progress afterwards.
    pub fn play(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.status().is_terminal() {
            return Err(MoveError::GameOver);
        }
        let player = self.to_move;
        self.board.place_mark(index, player)?;
        self.moves_played += 1;
        log::debug!("{} placed at {} (move {})", player, index, self.moves_played);

        if self.board.check_win(index, player) {
            self.winner = Some(player);
        }
        let status = self.status();
        if !status.is_terminal() {
            self.to_move = player.opponent();
        }
        Ok(status)
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if let Some(p) = self.winner {
            GameStatus::Won(p)
        } else if !self.board.has_empty_square() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}
