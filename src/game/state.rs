use super::{win, Board, PlaceError, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// Coordinate a successful drop landed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub row: usize,
    pub column: usize,
}

/// A game in progress or finished. Owns its board exclusively; every
/// mutation goes through [`GameState::drop`] or [`GameState::advance_turn`],
/// and nothing mutates once an outcome is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state with the default 7x6 board.
    pub fn initial() -> Self {
        Self::new(super::board::DEFAULT_COLS, super::board::DEFAULT_ROWS)
    }

    /// Create initial game state with a custom board size. Player 1 starts.
    pub fn new(width: usize, height: usize) -> Self {
        GameState {
            board: Board::new(width, height),
            current_player: Player::One,
            outcome: None,
        }
    }

    /// Get current player. After a winning drop this is still the winner:
    /// the turn only changes via an explicit [`advance_turn`](Self::advance_turn).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// True iff the current player has four in a row on the board.
    pub fn check_win(&self) -> bool {
        win::check_win(&self.board, self.current_player)
    }

    /// True iff the game ended with a full board and no winner.
    pub fn is_draw(&self) -> bool {
        self.outcome == Some(GameOutcome::Draw)
    }

    /// Drop the current player's piece in `column`.
    ///
    /// On success the outcome is re-evaluated (win first, then draw) and the
    /// landing coordinate returned. The turn is deliberately NOT advanced, so
    /// the caller can observe a win while the mover is still the current
    /// player; call [`advance_turn`](Self::advance_turn) to pass the turn.
    /// A rejected drop changes nothing.
    pub fn drop(&mut self, column: usize) -> Result<Placed, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, self.current_player)
            .map_err(|e| match e {
                PlaceError::ColumnFull => MoveError::ColumnFull,
                PlaceError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        if win::check_win(&self.board, self.current_player) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        Ok(Placed { row, column })
    }

    /// Pass the turn to the other player. No-op once the game is terminal,
    /// so the final mover stays the current player in a finished game.
    pub fn advance_turn(&mut self) {
        if !self.is_terminal() {
            self.current_player = self.current_player.other();
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
