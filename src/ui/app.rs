use crate::config::AppConfig;
use crate::game::{GameOutcome, GameState, MoveError};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// The session driver: owns the game state and gates input around it.
///
/// `input_enabled` is the analogue of disabling a click handler while a move
/// resolves: drop input is ignored from submission until the outcome is
/// processed, and permanently once the game is terminal (restart and quit
/// still work).
pub struct App {
    game_state: GameState,
    board_width: usize,
    board_height: usize,
    selected_column: usize,
    input_enabled: bool,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            game_state: GameState::new(config.board.width, config.board.height),
            board_width: config.board.width,
            board_height: config.board.height,
            selected_column: config.board.width / 2, // Start in middle
            input_enabled: true,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < self.board_width - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.game_state.is_terminal() {
                    self.message = Some("Game over! Press 'r' to restart.".to_string());
                } else if self.input_enabled {
                    self.submit_drop();
                }
            }
            KeyCode::Char('r') => {
                self.game_state = GameState::new(self.board_width, self.board_height);
                self.selected_column = self.board_width / 2;
                self.input_enabled = true;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Submit a drop in the selected column and resolve it to completion:
    /// placement, win check, draw check, turn switch. Input stays locked for
    /// the whole sequence and is only re-enabled if the game continues.
    fn submit_drop(&mut self) {
        self.input_enabled = false;

        match self.game_state.drop(self.selected_column) {
            Ok(_placed) => match self.game_state.outcome() {
                Some(GameOutcome::Winner(player)) => {
                    self.message = Some(format!("{} won!", player.name()));
                    return;
                }
                Some(GameOutcome::Draw) => {
                    self.message = Some("The game ended in a draw!".to_string());
                    return;
                }
                None => {
                    self.game_state.advance_turn();
                }
            },
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }

        self.input_enabled = true;
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            self.input_enabled,
            &self.message,
        );
    }
}
