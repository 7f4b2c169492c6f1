//! Core Connect Four game logic: board representation, gravity placement,
//! pure win detection, and the turn/outcome state machine.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, PlaceError, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError, Placed};
