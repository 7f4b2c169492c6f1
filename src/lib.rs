//! # Connect Four
//!
//! Two-player Connect Four for the terminal. The game engine is a small pure
//! core with no knowledge of rendering or input; a Ratatui front end drives
//! it one move at a time.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, gravity placement, win detection,
//!   turn/outcome state machine
//! - [`ui`] — Terminal UI: event loop with input gating, board view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
