//! Terminal UI: the session driver (event loop, input gating) and the game
//! view that renders the board, a drop preview, and game messages.

mod app;
mod game_view;

pub use app::App;
