//! Terminal UI: keyboard-driven game view.

mod app;
pub mod game_view;

pub use app::App;
