//! # Connect Four
//!
//! A two-player Connect Four game engine with a terminal front-end built
//! on Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, engine state machine
//! - [`script`] — Headless driver replaying a list of column selections
//! - [`ui`] — Terminal UI: game view and keyboard input
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod script;
pub mod ui;
