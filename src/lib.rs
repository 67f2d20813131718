//! Discrete-time snake engine on a walled square grid, plus the terminal
//! front-end that drives it.
//!
//! The engine ([`engine::Engine`]) owns all game state and advances only
//! when the caller invokes [`engine::Engine::tick`] with a timestamp; it has
//! no timers, threads, or globals of its own.

pub mod clock;
pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
