//! Core game logic module for Snake
//!
//! The whole snake lives in the board itself: every body cell holds a
//! negative number counting the ticks it has left, and the head is the most
//! negative cell. Nothing here does I/O or rendering.

pub mod board;
pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use board::{Board, EMPTY, FOOD, Position, Tile};
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, INITIAL_DIRECTION};
pub use error::GameError;
pub use food::{MAX_FOOD_ATTEMPTS, add_food};
pub use state::GameState;
