//! Torus Snake - Snake on a wraparound board
//!
//! This library provides:
//! - Core game logic (game module)
//! - Driver loop owning the current state and pending direction (modes module)
//! - Text and TUI rendering (render module)
//! - Keyboard mapping (input module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
