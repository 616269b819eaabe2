//! Run the game without a terminal UI
//!
//! Steps a fixed number of ticks as fast as possible with the direction left
//! alone, then hands back the final board as text. Handy for scripted runs
//! and for checking a seed by eye.

use rand::Rng;

use super::game_loop::GameLoop;
use crate::game::{GameEngine, GameError};
use crate::render::board_to_text;

pub struct HeadlessMode<R: Rng> {
    game: GameLoop<R>,
    ticks: u64,
}

impl<R: Rng> HeadlessMode<R> {
    pub fn new(engine: GameEngine<R>, ticks: u64) -> Self {
        Self {
            game: GameLoop::new(engine),
            ticks,
        }
    }

    /// Run every tick and return the final board as text
    pub fn run(&mut self) -> Result<String, GameError> {
        for _ in 0..self.ticks {
            self.game.tick()?;
        }
        log::info!(
            "Headless run finished after {} ticks, snake size {}",
            self.game.ticks(),
            self.game.current().snake_size
        );
        Ok(board_to_text(&self.game.current().board))
    }

    pub fn game(&self) -> &GameLoop<R> {
        &self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    #[test]
    fn test_headless_run() {
        let engine = GameEngine::seeded(GameConfig::default(), 21).unwrap();
        let mut mode = HeadlessMode::new(engine, 45);

        let text = mode.run().unwrap();

        assert_eq!(mode.game().ticks(), 45);
        assert_eq!(text.lines().count(), 30);
        assert!(text.lines().all(|line| line.chars().count() == 30));
        let snake_glyphs = text.chars().filter(|&c| c == '*').count();
        assert_eq!(snake_glyphs as u32, mode.game().current().snake_size);
    }

    #[test]
    fn test_same_seed_same_board() {
        let run = |seed| {
            HeadlessMode::new(GameEngine::seeded(GameConfig::default(), seed).unwrap(), 60)
                .run()
                .unwrap()
        };
        assert_eq!(run(4), run(4));
    }
}
