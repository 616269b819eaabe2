use std::collections::VecDeque;

use rand::{Rng, rngs::StdRng};

use crate::game::{Direction, GameEngine, GameError, GameState};

/// Driver state shared by every mode
///
/// Owns the last committed state, the direction requested for the next
/// tick and a bounded history of earlier states (newest first).
pub struct GameLoop<R: Rng = StdRng> {
    engine: GameEngine<R>,
    current: GameState,
    pending: Direction,
    history: VecDeque<GameState>,
    ticks: u64,
}

impl<R: Rng> GameLoop<R> {
    pub fn new(mut engine: GameEngine<R>) -> Self {
        let current = engine.reset();
        Self::with_state(engine, current)
    }

    /// Resume from an existing state instead of a fresh board
    pub fn with_state(engine: GameEngine<R>, current: GameState) -> Self {
        let pending = current.direction;
        Self {
            engine,
            current,
            pending,
            history: VecDeque::new(),
            ticks: 0,
        }
    }

    pub fn current(&self) -> &GameState {
        &self.current
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn history(&self) -> &VecDeque<GameState> {
        &self.history
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Record a direction request for the next tick
    ///
    /// A request opposite to the committed direction is dropped and the
    /// earlier pending value stays. Returns whether the request was kept.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.current.direction.is_opposite(direction) {
            log::debug!(
                "Ignoring {direction:?}: reverses committed {:?}",
                self.current.direction
            );
            return false;
        }
        if self.pending != direction {
            log::debug!("Pending direction {:?} -> {direction:?}", self.pending);
        }
        self.pending = direction;
        true
    }

    /// Apply one transition with the pending direction
    pub fn tick(&mut self) -> Result<&GameState, GameError> {
        let next = self.engine.next_game_state(&self.current, self.pending)?;
        let previous = std::mem::replace(&mut self.current, next);

        let limit = self.engine.config().history_limit;
        if limit > 0 {
            self.history.push_front(previous);
            self.history.truncate(limit);
        }

        self.ticks += 1;
        Ok(&self.current)
    }

    /// Throw the current game away and start over
    pub fn restart(&mut self) {
        self.current = self.engine.reset();
        self.pending = self.current.direction;
        self.history.clear();
        self.ticks = 0;
        log::info!("Game restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Position};

    fn game_loop() -> GameLoop {
        GameLoop::new(GameEngine::seeded(GameConfig::default(), 5).unwrap())
    }

    #[test]
    fn test_initial_state() {
        let game = game_loop();
        assert_eq!(game.current().snake_size, 3);
        assert_eq!(game.pending_direction(), Direction::Right);
        assert_eq!(game.ticks(), 0);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_reversal_suppressed_for_every_pair() {
        for committed in Direction::ALL {
            let mut game = game_loop();
            game.current.direction = committed;
            game.pending = committed;

            let reverse = Direction::ALL
                .into_iter()
                .find(|d| committed.is_opposite(*d))
                .unwrap();

            assert!(!game.request_direction(reverse));
            assert_eq!(game.pending_direction(), committed);
        }
    }

    #[test]
    fn test_reversal_checked_against_committed_direction() {
        let mut game = game_loop();

        // Right is committed; Up is accepted as pending.
        assert!(game.request_direction(Direction::Up));
        // Left reverses the committed Right, so Up survives.
        assert!(!game.request_direction(Direction::Left));
        assert_eq!(game.pending_direction(), Direction::Up);
        // Down reverses only the pending Up, which does not matter.
        assert!(game.request_direction(Direction::Down));
        assert_eq!(game.pending_direction(), Direction::Down);
    }

    #[test]
    fn test_tick_commits_pending_direction() {
        let mut game = game_loop();
        game.request_direction(Direction::Up);

        let state = game.tick().unwrap();
        assert_eq!(state.direction, Direction::Up);
        assert_eq!(state.find_head().unwrap(), Position::new(15, 16));

        // Now Up is committed, so Down must be refused.
        assert!(!game.request_direction(Direction::Down));
        let state = game.tick().unwrap();
        assert_eq!(state.find_head().unwrap(), Position::new(14, 16));
        assert_eq!(game.ticks(), 2);
    }

    #[test]
    fn test_history_is_bounded() {
        let config = GameConfig {
            history_limit: 3,
            ..Default::default()
        };
        let mut game = GameLoop::new(GameEngine::seeded(config, 8).unwrap());
        let start = game.current().clone();

        game.tick().unwrap();
        assert_eq!(game.history().front(), Some(&start));

        for _ in 0..10 {
            game.tick().unwrap();
        }
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_history_disabled() {
        let config = GameConfig {
            history_limit: 0,
            ..Default::default()
        };
        let mut game = GameLoop::new(GameEngine::seeded(config, 8).unwrap());
        game.tick().unwrap();
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_corrupt_state_is_fatal() {
        let mut game = game_loop();
        game.current.snake_size = 50;

        assert!(matches!(
            game.tick(),
            Err(GameError::HeadNotFound { snake_size: 50 })
        ));
        assert_eq!(game.ticks(), 0);
    }

    #[test]
    fn test_restart() {
        let mut game = game_loop();
        game.request_direction(Direction::Down);
        game.tick().unwrap();
        game.tick().unwrap();

        game.restart();

        assert_eq!(game.ticks(), 0);
        assert!(game.history().is_empty());
        assert_eq!(game.pending_direction(), Direction::Right);
        assert_eq!(game.current().find_head().unwrap(), Position::new(15, 15));
    }
}
