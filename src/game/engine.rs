use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{
    board::{Board, FOOD, Position},
    config::GameConfig,
    direction::Direction,
    error::GameError,
    food::add_food,
    state::GameState,
};

/// Direction every new game starts with
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// The game engine that handles all game logic
///
/// Owns the configuration and the random source used for food placement.
/// Transitions never mutate the state they are given.
pub struct GameEngine<R: Rng = StdRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create a new game engine seeded from system entropy
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose food placement is reproducible
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Build an engine around `rng`, rejecting configs the board cannot hold
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the starting state
    pub fn reset(&mut self) -> GameState {
        GameState::new(
            self.initialize_board(),
            INITIAL_DIRECTION,
            self.config.initial_snake_size,
        )
    }

    /// Lay the initial snake on the centre row and drop the first food
    ///
    /// The head sits at the centre column and the body trails off to the
    /// left, so a snake of size 3 on a 30 board reads
    /// `(15,13)=-1 (15,14)=-2 (15,15)=-3`.
    pub fn initialize_board(&mut self) -> Board {
        let size = self.config.board_size;
        let snake_size = self.config.initial_snake_size as usize;
        let center = size / 2;
        let mut board = Board::empty(size);

        // `validate` guarantees the whole body fits left of the centre.
        for i in 0..snake_size {
            board[Position::new(center, center - i)] = -((snake_size - i) as i32);
        }

        self.add_food(&mut board);
        board
    }

    /// Attempt to place one food item, see [`add_food`]
    pub fn add_food(&mut self, board: &mut Board) -> Option<Position> {
        add_food(board, &mut self.rng, self.config.max_food_attempts)
    }

    /// Advance the game by one tick
    ///
    /// The head moves along `state.direction`; `new_direction` is only
    /// recorded for the following tick. Eating food freezes the ageing of
    /// every body segment for this tick, which is what makes the snake one
    /// cell longer.
    pub fn next_game_state(
        &mut self,
        state: &GameState,
        new_direction: Direction,
    ) -> Result<GameState, GameError> {
        let new_head = state.find_new_head()?;
        let growth: u32 = u32::from(state.board[new_head] == FOOD);
        let new_size = state.snake_size + growth;
        let ageing = 1 - growth as i32;

        let mut board = Board::from_fn(state.board.size(), |pos| {
            let value = state.board[pos];
            if pos == new_head {
                -(new_size as i32)
            } else if value < 0 {
                value + ageing
            } else {
                value
            }
        });

        if growth > 0 {
            log::debug!("Snake ate food at {new_head:?}, size now {new_size}");
            self.add_food(&mut board);
        }

        Ok(GameState::new(board, new_direction, new_size))
    }
}
