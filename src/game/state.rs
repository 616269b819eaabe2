use super::board::{Board, Position};
use super::direction::Direction;
use super::error::GameError;

/// Complete game state for one tick
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,
    /// Direction the snake will move on the next tick
    pub direction: Direction,
    /// Current snake length, also the magnitude of the head marker
    pub snake_size: u32,
}

impl GameState {
    /// Create a new game state
    pub fn new(board: Board, direction: Direction, snake_size: u32) -> Self {
        Self {
            board,
            direction,
            snake_size,
        }
    }

    /// Cell value that marks the head for the current snake size
    pub fn head_marker(&self) -> i32 {
        -(self.snake_size as i32)
    }

    /// Locate the head: the first cell, in row-major order, equal to `-snake_size`
    pub fn find_head(&self) -> Result<Position, GameError> {
        // A zero-length snake would match the first empty cell.
        if self.snake_size == 0 {
            return Err(GameError::HeadNotFound { snake_size: 0 });
        }
        let marker = self.head_marker();
        self.board
            .cells()
            .find_map(|(pos, value)| (value == marker).then_some(pos))
            .ok_or(GameError::HeadNotFound {
                snake_size: self.snake_size,
            })
    }

    /// Where the head lands after moving one cell in the stored direction
    pub fn find_new_head(&self) -> Result<Position, GameError> {
        let head = self.find_head()?;
        Ok(head.wrapped_step(self.direction, self.board.size()))
    }
}
