use rand::Rng;

use super::board::{Board, FOOD, Position};

/// Default number of random cells probed before giving up on placing food
pub const MAX_FOOD_ATTEMPTS: usize = 5;

/// Try to drop one food item on a random empty cell
///
/// Probes at most `max_attempts` uniformly random cells and places food on
/// the first one that is empty. When every probe hits an occupied cell the
/// board is left as it was; that is expected on crowded boards and is not an
/// error. Returns the position that received food, if any.
pub fn add_food<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    max_attempts: usize,
) -> Option<Position> {
    let size = board.size();
    if size == 0 {
        return None;
    }

    for _ in 0..max_attempts {
        let pos = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));
        if board.is_empty_at(pos) {
            board[pos] = FOOD;
            return Some(pos);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_places_food_on_empty_board() {
        let mut board = Board::empty(10);
        let mut rng = StdRng::seed_from_u64(7);

        let pos = add_food(&mut board, &mut rng, MAX_FOOD_ATTEMPTS).expect("empty board");

        assert_eq!(board[pos], FOOD);
        assert_eq!(board.food_count(), 1);
    }

    #[test]
    fn test_gives_up_on_full_board() {
        let mut board = Board::from_fn(4, |_| -1);
        let before = board.clone();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(add_food(&mut board, &mut rng, MAX_FOOD_ATTEMPTS), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_never_overwrites_occupied_cells() {
        // Only one empty cell; any placement must land exactly there.
        let free = Position::new(2, 3);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let mut board = Board::from_fn(4, |pos| if pos == free { 0 } else { -3 });
            match add_food(&mut board, &mut rng, MAX_FOOD_ATTEMPTS) {
                Some(pos) => {
                    assert_eq!(pos, free);
                    assert_eq!(board[free], FOOD);
                }
                None => assert_eq!(board[free], 0),
            }
            assert_eq!(board.snake_cells(), 15);
        }
    }

    #[test]
    fn test_zero_attempts_places_nothing() {
        let mut board = Board::empty(5);
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(add_food(&mut board, &mut rng, 0), None);
        assert_eq!(board.food_count(), 0);
    }
}
