use crate::game::{Board, Tile};

/// Glyph for a single decoded tile; every snake segment looks the same
pub fn glyph(tile: Tile) -> char {
    match tile {
        Tile::Empty => ' ',
        Tile::Food => '0',
        Tile::Snake(_) => '*',
    }
}

/// Plain-text picture of the board, one line per row, each terminated by `\n`
pub fn board_to_text(board: &Board) -> String {
    let mut text = String::with_capacity(board.size() * (board.size() + 1));
    for row in board.rows() {
        text.extend(row.iter().map(|&cell| glyph(Tile::from_cell(cell))));
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{FOOD, Position};

    #[test]
    fn test_board_to_text() {
        let mut board = Board::empty(3);
        board[Position::new(0, 2)] = FOOD;
        board[Position::new(1, 0)] = -2;
        board[Position::new(1, 1)] = -1;

        assert_eq!(board_to_text(&board), "  0\n** \n   \n");
    }

    #[test]
    fn test_snake_segments_share_a_glyph() {
        assert_eq!(glyph(Tile::Snake(1)), glyph(Tile::Snake(40)));
    }
}
