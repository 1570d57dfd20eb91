//! Move validation, line detection and end of game conditions

use crate::{
    board::{Board, Cell, Piece},
    CONNECT,
};

/// The cells of one straight line of [`CONNECT`] cells on the board
pub type Window = [Cell; CONNECT];

/// Row and column steps of the four line orientations:
/// horizontal, vertical, diagonal up-right and diagonal up-left
const DIRECTIONS: [(usize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Iterates over every in-bounds window of the board in all four orientations
pub fn windows(board: &Board) -> impl Iterator<Item = Window> + '_ {
    DIRECTIONS.into_iter().flat_map(move |(d_row, d_col)| {
        let rows = if d_row == 0 {
            0..board.rows()
        } else {
            0..(board.rows() + 1).saturating_sub(CONNECT)
        };
        // up-left diagonals are anchored at their right end
        let cols = match d_col {
            0 => 0..board.cols(),
            1 => 0..(board.cols() + 1).saturating_sub(CONNECT),
            _ => CONNECT - 1..board.cols(),
        };
        rows.flat_map(move |row| {
            cols.clone()
                .map(move |col| window_at(board, row, col, d_row, d_col))
        })
    })
}

fn window_at(board: &Board, row: usize, col: usize, d_row: usize, d_col: isize) -> Window {
    std::array::from_fn(|i| {
        board.get(
            row + d_row * i,
            (col as isize + d_col * i as isize) as usize,
        )
    })
}

/// Whether `piece` has [`CONNECT`] in a row anywhere on the board
pub fn is_win(board: &Board, piece: Piece) -> bool {
    let cell = Cell::from(piece);
    windows(board).any(|window| window.iter().all(|&c| c == cell))
}

/// All playable columns in ascending order, empty when the board is full
pub fn valid_columns(board: &Board) -> Vec<usize> {
    (0..board.cols())
        .filter(|&col| board.is_valid_column(col))
        .collect()
}

/// A board is terminal when either player has won or it is full
pub fn is_terminal(board: &Board) -> bool {
    is_win(board, Piece::One) || is_win(board, Piece::Two) || valid_columns(board).is_empty()
}

/// The player with a winning line, if any
pub fn winner(board: &Board) -> Option<Piece> {
    [Piece::One, Piece::Two]
        .iter()
        .copied()
        .find(|&piece| is_win(board, piece))
}
