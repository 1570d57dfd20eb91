//! Static evaluation of a position by counting patterns in every window

use crate::{
    board::{Board, Cell, Piece},
    rules::{windows, Window},
};

/// Bonus for each of the player's pieces in the middle column
pub const CENTER_BONUS: i64 = 3;
pub const FOUR_SCORE: i64 = 100;
pub const OPEN_THREE_SCORE: i64 = 5;
pub const OPEN_TWO_SCORE: i64 = 2;
/// Subtracted for every window where the opponent has three and one gap
pub const OPPONENT_THREE_PENALTY: i64 = 5;

/// Scores a single window from the point of view of `piece`
pub fn window_score(window: &Window, piece: Piece) -> i64 {
    let count = |cell: Cell| window.iter().filter(|&&c| c == cell).count();
    let own = count(piece.into());
    let opponent = count(piece.opponent().into());
    let empty = count(Cell::Empty);

    let mut score = match (own, empty) {
        (4, _) => FOUR_SCORE,
        (3, 1) => OPEN_THREE_SCORE,
        (2, 2) => OPEN_TWO_SCORE,
        _ => 0,
    };
    // the opponent threat is checked independently of the own-piece patterns
    if opponent == 3 && empty == 1 {
        score -= OPPONENT_THREE_PENALTY;
    }
    score
}

/// Scores the whole board from the point of view of `piece`
///
/// The score is the center column bonus plus the sum of [`window_score`] over
/// every horizontal, vertical and diagonal window.
pub fn score(board: &Board, piece: Piece) -> i64 {
    let center = board.cols() / 2;
    let own = Cell::from(piece);
    let center_count = (0..board.rows())
        .filter(|&row| board.get(row, center) == own)
        .count() as i64;

    center_count * CENTER_BONUS
        + windows(board)
            .map(|window| window_score(&window, piece))
            .sum::<i64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell::{Empty as E, PlayerOne as P1, PlayerTwo as P2};

    #[test]
    fn window_patterns() {
        assert_eq!(window_score(&[P1, P1, P1, P1], Piece::One), 100);
        assert_eq!(window_score(&[P1, P1, P1, E], Piece::One), 5);
        assert_eq!(window_score(&[P1, E, P1, P1], Piece::One), 5);
        assert_eq!(window_score(&[P1, E, E, P1], Piece::One), 2);
        assert_eq!(window_score(&[P2, P2, P2, E], Piece::One), -5);
        assert_eq!(window_score(&[P2, P2, P2, E], Piece::Two), 5);
    }

    #[test]
    fn windows_without_a_pattern_score_nothing() {
        assert_eq!(window_score(&[E, E, E, E], Piece::One), 0);
        assert_eq!(window_score(&[P1, E, E, E], Piece::One), 0);
        assert_eq!(window_score(&[P1, P1, P1, P2], Piece::One), 0);
        assert_eq!(window_score(&[P1, P2, P2, P2], Piece::One), 0);
        assert_eq!(window_score(&[P1, P1, P2, E], Piece::One), 0);
        assert_eq!(window_score(&[P2, P2, E, E], Piece::One), 0);
    }

    #[test]
    fn empty_board_scores_zero() {
        let board = Board::default();
        assert_eq!(score(&board, Piece::One), 0);
        assert_eq!(score(&board, Piece::Two), 0);
    }

    #[test]
    fn center_piece() {
        let board = Board::from_moves("4").unwrap();
        // center bonus only, a lone piece forms no pattern
        assert_eq!(score(&board, Piece::One), 3);
        assert_eq!(score(&board, Piece::Two), 0);
    }

    #[test]
    fn open_three_on_the_bottom_row() {
        let board = Board::from_picture(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "111....",
        ]);
        // bottom row windows: 111. = +5, 11.. = +2, the rest score nothing
        assert_eq!(score(&board, Piece::One), 7);
        // the same windows seen by player two: one opponent three
        assert_eq!(score(&board, Piece::Two), -5);
    }

    #[test]
    fn opponent_three_is_penalised_once_per_window() {
        let board = Board::from_picture(&[
            ".......",
            ".......",
            "2......",
            "2......",
            "2......",
            "1......",
        ]);
        // vertical window rows 1..=4 in column 0 holds three 2s and a gap
        assert_eq!(score(&board, Piece::One), -5);
        // the open three plus the open two in rows 2..=5
        assert_eq!(score(&board, Piece::Two), 5 + 2);
    }

    #[test]
    fn center_column_follows_board_width() {
        let mut board = Board::new(4, 9);
        board.play(4, Piece::Two);
        board.play(4, Piece::Two);
        // center bonus of 6, plus the open vertical two in column 4
        assert_eq!(score(&board, Piece::Two), 6 + 2);
    }
}
