//! Move selection by game tree search

use log::{debug, trace};

use crate::{
    board::{Board, Piece},
    eval::score,
    rules::{is_win, valid_columns},
};

/// Backed-up score of a position won by the maximizing piece
pub const WIN_SCORE: i64 = 100_000_000_000_000;
/// Backed-up score of a position won by the minimizing piece
///
/// An order of magnitude smaller than [`WIN_SCORE`], so a win is always
/// valued above avoiding a loss of the same depth.
pub const LOSS_SCORE: i64 = -10_000_000_000_000;
/// Backed-up score of a full board with no winner
pub const DRAW_SCORE: i64 = 0;

/// The outcome of a search: the chosen column and its backed-up score
///
/// `column` is `None` at leaves of the tree (wins, draws and the depth cutoff),
/// where there is nothing left to choose.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i64,
}

impl SearchResult {
    fn leaf(score: i64) -> Self {
        Self {
            column: None,
            score,
        }
    }
}

/// A fixed-depth minimax searcher
///
/// # Notes
/// Every node below the root is explored, there is no pruning and no
/// transposition table, so a search visits up to `cols^depth` positions.
/// Depths above 5 quickly stop being interactive on a 7 column board.
///
/// # Position Scoring
/// Scores are always from the point of view of the maximizing piece given to
/// [`Minimax::new`]. Wins for it score [`WIN_SCORE`], wins for the opponent
/// [`LOSS_SCORE`], full boards [`DRAW_SCORE`], and positions at the depth
/// cutoff are scored by the static evaluation in [`crate::eval::score`].
#[derive(Clone, Debug)]
pub struct Minimax {
    piece: Piece,

    /// The number of nodes searched by this `Minimax` so far (for diagnostics only)
    pub node_count: usize,
}

impl Minimax {
    /// Creates a new searcher maximizing for `piece`
    pub fn new(piece: Piece) -> Self {
        Self {
            piece,
            node_count: 0,
        }
    }

    /// The maximizing piece
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Searches `depth` plies below `board`
    ///
    /// `maximizing` says whose turn it is at `board`: the maximizing piece's
    /// when true, its opponent's otherwise. Among columns with equal scores
    /// the leftmost one is kept.
    pub fn minimax(&mut self, board: &Board, depth: usize, maximizing: bool) -> SearchResult {
        self.node_count += 1;

        // terminal and cutoff checks come before any move generation
        if is_win(board, self.piece) {
            return SearchResult::leaf(WIN_SCORE);
        }
        if is_win(board, self.piece.opponent()) {
            return SearchResult::leaf(LOSS_SCORE);
        }
        let columns = valid_columns(board);
        if columns.is_empty() {
            return SearchResult::leaf(DRAW_SCORE);
        }
        if depth == 0 {
            return SearchResult::leaf(score(board, self.piece));
        }

        let turn = if maximizing {
            self.piece
        } else {
            self.piece.opponent()
        };

        let mut best = SearchResult {
            column: Some(columns[0]),
            score: if maximizing { i64::MIN } else { i64::MAX },
        };
        for &column in columns.iter() {
            let mut next = board.clone();
            next.play(column, turn);

            let score = self.minimax(&next, depth - 1, !maximizing).score;
            // only a strict improvement replaces the current best
            let improved = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if improved {
                best = SearchResult {
                    column: Some(column),
                    score,
                };
            }
        }
        best
    }

    /// Chooses a move for the maximizing piece, which must be the one to play
    pub fn search(&mut self, board: &Board, depth: usize) -> SearchResult {
        self.node_count = 0;
        let result = self.minimax(board, depth, true);
        debug!(
            "minimax depth {} for player {}: column {:?}, score {}, {} nodes",
            depth,
            self.piece.number(),
            result.column,
            result.score,
            self.node_count
        );
        result
    }
}

/// Greedy one-ply move selection
///
/// Tries every column for `piece` and returns the one whose resulting board
/// has the highest static score for `piece`, keeping the leftmost on ties.
/// The opponent's replies are not considered. Returns `None` on a full board.
pub fn best_move(board: &Board, piece: Piece) -> Option<usize> {
    let columns = valid_columns(board);
    let mut best_column = *columns.first()?;
    let mut best_score = i64::MIN;

    for &column in columns.iter() {
        let mut next = board.clone();
        next.play(column, piece);
        let score = score(&next, piece);
        trace!("greedy column {}: {}", column, score);
        if score > best_score {
            best_score = score;
            best_column = column;
        }
    }
    Some(best_column)
}
