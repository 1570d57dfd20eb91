//! A single game session, the owner of the board

use log::info;

use crate::{
    board::{Board, Piece},
    config::{Config, Selector},
    rules,
    search::{best_move, Minimax},
    Error, Result,
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

/// A move chosen by the computer
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Decision {
    /// 0-indexed column
    pub column: usize,
    /// Backed-up minimax score, `None` for the greedy selector
    pub score: Option<i64>,
    /// Positions visited to reach the decision
    pub nodes: usize,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    config: Config,
    turn: Piece,
    state: GameState,
    num_moves: usize,
}

impl Game {
    /// Starts a game on an empty board, the opening player taken from `config.first`
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let turn = config.first.resolve();
        info!(
            "new {}x{} game, player {} starts",
            config.rows,
            config.cols,
            turn.number()
        );
        Ok(Self {
            board: Board::new(config.rows, config.cols),
            config,
            turn,
            state: GameState::Playing,
            num_moves: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The piece to move next
    pub fn turn(&self) -> Piece {
        self.turn
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// Plays a 1-indexed column for the current player after checking it
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if self.state != GameState::Playing {
            return Err(Error::GameOver);
        }
        let cols = self.board.cols();
        if column_one_indexed < 1 || column_one_indexed > cols {
            return Err(Error::ColumnOutOfRange {
                column: column_one_indexed,
                cols,
            });
        }
        let column = column_one_indexed - 1;
        let row = self
            .board
            .empty_row(column)
            .ok_or(Error::ColumnFull(column_one_indexed))?;
        self.board.drop_piece(row, column, self.turn);
        self.num_moves += 1;

        self.state = if rules::is_win(&self.board, self.turn) {
            match self.turn {
                Piece::One => GameState::PlayerOneWin,
                Piece::Two => GameState::PlayerTwoWin,
            }
        } else if rules::valid_columns(&self.board).is_empty() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        if self.state != GameState::Playing {
            info!("game over after {} moves: {:?}", self.num_moves, self.state);
        }

        self.turn = self.turn.opponent();
        Ok(self.state)
    }

    /// Picks a move for the current player with the configured selector
    pub fn computer_move(&self) -> Result<Decision> {
        self.decide(self.config.selector)
    }

    /// Picks a move for the current player with `selector`
    pub fn decide(&self, selector: Selector) -> Result<Decision> {
        if self.state != GameState::Playing {
            return Err(Error::GameOver);
        }
        match selector {
            Selector::Minimax => {
                let mut minimax = Minimax::new(self.turn);
                let result = minimax.search(&self.board, self.config.depth);
                let column = result.column.ok_or(Error::EmptySearchSpace)?;
                Ok(Decision {
                    column,
                    score: Some(result.score),
                    nodes: minimax.node_count,
                })
            }
            Selector::Greedy => {
                let column = best_move(&self.board, self.turn).ok_or(Error::EmptySearchSpace)?;
                Ok(Decision {
                    column,
                    score: None,
                    nodes: rules::valid_columns(&self.board).len(),
                })
            }
        }
    }

    /// Clears the board for a new game with the same settings
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = self.config.first.resolve();
        self.state = GameState::Playing;
        self.num_moves = 0;
        info!("board reset, player {} starts", self.turn.number());
    }
}
