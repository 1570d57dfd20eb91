use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};
use log::trace;

use std::fmt;
use std::io::{stdout, Write};

use crate::{rules, Error, Result, COLS, ROWS};

/// One of the two players' pieces
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Piece {
    One,
    Two,
}

impl Piece {
    /// The piece of the other player
    pub fn opponent(self) -> Self {
        match self {
            Piece::One => Piece::Two,
            Piece::Two => Piece::One,
        }
    }

    /// 1 or 2, the number shown to human players
    pub fn number(self) -> usize {
        match self {
            Piece::One => 1,
            Piece::Two => 2,
        }
    }
}

/// The occupant of a single board cell
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        match piece {
            Piece::One => Cell::PlayerOne,
            Piece::Two => Cell::PlayerTwo,
        }
    }
}

/// A gravity board of `rows` x `cols` cells
///
/// Row 0 is the bottom of the board. The occupied cells of every column form
/// a contiguous run from row 0 upwards as long as pieces only ever go in at
/// the row given by [`Board::empty_row`].
///
/// `Clone` is a deep copy, which the search uses to try out moves without
/// touching the real game.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>, // cells are stored left-to-right, bottom-to-top
}

impl Board {
    /// Creates an empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Creates a default size board by playing a string of 1-indexed columns,
    /// alternating between player one and player two
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::default();
        let mut piece = Piece::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=COLS) => {
                    // abort if the position is won at any point
                    if rules::is_terminal(&board) {
                        return Err(Error::GameOver);
                    }
                    let column = column - 1;
                    if !board.is_valid_column(column) {
                        return Err(Error::ColumnFull(column + 1));
                    }
                    board.play(column, piece);
                    piece = piece.opponent();
                }
                _ => return Err(Error::ParseMove(column_char)),
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[col + self.cols * row]
    }

    /// Places `piece` at `row`, `col` without any checks
    ///
    /// The caller is responsible for passing the gravity-resolved row of a
    /// column that still has room.
    pub fn drop_piece(&mut self, row: usize, col: usize, piece: Piece) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[col + self.cols * row] = piece.into();
    }

    /// A column can be played as long as its top cell is empty
    pub fn is_valid_column(&self, col: usize) -> bool {
        match self.rows.checked_sub(1) {
            Some(top) => self.get(top, col).is_empty(),
            None => false,
        }
    }

    /// The lowest empty row of `col`, or `None` if the column is full
    pub fn empty_row(&self, col: usize) -> Option<usize> {
        (0..self.rows).find(|&row| self.get(row, col).is_empty())
    }

    /// Drops `piece` into `col` under gravity, returning the row it landed on
    pub fn play(&mut self, col: usize, piece: Piece) -> Option<usize> {
        let row = self.empty_row(col)?;
        self.drop_piece(row, col, piece);
        trace!("player {} dropped into ({}, {})", piece.number(), row, col);
        Some(row)
    }

    /// The number of pieces on the board
    pub fn num_pieces(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Empties every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Empty);
    }

    /// Draws the board to the terminal, using `symbols` for player one and two
    pub fn display(&self, symbols: [char; 2]) -> crossterm::Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=self.cols).map(|x| (x % 10).to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;

        for row in (0..self.rows).rev() {
            for col in 0..self.cols {
                let cell = self.get(row, col);
                let symbol = match cell {
                    Cell::PlayerOne => symbols[0],
                    Cell::PlayerTwo => symbols[1],
                    Cell::Empty => 'O',
                };
                stdout.queue(PrintStyledContent(
                    style(symbol)
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::Black,
                        }),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Builds a board from a picture of its rows, top row first, using
    /// `1`, `2` and `.` for the cells
    #[cfg(test)]
    pub(crate) fn from_picture(picture: &[&str]) -> Self {
        let rows = picture.len();
        let cols = picture[0].len();
        let mut board = Self::new(rows, cols);
        for (i, line) in picture.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                match c {
                    '1' => board.drop_piece(rows - 1 - i, col, Piece::One),
                    '2' => board.drop_piece(rows - 1 - i, col, Piece::Two),
                    _ => {}
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(ROWS, COLS)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            for col in 0..self.cols {
                let c = match self.get(row, col) {
                    Cell::PlayerOne => '1',
                    Cell::PlayerTwo => '2',
                    Cell::Empty => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
