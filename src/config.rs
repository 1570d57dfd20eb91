//! Settings fixed at the start of a game

use clap::ValueEnum;

use crate::{board::Piece, Error, Result, COLS, CONNECT, ROWS};

/// The default search depth per computer move
pub const DEFAULT_DEPTH: usize = 4;
/// The deepest search allowed, the tree grows as `cols^depth`
pub const MAX_DEPTH: usize = 8;

/// Who makes the moves of one player
#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum Control {
    Human,
    Ai,
}

/// How the computer picks its moves
#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum Selector {
    /// Fixed-depth minimax search
    Minimax,
    /// One-ply greedy evaluation
    Greedy,
}

/// Which player opens the game
#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum First {
    One,
    Two,
    Random,
}

impl First {
    /// Resolves the opening player, tossing a coin for `Random`
    pub fn resolve(self) -> Piece {
        match self {
            First::One => Piece::One,
            First::Two => Piece::Two,
            First::Random => {
                if rand::random::<bool>() {
                    Piece::One
                } else {
                    Piece::Two
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub depth: usize,
    /// Control of player one and player two
    pub players: [Control; 2],
    pub first: First,
    pub selector: Selector,
    /// Display symbols of player one and player two
    pub symbols: [char; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            depth: DEFAULT_DEPTH,
            players: [Control::Human, Control::Ai],
            first: First::Random,
            selector: Selector::Minimax,
            symbols: ['X', 'O'],
        }
    }
}

impl Config {
    /// Checks that a line of four fits and the search depth is usable
    pub fn validate(&self) -> Result<()> {
        if self.rows < CONNECT || self.cols < CONNECT {
            return Err(Error::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(Error::InvalidDepth(self.depth));
        }
        if self.symbols[0] == self.symbols[1] {
            return Err(Error::InvalidSymbols(self.symbols.iter().collect()));
        }
        Ok(())
    }

    /// Parses a two character string such as `"XO"` into piece symbols
    pub fn parse_symbols(symbols: &str) -> Result<[char; 2]> {
        let chars: Vec<char> = symbols.chars().collect();
        match chars.as_slice() {
            &[one, two] if one != two => Ok([one, two]),
            _ => Err(Error::InvalidSymbols(symbols.to_string())),
        }
    }

    pub fn control(&self, piece: Piece) -> Control {
        self.players[piece.number() - 1]
    }

    pub fn symbol(&self, piece: Piece) -> char {
        self.symbols[piece.number() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.rows, config.cols), (6, 7));
        assert_eq!(config.control(Piece::Two), Control::Ai);
        assert_eq!(config.symbol(Piece::One), 'X');
    }

    #[test]
    fn rejects_boards_without_room_for_a_line() {
        let config = Config {
            rows: 3,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::InvalidDimensions { rows: 3, cols: 7 })
        );
    }

    #[test]
    fn rejects_unusable_depths() {
        for &depth in [0, MAX_DEPTH + 1].iter() {
            let config = Config {
                depth,
                ..Config::default()
            };
            assert_eq!(config.validate(), Err(Error::InvalidDepth(depth)));
        }
    }

    #[test]
    fn symbols() {
        assert_eq!(Config::parse_symbols("RY"), Ok(['R', 'Y']));
        assert!(Config::parse_symbols("RR").is_err());
        assert!(Config::parse_symbols("RYB").is_err());
        assert!(Config::parse_symbols("").is_err());
    }

    #[test]
    fn fixed_first_player() {
        assert_eq!(First::One.resolve(), Piece::One);
        assert_eq!(First::Two.resolve(), Piece::Two);
    }
}
