use thiserror::Error;

/// Errors surfaced by the checked entry points of the engine
///
/// The search, rule and evaluation layers themselves are precondition driven
/// and never return these; they come from the game session, board parsing
/// and configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid move, column {column} out of range. Columns must be between 1 and {cols}")]
    ColumnOutOfRange { column: usize, cols: usize },

    #[error("Invalid move, column {0} full")]
    ColumnFull(usize),

    #[error("Invalid move, the game is already over")]
    GameOver,

    #[error("no valid columns left to choose from")]
    EmptySearchSpace,

    #[error("invalid board dimensions {rows}x{cols}, both must be at least {}", crate::CONNECT)]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("invalid search depth {0}, must be between 1 and {}", crate::config::MAX_DEPTH)]
    InvalidDepth(usize),

    #[error("piece symbols must be two distinct characters, got '{0}'")]
    InvalidSymbols(String),

    #[error("could not parse '{0}' as a valid move")]
    ParseMove(char),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_errors_are_one_indexed_for_display() {
        let err = Error::ColumnOutOfRange { column: 9, cols: 7 };
        assert_eq!(
            err.to_string(),
            "Invalid move, column 9 out of range. Columns must be between 1 and 7"
        );
        assert_eq!(Error::ColumnFull(3).to_string(), "Invalid move, column 3 full");
    }

    #[test]
    fn dimension_error_names_the_window_length() {
        let err = Error::InvalidDimensions { rows: 3, cols: 7 };
        assert_eq!(
            err.to_string(),
            "invalid board dimensions 3x7, both must be at least 4"
        );
    }
}
