//! Parsing of typed moves.

use derive_more::{Display, Error};
use tracing::instrument;

/// A line of input that is not a `row col` pair.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{}", message)]
pub struct InputError {
    /// What was wrong with the input.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InputError {
    /// Creates a new input error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses `"row col"` into a coordinate pair.
///
/// Numbers may be separated by spaces or a comma. Range checking is left to
/// the engine, so `"5 0"` parses fine and is rejected as off the board later.
#[instrument]
pub fn parse_coordinates(line: &str) -> Result<(usize, usize), InputError> {
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err(InputError::new(format!(
            "Expected a row and a column separated by a space, got {:?}",
            line.trim()
        )));
    };

    Ok((parse_index(row, "row")?, parse_index(col, "column")?))
}

#[track_caller]
fn parse_index(text: &str, what: &str) -> Result<usize, InputError> {
    text.parse::<usize>().map_err(|_| {
        InputError::new(format!(
            "The {} must be a whole number from 0 to 2, got {:?}",
            what, text
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_space_separated() {
        assert_eq!(parse_coordinates("0 2"), Ok((0, 2)));
        assert_eq!(parse_coordinates("  1   1 \n"), Ok((1, 1)));
    }

    #[test]
    fn test_parses_comma_separated() {
        assert_eq!(parse_coordinates("2,1"), Ok((2, 1)));
        assert_eq!(parse_coordinates("2, 0"), Ok((2, 0)));
    }

    #[test]
    fn test_out_of_range_still_parses() {
        assert_eq!(parse_coordinates("7 0"), Ok((7, 0)));
    }

    #[test]
    fn test_rejects_wrong_count() {
        assert!(parse_coordinates("").is_err());
        assert!(parse_coordinates("1").is_err());
        assert!(parse_coordinates("1 2 3").is_err());
    }

    #[test]
    fn test_rejects_non_numbers() {
        let err = parse_coordinates("a 1").unwrap_err();
        assert!(err.message.contains("row"));
        let err = parse_coordinates("1 -1").unwrap_err();
        assert!(err.message.contains("column"));
    }
}
