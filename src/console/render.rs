//! Stateless text rendering for the console game.

use crate::games::tictactoe::{Board, Cell, PlayerId};
use std::fmt::Write;

const SPACER: &str = "         |         |         |         |\n";
const RULE: &str = "----------------------------------------\n";

/// Banner printed when a match starts.
pub const BANNER: &str = "\
===============================================
=                                             =
=               TIC - TAC - TOE               =
=                                             =
===============================================
";

/// Renders the board with `(0) (1) (2)` column headers and row labels.
pub fn board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(SPACER);
    out.push_str("         |   (0)   |   (1)   |   (2)   |\n");
    out.push_str(SPACER);
    for (row, cells) in board.cells().chunks(3).enumerate() {
        out.push_str(RULE);
        out.push_str(SPACER);
        let _ = write!(out, "   ({})   |", row);
        for cell in cells {
            let _ = write!(out, "    {}    |", cell.token());
        }
        out.push('\n');
        out.push_str(SPACER);
    }
    out.push_str(RULE);
    out
}

/// Renders the how-to-play guide with an example of each way to win.
pub fn instructions() -> String {
    const E: Cell = Cell::Empty;
    const O: Cell = Cell::Occupied(PlayerId::Player1);
    const X: Cell = Cell::Occupied(PlayerId::Player2);

    let mut out = String::new();
    out.push_str("\n===== Tic-Tac-Toe: A short guide to play =====\n\n");
    out.push_str("Two players take turns placing their token on a 3x3 board.\n");
    out.push_str(
        "Each square is identified by the row number on the left of the grid \
         and the column number on top of the grid.\n\n",
    );
    out.push_str(&board(&Board::new()));
    out.push_str(
        "\nOn your turn enter two numbers separated by a space: the row, then the column.\n\
         To place your token in the upper left corner, for example, enter '0 0'.\n",
    );
    out.push_str(
        "The first player to get 3 tokens in a line wins. There are 3 ways to do that:\n\n",
    );
    out.push_str("1) Row victory\n\n");
    out.push_str(&board(&Board::from_rows([[X, X, X], [E, E, E], [E, E, E]])));
    out.push_str("\n2) Column victory\n\n");
    out.push_str(&board(&Board::from_rows([[O, E, E], [O, E, E], [O, E, E]])));
    out.push_str("\n3) Diagonal victory\n\n");
    out.push_str(&board(&Board::from_rows([[X, E, E], [E, X, E], [E, E, X]])));
    out.push_str("\n\nIf nobody has won after 9 moves the game ends in a stalemate.\n\n");
    out.push_str("==============================================\n\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_empty_board_has_labels() {
        let text = board(&Board::new());
        assert!(text.contains("(0)   |   (1)   |   (2)"));
        assert!(text.contains("   (2)   |"));
        assert!(!text.contains('o'));
        assert!(!text.contains('x'));
    }

    #[test]
    fn test_tokens_land_in_their_row() {
        let mut b = Board::new();
        b.set(Position::MiddleRight, Cell::Occupied(PlayerId::Player1));
        let text = board(&b);
        let row_line = text
            .lines()
            .find(|l| l.starts_with("   (1)"))
            .expect("row 1 line");
        assert_eq!(row_line, "   (1)   |         |         |    o    |");
    }

    #[test]
    fn test_instructions_show_each_victory() {
        let text = instructions();
        assert!(text.contains("1) Row victory"));
        assert!(text.contains("2) Column victory"));
        assert!(text.contains("3) Diagonal victory"));
        assert!(text.contains("stalemate"));
    }
}
