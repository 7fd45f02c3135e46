use std::fmt::Write as _;

use crate::data::Board;

/// Formats the playing field for the terminal:
///
/// ```text
///  │123456789│
/// —│—————————│
/// 1│.........│
/// ...
/// —│—————————│
/// ```
///
/// Built entirely from `Board::glyph`; with `reveal_mines` set every mine
/// shows as `X` (end-of-game loss display). Labels are one column wide and
/// wrap past 9.
pub fn format_board(board: &Board, reveal_mines: bool) -> String {
    let n = board.size;
    let mut out = String::new();

    out.push_str(" │");
    for j in 1..=n {
        let _ = write!(out, "{}", j % 10);
    }
    out.push_str("│\n");

    let rule = format!("—│{}│\n", "—".repeat(n));
    out.push_str(&rule);

    for i in 1..=n {
        let _ = write!(out, "{}│", i % 10);
        for j in 1..=n {
            out.push(board.glyph(i, j, reveal_mines));
        }
        out.push_str("│\n");
    }
    out.push_str(&rule);

    out
}

#[cfg(test)]
mod tests {
    use super::format_board;
    use crate::data::Board;

    #[test]
    fn frame_layout() {
        let mut board = Board::new(3);
        board.set_mine(1, 1);
        board.mark(3, 3);
        board.explore(2, 2);

        let expected = " │123│\n\
                        —│———│\n\
                        1│...│\n\
                        2│.1.│\n\
                        3│..*│\n\
                        —│———│\n";
        assert_eq!(format_board(&board, false), expected);
    }

    #[test]
    fn loss_display_reveals_mines() {
        let mut board = Board::new(3);
        board.set_mine(1, 1);

        let rendered = format_board(&board, true);
        assert!(rendered.contains("1│X..│"));
    }
}
