use crate::domain::board::BoardState;
use crate::domain::square::Square;
use std::fmt::Write;

const COLOR_RESET: &str = "\x1b[0m";
const COLOR_RED: &str = "\x1b[31m";
const COLOR_BLACK: &str = "\x1b[37m";
const COLOR_DIM: &str = "\x1b[90m";

/// Renders the board as an 8x8 text grid, rank 8 at the top. Light squares
/// stay blank, empty dark squares get a placeholder, occupied squares a
/// side marker with a `k` suffix for kings.
pub fn render_board(board: &BoardState, color: bool) -> String {
    let mut out = String::new();
    out.push('\n');

    for row in (0..8u8).rev() {
        let _ = write!(out, "{} ", row + 1);
        for col in 0..8u8 {
            let square = Square::new(row * 8 + col).expect("row and col below 8");
            if !square.is_playable() {
                out.push_str("   ");
                continue;
            }
            let cell = if board.red_pieces.get(square) {
                let marker = if board.red_kings.get(square) {
                    " Rk"
                } else {
                    " R "
                };
                paint(marker, COLOR_RED, color)
            } else if board.black_pieces.get(square) {
                let marker = if board.black_kings.get(square) {
                    " Bk"
                } else {
                    " B "
                };
                paint(marker, COLOR_BLACK, color)
            } else {
                paint(" . ", COLOR_DIM, color)
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out.push_str("    a  b  c  d  e  f  g  h\n");
    out
}

fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("{code}{text}{COLOR_RESET}")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_render_has_file_footer_and_markers() {
        let board = BoardState::new();
        let grid = render_board(&board, false);
        assert!(grid.contains("a  b  c  d  e  f  g  h"));
        assert!(grid.contains(" R "));
        assert!(grid.contains(" B "));
        assert!(grid.contains(" . "));
        assert!(!grid.contains("Rk"));
        assert!(!grid.contains('\x1b'));
    }

    #[test]
    fn colored_render_embeds_escape_codes() {
        let board = BoardState::new();
        let grid = render_board(&board, true);
        assert!(grid.contains(COLOR_RED));
        assert!(grid.contains(COLOR_RESET));
    }
}
