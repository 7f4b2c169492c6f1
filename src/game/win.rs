//! Win detection: a pure scan over the board's read interface, independent of
//! how moves were made.

use super::{Board, Cell, Player};

/// Number of contiguous same-owner cells that make a win.
pub const RUN_LENGTH: usize = 4;

/// The four run directions as (row, col) steps: horizontal, vertical,
/// diagonal down-right, diagonal down-left. Scanning every cell as a run
/// start with these four covers all eight orientations.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Check whether `player` has four in a row anywhere on the board.
///
/// Exhaustive: every cell is tried as the start of a run in each direction.
/// Simple and obviously correct; at 6x7 the whole scan is 168 run checks.
pub fn check_win(board: &Board, player: Player) -> bool {
    (0..board.height()).any(|row| {
        (0..board.width()).any(|col| {
            DIRECTIONS
                .iter()
                .any(|&dir| run_matches(board, player, row, col, dir))
        })
    })
}

/// True iff the `RUN_LENGTH` cells starting at (row, col) and stepping along
/// `dir` are all in bounds and all owned by `player`.
fn run_matches(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
    (d_row, d_col): (isize, isize),
) -> bool {
    (0..RUN_LENGTH as isize).all(|i| {
        let r = row as isize + d_row * i;
        let c = col as isize + d_col * i;
        r >= 0
            && r < board.height() as isize
            && c >= 0
            && c < board.width() as isize
            && board.get(r as usize, c as usize) == Cell::Piece(player)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a board by listing, per column, the pieces stacked bottom-up.
    fn board_from_columns(width: usize, height: usize, columns: &[&[Player]]) -> Board {
        let mut board = Board::new(width, height);
        for (col, stack) in columns.iter().enumerate() {
            for &player in *stack {
                board.drop_piece(col, player).unwrap();
            }
        }
        board
    }

    /// Mirror a board left-to-right.
    fn mirrored(board: &Board) -> Board {
        let mut flipped = Board::new(board.width(), board.height());
        for col in 0..board.width() {
            for row in (0..board.height()).rev() {
                if let Cell::Piece(player) = board.get(row, col) {
                    flipped
                        .drop_piece(board.width() - 1 - col, player)
                        .unwrap();
                }
            }
        }
        flipped
    }

    use Player::{One, Two};

    #[test]
    fn test_empty_board_no_win() {
        let board = Board::default();
        assert!(!check_win(&board, One));
        assert!(!check_win(&board, Two));
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_from_columns(7, 6, &[&[One], &[One], &[One], &[One]]);
        assert!(check_win(&board, One));
        assert!(!check_win(&board, Two));
    }

    #[test]
    fn test_three_in_a_row_no_win() {
        let board = board_from_columns(7, 6, &[&[One], &[One], &[One]]);
        assert!(!check_win(&board, One));
    }

    #[test]
    fn test_vertical_win() {
        let board = board_from_columns(7, 6, &[&[], &[], &[], &[Two, Two, Two, Two]]);
        assert!(check_win(&board, Two));
        assert!(!check_win(&board, One));
    }

    #[test]
    fn test_diagonal_up_right_win() {
        // (5,0) (4,1) (3,2) (2,3) all player 1
        let board = board_from_columns(
            7,
            6,
            &[
                &[One],
                &[Two, One],
                &[Two, Two, One],
                &[Two, Two, Two, One],
            ],
        );
        assert!(check_win(&board, One));
        assert!(!check_win(&board, Two));
    }

    #[test]
    fn test_diagonal_broken_by_one_flip() {
        // Same shape, but each of the four diagonal cells flipped to player 2
        // in turn kills the win.
        let diagonal_stacks: [&[Player]; 4] = [
            &[One],
            &[Two, One],
            &[Two, Two, One],
            &[Two, Two, Two, One],
        ];
        for flipped in 0..4 {
            let stacks: Vec<Vec<Player>> = diagonal_stacks
                .iter()
                .enumerate()
                .map(|(col, stack)| {
                    let mut stack = stack.to_vec();
                    if col == flipped {
                        *stack.last_mut().unwrap() = Two;
                    }
                    stack
                })
                .collect();
            let refs: Vec<&[Player]> = stacks.iter().map(|s| s.as_slice()).collect();
            let board = board_from_columns(7, 6, &refs);
            assert!(!check_win(&board, One), "flipping cell {flipped} should break the run");
        }
    }

    #[test]
    fn test_diagonal_down_right_win() {
        // (2,3) (3,4) (4,5) (5,6) all player 2
        let board = board_from_columns(
            7,
            6,
            &[
                &[],
                &[],
                &[],
                &[One, One, One, Two],
                &[One, One, Two],
                &[One, Two],
                &[Two],
            ],
        );
        assert!(check_win(&board, Two));
    }

    #[test]
    fn test_mirror_symmetry() {
        // A diagonal win anywhere must survive mirroring the columns.
        let board = board_from_columns(
            7,
            6,
            &[
                &[One],
                &[Two, One],
                &[Two, Two, One],
                &[Two, Two, Two, One],
            ],
        );
        assert!(check_win(&board, One));
        assert!(check_win(&mirrored(&board), One));

        let no_win = board_from_columns(7, 6, &[&[One], &[One], &[One]]);
        assert!(!check_win(&mirrored(&no_win), One));
    }

    #[test]
    fn test_translation_invariance() {
        // The same horizontal run wins wherever it sits within bounds.
        for start in 0..=3 {
            let mut board = Board::new(7, 6);
            for col in start..start + 4 {
                board.drop_piece(col, One).unwrap();
            }
            assert!(check_win(&board, One), "run starting at column {start}");
        }
        // And on any row: stack a column of opponent pieces underneath.
        for lift in 0..=2 {
            let mut board = Board::new(7, 6);
            for col in 0..4 {
                for _ in 0..lift {
                    board.drop_piece(col, Two).unwrap();
                }
                board.drop_piece(col, One).unwrap();
            }
            assert!(check_win(&board, One), "run lifted {lift} rows");
        }
    }

    #[test]
    fn test_run_never_wraps_edges() {
        // Three at the right edge plus one at the left edge of the next row
        // is not a run.
        let board = board_from_columns(
            7,
            6,
            &[&[Two, One], &[], &[], &[], &[One], &[One], &[One]],
        );
        assert!(!check_win(&board, One));
    }

    #[test]
    fn test_full_board_without_run_is_not_a_win() {
        // Alternate columns between the stacks 112211 and 221122 (bottom-up):
        // rows alternate owners, columns and diagonals never exceed runs of 2.
        let mut board = Board::new(7, 6);
        for col in 0..7 {
            let first = if col % 2 == 0 { One } else { Two };
            for i in 0..6 {
                let player = if (i / 2) % 2 == 0 { first } else { first.other() };
                board.drop_piece(col, player).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(!check_win(&board, One));
        assert!(!check_win(&board, Two));
    }
}
