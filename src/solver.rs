//! Memoized exhaustive solver
//!
//! Where [`crate::engine::minimax`] answers "one optimal move, fast",
//! the solver tabulates the exact value of every position it visits and
//! keeps *all* optimal moves, which is what analysis callers (and the
//! engine's own tests) want.

use std::collections::HashMap;

use crate::board::{Board, Move, Player};

/// Exact evaluation of a position: its game value and every optimal
/// action, in the enumeration order of [`Board::actions`]. Terminal
/// positions have no moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub value: i32,
    pub optimal_moves: Vec<Move>,
}

/// Full-tree minimax with a memo keyed on [`Board::encode`]. The turn
/// is derived from the cells, so the nine-character encoding identifies
/// a position completely.
#[derive(Debug, Default)]
pub struct Solver {
    memo: HashMap<String, Evaluation>,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a position, reusing anything already solved.
    pub fn evaluate(&mut self, board: &Board) -> Evaluation {
        self.solve(*board)
    }

    /// Number of distinct positions solved so far
    pub fn positions_solved(&self) -> usize {
        self.memo.len()
    }

    fn solve(&mut self, board: Board) -> Evaluation {
        let key = board.encode();
        if let Some(eval) = self.memo.get(&key) {
            return eval.clone();
        }

        if board.is_terminal() {
            let eval = Evaluation {
                value: board.utility(),
                optimal_moves: Vec::new(),
            };
            self.memo.insert(key, eval.clone());
            return eval;
        }

        let mover = board.player();
        let mut best_value = match mover {
            Player::X => i32::MIN,
            Player::O => i32::MAX,
        };
        let mut best_moves: Vec<Move> = Vec::new();

        for mv in board.actions() {
            let next = board
                .make_move(mv)
                .expect("enumerated action should be legal");
            let child_value = self.solve(next).value;

            let improves = match mover {
                Player::X => child_value > best_value,
                Player::O => child_value < best_value,
            };

            if improves {
                best_value = child_value;
                best_moves.clear();
                best_moves.push(mv);
            } else if child_value == best_value {
                best_moves.push(mv);
            }
        }

        let eval = Evaluation {
            value: best_value,
            optimal_moves: best_moves,
        };
        self.memo.insert(key, eval.clone());
        eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board_is_a_draw() {
        let mut solver = Solver::new();
        let eval = solver.evaluate(&Board::new());
        assert_eq!(eval.value, 0);
        // Every opening move draws under perfect defense, so all nine
        // are optimal
        assert_eq!(eval.optimal_moves.len(), 9);
    }

    #[test]
    fn test_forced_win_found() {
        // XX. / OO. / ... with X to move: completing the row is the
        // unique optimal move
        let board = Board::from_string("XX.OO....").unwrap();
        let mut solver = Solver::new();
        let eval = solver.evaluate(&board);
        assert_eq!(eval.value, 1);
        assert_eq!(eval.optimal_moves, vec![Move::new(0, 2)]);
    }

    #[test]
    fn test_terminal_position_has_no_moves() {
        let board = Board::from_string("XXXOO....").unwrap();
        let mut solver = Solver::new();
        let eval = solver.evaluate(&board);
        assert_eq!(eval.value, 1);
        assert!(eval.optimal_moves.is_empty());
    }

    #[test]
    fn test_memo_is_reused() {
        let mut solver = Solver::new();
        solver.evaluate(&Board::new());
        let solved = solver.positions_solved();
        assert!(solved > 0);

        // Solving a child position adds nothing new
        let child = Board::new().make_move(Move::new(1, 1)).unwrap();
        solver.evaluate(&child);
        assert_eq!(solver.positions_solved(), solved);
    }
}
