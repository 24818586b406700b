//! Alpha-beta pruned minimax over the full game tree
//!
//! The state space is small enough (at most 9! move sequences, heavily
//! cut by terminal detection and pruning) that the search always runs
//! to terminal states; there is no heuristic evaluation and no depth
//! limit. X maximizes, O minimizes, utilities are from X's perspective.

use crate::board::{Board, Move, Player};

/// Pick a game-theoretically optimal move for the player to act.
///
/// Returns `None` on terminal boards. Every top-level action is scored
/// by the alpha-beta value of its successor; the first action (in the
/// deterministic enumeration order of [`Board::actions`]) whose value
/// strictly improves on the running best is kept, so ties go to the
/// earliest-found action and the result is reproducible.
///
/// Defined on every non-terminal board reached by legal play. Boards
/// with more than one mark's worth of imbalance are a caller bug and
/// get an undefended, undefined answer.
pub fn minimax(board: &Board) -> Option<Move> {
    if board.is_terminal() {
        return None;
    }

    let maximizing = board.player() == Player::X;
    let mut best: Option<Move> = None;
    let mut alpha = i32::MIN;
    let mut beta = i32::MAX;

    for mv in board.actions() {
        let next = board
            .make_move(mv)
            .expect("enumerated action should be legal");
        let value = alphabeta(&next, alpha, beta);

        if maximizing {
            if value > alpha {
                alpha = value;
                best = Some(mv);
            }
        } else if value < beta {
            beta = value;
            best = Some(mv);
        }
    }

    best
}

/// Exact game value of a position: +1 if X forces a win, -1 if O does,
/// 0 if best play draws.
pub fn value(board: &Board) -> i32 {
    alphabeta(board, i32::MIN, i32::MAX)
}

/// The alpha-beta recursion. Folds successor values with `max` at X
/// nodes and `min` at O nodes, tightening the window as the running
/// best improves and cutting the remaining actions once `alpha >= beta`
/// (those branches cannot affect the parent's decision).
fn alphabeta(board: &Board, mut alpha: i32, mut beta: i32) -> i32 {
    if board.is_terminal() {
        return board.utility();
    }

    match board.player() {
        Player::X => {
            let mut v = i32::MIN;
            for mv in board.actions() {
                let next = board
                    .make_move(mv)
                    .expect("enumerated action should be legal");
                v = v.max(alphabeta(&next, alpha, beta));
                alpha = alpha.max(v);
                if alpha >= beta {
                    break;
                }
            }
            v
        }
        Player::O => {
            let mut v = i32::MAX;
            for mv in board.actions() {
                let next = board
                    .make_move(mv)
                    .expect("enumerated action should be legal");
                v = v.min(alphabeta(&next, alpha, beta));
                beta = beta.min(v);
                if alpha >= beta {
                    break;
                }
            }
            v
        }
    }
}
