//! End-to-end tests of the decision engine: the literal positions from
//! the evaluator's contract, optimal self-play, and agreement between
//! the alpha-beta engine and the exhaustive solver.

use anyhow::Result;
use oxo::{Board, Cell, Move, Player, Solver, minimax, value};

#[test]
fn anti_diagonal_win_is_scored_for_x() -> Result<()> {
    // O.X
    // .X.
    // X.O
    // X has completed the anti-diagonal (0,2)-(1,1)-(2,0)
    let board = Board::from_string("O.X.X.X.O")?;
    assert_eq!(board.winner(), Some(Player::X));
    assert!(board.is_terminal());
    assert_eq!(board.utility(), 1);
    Ok(())
}

#[test]
fn full_board_without_a_line_is_a_draw() {
    // XOX / OXO / OXO is full with no line of three, and is not even
    // reachable under X-first play (five O marks), so it is built from
    // cells directly rather than parsed
    let board = Board {
        cells: [
            [Cell::X, Cell::O, Cell::X],
            [Cell::O, Cell::X, Cell::O],
            [Cell::O, Cell::X, Cell::O],
        ],
    };
    assert_eq!(board.winner(), None);
    assert!(board.is_terminal());
    assert_eq!(board.utility(), 0);
}

#[test]
fn first_move_is_a_corner_or_the_center() {
    let opening = minimax(&Board::new()).expect("empty board is not terminal");
    let symmetric_optima = [
        Move::new(0, 0),
        Move::new(0, 2),
        Move::new(2, 0),
        Move::new(2, 2),
        Move::new(1, 1),
    ];
    assert!(
        symmetric_optima.contains(&opening),
        "opening move {opening} is not a corner or the center"
    );
}

#[test]
fn optimal_self_play_always_draws() -> Result<()> {
    let mut board = Board::new();
    let mut plies = 0;

    while let Some(mv) = minimax(&board) {
        board = board.make_move(mv)?;
        plies += 1;
        assert!(plies <= 9, "self-play failed to terminate");
    }

    assert!(board.is_terminal());
    assert_eq!(board.utility(), 0, "perfect play must end in a draw");
    Ok(())
}

#[test]
fn engine_agrees_with_exhaustive_solver() -> Result<()> {
    // Check every position up to two plies deep: the engine's value is
    // the solver's value, and its chosen move is among the solver's
    // optimal moves (the first one, given matching enumeration order)
    let mut solver = Solver::new();
    let root = Board::new();

    let mut positions = vec![root];
    for mv in root.actions() {
        let child = root.make_move(mv)?;
        positions.push(child);
        for reply in child.actions() {
            positions.push(child.make_move(reply)?);
        }
    }

    for board in positions {
        let eval = solver.evaluate(&board);
        assert_eq!(value(&board), eval.value, "value mismatch on\n{board}");

        let choice = minimax(&board).expect("two plies in, no board is terminal");
        assert_eq!(
            Some(&choice),
            eval.optimal_moves.first(),
            "engine chose {choice} on\n{board}"
        );
    }
    Ok(())
}

#[test]
fn edge_reply_to_center_opening_loses() -> Result<()> {
    // X takes the center; O answers with an edge, which is a known
    // losing reply. The engine must convert the win for X.
    let mut board = Board::new();
    board = board.make_move(Move::new(1, 1))?; // X center
    board = board.make_move(Move::new(0, 1))?; // O edge, a blunder

    assert_eq!(value(&board), 1);

    while let Some(mv) = minimax(&board) {
        board = board.make_move(mv)?;
    }
    assert_eq!(board.winner(), Some(Player::X));
    assert_eq!(board.utility(), 1);
    Ok(())
}

#[test]
fn scripted_anti_diagonal_game() -> Result<()> {
    // X:(1,1), O:(0,0), X:(2,0), O:(2,2), X:(0,2) leaves
    //   O.X
    //   .X.
    //   X.O
    // and X has won on the anti-diagonal
    let mut board = Board::new();
    for (mv, mover) in [
        (Move::new(1, 1), Player::X),
        (Move::new(0, 0), Player::O),
        (Move::new(2, 0), Player::X),
        (Move::new(2, 2), Player::O),
        (Move::new(0, 2), Player::X),
    ] {
        assert_eq!(board.player(), mover);
        board = board.make_move(mv)?;
    }

    assert_eq!(board.encode(), "O.X.X.X.O");
    assert_eq!(board.winner(), Some(Player::X));
    assert!(board.is_terminal());
    assert_eq!(board.utility(), 1);
    Ok(())
}
