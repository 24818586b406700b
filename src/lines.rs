//! Winning line analysis for the 3x3 board

use std::collections::HashSet;

use crate::board::{Cell, Move, Player};

/// Winning line coordinates, in the fixed scan order used by
/// [`LineAnalyzer::winner`]: rows, then columns, then the two diagonals.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Find the winner, if any: the mark of the first completed line
    /// under the fixed scan order. Boards reached by legal play have at
    /// most one winner, so the order only matters for unreachable input.
    pub fn winner(cells: &[[Cell; 3]; 3]) -> Option<Player> {
        for line in &WINNING_LINES {
            let (r, c) = line[0];
            let first = cells[r][c];
            if first != Cell::Empty
                && line[1..].iter().all(|&(r, c)| cells[r][c] == first)
            {
                return first.to_player();
            }
        }
        None
    }

    /// Check if a player has three in a line
    pub fn has_won(cells: &[[Cell; 3]; 3], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&(r, c)| cells[r][c] == target))
    }

    /// Find all moves that would immediately win for the player
    pub fn winning_moves(cells: &[[Cell; 3]; 3], player: Player) -> HashSet<Move> {
        let mut moves = HashSet::new();
        for line in &WINNING_LINES {
            if let Some(mv) = Self::winning_move_in_line(cells, player, line) {
                moves.insert(mv);
            }
        }
        moves
    }

    /// Check if a player has an immediate winning move available
    /// (two in a line with the third cell empty)
    pub fn has_immediate_win(cells: &[[Cell; 3]; 3], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::winning_move_in_line(cells, player, line).is_some())
    }

    /// Find the winning move in a specific line, if one exists
    fn winning_move_in_line(
        cells: &[[Cell; 3]; 3],
        player: Player,
        line: &[(usize, usize); 3],
    ) -> Option<Move> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty = None;

        for &(r, c) in line {
            match cells[r][c] {
                Cell::Empty => {
                    if empty.is_some() {
                        // More than one empty cell, not a winning move
                        return None;
                    }
                    empty = Some(Move::new(r, c));
                }
                cell if cell == target => count += 1,
                _ => return None, // Opponent mark in line
            }
        }

        if count == 2 { empty } else { None }
    }
}
