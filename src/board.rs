//! Board representation and basic state-space operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A move: zero-based (row, column) coordinates of one cell.
///
/// Coordinates are nominally in `[0, 2]`. The fields are public so that
/// callers (and tests) can construct out-of-range moves; [`Board::make_move`]
/// rejects those with [`crate::Error::InvalidAction`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 board of cells.
///
/// This type implements `Copy` for value semantics: applying a move yields
/// a fresh board and never touches the original, so the search can hold
/// many boards live across its recursion stack.
///
/// Whose turn it is is never stored; it is derived from the cells by
/// [`Board::player`]. A board is therefore fully determined by its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[Cell; 3]; 3],
}

/// Count of each cell kind on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MarkCount {
    x: usize,
    o: usize,
    empty: usize,
}

impl Board {
    /// Create the all-empty starting board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Helper: Count marks on the board.
    fn count_marks(&self) -> MarkCount {
        let mut count = MarkCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for row in &self.cells {
            for cell in row {
                match cell {
                    Cell::X => count.x += 1,
                    Cell::O => count.o += 1,
                    Cell::Empty => count.empty += 1,
                }
            }
        }
        count
    }

    /// Count the empty cells on the board
    pub fn empty_count(&self) -> usize {
        self.count_marks().empty
    }

    /// Count the occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        9 - self.empty_count()
    }

    /// Get cell at a position
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row][mv.col]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    /// The player to move, derived from the cells.
    ///
    /// X moves first, so X is to move exactly when the number of empty
    /// cells is odd (9 on the starting board). An even count means O.
    /// Total over well-formed boards; unreachable boards (mark counts
    /// differing by more than one) get an answer by the same parity rule.
    pub fn player(&self) -> Player {
        if self.empty_count() % 2 == 1 {
            Player::X
        } else {
            Player::O
        }
    }

    /// All legal moves: every empty cell, in row-major order.
    ///
    /// The order is deterministic so that move selection downstream is
    /// reproducible. Empty only when the board is full; a completed line
    /// does not remove remaining cells from the enumeration (terminality
    /// is the search's cutoff, not this function's).
    pub fn actions(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.empty_count());
        for row in 0..3 {
            for col in 0..3 {
                if self.cells[row][col] == Cell::Empty {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    /// Apply a move and return the successor board.
    ///
    /// The mark placed is [`Board::player`]'s. The input board is
    /// unchanged; the successor is a fresh value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidAction`] if the coordinates are out
    /// of range or the targeted cell is occupied. No partial state leaks.
    #[must_use = "make_move returns a new board; the original is unchanged"]
    pub fn make_move(&self, mv: Move) -> Result<Board, crate::Error> {
        if mv.row >= 3 || mv.col >= 3 || !self.is_empty(mv) {
            return Err(crate::Error::InvalidAction {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.cells[mv.row][mv.col] = self.player().to_cell();
        Ok(next)
    }

    /// Check if a player has a completed line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one.
    ///
    /// Lines are scanned in a fixed order (rows, columns, main diagonal,
    /// anti-diagonal) and the first completed line's mark wins. Boards
    /// reached by legal play have at most one winner.
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.empty_count() == 0
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.empty_count() == 0 && self.winner().is_none()
    }

    /// Numeric outcome from X's perspective: +1 if X has won, -1 if O
    /// has won, 0 otherwise. Meaningful on terminal boards; on internal
    /// boards it reports "no winner yet" as 0 by the same rule.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Create a board from a string of 9 cells in row-major order.
    ///
    /// Whitespace is filtered out, so both `"XOX.O.X.."` and a
    /// three-line layout parse. `.` is an empty cell; `X`/`O` are marks
    /// (lowercase accepted).
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 non-whitespace characters are present
    /// - Any character is not a valid cell representation
    /// - The mark counts are unreachable under X-first play (X must
    ///   equal O or be ahead by exactly one)
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().take(9).enumerate() {
            board.cells[i / 3][i % 3] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        let count = board.count_marks();
        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidMarkCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(board)
    }

    /// Get a canonical string representation for use as a key.
    ///
    /// Nine characters in row-major order. Because the player to move is
    /// derived from the cells, the encoding determines the board fully.
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .flat_map(|row| row.iter().map(|&c| c.to_char()))
            .collect()
    }

    /// Check whether the board is reachable by legal X-first play.
    ///
    /// This is a diagnostic for callers constructing boards by hand; the
    /// search itself treats reachability as a precondition and does not
    /// call this.
    pub fn is_valid(&self) -> bool {
        let count = self.count_marks();

        if count.x != count.o && count.x != count.o + 1 {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        // Both players cannot have completed lines
        if x_wins && o_wins {
            return false;
        }

        // A winner must have moved last
        if x_wins && count.x != count.o + 1 {
            return false;
        }
        if o_wins && count.o != count.x {
            return false;
        }

        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
