//! Perfect-play decision engine for 3x3 Tic-Tac-Toe
//!
//! This crate provides:
//! - An immutable board value with pure state-space operations
//!   (turn derivation, legal-move enumeration, move application)
//! - Win, draw, and terminal detection with numeric utilities
//! - An alpha-beta pruned minimax that always searches to terminal
//!   states and returns a game-theoretically optimal move
//! - A memoized exhaustive solver producing the full set of optimal
//!   moves for any position
//!
//! The engine is a stateless library surface: callers hand it a
//! [`Board`] and receive a [`Move`] (or a terminal evaluation) back.
//! Rendering, input handling, and game-session management belong to
//! the caller.

pub mod board;
pub mod engine;
pub mod error;
pub mod lines;
pub mod solver;

pub use board::{Board, Cell, Move, Player};
pub use engine::{minimax, value};
pub use error::{Error, Result};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use solver::{Evaluation, Solver};
