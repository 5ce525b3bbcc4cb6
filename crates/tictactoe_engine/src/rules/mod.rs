//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine calls them
//! after each move; invariants reuse them to audit state.

pub mod draw;
pub mod win;

pub use draw::is_final_turn;
pub use win::{WinInfo, WinKind, candidate_lines, winning_line};
