//! Game rules: move validation, capture propagation, and results.
//!
//! The session calls into these functions but never re-implements the
//! adjacency arithmetic itself.

pub mod validator;
pub mod capture;
pub mod outcome;

pub use validator::{check_move, has_legal_move, is_legal_move, legal_moves};
pub use capture::apply_capture;
pub use outcome::{is_terminal, score, GameResult};
