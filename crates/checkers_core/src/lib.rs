//! Checkers (draughts) rules engine.
//!
//! Board representation, capture and quiet-move enumeration under the
//! mandatory-capture rule, move application with crowning, and material
//! scoring. Everything is a pure function over a value-type [`Position`];
//! turn sequencing across multi-jump chains is the driver's job (see
//! [`Position::apply_move`]).

pub mod board;
pub mod eval;
pub mod movegen;
pub mod notation;
pub mod types;

pub use board::*;
pub use eval::*;
pub use movegen::*;
pub use notation::*;
pub use types::*;
