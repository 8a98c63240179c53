//! Ludo rules as plain functions over `GameState`.
//!
//! - `movement`: legality (`movable_pieces`) and resolution (`apply_move`)
//! - `capture`: evicting opponents from a landing cell
//! - `win`: completion checks
//! - `turn`: the roll/move/rotate state machine
//!
//! None of these touch dice or notify anyone. `LudoGame` sequences them
//! and reports the results.

pub mod movement;
pub mod capture;
pub mod win;
pub mod turn;

pub use movement::{apply_move, destination, movable_pieces, MoveOutcome, Refusal, RELEASE_ROLL};
pub use capture::{resolve_captures, Captured};
pub use win::has_won;
pub use turn::{phase, StepEnd, TurnPhase};
