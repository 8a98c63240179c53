//! # ludo-engine
//!
//! Turn-based rule engine for four-player Ludo.
//!
//! ## Design Principles
//!
//! 1. **Rules Only**: No coordinates, rendering or input handling. A
//!    presentation layer sends requests in and receives `GameEvent`s out.
//!
//! 2. **Owned State**: All game state lives in one `GameState` value. There
//!    is no global state, so games can run side by side and tests can set
//!    up any position directly.
//!
//! 3. **Injected Dice**: Randomness comes from a `DiceSource`. Seeded
//!    `GameRng` in play, scripted `FixedDice` in tests.
//!
//! ## Flow
//!
//! `request_roll` -> movable pieces -> `request_move` -> captures -> win
//! check -> next color (or the same color after a used 6).
//!
//! ## Modules
//!
//! - `core`: Colors, locations, path geometry, state, actions, dice, errors
//! - `rules`: Move legality and resolution, captures, win check, turn machine
//! - `events`: Outbound notifications and sinks
//! - `game`: `LudoGame`, the request-driven facade

pub mod core;
pub mod rules;
pub mod events;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorMap, Location,
    DiceSource, GameRng, GameRngState, FixedDice,
    GameConfig, GameState, TurnState,
    Action, ActionRecord,
    InvalidReason, LudoError, LudoResult,
};

pub use crate::rules::{MoveOutcome, TurnPhase};

pub use crate::events::{EventLog, EventSink, GameEvent, Notice, NullSink};

pub use crate::game::{LudoGame, RollOutcome};
