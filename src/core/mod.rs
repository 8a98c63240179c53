//! Core engine types: colors, locations, state, actions, dice, configuration.
//!
//! This module holds data and bookkeeping only. The rules that act on it
//! live in `rules`.

pub mod color;
pub mod location;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use color::{Color, ColorMap, COLOR_COUNT};
pub use location::{
    entry_offset, relative_progress, Location, ENTRY_SPACING, HOME_LANE_LEN, PATH_LEN, PIECES_PER_COLOR,
};
pub use rng::{DiceSource, FixedDice, GameRng, GameRngState, DIE_FACES};
pub use config::GameConfig;
pub use action::{Action, ActionRecord};
pub use error::{InvalidReason, LudoError, LudoResult};
pub use state::{GameState, Pieces, TurnState};
