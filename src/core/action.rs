//! Action representation and history records.
//!
//! An `Action` is one resolved step of play. Actions are recorded after
//! they take effect, so the history replays exactly what happened.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::location::Location;

/// A resolved game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// The die was rolled.
    Roll { value: u8 },

    /// A piece moved.
    Move {
        piece: u8,
        dice: u8,
        from: Location,
        to: Location,
    },

    /// No piece could use the roll; the turn passed.
    Pass { dice: u8 },

    /// The chosen piece would have overshot home; the roll was discarded.
    Forfeit { piece: u8, dice: u8 },
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The color that took this action.
    pub color: Color,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(color: Color, action: Action, turn: u32) -> Self {
        Self {
            color,
            action,
            turn,
        }
    }
}
