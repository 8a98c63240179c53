//! Outbound notifications.
//!
//! Events describe what changed, never how to draw it. A presentation
//! layer redraws pieces from `PieceMoved`, highlights from `DiceRolled`,
//! and shows `Notice` text to the player.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, Location, PIECES_PER_COLOR};

/// Informational messages for the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// A fresh game is waiting for its first 6.
    EnterWithSix,
    /// `color` used a 6 and rolls again.
    RollAgain(Color),
    /// `color` had no legal move for `dice`; play passes on.
    NoMovesAvailable { color: Color, dice: u8 },
    /// The chosen piece would overshoot home; the roll was discarded.
    Overshoot { color: Color, piece: u8, dice: u8 },
    /// Every piece went back to its yard.
    GameReset,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::EnterWithSix => write!(f, "Roll a 6 to bring a piece out"),
            Notice::RollAgain(color) => write!(f, "{} rolled a 6, play again", color),
            Notice::NoMovesAvailable { color, dice } => {
                write!(f, "{} rolled {}: no moves available", color, dice)
            }
            Notice::Overshoot { color, piece, dice } => {
                write!(f, "{} piece {} cannot move {} (overshoot)", color, piece, dice)
            }
            Notice::GameReset => write!(f, "Game reset"),
        }
    }
}

/// Something the presentation layer should know about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// It is now `color`'s turn to roll.
    TurnStarted(Color),

    /// `color` rolled `value`; `movable` lists the pieces that may use it.
    DiceRolled {
        color: Color,
        value: u8,
        movable: SmallVec<[u8; PIECES_PER_COLOR]>,
    },

    /// A piece changed location.
    PieceMoved {
        color: Color,
        piece: u8,
        location: Location,
    },

    /// `by` landed on `cell` and sent an opposing piece home.
    Captured {
        by: Color,
        color: Color,
        piece: u8,
        cell: u8,
    },

    /// `color` finished all pieces.
    Won(Color),

    /// Player-facing message.
    Notice(Notice),
}

impl GameEvent {
    #[must_use]
    pub fn piece_moved(color: Color, piece: u8, location: Location) -> Self {
        GameEvent::PieceMoved { color, piece, location }
    }

    /// The notice carried by this event, if any.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        match self {
            GameEvent::Notice(notice) => Some(*notice),
            _ => None,
        }
    }
}
