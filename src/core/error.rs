//! Engine error types.
//!
//! Every rejected request is recoverable: the engine validates first and
//! mutates state only after all preconditions pass.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use super::color::Color;

/// Why a roll or move request was refused outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum InvalidReason {
    /// A roll is already waiting to be used.
    #[display("a roll is already pending")]
    RollPending,
    /// A move was requested before rolling.
    #[display("roll the dice first")]
    NoRollPending,
    /// The game is over.
    #[display("{_0} has already won")]
    GameWon(Color),
    /// The request came from a color whose turn it isn't.
    #[display("it is {_0}'s turn")]
    NotYourTurn(Color),
}

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum LudoError {
    /// The request is not allowed in the current turn phase.
    #[display("invalid action: {reason}")]
    InvalidAction {
        #[error(not(source))]
        reason: InvalidReason,
    },

    /// The selected piece cannot move with the pending roll, or does not exist.
    #[display("{color} piece {piece} cannot move")]
    IllegalMove { color: Color, piece: u8 },

    /// The move would carry the piece past the end of its home lane.
    ///
    /// The roll is discarded and the turn ends.
    #[display("{color} piece {piece} would overshoot home with a {dice}")]
    Overshoot { color: Color, piece: u8, dice: u8 },
}

impl LudoError {
    #[must_use]
    pub const fn invalid(reason: InvalidReason) -> Self {
        LudoError::InvalidAction { reason }
    }
}

/// Result alias for engine operations.
pub type LudoResult<T> = Result<T, LudoError>;
